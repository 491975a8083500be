#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;

use cave_adventure::GameState;
use cave_adventure::world::{
    Destination, Direction, GameObject, Location, Passage, Room, SynonymTable, World,
};

pub fn to(name: &str) -> Destination {
    Destination::Room(name.to_string())
}

pub fn room(name: &str, passages: Vec<Passage>) -> Room {
    Room::new(
        name,
        format!("{name} (short)."),
        vec![format!("{name} (long).")],
        passages,
    )
}

pub fn go(direction: &str, destination: &str) -> Passage {
    Passage::new(Direction::parse(direction), Destination::parse(destination))
}

pub fn object(name: &str, location: &str) -> GameObject {
    GameObject::new(
        name,
        format!("a {}", name.to_lowercase()),
        Location::parse(location),
    )
}

pub fn world(start: &str, rooms: Vec<Room>, objects: Vec<GameObject>, synonyms: &[(&str, &str)]) -> World {
    let rooms: HashMap<String, Room> = rooms.into_iter().map(|r| (r.name.clone(), r)).collect();
    let synonyms: SynonymTable = synonyms
        .iter()
        .map(|(a, c)| (a.to_string(), c.to_string()))
        .collect();
    World::new(start, rooms, objects, synonyms)
}

/// A started game; the opening narration is discarded.
pub fn started(world: World) -> GameState {
    let mut game = GameState::new(world).expect("start room exists");
    game.initialize().expect("start room resolves");
    game
}

pub fn sample_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
