//! Property tests over the bundled sample game and generated rooms.

mod common;

use std::collections::HashMap;

use cave_adventure::engine::{Command, ObjectLocations, Output, OutputBlock, resolve_forced, resolve_move};
use cave_adventure::world::{Direction, Passage, Room, SynonymTable};
use cave_adventure::{GameState, load_world_from_dir};
use common::*;
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "north", "south", "east", "west", "up", "down", "in", "out", "xyzzy", "plugh", "look",
    "inventory", "take keys", "take lamp", "take gold", "take bottle", "drop keys", "drop lamp",
    "drop gold", "drop bottle", "get key", "i", "jump", "",
];

fn sample_game() -> GameState {
    let world = load_world_from_dir(&sample_data_dir(), "Small", "OutsideBuilding").unwrap();
    GameState::new(world).unwrap()
}

fn commands(exclude_look: bool) -> impl Strategy<Value = Vec<&'static str>> {
    let words: Vec<&'static str> = VOCABULARY
        .iter()
        .copied()
        .filter(|w| !(exclude_look && *w == "look"))
        .collect();
    prop::collection::vec(prop::sample::select(words), 0..60)
}

fn assert_each_object_in_one_place(game: &GameState) {
    let world = game.world();
    for name in world.objects.keys() {
        let held = game.inventory().iter().filter(|o| *o == name).count();
        let lying: usize = world
            .rooms
            .keys()
            .map(|r| game.room_contents(r).iter().filter(|o| *o == name).count())
            .sum();
        assert_eq!(held + lying, 1, "object {name} is in {} places", held + lying);
    }
}

proptest! {
    /// Objects are neither created nor destroyed by play.
    #[test]
    fn object_count_is_invariant(cmds in commands(false)) {
        let mut game = sample_game();
        game.initialize().unwrap();
        let total = game.world().objects.len();

        for cmd in cmds {
            let (_, quit) = game.step(cmd);
            prop_assert_eq!(game.locations().total(), total);
            assert_each_object_in_one_place(&game);
            if quit {
                break;
            }
        }
    }

    /// A room's long description is printed on first entry only
    /// (forced rooms excepted: they narrate every pass).
    #[test]
    fn long_description_appears_once_per_room(cmds in commands(true)) {
        let mut game = sample_game();
        let mut transcript: Vec<OutputBlock> = game.initialize().unwrap().blocks;

        for cmd in cmds {
            let (out, quit) = game.step(cmd);
            transcript.extend(out.blocks);
            if quit {
                break;
            }
        }

        for room in game.world().rooms.values().filter(|r| !r.is_forced()) {
            let first_line = OutputBlock::Text(room.long_desc[0].clone());
            let shown = transcript.iter().filter(|b| **b == first_line).count();
            prop_assert!(shown <= 1, "{} described {} times", room.name, shown);
            prop_assert_eq!(shown == 1, game.has_been_visited(&room.name));
        }
    }

    /// Movement picks the first declared passage whose item is absent or held.
    #[test]
    fn move_takes_first_qualifying_passage(
        spec in prop::collection::vec((0usize..4, 0usize..6, prop::option::of(0usize..3)), 0..12),
        held in prop::collection::vec(any::<bool>(), 3),
        asked in 0usize..4,
    ) {
        let dirs = ["NORTH", "SOUTH", "XYZZY", "*"];
        let items = ["KEYS", "LAMP", "ROD"];

        let passages: Vec<Passage> = spec
            .iter()
            .map(|(d, dest, item)| {
                let p = go(dirs[*d], &format!("R{dest}"));
                match item {
                    Some(i) => p.requiring(items[*i]),
                    None => p,
                }
            })
            .collect();
        let r = Room::new("Here", "Here.", vec![], passages.clone());

        let objects = items
            .iter()
            .zip(&held)
            .map(|(name, h)| object(name, if *h { "PLAYER" } else { "Elsewhere" }))
            .collect();
        let w = world("Here", vec![], objects, &[]);
        let locations = ObjectLocations::place_initial(&w);

        let direction = Direction::parse(dirs[asked]);
        let expected = passages.iter().find(|p| {
            p.direction == direction
                && p.required_item.as_ref().is_none_or(|i| locations.is_held(i))
        });

        prop_assert_eq!(
            resolve_move(&r, &direction, &locations),
            expected.map(|p| &p.destination)
        );
    }

    /// Non-forced rooms resolve to themselves and narrate nothing.
    #[test]
    fn forced_resolution_is_identity_without_forced_lead(
        dirs in prop::collection::vec(prop::sample::select(vec!["NORTH", "IN", "PLUGH", "*"]), 0..5),
    ) {
        let passages = dirs.iter().map(|d| go(d, "Here")).collect();
        let w = world("Here", vec![room("Here", passages)], vec![], &[]);
        let mut out = Output::new();

        let dest = resolve_forced(&mut out, &w, to("Here"), &ObjectLocations::default()).unwrap();
        prop_assert_eq!(dest, to("Here"));
        prop_assert!(out.is_empty());
    }

    /// The interpreter never panics, whatever it is fed.
    #[test]
    fn parser_never_panics(line in ".{0,80}") {
        let _ = Command::parse(&line, &SynonymTable::new());
        let mut game = sample_game();
        game.initialize().unwrap();
        let _ = game.step(&line);
    }
}

#[test]
fn every_sample_room_is_reachable_or_terminal() {
    let game = sample_game();
    let world = game.world();
    let mut incoming: HashMap<&str, usize> = HashMap::new();
    for room in world.rooms.values() {
        for p in &room.passages {
            if let cave_adventure::world::Destination::Room(name) = &p.destination {
                *incoming.entry(name.as_str()).or_default() += 1;
            }
        }
    }
    for name in world.rooms.keys() {
        if name != &world.start_room {
            assert!(incoming.contains_key(name.as_str()), "{name} is unreachable");
        }
    }
}
