use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::engine::output::Output;
use crate::world;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TakeError {
    #[error("'{object}' is not in {room}")]
    NotFound { room: String, object: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropError {
    #[error("'{0}' is not being carried")]
    NotHeld(String),
}

/// Where every object currently is. Each object name lives in exactly one
/// of `inventory` or one room's entry in `room_contents`.
#[derive(Debug, Clone, Default)]
pub struct ObjectLocations {
    inventory: Vec<String>,
    room_contents: HashMap<String, Vec<String>>,
}

impl ObjectLocations {
    /// Put every object at its initial location, in declaration order.
    pub fn place_initial(world: &world::World) -> Self {
        use world::Location;

        let mut locations = ObjectLocations::default();

        for name in &world.object_order {
            let Some(object) = world.object(name) else {
                continue;
            };
            match &object.initial_location {
                Location::Player => locations.inventory.push(name.clone()),
                Location::Room(room) => locations
                    .room_contents
                    .entry(room.clone())
                    .or_default()
                    .push(name.clone()),
            }
        }

        locations
    }

    pub fn take(&mut self, room: &str, object: &str) -> Result<(), TakeError> {
        let not_found = || TakeError::NotFound {
            room: room.to_string(),
            object: object.to_string(),
        };

        let contents = self.room_contents.get_mut(room).ok_or_else(not_found)?;
        let idx = contents
            .iter()
            .position(|o| o == object)
            .ok_or_else(not_found)?;

        let name = contents.remove(idx);
        debug!("took {name} from {room}");
        self.inventory.push(name);
        Ok(())
    }

    pub fn drop(&mut self, room: &str, object: &str) -> Result<(), DropError> {
        let idx = self
            .inventory
            .iter()
            .position(|o| o == object)
            .ok_or_else(|| DropError::NotHeld(object.to_string()))?;

        let name = self.inventory.remove(idx);
        debug!("dropped {name} in {room}");
        self.room_contents
            .entry(room.to_string())
            .or_default()
            .push(name);
        Ok(())
    }

    pub fn is_held(&self, object: &str) -> bool {
        self.inventory.iter().any(|o| o == object)
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn contents_of(&self, room: &str) -> &[String] {
        self.room_contents
            .get(room)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of objects tracked, held or lying around.
    pub fn total(&self) -> usize {
        self.inventory.len() + self.room_contents.values().map(Vec::len).sum::<usize>()
    }
}

fn description_of<'a>(world: &'a world::World, name: &'a str) -> &'a str {
    world
        .object(name)
        .map(|o| o.description.as_str())
        .unwrap_or(name)
}

pub fn describe_contents(
    out: &mut Output,
    world: &world::World,
    locations: &ObjectLocations,
    room: &str,
) {
    for name in locations.contents_of(room) {
        out.object(format!("There is {} here.", description_of(world, name)));
    }
}

pub fn describe_inventory(out: &mut Output, world: &world::World, locations: &ObjectLocations) {
    if locations.inventory().is_empty() {
        out.event("You are empty-handed.");
        return;
    }

    out.event("You are carrying:");
    for name in locations.inventory() {
        out.object(format!("  {}", description_of(world, name)));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::world::{GameObject, Location, Room, SynonymTable, World};

    fn world() -> World {
        let rooms: HashMap<String, Room> = ["Hall", "Cellar"]
            .into_iter()
            .map(|n| (n.to_string(), Room::new(n, n, vec![], vec![])))
            .collect();
        World::new(
            "Hall",
            rooms,
            vec![
                GameObject::new("KEYS", "a set of keys", Location::Room("Hall".into())),
                GameObject::new("LAMP", "a brass lamp", Location::Player),
                GameObject::new("ROD", "a black rod", Location::Room("Hall".into())),
            ],
            SynonymTable::new(),
        )
    }

    #[test]
    fn initial_placement_follows_declaration_order() {
        let locations = ObjectLocations::place_initial(&world());
        assert_eq!(locations.inventory(), ["LAMP"]);
        assert_eq!(locations.contents_of("Hall"), ["KEYS", "ROD"]);
        assert!(locations.contents_of("Cellar").is_empty());
        assert_eq!(locations.total(), 3);
    }

    #[test]
    fn take_moves_from_room_to_inventory_once() {
        let mut locations = ObjectLocations::place_initial(&world());
        assert_eq!(locations.take("Hall", "KEYS"), Ok(()));
        assert!(locations.is_held("KEYS"));
        assert_eq!(locations.contents_of("Hall"), ["ROD"]);

        assert!(matches!(
            locations.take("Hall", "KEYS"),
            Err(TakeError::NotFound { .. })
        ));
        assert_eq!(locations.total(), 3);
    }

    #[test]
    fn take_from_other_room_fails() {
        let mut locations = ObjectLocations::place_initial(&world());
        assert!(locations.take("Cellar", "KEYS").is_err());
        assert!(!locations.is_held("KEYS"));
    }

    #[test]
    fn drop_requires_holding() {
        let mut locations = ObjectLocations::place_initial(&world());
        assert_eq!(
            locations.drop("Cellar", "ROD"),
            Err(DropError::NotHeld("ROD".into()))
        );
        assert_eq!(locations.drop("Cellar", "LAMP"), Ok(()));
        assert_eq!(locations.contents_of("Cellar"), ["LAMP"]);
        assert!(locations.inventory().is_empty());
        assert_eq!(locations.total(), 3);
    }

    #[test]
    fn descriptions_use_object_text() {
        let w = world();
        let locations = ObjectLocations::place_initial(&w);

        let mut out = Output::new();
        describe_contents(&mut out, &w, &locations, "Hall");
        assert_eq!(
            out.lines(),
            ["There is a set of keys here.", "There is a black rod here."]
        );

        let mut out = Output::new();
        describe_inventory(&mut out, &w, &locations);
        assert_eq!(out.lines(), ["You are carrying:", "  a brass lamp"]);
    }

    #[test]
    fn empty_inventory_is_empty_handed() {
        let w = world();
        let mut locations = ObjectLocations::place_initial(&w);
        locations.drop("Hall", "LAMP").unwrap();

        let mut out = Output::new();
        describe_inventory(&mut out, &w, &locations);
        assert_eq!(out.lines(), ["You are empty-handed."]);
    }
}
