use std::collections::HashSet;

use log::warn;
use thiserror::Error;

use super::model::{Destination, Location, World};

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // start_room must exist
    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start room '{}' not found among rooms",
            world.start_room
        )));
    }

    // Validate passages
    for (room_name, room) in &world.rooms {
        for passage in &room.passages {
            if let Destination::Room(target) = &passage.destination {
                if !world.rooms.contains_key(target) {
                    errors.push(ValidationError::new(format!(
                        "room '{}' passage '{}' targets missing room '{}'",
                        room_name, passage.direction, target
                    )));
                }
            }

            // Unknown items just leave the passage closed, e.g. when the
            // object file is absent.
            if let Some(item) = &passage.required_item {
                if !world.objects.contains_key(item) {
                    warn!(
                        "room '{}' passage '{}' requires unknown object '{}'",
                        room_name, passage.direction, item
                    );
                }
            }
        }
    }

    // Validate object start locations
    for name in &world.object_order {
        let Some(object) = world.objects.get(name) else {
            continue;
        };
        if let Location::Room(room) = &object.initial_location {
            if !world.rooms.contains_key(room) {
                errors.push(ValidationError::new(format!(
                    "object '{}' starts in missing room '{}'",
                    object.name, room
                )));
            }
        }
    }

    validate_unconditional_forced_chains(world, &mut errors);

    errors
}

/// A forced chain that loops while following only item-free passages will
/// loop for a player holding nothing, so it is rejected up front.
fn validate_unconditional_forced_chains(world: &World, errors: &mut Vec<ValidationError>) {
    let mut names: Vec<&String> = world.rooms.keys().collect();
    names.sort();

    for start in names {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current = start.as_str();

        while let Some(room) = world.rooms.get(current) {
            if !room.is_forced() {
                break;
            }
            if !seen.insert(current) {
                errors.push(ValidationError::new(format!(
                    "forced passages starting at '{}' loop back to '{}'",
                    start, current
                )));
                break;
            }

            let next = room
                .passages
                .iter()
                .find(|p| p.required_item.is_none())
                .map(|p| &p.destination);

            match next {
                Some(Destination::Room(name)) => current = name,
                _ => break,
            }
        }
    }
}
