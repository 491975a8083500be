use std::collections::HashSet;

use log::{debug, error};
use thiserror::Error;

use crate::engine::items::ObjectLocations;
use crate::engine::output::Output;
use crate::world;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("forced passages loop back to '{room}'")]
    ForcedCycle { room: String },

    #[error("no usable forced passage leads out of '{room}'")]
    ForcedDeadEnd { room: String },

    #[error("room '{room}' does not exist")]
    UnknownRoom { room: String },
}

fn passage_usable(passage: &world::Passage, locations: &ObjectLocations) -> bool {
    match &passage.required_item {
        Some(item) => locations.is_held(item),
        None => true,
    }
}

/// Destination of the first passage in `room` matching `direction` whose
/// required item, if any, is held. Earlier declarations win ties.
pub fn resolve_move<'a>(
    room: &'a world::Room,
    direction: &world::Direction,
    locations: &ObjectLocations,
) -> Option<&'a world::Destination> {
    room.passages
        .iter()
        .find(|p| &p.direction == direction && passage_usable(p, locations))
        .map(|p| &p.destination)
}

/// Follow forced passages from `destination` until reaching a room that
/// waits for input, or the exit. Each forced room's long description is
/// reported on the way through.
pub fn resolve_forced(
    out: &mut Output,
    world: &world::World,
    destination: world::Destination,
    locations: &ObjectLocations,
) -> Result<world::Destination, NavigationError> {
    use world::Destination;

    let mut current = destination;
    let mut seen: HashSet<String> = HashSet::new();

    loop {
        let name = match &current {
            Destination::Exit => break,
            Destination::Room(name) => name.clone(),
        };

        let room = world
            .room(&name)
            .ok_or(NavigationError::UnknownRoom { room: name })?;

        if !room.is_forced() {
            break;
        }

        if !seen.insert(room.name.clone()) {
            error!("forced chain revisits '{}'", room.name);
            return Err(NavigationError::ForcedCycle {
                room: room.name.clone(),
            });
        }

        let next = room
            .passages
            .iter()
            .find(|p| passage_usable(p, locations))
            .map(|p| p.destination.clone())
            .ok_or_else(|| {
                error!("forced room '{}' has no usable passage", room.name);
                NavigationError::ForcedDeadEnd {
                    room: room.name.clone(),
                }
            })?;

        out.text_lines(&room.long_desc);
        debug!("forced: {} -> {}", room.name, next);
        current = next;
    }

    Ok(current)
}

/// Full movement resolution: the matching passage, then any forced chain.
/// `Ok(None)` means `direction` leads nowhere from `from`.
pub fn move_player(
    out: &mut Output,
    world: &world::World,
    from: &str,
    direction: &world::Direction,
    locations: &ObjectLocations,
) -> Result<Option<world::Destination>, NavigationError> {
    let room = world.room(from).ok_or_else(|| NavigationError::UnknownRoom {
        room: from.to_string(),
    })?;

    let Some(destination) = resolve_move(room, direction, locations) else {
        debug!("no passage {direction} from {from}");
        return Ok(None);
    };

    debug!("move {direction}: {from} -> {destination}");
    resolve_forced(out, world, destination.clone(), locations).map(Some)
}
