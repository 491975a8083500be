use crate::engine::items::{ObjectLocations, describe_contents};
use crate::engine::output::Output;
use crate::world;

pub const HELP_TEXT: &[&str] = &[
    "Welcome to Adventure!",
    "Somewhere nearby is Colossal Cave, where others have found fortunes in",
    "treasure and gold, though it is rumored that some who enter are never",
    "seen again.  Magic is said to work in the cave.  I will be your eyes",
    "and hands.  Direct me with natural English commands; I don't understand",
    "all of the English language, but I do a pretty good job.",
    "",
    "It's important to remember that cave passages turn a lot, and that",
    "leaving a room to the north does not guarantee entering the next from",
    "the south, although it often works out that way.  You'd best make",
    "yourself a map as you go along.",
    "",
    "Much of my vocabulary describes places and is used to move you there.",
    "To move, try words like IN, OUT, EAST, WEST, NORTH, SOUTH, UP, or DOWN.",
    "I also know about a number of objects hidden within the cave which you",
    "can TAKE or DROP.  To see what objects you're carrying, say INVENTORY.",
    "To reprint the detailed description of where you are, say LOOK.  If you",
    "want to end your adventure, say QUIT.",
];

/// Full description plus whatever is lying in the room (LOOK).
pub fn render_room(
    out: &mut Output,
    room: &world::Room,
    world: &world::World,
    locations: &ObjectLocations,
) {
    out.text_lines(&room.long_desc);
    describe_contents(out, world, locations, &room.name);
}

/// Narration on arriving in a room: the long description on the first
/// visit, the short one afterwards.
pub fn render_arrival(
    out: &mut Output,
    room: &world::Room,
    first_visit: bool,
    world: &world::World,
    locations: &ObjectLocations,
) {
    if first_visit {
        out.text_lines(&room.long_desc);
    } else {
        out.title(room.short_desc.clone());
    }

    describe_contents(out, world, locations, &room.name);
}
