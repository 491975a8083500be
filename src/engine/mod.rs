mod items;
mod movement;
mod output;
mod parser;
mod render;

pub use items::{DropError, ObjectLocations, TakeError, describe_contents, describe_inventory};

pub use movement::{NavigationError, move_player, resolve_forced, resolve_move};
pub use output::{Output, OutputBlock};
pub use parser::{Command, FALLBACK};
pub use render::{HELP_TEXT, render_arrival, render_room};
