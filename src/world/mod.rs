mod loader;
mod model;
mod validator;

pub use loader::{
    LoadError, MARKER, ObjectRecords, RoomRecords, SynonymRecords, load_objects, load_rooms,
    load_synonyms, load_world_from_dir, load_world_from_str,
};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Destination, Direction, GameObject, Location, Passage, Room, SynonymTable, World};
pub use validator::{ValidationError, validate_world};
