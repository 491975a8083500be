use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::Lines;

use log::{info, warn};
use thiserror::Error;

use super::model::{Destination, Direction, GameObject, Location, Passage, Room, SynonymTable, World};
use super::validator::{ValidationError, validate_world};

/// Line that ends a room's long description.
pub const MARKER: &str = "-----";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: missing separator in '{text}'")]
    MissingSeparator { line: usize, text: String },

    #[error("line {line}: passage '{text}' has no destination")]
    EmptyDestination { line: usize, text: String },

    #[error("line {line}: expected a blank line, found '{text}'")]
    ExpectedBlank { line: usize, text: String },

    #[error("line {line}: input ended while reading {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("duplicate room '{0}'")]
    DuplicateRoom(String),

    #[error("duplicate object '{0}'")]
    DuplicateObject(String),

    #[error("world data is invalid:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

////////////////////////
/// LINE BOOKKEEPING ///
////////////////////////

struct SourceLines<'a> {
    lines: Lines<'a>,
    line_no: usize,
}

impl<'a> SourceLines<'a> {
    fn new(source: &'a str) -> Self {
        SourceLines {
            lines: source.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line.trim_end())
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<&'a str, LoadError> {
        self.next_line().ok_or(LoadError::UnexpectedEof {
            line: self.line_no + 1,
            expected,
        })
    }
}

/// Drives a record reader until it reports end of input or fails once.
fn next_record<T>(
    done: &mut bool,
    read: impl FnOnce() -> Result<Option<T>, LoadError>,
) -> Option<Result<T, LoadError>> {
    if *done {
        return None;
    }
    match read() {
        Ok(Some(record)) => Some(Ok(record)),
        Ok(None) => {
            *done = true;
            None
        }
        Err(e) => {
            *done = true;
            Some(Err(e))
        }
    }
}

////////////////////
/// ROOM RECORDS ///
////////////////////

/// Yields one room per record in a room source.
pub struct RoomRecords<'a> {
    lines: SourceLines<'a>,
    done: bool,
}

impl<'a> RoomRecords<'a> {
    pub fn new(source: &'a str) -> Self {
        RoomRecords {
            lines: SourceLines::new(source),
            done: false,
        }
    }

    fn read_room(&mut self) -> Result<Option<Room>, LoadError> {
        let name = match self.lines.next_line() {
            None | Some("") => return Ok(None),
            Some(name) => name,
        };

        let short_desc = self.lines.expect_line("a short description")?;

        let mut long_desc = Vec::new();
        loop {
            let line = self.lines.expect_line("the description marker")?;
            if line == MARKER {
                break;
            }
            long_desc.push(line.to_string());
        }

        let mut passages = Vec::new();
        while let Some(line) = self.lines.next_line() {
            if line.is_empty() {
                break;
            }
            passages.push(parse_passage(line, self.lines.line_no)?);
        }

        Ok(Some(Room::new(name, short_desc, long_desc, passages)))
    }
}

impl Iterator for RoomRecords<'_> {
    type Item = Result<Room, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut done = self.done;
        let item = next_record(&mut done, || self.read_room());
        self.done = done;
        item
    }
}

/// `DIRECTION: DESTINATION` or `DIRECTION: DESTINATION/ITEM`.
fn parse_passage(line: &str, line_no: usize) -> Result<Passage, LoadError> {
    let (direction, rest) = line
        .split_once(':')
        .ok_or_else(|| LoadError::MissingSeparator {
            line: line_no,
            text: line.to_string(),
        })?;

    let (destination, required_item) = match rest.split_once('/') {
        Some((dest, item)) => {
            let item = item.trim();
            (dest.trim(), (!item.is_empty()).then(|| item.to_string()))
        }
        None => (rest.trim(), None),
    };

    if destination.is_empty() {
        return Err(LoadError::EmptyDestination {
            line: line_no,
            text: line.to_string(),
        });
    }

    Ok(Passage {
        direction: Direction::parse(direction),
        destination: Destination::parse(destination),
        required_item,
    })
}

//////////////////////
/// OBJECT RECORDS ///
//////////////////////

/// Yields one object per record in an object source.
pub struct ObjectRecords<'a> {
    lines: SourceLines<'a>,
    done: bool,
}

impl<'a> ObjectRecords<'a> {
    pub fn new(source: &'a str) -> Self {
        ObjectRecords {
            lines: SourceLines::new(source),
            done: false,
        }
    }

    fn read_object(&mut self) -> Result<Option<GameObject>, LoadError> {
        let name = match self.lines.next_line() {
            None | Some("") => return Ok(None),
            Some(name) => name.trim(),
        };

        let description = self.lines.expect_line("an object description")?;
        let location = self.lines.expect_line("an initial location")?;

        // The separator may be missing after the last record.
        if let Some(sep) = self.lines.next_line() {
            if !sep.is_empty() {
                return Err(LoadError::ExpectedBlank {
                    line: self.lines.line_no,
                    text: sep.to_string(),
                });
            }
        }

        Ok(Some(GameObject::new(
            name,
            description,
            Location::parse(location),
        )))
    }
}

impl Iterator for ObjectRecords<'_> {
    type Item = Result<GameObject, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut done = self.done;
        let item = next_record(&mut done, || self.read_object());
        self.done = done;
        item
    }
}

///////////////////////
/// SYNONYM RECORDS ///
///////////////////////

/// Yields `(alias, canonical)` pairs, both upper-cased.
pub struct SynonymRecords<'a> {
    lines: SourceLines<'a>,
    done: bool,
}

impl<'a> SynonymRecords<'a> {
    pub fn new(source: &'a str) -> Self {
        SynonymRecords {
            lines: SourceLines::new(source),
            done: false,
        }
    }

    fn read_pair(&mut self) -> Result<Option<(String, String)>, LoadError> {
        let line = match self.lines.next_line() {
            None | Some("") => return Ok(None),
            Some(line) => line,
        };

        let (alias, canonical) = line.split_once('=').ok_or_else(|| LoadError::MissingSeparator {
            line: self.lines.line_no,
            text: line.to_string(),
        })?;

        Ok(Some((
            alias.trim().to_uppercase(),
            canonical.trim().to_uppercase(),
        )))
    }
}

impl Iterator for SynonymRecords<'_> {
    type Item = Result<(String, String), LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut done = self.done;
        let item = next_record(&mut done, || self.read_pair());
        self.done = done;
        item
    }
}

//////////////////////////
/// PUBLIC LOADING API ///
//////////////////////////

pub fn load_rooms(source: &str) -> Result<HashMap<String, Room>, LoadError> {
    let mut rooms: HashMap<String, Room> = HashMap::new();

    for room in RoomRecords::new(source) {
        let room = room?;
        if rooms.contains_key(&room.name) {
            return Err(LoadError::DuplicateRoom(room.name));
        }
        rooms.insert(room.name.clone(), room);
    }

    Ok(rooms)
}

/// Objects in declaration order.
pub fn load_objects(source: &str) -> Result<Vec<GameObject>, LoadError> {
    let mut objects: Vec<GameObject> = Vec::new();

    for object in ObjectRecords::new(source) {
        let object = object?;
        if objects.iter().any(|o| o.name == object.name) {
            return Err(LoadError::DuplicateObject(object.name));
        }
        objects.push(object);
    }

    Ok(objects)
}

pub fn load_synonyms(source: &str) -> Result<SynonymTable, LoadError> {
    SynonymRecords::new(source).collect()
}

/// Build and validate a world from in-memory sources. Absent object or
/// synonym sources leave those collections empty.
pub fn load_world_from_str(
    rooms: &str,
    objects: Option<&str>,
    synonyms: Option<&str>,
    start_room: &str,
) -> Result<World, LoadError> {
    let rooms = load_rooms(rooms)?;
    let objects = objects.map(load_objects).transpose()?.unwrap_or_default();
    let synonyms = synonyms.map(load_synonyms).transpose()?.unwrap_or_default();

    info!(
        "loaded {} rooms, {} objects, {} synonyms",
        rooms.len(),
        objects.len(),
        synonyms.len()
    );

    let world = World::new(start_room, rooms, objects, synonyms);

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(LoadError::Invalid(errors));
    }

    Ok(world)
}

/// Load `<prefix>Rooms.txt`, `<prefix>Objects.txt` and `<prefix>Synonyms.txt`
/// from `dir`. Only the room file is mandatory.
pub fn load_world_from_dir(dir: &Path, prefix: &str, start_room: &str) -> Result<World, LoadError> {
    let rooms_path = dir.join(format!("{prefix}Rooms.txt"));
    let rooms = fs::read_to_string(&rooms_path).map_err(|source| LoadError::Io {
        path: rooms_path.clone(),
        source,
    })?;

    let objects = read_optional(&dir.join(format!("{prefix}Objects.txt")));
    let synonyms = read_optional(&dir.join(format!("{prefix}Synonyms.txt")));

    load_world_from_str(&rooms, objects.as_deref(), synonyms.as_deref(), start_room)
}

fn read_optional(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("{} not found, continuing without it", path.display());
            None
        }
        Err(e) => {
            warn!("could not read {}: {e}; continuing without it", path.display());
            None
        }
    }
}
