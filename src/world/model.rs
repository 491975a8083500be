use std::collections::HashMap;
use std::fmt;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop.
#[derive(Debug)]
pub struct World {
    pub start_room: String,
    pub rooms: HashMap<String, Room>,
    pub objects: HashMap<String, GameObject>,
    /// Object names in the order they were declared; placement follows it.
    pub object_order: Vec<String>,
    pub synonyms: SynonymTable,
}

impl World {
    pub fn new(
        start_room: impl Into<String>,
        rooms: HashMap<String, Room>,
        objects: Vec<GameObject>,
        synonyms: SynonymTable,
    ) -> Self {
        let object_order = objects.iter().map(|o| o.name.clone()).collect();
        let objects = objects.into_iter().map(|o| (o.name.clone(), o)).collect();

        World {
            start_room: start_room.into(),
            rooms,
            objects,
            object_order,
            synonyms,
        }
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    pub fn object(&self, name: &str) -> Option<&GameObject> {
        self.objects.get(name)
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub short_desc: String,
    pub long_desc: Vec<String>,
    pub passages: Vec<Passage>,
    pub visited: bool,
}

impl Room {
    pub fn new(
        name: impl Into<String>,
        short_desc: impl Into<String>,
        long_desc: Vec<String>,
        passages: Vec<Passage>,
    ) -> Self {
        Room {
            name: name.into(),
            short_desc: short_desc.into(),
            long_desc,
            passages,
            visited: false,
        }
    }

    /// True when entering this room moves the player on without asking.
    pub fn is_forced(&self) -> bool {
        matches!(
            self.passages.first(),
            Some(Passage {
                direction: Direction::Forced,
                ..
            })
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub direction: Direction,
    pub destination: Destination,
    pub required_item: Option<String>,
}

impl Passage {
    pub fn new(direction: Direction, destination: Destination) -> Self {
        Passage {
            direction,
            destination,
            required_item: None,
        }
    }

    pub fn requiring(mut self, item: impl Into<String>) -> Self {
        self.required_item = Some(item.into());
        self
    }
}

/// Direction or verb keying a passage. The compass words and a few
/// structural tokens are closed; everything else is a magic word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
    In,
    Out,
    Forced,
    Wildcard, // "*"
    Magic(String),
}

impl Direction {
    pub fn parse(token: &str) -> Self {
        let token = token.trim().to_uppercase();
        match token.as_str() {
            "NORTH" => Direction::North,
            "SOUTH" => Direction::South,
            "EAST" => Direction::East,
            "WEST" => Direction::West,
            "UP" => Direction::Up,
            "DOWN" => Direction::Down,
            "IN" => Direction::In,
            "OUT" => Direction::Out,
            "FORCED" => Direction::Forced,
            "*" => Direction::Wildcard,
            _ => Direction::Magic(token),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::In => "IN",
            Direction::Out => "OUT",
            Direction::Forced => "FORCED",
            Direction::Wildcard => "*",
            Direction::Magic(word) => word,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Room(String),
    Exit,
}

impl Destination {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "EXIT" => Destination::Exit,
            name => Destination::Room(name.to_string()),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Room(name) => f.write_str(name),
            Destination::Exit => f.write_str("EXIT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Room(String),
    Player,
}

impl Location {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "PLAYER" => Location::Player,
            room => Location::Room(room.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameObject {
    pub name: String,
    pub description: String,
    pub initial_location: Location,
}

impl GameObject {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        initial_location: Location,
    ) -> Self {
        GameObject {
            name: name.into(),
            description: description.into(),
            initial_location,
        }
    }
}

/// Alias -> canonical command word.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    aliases: HashMap<String, String>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, alias: impl Into<String>, canonical: impl Into<String>) {
        self.aliases.insert(alias.into(), canonical.into());
    }

    /// Returns the canonical word for `token`, or `token` itself.
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.aliases.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl FromIterator<(String, String)> for SynonymTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        SynonymTable {
            aliases: iter.into_iter().collect(),
        }
    }
}
