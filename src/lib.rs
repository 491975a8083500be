pub mod config;
pub mod engine;
pub mod world;

use log::{debug, error, info};
use thiserror::Error;

use engine::{
    Command, FALLBACK, HELP_TEXT, NavigationError, ObjectLocations, Output, describe_inventory,
    move_player, render_arrival, render_room, resolve_forced,
};
use world::{Destination, Direction, Passage, World};

pub use config::GameConfig;
pub use world::{load_world_from_dir, load_world_from_str};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("start room '{0}' not found")]
    UnknownStartRoom(String),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Exited,
}

pub struct GameState {
    world: World,
    current_room: String,
    locations: ObjectLocations,
    status: GameStatus,
    help: Vec<String>,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    impl WasmStepResult {
        fn into_js(out: Output, quit: bool) -> JsValue {
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
        initialized: bool,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from room, object and synonym sources. Call
        /// `init()` to get the opening narration.
        #[wasm_bindgen(constructor)]
        pub fn new(
            rooms: &str,
            objects: Option<String>,
            synonyms: Option<String>,
            start_room: &str,
        ) -> Result<WasmGame, JsValue> {
            let world = load_world_from_str(
                rooms,
                objects.as_deref(),
                synonyms.as_deref(),
                start_room,
            )
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
            let state = GameState::new(world).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                state,
                initialized: false,
            })
        }

        /// Initialize the game and return the opening narration.
        #[wasm_bindgen]
        pub fn init(&mut self) -> JsValue {
            if self.initialized {
                return JsValue::NULL;
            }
            self.initialized = true;
            match self.state.initialize() {
                Ok(out) => WasmStepResult::into_js(out, self.state.is_over()),
                Err(e) => JsValue::from_str(&e.to_string()),
            }
        }

        /// Process a typed command.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            if !self.initialized {
                let _ = self.init();
            }
            let (out, quit) = self.state.step(input);
            WasmStepResult::into_js(out, quit)
        }

        /// Process a command synthesized by a clickable control.
        #[wasm_bindgen]
        pub fn click(&mut self, action: &str) -> JsValue {
            if !self.initialized {
                let _ = self.init();
            }
            let (out, quit) = self.state.inject(action);
            WasmStepResult::into_js(out, quit)
        }

        /// Distinct passage words out of the current room, for drawing buttons.
        #[wasm_bindgen]
        pub fn actions(&self) -> Vec<String> {
            self.state.available_directions()
        }
    }
}

impl GameState {
    /// Set up a fresh game: objects are placed and the player stands in the
    /// world's start room.
    pub fn new(world: World) -> Result<Self, GameError> {
        if world.room(&world.start_room).is_none() {
            return Err(GameError::UnknownStartRoom(world.start_room.clone()));
        }

        let locations = ObjectLocations::place_initial(&world);
        info!(
            "placed {} objects, {} carried",
            locations.total(),
            locations.inventory().len()
        );

        Ok(GameState {
            current_room: world.start_room.clone(),
            world,
            locations,
            status: GameStatus::Playing,
            help: HELP_TEXT.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn with_help(mut self, help: Vec<String>) -> Self {
        self.help = help;
        self
    }

    /// Opening narration: follows any forced passages out of the start room
    /// and describes where the player ends up.
    pub fn initialize(&mut self) -> Result<Output, GameError> {
        let mut out = Output::new();
        let start = Destination::Room(self.world.start_room.clone());

        match resolve_forced(&mut out, &self.world, start, &self.locations)? {
            Destination::Exit => self.status = GameStatus::Exited,
            Destination::Room(name) => self.enter_room(&mut out, name),
        }

        Ok(out)
    }

    /// Process a single player input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();

        if self.status == GameStatus::Exited {
            return (out, true);
        }

        let command = Command::parse(input, &self.world.synonyms);
        debug!("{input:?} -> {command:?}");

        match command {
            Command::Quit => {
                out.event("Goodbye.");
                self.status = GameStatus::Exited;
            }
            Command::Help => out.text_lines(&self.help),
            Command::Look => {
                if let Some(room) = self.world.room(&self.current_room) {
                    render_room(&mut out, room, &self.world, &self.locations);
                }
            }
            Command::Inventory => describe_inventory(&mut out, &self.world, &self.locations),
            Command::Take(object) => {
                let taken = object
                    .is_some_and(|o| self.locations.take(&self.current_room, &o).is_ok());
                out.event(if taken { "Taken." } else { FALLBACK });
            }
            Command::Drop(object) => {
                let dropped = object
                    .is_some_and(|o| self.locations.drop(&self.current_room, &o).is_ok());
                out.event(if dropped { "Dropped." } else { FALLBACK });
            }
            Command::Go(direction) => self.go(&mut out, &direction),
            Command::Empty => out.event(FALLBACK),
        }

        (out, self.status == GameStatus::Exited)
    }

    /// Run a command produced by something other than typed input, e.g. a
    /// button. It goes through the same synonym lookup and dispatch as `step`.
    pub fn inject(&mut self, command: &str) -> (Output, bool) {
        info!("injected command {command:?}");
        self.step(command)
    }

    fn go(&mut self, out: &mut Output, direction: &Direction) {
        let moved = move_player(
            out,
            &self.world,
            &self.current_room,
            direction,
            &self.locations,
        );

        match moved {
            Ok(None) => out.event(FALLBACK),
            Ok(Some(Destination::Exit)) => {
                info!("left the world via {direction} from {}", self.current_room);
                self.status = GameStatus::Exited;
            }
            Ok(Some(Destination::Room(name))) => self.enter_room(out, name),
            Err(e) => {
                error!("movement failed: {e}");
                out.event(format!("Error: {e}"));
                self.status = GameStatus::Exited;
            }
        }
    }

    fn enter_room(&mut self, out: &mut Output, name: String) {
        let first_visit = match self.world.rooms.get_mut(&name) {
            Some(room) => !std::mem::replace(&mut room.visited, true),
            None => false,
        };
        self.current_room = name;

        if let Some(room) = self.world.room(&self.current_room) {
            render_arrival(out, room, first_visit, &self.world, &self.locations);
        }
    }

    ///////////////
    /// QUERIES ///
    ///////////////

    pub fn current_room(&self) -> &str {
        &self.current_room
    }

    pub fn room_contents(&self, room: &str) -> &[String] {
        self.locations.contents_of(room)
    }

    pub fn inventory(&self) -> &[String] {
        self.locations.inventory()
    }

    pub fn passages_of(&self, room: &str) -> Option<&[Passage]> {
        self.world.room(room).map(|r| r.passages.as_slice())
    }

    pub fn has_been_visited(&self, room: &str) -> bool {
        self.world.room(room).is_some_and(|r| r.visited)
    }

    /// Distinct passage words from the current room, in declaration order.
    pub fn available_directions(&self) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();
        for passage in self.passages_of(&self.current_room).unwrap_or_default() {
            if passage.direction == Direction::Forced {
                continue;
            }
            let word = passage.direction.to_string();
            if !words.contains(&word) {
                words.push(word);
            }
        }
        words
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Exited
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn locations(&self) -> &ObjectLocations {
        &self.locations
    }
}
