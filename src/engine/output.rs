use serde::Serialize;

/// One unit of narration handed to whatever is presenting the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum OutputBlock {
    /// Short description shown when re-entering a room.
    Title(String),
    /// Long description or help line. Blank lines are kept.
    Text(String),
    /// A room contents or inventory line.
    Object(String),
    /// Response to a command.
    Event(String),
}

impl OutputBlock {
    pub fn text(&self) -> &str {
        match self {
            OutputBlock::Title(s)
            | OutputBlock::Text(s)
            | OutputBlock::Object(s)
            | OutputBlock::Event(s) => s,
        }
    }
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn text(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Text(s.into()));
    }

    pub fn text_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        for line in lines {
            self.text(line.as_ref());
        }
    }

    pub fn object(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Object(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Flattened plain text, one entry per block.
    pub fn lines(&self) -> Vec<&str> {
        self.blocks.iter().map(OutputBlock::text).collect()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.blocks.iter().any(|b| b.text() == line)
    }
}
