use crate::world::{Direction, SynonymTable};

/// Universal response to anything the game cannot act on.
pub const FALLBACK: &str = "I don't understand that response.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Look,
    Inventory,
    Take(Option<String>),
    Drop(Option<String>),
    Go(Direction),
    Empty,
}

impl Command {
    /// Tokenize on whitespace, upper-case and synonym-substitute the verb
    /// (and the object of TAKE/DROP). Anything that is not a builtin verb
    /// is taken to be a direction.
    pub fn parse(line: &str, synonyms: &SynonymTable) -> Command {
        let mut tokens = line.split_whitespace();

        let Some(first) = tokens.next() else {
            return Command::Empty;
        };
        let verb = first.to_uppercase();
        let verb = synonyms.resolve(&verb);

        let object = |tokens: &mut std::str::SplitWhitespace<'_>| {
            tokens
                .next()
                .map(|t| synonyms.resolve(&t.to_uppercase()).to_string())
        };

        match verb {
            "QUIT" => Command::Quit,
            "HELP" => Command::Help,
            "LOOK" => Command::Look,
            "INVENTORY" => Command::Inventory,
            "TAKE" => Command::Take(object(&mut tokens)),
            "DROP" => Command::Drop(object(&mut tokens)),
            other => Command::Go(Direction::parse(other)),
        }
    }
}
