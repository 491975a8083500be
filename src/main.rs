use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use cave_adventure::engine::{Output, OutputBlock};
use cave_adventure::{GameConfig, GameState, load_world_from_dir};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Play a text adventure in the terminal", long_about = None)]
struct Args {
    /// TOML config file (defaults to ./adventure.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the room, object and synonym files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// File name prefix, e.g. "Small" for SmallRooms.txt
    #[arg(long)]
    prefix: Option<String>,

    /// Room the player starts in
    #[arg(long)]
    start_room: Option<String>,
}

fn flush_output(out: Output) {
    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => println!("\n{}", t),
            OutputBlock::Text(line) | OutputBlock::Object(line) | OutputBlock::Event(line) => {
                println!("{}", line)
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut config = GameConfig::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(prefix) = args.prefix {
        config.prefix = prefix;
    }
    if let Some(room) = args.start_room {
        config.start_room = room;
    }

    let world = load_world_from_dir(&config.data_dir, &config.prefix, &config.start_room)
        .with_context(|| {
            format!(
                "Failed to load world '{}' from {}",
                config.prefix,
                config.data_dir.display()
            )
        })?;

    let mut game = GameState::new(world)?.with_help(config.help.clone());

    println!("Welcome to {}!", config.title);
    println!("Type HELP for instructions, QUIT to exit.\n");

    flush_output(game.initialize()?);
    if game.is_over() {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(line) => line?,
            None => {
                println!("\nGoodbye.");
                break;
            }
        };

        let (out, quit) = game.step(&input);
        flush_output(out);

        if quit {
            break;
        }
    }

    Ok(())
}
