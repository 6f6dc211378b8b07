use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use minesweep_core::*;

use command::{Command, USAGE};

mod command;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Level {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Beginner => Difficulty::Beginner,
            Level::Intermediate => Difficulty::Intermediate,
            Level::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset, individual values below override it
    #[arg(short, long, value_enum, default_value_t = Level::Intermediate)]
    difficulty: Level,

    /// Board height, between 5 and 32
    #[arg(long)]
    height: Option<Coord>,

    /// Board width, between 5 and 32
    #[arg(long)]
    width: Option<Coord>,

    /// Number of mines, fewer than the number of cells
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Number of flags, defaults to the number of mines
    #[arg(short, long)]
    flags: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let preset = GameConfig::preset(self.difficulty.into());
        let mines = self.mines.unwrap_or(preset.mines());
        GameConfig::new(
            self.height.unwrap_or(preset.height()),
            self.width.unwrap_or(preset.width()),
            mines,
            self.flags.unwrap_or(mines),
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args
        .game_config()
        .context("Refusing to start with this configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut engine = Sweeper::with_seed(config, seed);
    let mut out = io::stdout().lock();
    writeln!(out, "{USAGE}")?;
    render::write_board(&mut out, &engine)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read from stdin")?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => run(&mut engine, command, &mut out)?,
            Err(err) => writeln!(out, "{err}\n{USAGE}")?,
        }
    }

    Ok(())
}

fn run<G: MinefieldGenerator, W: Write>(
    engine: &mut Sweeper<G>,
    command: Command,
    out: &mut W,
) -> io::Result<()> {
    let outcome = match command {
        Command::Reveal(coords) => engine.reveal_at(coords).map(|_| ()),
        Command::Flag(coords) => engine.toggle_flag_at(coords).map(|_| ()),
        Command::Hint => {
            // the hint only lasts for a single rendering
            match engine.begin_hint() {
                Some((row, col)) => writeln!(out, "hint: {row} {col} is safe")?,
                None => writeln!(out, "nothing to hint")?,
            }
            render::write_board(out, engine)?;
            engine.end_hint();
            return Ok(());
        }
        Command::NewGame => {
            engine.start_new_game();
            Ok(())
        }
        Command::Quit => return Ok(()),
    };

    if let Err(err) = outcome {
        log::debug!("Rejected {:?}: {}", command, err);
        writeln!(out, "{err}")?;
    }
    render::write_board(out, engine)
}
