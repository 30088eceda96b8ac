//! Euchre CLI: plays a full game from a pack file.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use euchre::{Game, GameOptions, PLAYER_COUNT, Pack, PlayerType, new_player};

/// Plays a game of euchre between four players.
#[derive(Debug, Parser)]
#[command(name = "euchre")]
struct Args {
    /// File containing the 24-card pack in deal order.
    pack_file: PathBuf,

    /// Whether to shuffle the pack before each hand.
    #[arg(value_enum)]
    shuffle: ShuffleMode,

    /// Points a team needs to win the game.
    #[arg(value_parser = clap::value_parser!(u32).range(1..=100))]
    points_to_win: u32,

    /// Four NAME TYPE pairs, each TYPE being `Simple` or `Human`.
    #[arg(
        num_args = 8,
        value_names = ["NAME1", "TYPE1", "NAME2", "TYPE2", "NAME3", "TYPE3", "NAME4", "TYPE4"]
    )]
    players: Vec<String>,
}

/// Pack handling between hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShuffleMode {
    /// Apply the deterministic in-shuffle before every hand.
    Shuffle,
    /// Reset the pack to its input order before every hand.
    Noshuffle,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let file = File::open(&args.pack_file)
        .map_err(|err| format!("error opening {}: {err}", args.pack_file.display()))?;
    let pack = Pack::from_reader(BufReader::new(file))
        .map_err(|err| format!("error reading {}: {err}", args.pack_file.display()))?;

    let mut players = Vec::with_capacity(PLAYER_COUNT);
    for pair in args.players.chunks_exact(2) {
        let kind: PlayerType = pair[1].parse().map_err(|err| format!("{err}"))?;
        players.push(new_player(&pair[0], kind));
    }

    let options = GameOptions::default()
        .with_shuffle(args.shuffle == ShuffleMode::Shuffle)
        .with_points_to_win(args.points_to_win);

    let stdout = io::stdout();
    Game::new(pack, options, players)
        .play(&mut stdout.lock())
        .map_err(|err| err.to_string())?;
    Ok(())
}
