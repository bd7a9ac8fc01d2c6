//! Play Othello at the terminal, or batch-simulate engine matchups.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use sentinel_othello::{Game, GameStatus, Glyphs, MoveSource, Player};
use sentinel_player::simulate::{self, SimulationConfig};
use sentinel_player::{Engine, Human, Strategy};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Who controls one side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    Human,
    Random,
    Greedy,
    Minimax,
    AlphaBeta,
}

impl SourceKind {
    fn strategy(self) -> Option<Strategy> {
        match self {
            SourceKind::Human => None,
            SourceKind::Random => Some(Strategy::Random),
            SourceKind::Greedy => Some(Strategy::Greedy),
            SourceKind::Minimax => Some(Strategy::Minimax),
            SourceKind::AlphaBeta => Some(Strategy::AlphaBeta),
        }
    }

    fn into_source(self, seed: u64) -> Box<dyn MoveSource> {
        match self.strategy() {
            None => Box::new(Human),
            Some(strategy) => Box::new(Engine::new(strategy, seed)),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "play", about = "Play Othello between humans and engines.")]
struct Args {
    /// Who plays Black (moves first).
    #[arg(long, value_enum, default_value_t = SourceKind::Human)]
    black: SourceKind,

    /// Who plays White.
    #[arg(long, value_enum, default_value_t = SourceKind::Human)]
    white: SourceKind,

    /// Simulate this many engine-vs-engine games instead of playing one.
    #[arg(long)]
    games: Option<u32>,

    /// Seed for all engine randomness; reruns with the same seed repeat.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Randomize each engine's first few moves (simulation only).
    #[arg(long)]
    random_openings: bool,

    /// Character drawn for Black's pieces.
    #[arg(long, default_value_t = 'X')]
    black_glyph: char,

    /// Character drawn for White's pieces.
    #[arg(long, default_value_t = 'O')]
    white_glyph: char,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match args.games {
        Some(games) => simulate_games(&args, games),
        None => play_one_game(&args),
    }
}

fn simulate_games(args: &Args, games: u32) -> Result<()> {
    let (Some(black), Some(white)) = (args.black.strategy(), args.white.strategy()) else {
        bail!("simulation requires engine players on both sides");
    };

    let config = SimulationConfig {
        games,
        black,
        white,
        random_openings: args.random_openings,
        seed: args.seed,
    };

    let bar = ProgressBar::new(u64::from(games));
    bar.set_style(ProgressStyle::with_template("[ {bar:50} ] {percent} %")?.progress_chars("#-"));
    let report = simulate::run_with(&config, |_| bar.inc(1));
    bar.finish_and_clear();

    info!(seed = args.seed, "simulation finished");
    println!("{}", report);
    Ok(())
}

fn play_one_game(args: &Args) -> Result<()> {
    let mut game = Game::new().with_glyphs(Glyphs {
        black: args.black_glyph,
        white: args.white_glyph,
    });
    let mut black = args.black.into_source(args.seed);
    let mut white = args.white.into_source(args.seed.wrapping_add(1));

    loop {
        println!("\n{}\n", game);
        let source = match game.to_move {
            Player::Black => black.as_mut(),
            Player::White => white.as_mut(),
        };
        if game.play_turn(source) == GameStatus::Ended {
            break;
        }
    }

    let outcome = game.score();
    match outcome.winner {
        Some(Player::Black) => println!(
            "Black has won with a score of {} to {}.",
            outcome.black, outcome.white
        ),
        Some(Player::White) => println!(
            "White has won with a score of {} to {}.",
            outcome.white, outcome.black
        ),
        None => println!(
            "The game is tied with a score of {} to {}.",
            outcome.black, outcome.white
        ),
    }
    Ok(())
}
