//! Batch simulation of engine-vs-engine games.

use crate::agent::{Engine, Strategy};
use crate::play_game;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sentinel_othello::{Game, Player};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// What to simulate: which engines, how many games, and how.
#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
    pub games: u32,
    pub black: Strategy,
    pub white: Strategy,
    /// Randomize each engine's first few moves to vary the openings.
    pub random_openings: bool,
    /// Seed for the master RNG; a fixed seed reproduces the exact tallies.
    pub seed: u64,
}

/// Aggregate results of a simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationReport {
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
    pub elapsed: Duration,
}

impl SimulationReport {
    pub fn games(&self) -> u32 {
        self.black_wins + self.white_wins + self.draws
    }

    fn percent(&self, tally: u32) -> f64 {
        100.0 * f64::from(tally) / f64::from(self.games().max(1))
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Black wins: {} ({:.1}%)",
            self.black_wins,
            self.percent(self.black_wins)
        )?;
        writeln!(
            f,
            "White wins: {} ({:.1}%)",
            self.white_wins,
            self.percent(self.white_wins)
        )?;
        writeln!(f, "Draws: {} ({:.1}%)", self.draws, self.percent(self.draws))?;
        write!(
            f,
            "{} games in {:.3}s ({:.3}s per game)",
            self.games(),
            self.elapsed.as_secs_f64(),
            self.elapsed.as_secs_f64() / f64::from(self.games().max(1))
        )
    }
}

/// Run the configured number of games back to back and tally the results.
pub fn run(config: &SimulationConfig) -> SimulationReport {
    run_with(config, |_| {})
}

/// Like [`run`], invoking `on_game_finished` with the count of completed
/// games after each one; presentation (e.g. a progress bar) hangs off this.
pub fn run_with(
    config: &SimulationConfig,
    mut on_game_finished: impl FnMut(u32),
) -> SimulationReport {
    // Every game gets fresh engines with RNGs drawn from the master stream,
    // so one u64 seed pins down the entire run.
    let mut master = ChaCha20Rng::seed_from_u64(config.seed);
    let mut black_wins = 0;
    let mut white_wins = 0;
    let mut draws = 0;

    let start = Instant::now();
    for played in 1..=config.games {
        let mut black = Engine::new(config.black, master.gen());
        let mut white = Engine::new(config.white, master.gen());
        if config.random_openings {
            black = black.with_random_openings();
            white = white.with_random_openings();
        }

        let mut game = Game::new();
        let outcome = play_game(&mut game, &mut black, &mut white);
        match outcome.winner {
            Some(Player::Black) => black_wins += 1,
            Some(Player::White) => white_wins += 1,
            None => draws += 1,
        }
        debug!(
            game = played,
            black = outcome.black,
            white = outcome.white,
            "game finished"
        );
        on_game_finished(played);
    }

    SimulationReport {
        black_wins,
        white_wins,
        draws,
        elapsed: start.elapsed(),
    }
}
