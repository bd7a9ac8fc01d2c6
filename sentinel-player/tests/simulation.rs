//! Batch simulation must be reproducible: a fixed seed pins down every
//! engine's randomness and therefore the exact tallies.

use sentinel_player::simulate::{run, SimulationConfig};
use sentinel_player::Strategy;

#[test]
fn fixed_seed_reproduces_tallies() {
    let config = SimulationConfig {
        games: 10,
        black: Strategy::Random,
        white: Strategy::Random,
        random_openings: false,
        seed: 2026,
    };
    let first = run(&config);
    let second = run(&config);

    assert_eq!(first.games(), 10);
    assert_eq!(
        (first.black_wins, first.white_wins, first.draws),
        (second.black_wins, second.white_wins, second.draws)
    );
}

#[test]
fn random_openings_stay_reproducible() {
    let config = SimulationConfig {
        games: 4,
        black: Strategy::Greedy,
        white: Strategy::Random,
        random_openings: true,
        seed: 7,
    };
    let first = run(&config);
    let second = run(&config);

    assert_eq!(first.games(), 4);
    assert_eq!(
        (first.black_wins, first.white_wins, first.draws),
        (second.black_wins, second.white_wins, second.draws)
    );
}
