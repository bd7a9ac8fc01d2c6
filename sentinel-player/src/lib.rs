//! Players for `sentinel-othello`: a positional evaluator, four move-search
//! strategies, engine and human move sources, and a batch simulation runner
//! for comparing strategies over many games.

pub mod agent;
pub mod evaluate;
pub mod search;
pub mod simulate;

pub use agent::{Engine, Human, Strategy};
pub use evaluate::{evaluate, Score};

use sentinel_othello::{Game, GameStatus, MoveSource, Outcome, Player};

/// Drive `game` to completion, consulting `black` and `white` for their
/// sides' moves, and return the final score.
pub fn play_game(
    game: &mut Game,
    black: &mut dyn MoveSource,
    white: &mut dyn MoveSource,
) -> Outcome {
    loop {
        let source: &mut dyn MoveSource = match game.to_move {
            Player::Black => black,
            Player::White => white,
        };
        if game.play_turn(source) == GameStatus::Ended {
            return game.score();
        }
    }
}
