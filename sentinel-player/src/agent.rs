//! Move sources: engine strategies and blocking human input.

use crate::search;
use clap::ValueEnum;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sentinel_othello::{Board, MoveSource, Player, Square};
use std::io::{BufRead, Write};

/// How many of an engine's own moves are randomized when opening
/// randomization is enabled.
const RANDOM_OPENING_MOVES: u32 = 5;

/// The engine strategies a computer player can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Uniformly random among the legal moves.
    Random,
    /// Best static evaluation one ply ahead.
    Greedy,
    /// Unpruned minimax search.
    Minimax,
    /// Alpha-beta pruned minimax search; plays identically to `Minimax`.
    AlphaBeta,
}

/// A computer player: one strategy, one RNG, and an own-move counter for
/// opening randomization.
///
/// Engines are created fresh for each game, so the opening counter is scoped
/// to a single game.
pub struct Engine {
    strategy: Strategy,
    rng: ChaCha20Rng,
    random_openings: bool,
    moves_played: u32,
}

impl Engine {
    pub fn new(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: ChaCha20Rng::seed_from_u64(seed),
            random_openings: false,
            moves_played: 0,
        }
    }

    /// Play the first [`RANDOM_OPENING_MOVES`] own moves uniformly at random
    /// instead of consulting the strategy. Used by simulation runs that want
    /// varied openings.
    pub fn with_random_openings(mut self) -> Self {
        self.random_openings = true;
        self
    }
}

impl MoveSource for Engine {
    fn choose(&mut self, board: &Board, side: Player) -> Square {
        self.moves_played += 1;
        if self.random_openings && self.moves_played <= RANDOM_OPENING_MOVES {
            return search::random_move(board, side, &mut self.rng);
        }
        match self.strategy {
            Strategy::Random => search::random_move(board, side, &mut self.rng),
            Strategy::Greedy => search::greedy_move(board, side),
            Strategy::Minimax => {
                search::minimax_move(board, side, search::search_depth(board))
            }
            Strategy::AlphaBeta => {
                search::alpha_beta_move(board, side, search::search_depth(board))
            }
        }
    }
}

/// A human player reading algebraic notation ("D3") from stdin.
///
/// Malformed or illegal input is recovered by re-prompting and never reaches
/// the game.
pub struct Human;

impl Human {
    /// Prompt until `input` yields a legal move. Panics if the input stream
    /// closes mid-game: with no human left to ask, re-prompting cannot help.
    fn prompt(input: &mut dyn BufRead, board: &Board, side: Player) -> Square {
        let moves = board.legal_moves(side);
        let listed = moves
            .iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        loop {
            println!("Legal moves for {}: {}", side, listed);
            print!("Enter your move: ");
            std::io::stdout().flush().unwrap();

            let mut input_line = String::new();
            let bytes_read = input.read_line(&mut input_line).unwrap();
            if bytes_read == 0 {
                panic!("input closed while waiting for a move for {}", side);
            }

            match input_line.trim().parse::<Square>() {
                Ok(mv) if moves.contains(&mv) => return mv,
                _ => println!("Invalid move, please try again."),
            }
        }
    }
}

impl MoveSource for Human {
    fn choose(&mut self, board: &Board, side: Player) -> Square {
        let stdin = std::io::stdin();
        Self::prompt(&mut stdin.lock(), board, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_moves_are_legal() {
        for strategy in [
            Strategy::Random,
            Strategy::Greedy,
            Strategy::Minimax,
            Strategy::AlphaBeta,
        ] {
            let board = Board::new();
            let mut engine = Engine::new(strategy, 99);
            let mv = engine.choose(&board, Player::Black);
            assert!(board.legal_move(mv, Player::Black).is_some());
        }
    }

    #[test]
    fn seeded_engines_repeat_themselves() {
        let board = Board::new();
        let mv_a = Engine::new(Strategy::Random, 5).choose(&board, Player::Black);
        let mv_b = Engine::new(Strategy::Random, 5).choose(&board, Player::Black);
        assert_eq!(mv_a, mv_b);
    }

    #[test]
    fn human_reprompts_until_input_is_legal() {
        // A1 parses but is illegal at the opening; "zz" does not parse.
        let mut input = std::io::Cursor::new(b"zz\nA1\nD3\n".to_vec());
        let board = Board::new();
        let mv = Human::prompt(&mut input, &board, Player::Black);
        assert_eq!(mv, "D3".parse().unwrap());
    }

    #[test]
    #[should_panic(expected = "input closed")]
    fn human_gives_up_when_input_closes() {
        let mut input = std::io::Cursor::new(Vec::new());
        let board = Board::new();
        Human::prompt(&mut input, &board, Player::Black);
    }

    #[test]
    fn random_openings_still_produce_legal_moves() {
        let mut engine = Engine::new(Strategy::AlphaBeta, 3).with_random_openings();
        let mut board = Board::new();
        let mut side = Player::Black;
        for _ in 0..RANDOM_OPENING_MOVES + 2 {
            if !board.has_any_legal_move(side) {
                break;
            }
            if side == Player::Black {
                let mv = engine.choose(&board, side);
                assert!(board.legal_move(mv, side).is_some());
                board.make_move(mv, side);
            } else {
                let mv = search::greedy_move(&board, side);
                board.make_move(mv, side);
            }
            side = !side;
        }
    }
}
