//! Turn-level game logic: sides, forced passes and game end.

use crate::{Board, Glyphs, Outcome, Player, Square};
use std::fmt;
use thiserror::Error;

/// Whether a game can still accept turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Ended,
}

/// The error returned when a move cannot be committed to the game.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("illegal move at {0}")]
pub struct IllegalMove(pub Square);

/// Anything that can pick a move for one side.
///
/// `choose` is only invoked when `side` has at least one legal move on
/// `board`; implementations may assume so, and may block (e.g. on stdin)
/// without affecting game correctness.
pub trait MoveSource {
    fn choose(&mut self, board: &Board, side: Player) -> Square;
}

/// A full game in progress: board plus turn state.
///
/// One `Game` exists per played game. Black moves first. The game ends when
/// both sides pass consecutively or no empty square remains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub to_move: Player,
    consecutive_passes: u8,
    pub last_move: Option<Square>,
    glyphs: Glyphs,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a game from the standard opening, Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::Black)
    }

    /// Start a game from an arbitrary position.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            consecutive_passes: 0,
            last_move: None,
            glyphs: Glyphs::default(),
        }
    }

    /// Override the glyphs used to render the board.
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Whether the game is finished: two consecutive passes, or a full board.
    pub fn is_over(&self) -> bool {
        self.consecutive_passes == 2 || self.board.count_empty() == 0
    }

    /// The final (or current) count for both sides.
    pub fn score(&self) -> Outcome {
        self.board.score()
    }

    /// Commit a move for the side to move, with full turn bookkeeping.
    pub fn try_move(&mut self, mv: Square) -> Result<(), IllegalMove> {
        if !self.board.make_move(mv, self.to_move) {
            return Err(IllegalMove(mv));
        }
        self.last_move = Some(mv);
        self.consecutive_passes = 0;
        self.to_move = !self.to_move;
        Ok(())
    }

    /// Play one turn, consulting `source` for the active side's move.
    ///
    /// A side with no legal move is forced to pass: the pass counter is
    /// incremented and the turn flips without touching the board or calling
    /// `source`. Otherwise the chosen move is committed and the pass counter
    /// resets. Only this method and [`Game::try_move`] commit moves; search
    /// strategies work on board copies and never mutate the live game.
    pub fn play_turn(&mut self, source: &mut dyn MoveSource) -> GameStatus {
        if self.is_over() {
            return GameStatus::Ended;
        }
        if !self.board.has_any_legal_move(self.to_move) {
            self.consecutive_passes += 1;
            self.to_move = !self.to_move;
            return GameStatus::InProgress;
        }
        let mv = source.choose(&self.board, self.to_move);
        // A source that violates its legality contract trips the assert in
        // debug builds; in release the board is untouched and the same side
        // is asked again next turn.
        let committed = self.try_move(mv);
        debug_assert!(
            committed.is_ok(),
            "move source broke its contract: {}",
            committed.unwrap_err()
        );
        GameStatus::InProgress
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board.fmt_grid(f, self.glyphs)?;
        let outcome = self.score();
        writeln!(f, "Black: {}  White: {}", outcome.black, outcome.white)?;
        match self.last_move {
            Some(mv) => writeln!(f, "Last move: {}", mv)?,
            None => writeln!(f, "Last move: [no move played yet]")?,
        }
        write!(f, "{} to move", self.to_move)
    }
}
