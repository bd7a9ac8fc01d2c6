//! The mailbox board: occupancy state, move generation and application.

use crate::{Square, EDGE_LENGTH, GRID_CELLS, GRID_WIDTH, NUM_SPACES};
use arrayvec::ArrayVec;
use std::fmt::{self, Write};

/// One of the two players in a game.
///
/// The discriminants are additive inverses so that the opponent relation is a
/// pure negation of the underlying value; [`Not`](std::ops::Not) exposes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Player {
    Black = -1,
    White = 1,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// The state of a single cell of the bordered grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// A permanent sentinel on the outer ring; never playable.
    Border,
    Empty,
    Piece(Player),
}

/// The characters used to render each player's pieces. Purely cosmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub black: char,
    pub white: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            black: 'X',
            white: 'O',
        }
    }
}

/// The legal moves out of a position, in row-major square order.
pub type MoveList = ArrayVec<Square, NUM_SPACES>;

/// The final result of a game: piece counts and the winner, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The side with strictly more pieces, or `None` on a tie.
    pub winner: Option<Player>,
    pub white: u8,
    pub black: u8,
}

/// The 8 compass directions as offsets on the flat index space.
const DIRECTIONS: [isize; 8] = [1, -1, 10, -10, 9, -9, 11, -11];

/// The full occupancy state of an Othello board.
///
/// `Board` is `Copy`, so a trial move is made on a plain copy and "undone" by
/// dropping the copy; the round trip leaves every cell untouched.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; GRID_CELLS],
}

impl Default for Board {
    /// Gets the standard opening position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Construct a board holding the standard Othello opening.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[44] = Cell::Piece(Player::White);
        board.cells[55] = Cell::Piece(Player::White);
        board.cells[45] = Cell::Piece(Player::Black);
        board.cells[54] = Cell::Piece(Player::Black);
        board
    }

    /// Construct a board from explicit piece lists, for setting up positions.
    /// Later entries overwrite earlier ones if a square appears twice.
    pub fn from_squares(black: &[Square], white: &[Square]) -> Self {
        let mut board = Self::empty();
        for &sq in black {
            board.cells[sq.index()] = Cell::Piece(Player::Black);
        }
        for &sq in white {
            board.cells[sq.index()] = Cell::Piece(Player::White);
        }
        board
    }

    /// A border ring with an empty playing area.
    fn empty() -> Self {
        let mut cells = [Cell::Empty; GRID_CELLS];
        for (index, cell) in cells.iter_mut().enumerate() {
            let (row, col) = (index / GRID_WIDTH, index % GRID_WIDTH);
            if !(1..=EDGE_LENGTH).contains(&row) || !(1..=EDGE_LENGTH).contains(&col) {
                *cell = Cell::Border;
            }
        }
        Self { cells }
    }

    /// Get the cell at a playable square.
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// The squares a piece played at `mv` would capture for `side`.
    ///
    /// Scans each direction from `mv`: an unbroken run of opponent pieces
    /// closed by an own piece is captured whole; a run ending at an empty
    /// cell or the border captures nothing in that direction. The returned
    /// list never contains `mv` itself, an empty cell, or a border cell.
    pub fn flipped_squares(&self, mv: Square, side: Player) -> Vec<Square> {
        let mut to_flip = Vec::new();
        for dir in DIRECTIONS {
            let mut pos = (mv.index() as isize + dir) as usize;
            if self.cells[pos] != Cell::Piece(!side) {
                continue;
            }
            let run_start = to_flip.len();
            loop {
                // Border indices never hold an opponent piece, so this walk
                // cannot leave the grid.
                to_flip.push(Square::from_index(pos).unwrap());
                pos = (pos as isize + dir) as usize;
                match self.cells[pos] {
                    Cell::Piece(p) if p == !side => continue,
                    Cell::Piece(_) => break,
                    Cell::Empty | Cell::Border => {
                        to_flip.truncate(run_start);
                        break;
                    }
                }
            }
        }
        to_flip
    }

    /// Check whether `mv` is legal for `side`, returning the captured squares.
    ///
    /// `None` if the square is occupied or the move captures nothing; a move
    /// is legal iff it flips at least one opposing piece.
    pub fn legal_move(&self, mv: Square, side: Player) -> Option<Vec<Square>> {
        if self.get(mv) != Cell::Empty {
            return None;
        }
        let flipped = self.flipped_squares(mv, side);
        if flipped.is_empty() {
            None
        } else {
            Some(flipped)
        }
    }

    /// Play `mv` for `side`. Returns false, leaving the board untouched, if
    /// the move is illegal. This is the sole mutator of occupancy state.
    pub fn make_move(&mut self, mv: Square, side: Player) -> bool {
        match self.legal_move(mv, side) {
            None => false,
            Some(to_flip) => {
                for sq in to_flip {
                    self.cells[sq.index()] = Cell::Piece(side);
                }
                self.cells[mv.index()] = Cell::Piece(side);
                true
            }
        }
    }

    /// List every legal move for `side`, in row-major square order.
    pub fn legal_moves(&self, side: Player) -> MoveList {
        let mut moves = MoveList::new();
        for sq in Square::interior() {
            if self.legal_move(sq, side).is_some() {
                moves.push(sq);
            }
        }
        moves
    }

    /// Whether `side` has at least one legal move.
    pub fn has_any_legal_move(&self, side: Player) -> bool {
        Square::interior().any(|sq| self.legal_move(sq, side).is_some())
    }

    /// Count the pieces held by `side`.
    pub fn count(&self, side: Player) -> u8 {
        Square::interior()
            .filter(|&sq| self.get(sq) == Cell::Piece(side))
            .count() as u8
    }

    /// Count the empty playable squares.
    pub fn count_empty(&self) -> u8 {
        Square::interior()
            .filter(|&sq| self.get(sq) == Cell::Empty)
            .count() as u8
    }

    /// Whether no further move is possible by either side.
    ///
    /// This is the board-level notion of a finished game; it is safe to call
    /// mid-search and is what terminal evaluation keys off.
    pub fn is_playable_over(&self) -> bool {
        self.count_empty() == 0
            || (!self.has_any_legal_move(Player::Black) && !self.has_any_legal_move(Player::White))
    }

    /// Count both sides and name the leader. Meaningful at the end of a game,
    /// but safe to call at any time.
    pub fn score(&self) -> Outcome {
        let white = self.count(Player::White);
        let black = self.count(Player::Black);
        let winner = match white.cmp(&black) {
            std::cmp::Ordering::Greater => Some(Player::White),
            std::cmp::Ordering::Less => Some(Player::Black),
            std::cmp::Ordering::Equal => None,
        };
        Outcome {
            winner,
            white,
            black,
        }
    }

    /// Render the playing area with the given glyphs.
    pub(crate) fn fmt_grid(&self, f: &mut fmt::Formatter<'_>, glyphs: Glyphs) -> fmt::Result {
        write!(f, "   A B C D E F G H")?;
        for row in 0..EDGE_LENGTH {
            write!(f, "\n {} ", row + 1)?;
            for col in 0..EDGE_LENGTH {
                let sq = Square::from_coords(row, col).ok_or(fmt::Error)?;
                let glyph = match self.get(sq) {
                    Cell::Piece(Player::Black) => glyphs.black,
                    Cell::Piece(Player::White) => glyphs.white,
                    Cell::Empty => '-',
                    Cell::Border => return Err(fmt::Error),
                };
                f.write_char(glyph)?;
                f.write_char(' ')?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_grid(f, Glyphs::default())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        self.fmt_grid(f, Glyphs::default())?;
        write!(f, "}}")
    }
}
