//! Code for working with [`Square`]s of the bordered grid.

use crate::{EDGE_LENGTH, GRID_WIDTH};
use derive_more::Into;
use std::fmt::{self, Display, Formatter, Write};
use thiserror::Error;

/// A playable square, stored as a flat index into the 10x10 grid.
///
/// Valid indices have a row digit and a column digit both in `1..=8`; the
/// surrounding indices belong to the border ring and are never playable.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Into)]
pub struct Square(usize);

impl Square {
    /// Convert from a flat grid index. Returns `None` for border indices.
    pub fn from_index(index: usize) -> Option<Self> {
        let (row, col) = (index / GRID_WIDTH, index % GRID_WIDTH);
        if (1..=EDGE_LENGTH).contains(&row) && (1..=EDGE_LENGTH).contains(&col) {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Convert from 0-based row and column coordinates of the playing area.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Some(Self((row + 1) * GRID_WIDTH + (col + 1)))
        } else {
            None
        }
    }

    /// Get the flat grid index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// Get the 0-based row and column coordinates of the playing area.
    pub fn to_coords(self) -> (usize, usize) {
        (self.0 / GRID_WIDTH - 1, self.0 % GRID_WIDTH - 1)
    }

    /// Iterate over all 64 playable squares in row-major order.
    pub fn interior() -> impl Iterator<Item = Self> {
        (1..=EDGE_LENGTH)
            .flat_map(|row| (1..=EDGE_LENGTH).map(move |col| Self(row * GRID_WIDTH + col)))
    }
}

/// Convert this [`Square`] into algebraic notation ("D3").
impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let col_str = "ABCDEFGH".chars().nth(col).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(row).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// The error returned when a string is not valid square notation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid square notation")]
pub struct ParseSquareError;

/// Build a [`Square`] from algebraic notation ("D3"; case-insensitive).
impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseSquareError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseSquareError)?;
        let row = chars
            .next()
            .ok_or(ParseSquareError)?
            .to_digit(10)
            .ok_or(ParseSquareError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseSquareError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseSquareError)
    }
}
