//! Board coordinates.
//!
//! A [`Position`] is a `(row, col)` pair that is always on the board; the only
//! ways to build one are checked. The human-facing form is a column letter
//! `a`-`h` followed by a row digit `1`-`8`, so `a1` is `(0, 0)` and `h8` is
//! `(7, 7)`.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, COLUMN_LETTERS, SIZE};

/// Reason a coordinate string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Input is not exactly two characters
    Length(usize),
    /// First character is not a column letter a-h
    Column(char),
    /// Second character is not a row digit 1-8
    Row(char),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Length(n) => {
                write!(f, "coordinate must be 2 characters like 'd3', got {n}")
            }
            CoordError::Column(c) => write!(f, "column '{c}' is not a letter a-h"),
            CoordError::Row(c) => write!(f, "row '{c}' is not a digit 1-8"),
        }
    }
}

impl std::error::Error for CoordError {}

/// A cell on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Build a position, or `None` if either index is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Inverse of [`Position::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELLS).then(|| Self {
            row: (index / SIZE) as u8,
            col: (index % SIZE) as u8,
        })
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index into a flat 64-cell array.
    #[inline]
    pub fn index(self) -> usize {
        self.row() * SIZE + self.col()
    }

    /// Step by `(d_row, d_col)`, returning `None` when the step leaves the board.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Self::new(row, col)
    }

    /// All 64 positions in row-major order (a1, b1, ..., h1, a2, ...).
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELLS).filter_map(Position::from_index)
    }
}

impl FromStr for Position {
    type Err = CoordError;

    /// Parse `[a-h][1-8]`. Case and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(c), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CoordError::Length(s.chars().count()));
        };

        let col = COLUMN_LETTERS
            .iter()
            .position(|&l| l as char == c.to_ascii_lowercase())
            .ok_or(CoordError::Column(c))?;
        let row = r
            .to_digit(10)
            .map(|d| d as usize)
            .filter(|d| (1..=SIZE).contains(d))
            .ok_or(CoordError::Row(r))?;

        Position::new(row - 1, col).ok_or(CoordError::Row(r))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLUMN_LETTERS[self.col()] as char, self.row() + 1)
    }
}
