//! Board representation.
//!
//! A [`Board`] is a plain `Copy` value holding 64 tri-state cells, so the
//! move engine and the score-based strategies can simulate a move on a
//! throwaway copy without touching the real game.

use std::fmt;

use crate::constants::{CELLS, CENTER_HIGH, CENTER_LOW, COLUMN_LETTERS, SIZE};
use crate::position::Position;

/// Contents of a single cell. `Dark` and `Light` double as player marks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl Cell {
    /// The opposing mark. `Empty` has no opponent and maps to itself.
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::Dark => Cell::Light,
            Cell::Light => Cell::Dark,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Single-character symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Dark => 'X',
            Cell::Light => 'O',
            Cell::Empty => ' ',
        }
    }

    /// Lowercase name of the mark ("dark", "light" or "empty").
    pub fn name(self) -> &'static str {
        match self {
            Cell::Dark => "dark",
            Cell::Light => "light",
            Cell::Empty => "empty",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Fresh starting board: Light on d4/e5, Dark on e4/d5.
    pub fn new() -> Self {
        Self::with_center(Cell::Dark, Cell::Light)
    }

    /// Starting board with a custom pair of marks.
    ///
    /// `anti` lands on the anti-diagonal pair (3,4)/(4,3) and `main` on the
    /// main-diagonal pair (3,3)/(4,4). The diagonal-vs-diagonal pattern itself
    /// is fixed.
    pub fn with_center(anti: Cell, main: Cell) -> Self {
        let mut board = Self::empty();
        board.cells[CENTER_LOW * SIZE + CENTER_LOW] = main;
        board.cells[CENTER_HIGH * SIZE + CENTER_HIGH] = main;
        board.cells[CENTER_LOW * SIZE + CENTER_HIGH] = anti;
        board.cells[CENTER_HIGH * SIZE + CENTER_LOW] = anti;
        board
    }

    /// A board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Overwrite a single cell.
    ///
    /// Game code mutates boards only through [`crate::rules::apply`]; direct
    /// writes are meant for building fixtures.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    pub fn empty_count(&self) -> usize {
        self.count(Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: String = COLUMN_LETTERS
            .iter()
            .map(|&c| format!("{} ", c as char))
            .collect();
        let rule = format!(" +{}", "-+".repeat(SIZE));

        writeln!(f, "  {header}")?;
        writeln!(f, "{rule}")?;
        for row in 0..SIZE {
            write!(f, "{}|", row + 1)?;
            for col in 0..SIZE {
                write!(f, "{}|", self.cells[row * SIZE + col].symbol())?;
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
