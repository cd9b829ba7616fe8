//! Constants for board geometry, heuristic squares, and harness defaults.
//!
//! The board is a fixed 8x8 grid stored row-major in a flat array, so a cell
//! at `(row, col)` lives at index `row * SIZE + col`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (SIZE x SIZE).
pub const SIZE: usize = 8;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Column letters in human-facing coordinates, left to right.
pub const COLUMN_LETTERS: &[u8; SIZE] = b"abcdefgh";

/// Row and column of the top-left cell of the starting 2x2 block.
pub const CENTER_LOW: usize = SIZE / 2 - 1;

/// Row and column of the bottom-right cell of the starting 2x2 block.
pub const CENTER_HIGH: usize = SIZE / 2;

// =============================================================================
// Strategy Squares
// =============================================================================

/// Corners in the order corner-first probes them: a1, h1, a8, h8.
pub const CORNERS: [(usize, usize); 4] = [
    (0, 0),
    (0, SIZE - 1),
    (SIZE - 1, 0),
    (SIZE - 1, SIZE - 1),
];

/// Rows treated as edges by side-first (digits '1' and '7').
///
/// Row 6, not row 7: the edge test matches the digit '7', not '8'.
pub const SIDE_ROWS: [usize; 2] = [0, SIZE - 2];

/// Columns treated as edges by side-first (letters 'a' and 'h').
pub const SIDE_COLUMNS: [usize; 2] = [0, SIZE - 1];

// =============================================================================
// Simulation Defaults
// =============================================================================

/// Number of games simulated when no count is given.
pub const DEFAULT_GAMES: usize = 100;
