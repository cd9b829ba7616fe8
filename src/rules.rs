//! Move legality, tile flipping, and move generation.
//!
//! Every rule question goes through one directional walk, [`scan_direction`]:
//! starting next to the target cell, collect opponent tiles until the walk
//! hits one of the mover's tiles (capture confirmed), an empty cell, or the
//! edge of the board (capture discarded). Legality checks, flip computation,
//! and move generation all consume its output.

use std::fmt;

use tracing::trace;

use crate::board::{Board, Cell};
use crate::position::Position;

/// One of the eight compass directions, as a `(d_row, d_col)` step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpRight,
    DownRight,
    DownLeft,
    UpLeft,
}

impl Direction {
    /// All directions in scan order. Flip lists follow this order.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpLeft,
    ];

    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpRight => (-1, 1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpLeft => (-1, -1),
        }
    }
}

/// Outcome of a legality check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub legal: bool,
    /// Opponent tiles that flip, grouped by direction in [`Direction::ALL`]
    /// order and ordered outward within a direction. Empty when not legal.
    pub flips: Vec<Position>,
}

impl MoveResult {
    fn illegal() -> Self {
        MoveResult {
            legal: false,
            flips: Vec::new(),
        }
    }
}

/// Why a checked move was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Target cell already holds a tile
    Occupied(Position),
    /// No direction brackets any opponent tile
    NoCaptures(Position),
    /// Player tried to pass while a legal move exists
    MustMove,
    /// Game already finished
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Occupied(pos) => write!(f, "illegal move: {pos} is not empty"),
            MoveError::NoCaptures(pos) => {
                write!(f, "illegal move: {pos} does not flip any tiles")
            }
            MoveError::MustMove => write!(f, "cannot pass while a legal move exists"),
            MoveError::GameOver => write!(f, "the game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// The shared directional walk.
///
/// Steps outward from `pos`, handing each opponent tile to `visit`, and
/// returns how many of them `mark` brackets. Zero means the walk ran into an
/// empty cell or off the board before reaching one of `mark`'s tiles.
fn walk(
    board: &Board,
    mark: Cell,
    pos: Position,
    dir: Direction,
    mut visit: impl FnMut(Position),
) -> usize {
    let (d_row, d_col) = dir.delta();
    let opponent = mark.opponent();
    let mut passed = 0;
    let mut cur = pos.offset(d_row, d_col);

    while let Some(p) = cur {
        match board.get(p) {
            c if c == opponent => {
                visit(p);
                passed += 1;
            }
            c if c == mark => return passed,
            _ => return 0,
        }
        cur = p.offset(d_row, d_col);
    }
    0
}

/// Opponent tiles that `mark` would capture walking in `dir` from `pos`,
/// nearest first. Empty when nothing is bracketed.
pub fn scan_direction(board: &Board, mark: Cell, pos: Position, dir: Direction) -> Vec<Position> {
    let mut candidates = Vec::new();
    let confirmed = walk(board, mark, pos, dir, |p| candidates.push(p));
    candidates.truncate(confirmed);
    candidates
}

/// Check whether `mark` may play at `pos` and compute the tiles it flips.
pub fn is_legal_and_flips(board: &Board, mark: Cell, pos: Position) -> MoveResult {
    if mark == Cell::Empty || board.get(pos) != Cell::Empty {
        return MoveResult::illegal();
    }

    let flips: Vec<Position> = Direction::ALL
        .iter()
        .flat_map(|&dir| scan_direction(board, mark, pos, dir))
        .collect();

    MoveResult {
        legal: !flips.is_empty(),
        flips,
    }
}

/// Legality only. Stops at the first capturing direction.
pub fn is_legal(board: &Board, mark: Cell, pos: Position) -> bool {
    mark != Cell::Empty
        && board.get(pos) == Cell::Empty
        && Direction::ALL
            .iter()
            .any(|&dir| walk(board, mark, pos, dir, |_| {}) > 0)
}

/// Place `mark` at `pos` and flip every captured tile.
///
/// # Panics
///
/// Panics if the move is not legal for `mark` on `board`. Callers must check
/// legality first; use [`try_apply`] for input that has not been checked.
pub fn apply(board: &mut Board, mark: Cell, pos: Position) -> Vec<Position> {
    match try_apply(board, mark, pos) {
        Ok(flips) => flips,
        Err(e) => panic!("apply called with an unchecked move for {mark} at {pos}: {e}"),
    }
}

/// Checked form of [`apply`]: the board is left untouched on error.
pub fn try_apply(board: &mut Board, mark: Cell, pos: Position) -> Result<Vec<Position>, MoveError> {
    if board.get(pos) != Cell::Empty {
        return Err(MoveError::Occupied(pos));
    }
    let result = is_legal_and_flips(board, mark, pos);
    if !result.legal {
        return Err(MoveError::NoCaptures(pos));
    }

    board.set(pos, mark);
    for &p in &result.flips {
        board.set(p, mark);
    }
    trace!(%mark, %pos, flipped = result.flips.len(), "applied move");
    Ok(result.flips)
}

/// Every legal move for `mark`, in row-major order.
pub fn legal_moves(board: &Board, mark: Cell) -> Vec<Position> {
    Position::all()
        .filter(|&pos| is_legal(board, mark, pos))
        .collect()
}

/// Whether `mark` has at least one legal move.
pub fn has_legal_move(board: &Board, mark: Cell) -> bool {
    Position::all().any(|pos| is_legal(board, mark, pos))
}
