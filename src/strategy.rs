//! One-ply move selection heuristics.
//!
//! Every strategy picks a single move from a non-empty list of legal moves.
//! The score-based variants simulate each candidate on a copy of the board and
//! look only at the mover's own tile count afterwards; there is no lookahead.

use std::fmt;
use std::str::FromStr;

use fastrand::Rng;

use crate::board::{Board, Cell};
use crate::constants::{CORNERS, SIDE_COLUMNS, SIDE_ROWS};
use crate::position::Position;
use crate::rules::apply;

/// A named move-selection policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Take a corner when one is available, else best-score
    CornerFirst,
    /// Take an edge move when one is available, else best-score
    SideFirst,
    /// Maximize the mover's tile count after the move
    BestScore,
    /// Minimize the mover's tile count after the move
    WorstScore,
    /// Uniformly random legal move
    Random,
}

impl Strategy {
    /// All strategies in menu order (menu numbers 1 to 5).
    pub const ALL: [Strategy; 5] = [
        Strategy::CornerFirst,
        Strategy::SideFirst,
        Strategy::BestScore,
        Strategy::WorstScore,
        Strategy::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::CornerFirst => "corner-first",
            Strategy::SideFirst => "side-first",
            Strategy::BestScore => "best-score",
            Strategy::WorstScore => "worst-score",
            Strategy::Random => "random",
        }
    }

    /// One-line explanation shown in strategy listings.
    pub fn description(self) -> &'static str {
        match self {
            Strategy::CornerFirst => {
                "plays a corner when possible, otherwise the highest-scoring move"
            }
            Strategy::SideFirst => {
                "plays an edge move when possible, otherwise the highest-scoring move"
            }
            Strategy::BestScore => "plays the move leaving it the most tiles",
            Strategy::WorstScore => "plays the move leaving it the fewest tiles",
            Strategy::Random => "plays a uniformly random legal move",
        }
    }

    /// Menu number as listed by `strategies`.
    pub fn number(self) -> usize {
        Strategy::ALL
            .iter()
            .position(|&s| s == self)
            .map_or(0, |i| i + 1)
    }

    /// Choose one of `legal` for `mark` on `board`.
    ///
    /// # Panics
    ///
    /// Panics if `legal` is empty. The game driver handles passes before a
    /// strategy is ever consulted.
    pub fn select(self, mark: Cell, legal: &[Position], board: &Board, rng: &mut Rng) -> Position {
        assert!(
            !legal.is_empty(),
            "{} asked to select from an empty move list",
            self.name()
        );

        match self {
            Strategy::CornerFirst => {
                corner_move(legal).unwrap_or_else(|| best_score(mark, legal, board))
            }
            Strategy::SideFirst => {
                side_move(legal).unwrap_or_else(|| best_score(mark, legal, board))
            }
            Strategy::BestScore => best_score(mark, legal, board),
            Strategy::WorstScore => worst_score(mark, legal, board),
            Strategy::Random => legal[rng.usize(..legal.len())],
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy identifier that matches nothing known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
        write!(
            f,
            "unknown strategy '{}' (expected one of: {}, or a number 1-{})",
            self.0,
            names.join(", "),
            Strategy::ALL.len()
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        let strategy = match key.as_str() {
            "1" | "corner" | "corner-first" => Strategy::CornerFirst,
            "2" | "side" | "side-first" => Strategy::SideFirst,
            "3" | "best" | "best-score" => Strategy::BestScore,
            "4" | "worst" | "worst-score" => Strategy::WorstScore,
            "5" | "random" => Strategy::Random,
            _ => return Err(UnknownStrategy(s.to_string())),
        };
        Ok(strategy)
    }
}

/// Who makes the moves for one side of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves come from a person through the interactive session
    Human,
    Computer(Strategy),
}

impl PlayerKind {
    pub fn strategy(self) -> Option<Strategy> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Computer(s) => Some(s),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => f.write_str("human"),
            PlayerKind::Computer(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("human") {
            return Ok(PlayerKind::Human);
        }
        s.parse().map(PlayerKind::Computer)
    }
}

/// First legal corner in a1, h1, a8, h8 order.
fn corner_move(legal: &[Position]) -> Option<Position> {
    CORNERS
        .iter()
        .filter_map(|&(row, col)| Position::new(row, col))
        .find(|corner| legal.contains(corner))
}

/// First legal move on an edge row or column, in `legal` order.
fn side_move(legal: &[Position]) -> Option<Position> {
    legal
        .iter()
        .copied()
        .find(|p| SIDE_ROWS.contains(&p.row()) || SIDE_COLUMNS.contains(&p.col()))
}

/// Mover's tile count after playing `pos` on a scratch copy of `board`.
fn score_after(mark: Cell, pos: Position, board: &Board) -> usize {
    let mut scratch = *board;
    apply(&mut scratch, mark, pos);
    scratch.count(mark)
}

/// Highest post-move count; ties go to the earliest candidate.
fn best_score(mark: Cell, legal: &[Position], board: &Board) -> Position {
    let mut best = legal[0];
    let mut best_count = score_after(mark, best, board);
    for &pos in &legal[1..] {
        let count = score_after(mark, pos, board);
        if count > best_count {
            best = pos;
            best_count = count;
        }
    }
    best
}

/// Lowest post-move count; ties go to the earliest candidate.
fn worst_score(mark: Cell, legal: &[Position], board: &Board) -> Position {
    let mut worst = legal[0];
    let mut worst_count = score_after(mark, worst, board);
    for &pos in &legal[1..] {
        let count = score_after(mark, pos, board);
        if count < worst_count {
            worst = pos;
            worst_count = count;
        }
    }
    worst
}
