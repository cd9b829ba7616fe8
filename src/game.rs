//! Turn sequencing for a single game.
//!
//! [`GameState`] owns the board, whose turn it is, and how many passes have
//! happened in a row. A game ends when both players pass back to back or the
//! board fills up. The same rule applies to interactive and simulated play.

use fastrand::Rng;
use tracing::{debug, trace};

use crate::board::{Board, Cell};
use crate::position::Position;
use crate::rules::{MoveError, has_legal_move, legal_moves, try_apply};
use crate::strategy::Strategy;

/// Whether a game can still continue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Terminal,
}

/// Final tile counts and the winner (`None` for a tie).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub dark: usize,
    pub light: usize,
    pub winner: Option<Cell>,
}

impl GameResult {
    fn from_board(board: &Board) -> Self {
        let dark = board.count(Cell::Dark);
        let light = board.count(Cell::Light);
        let winner = match dark.cmp(&light) {
            std::cmp::Ordering::Greater => Some(Cell::Dark),
            std::cmp::Ordering::Less => Some(Cell::Light),
            std::cmp::Ordering::Equal => None,
        };
        GameResult {
            dark,
            light,
            winner,
        }
    }
}

/// What happened on one automatic turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// `mark` played `pos`, flipping `flips`
    Moved {
        mark: Cell,
        pos: Position,
        flips: Vec<Position>,
    },
    /// `mark` had no legal move
    Passed { mark: Cell },
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current board
    pub board: Board,
    /// Player to move
    pub active: Cell,
    /// Consecutive passes (0, 1 or 2)
    pub passes: u8,
    /// Number of tiles placed so far
    pub moves_played: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Starting position with Dark to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Cell::Dark)
    }

    /// Resume from an arbitrary board with `active` to move.
    pub fn from_board(board: Board, active: Cell) -> Self {
        Self {
            board,
            active,
            passes: 0,
            moves_played: 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.passes >= 2 || self.board.is_full() {
            GameStatus::Terminal
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() == GameStatus::Terminal
    }

    /// Legal moves for the player to move, row-major.
    pub fn legal_moves(&self) -> Vec<Position> {
        legal_moves(&self.board, self.active)
    }

    /// `(dark, light)` tile counts.
    pub fn scores(&self) -> (usize, usize) {
        (self.board.count(Cell::Dark), self.board.count(Cell::Light))
    }

    /// Final result, or `None` while the game is still running.
    pub fn outcome(&self) -> Option<GameResult> {
        self.is_over().then(|| GameResult::from_board(&self.board))
    }

    /// Play `pos` for the active player and hand the turn over.
    ///
    /// Returns the flipped tiles. An illegal move leaves the state unchanged.
    pub fn play(&mut self, pos: Position) -> Result<Vec<Position>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let flips = try_apply(&mut self.board, self.active, pos)?;
        trace!(mark = %self.active, %pos, flips = flips.len(), "move");
        self.passes = 0;
        self.moves_played += 1;
        self.active = self.active.opponent();
        Ok(flips)
    }

    /// Forfeit the turn. Only allowed when the active player has no legal move.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if has_legal_move(&self.board, self.active) {
            return Err(MoveError::MustMove);
        }
        trace!(mark = %self.active, "pass");
        self.passes += 1;
        self.active = self.active.opponent();
        Ok(())
    }

    /// Run one turn for the active player using `strategy`, passing if needed.
    ///
    /// Returns `None` once the game is over.
    pub fn advance(&mut self, strategy: Strategy, rng: &mut Rng) -> Option<Turn> {
        if self.is_over() {
            return None;
        }
        let mark = self.active;
        let legal = self.legal_moves();
        if legal.is_empty() {
            self.passes += 1;
            self.active = mark.opponent();
            trace!(%mark, "pass");
            return Some(Turn::Passed { mark });
        }

        let pos = strategy.select(mark, &legal, &self.board, rng);
        match self.play(pos) {
            Ok(flips) => Some(Turn::Moved { mark, pos, flips }),
            Err(e) => unreachable!("{strategy} chose {pos} outside the legal set: {e}"),
        }
    }

    /// Play `dark` against `light` until the game ends.
    pub fn play_out(&mut self, dark: Strategy, light: Strategy, rng: &mut Rng) -> GameResult {
        while !self.is_over() {
            let strategy = match self.active {
                Cell::Light => light,
                _ => dark,
            };
            self.advance(strategy, rng);
        }

        let result = GameResult::from_board(&self.board);
        debug!(
            dark = result.dark,
            light = result.light,
            moves = self.moves_played,
            "game finished"
        );
        result
    }
}
