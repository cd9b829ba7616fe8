//! Interactive text session.
//!
//! Reads one command per line and writes plain-text replies, which makes the
//! session usable from a terminal and easy to drive from tests. Computer
//! sides and forced passes are played automatically between human turns.
//!
//! ## Commands
//!
//! - `<coord>` - Play a move, e.g. `d3`
//! - `moves` (or `hint`) - List the legal moves
//! - `board` - Show the board
//! - `score` - Show the tile counts
//! - `help` - List the commands
//! - `quit` (or `q`) - Leave the game

use std::io::{self, BufRead, Write};

use fastrand::Rng;
use tracing::debug;

use crate::board::Cell;
use crate::game::{GameResult, GameState, Turn};
use crate::position::Position;
use crate::rules::has_legal_move;
use crate::strategy::PlayerKind;

const HELP: &str = "Enter a move as a column letter and row digit ([a-h][1-8]), e.g. d3.\n\
                    Other commands: moves, board, score, help, quit";

/// One game between two players, any of which may be human.
pub struct Session {
    state: GameState,
    dark: PlayerKind,
    light: PlayerKind,
    rng: Rng,
}

impl Session {
    pub fn new(dark: PlayerKind, light: PlayerKind, rng: Rng) -> Self {
        Self {
            state: GameState::new(),
            dark,
            light,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn player(&self, mark: Cell) -> PlayerKind {
        match mark {
            Cell::Light => self.light,
            _ => self.dark,
        }
    }

    fn label(mark: Cell) -> String {
        match mark {
            Cell::Dark => format!("Dark ({})", mark.symbol()),
            Cell::Light => format!("Light ({})", mark.symbol()),
            Cell::Empty => "nobody".to_string(),
        }
    }

    fn score_line(&self) -> String {
        let (dark, light) = self.state.scores();
        format!("Score: Dark {dark}, Light {light}")
    }

    /// Play the game to the end, reading human moves from `input`.
    ///
    /// Returns the final result, or `None` if the player quit or the input
    /// ran out first.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
    ) -> io::Result<Option<GameResult>> {
        writeln!(out, "R E V E R S E G A M")?;
        writeln!(
            out,
            "{}: {} vs {}: {}\n",
            Self::label(Cell::Dark),
            self.dark,
            Self::label(Cell::Light),
            self.light
        )?;
        write!(out, "{}", self.state.board)?;

        let mut lines = input.lines();
        loop {
            self.play_automatic(out)?;

            if let Some(result) = self.state.outcome() {
                self.report(&result, out)?;
                return Ok(Some(result));
            }

            writeln!(out, "{}", self.score_line())?;
            write!(out, "{} to move ([a-h][1-8], or 'help'): ", Self::label(self.state.active))?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                debug!("input closed before the game ended");
                return Ok(None);
            };
            let line = line?;
            let command = line.trim().to_lowercase();
            if command.is_empty() {
                continue;
            }

            let (success, message) = self.execute(&command);
            let prefix = if success { "" } else { "? " };
            writeln!(out, "{prefix}{message}")?;

            if command == "quit" || command == "q" {
                return Ok(None);
            }
        }
    }

    /// Play computer turns and forced passes until a human must move or the
    /// game ends.
    fn play_automatic<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        while !self.state.is_over() {
            let mark = self.state.active;
            match self.player(mark) {
                PlayerKind::Human => {
                    if has_legal_move(&self.state.board, mark) {
                        return Ok(());
                    }
                    if self.state.pass().is_ok() {
                        writeln!(out, "{} has no legal moves and passes.", Self::label(mark))?;
                    }
                }
                PlayerKind::Computer(strategy) => {
                    let turn = self.state.advance(strategy, &mut self.rng);
                    match turn {
                        Some(Turn::Moved { mark, pos, flips }) => {
                            debug!(%mark, %pos, %strategy, "computer move");
                            writeln!(
                                out,
                                "{} plays {pos}, flipping {}.",
                                Self::label(mark),
                                flips.len()
                            )?;
                            write!(out, "{}", self.state.board)?;
                            writeln!(out, "{}", self.score_line())?;
                        }
                        Some(Turn::Passed { mark }) => {
                            writeln!(out, "{} has no legal moves and passes.", Self::label(mark))?;
                        }
                        None => break,
                    }
                }
            }
        }
        Ok(())
    }

    fn report<W: Write>(&self, result: &GameResult, out: &mut W) -> io::Result<()> {
        writeln!(out, "GAME OVER!")?;
        writeln!(out, "Dark {}, Light {}", result.dark, result.light)?;
        match result.winner {
            Some(mark) => writeln!(out, "{} wins.", Self::label(mark)),
            None => writeln!(out, "It's a tie."),
        }
    }

    /// Execute one command line and return (success, response).
    fn execute(&mut self, command: &str) -> (bool, String) {
        match command {
            "help" => (true, HELP.to_string()),

            "board" => (true, self.state.board.to_string()),

            "score" => (true, self.score_line()),

            "moves" | "hint" => {
                let moves: Vec<String> =
                    self.state.legal_moves().iter().map(|p| p.to_string()).collect();
                (true, format!("Legal moves: {}", moves.join(" ")))
            }

            "quit" | "q" => (true, "Thanks for playing!".to_string()),

            _ => {
                let pos = match command.parse::<Position>() {
                    Ok(pos) => pos,
                    Err(e) => {
                        let wordy = command.chars().skip(1).any(|c| !c.is_ascii_digit());
                        let hint = if wordy && command.chars().count() > 2 {
                            format!("unknown command '{command}'")
                        } else {
                            e.to_string()
                        };
                        return (false, format!("{hint}; try again (or 'help')"));
                    }
                };

                let mark = self.state.active;
                match self.state.play(pos) {
                    Ok(flips) => {
                        debug!(%mark, %pos, "human move");
                        (
                            true,
                            format!(
                                "{} plays {pos}, flipping {}.\n{}",
                                Self::label(mark),
                                flips.len(),
                                self.state.board
                            ),
                        )
                    }
                    Err(e) => (false, format!("{e}; try again")),
                }
            }
        }
    }
}
