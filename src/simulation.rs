//! Batch simulation of strategy-vs-strategy games.
//!
//! Each game owns its board and its own seeded RNG, so games run on a rayon
//! pool with no shared state. Results are combined with a fold/reduce instead
//! of shared counters. Game `i` always uses seed `seed + i`, which makes a run
//! reproducible regardless of how many threads execute it.

use std::fmt;

use fastrand::Rng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::board::Cell;
use crate::constants::DEFAULT_GAMES;
use crate::game::{GameResult, GameState};
use crate::strategy::{PlayerKind, Strategy};

/// Reasons a simulation cannot be configured.
#[derive(Debug)]
pub enum ConfigError {
    /// Batch mode needs a strategy on both sides
    HumanPlayer { side: Cell },
    /// A dedicated pool needs at least one thread
    ZeroThreads,
    /// The worker pool could not be created
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HumanPlayer { side } => {
                write!(f, "{side} is set to human, but simulations need a strategy on both sides")
            }
            ConfigError::ZeroThreads => write!(f, "thread count must be at least 1"),
            ConfigError::ThreadPool(e) => write!(f, "failed to build worker pool: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ThreadPool(e) => Some(e),
            _ => None,
        }
    }
}

/// Settings for one batch run. Strategy A plays Dark and moves first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub dark: Strategy,
    pub light: Strategy,
    pub games: usize,
    /// Base seed; a random one is drawn when `None`
    pub seed: Option<u64>,
    /// Dedicated pool size; rayon's global pool when `None`
    pub threads: Option<usize>,
}

impl SimulationConfig {
    pub fn new(dark: Strategy, light: Strategy) -> Self {
        Self {
            dark,
            light,
            games: DEFAULT_GAMES,
            seed: None,
            threads: None,
        }
    }

    /// Build a config from player selections, rejecting human sides.
    pub fn from_players(dark: PlayerKind, light: PlayerKind) -> Result<Self, ConfigError> {
        let dark = dark
            .strategy()
            .ok_or(ConfigError::HumanPlayer { side: Cell::Dark })?;
        let light = light
            .strategy()
            .ok_or(ConfigError::HumanPlayer { side: Cell::Light })?;
        Ok(Self::new(dark, light))
    }

    pub fn games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

/// Aggregated outcome counts. Strategy A is Dark, strategy B is Light.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub games_played: usize,
    pub wins_a: usize,
    pub wins_b: usize,
    pub ties: usize,
}

impl SimulationStats {
    /// Count one finished game.
    pub fn record(mut self, result: &GameResult) -> Self {
        self.games_played += 1;
        match result.winner {
            Some(Cell::Dark) => self.wins_a += 1,
            Some(_) => self.wins_b += 1,
            None => self.ties += 1,
        }
        self
    }

    /// Combine two partial tallies.
    pub fn merge(self, other: Self) -> Self {
        Self {
            games_played: self.games_played + other.games_played,
            wins_a: self.wins_a + other.wins_a,
            wins_b: self.wins_b + other.wins_b,
            ties: self.ties + other.ties,
        }
    }

    fn percent(&self, count: usize) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.games_played as f64
        }
    }

    /// Percentage of games won by strategy A.
    pub fn rate_a(&self) -> f64 {
        self.percent(self.wins_a)
    }

    /// Percentage of games won by strategy B.
    pub fn rate_b(&self) -> f64 {
        self.percent(self.wins_b)
    }

    pub fn tie_rate(&self) -> f64 {
        self.percent(self.ties)
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games played: {}", self.games_played)?;
        writeln!(f, "Strategy A wins: {} ({:.2}%)", self.wins_a, self.rate_a())?;
        writeln!(f, "Strategy B wins: {} ({:.2}%)", self.wins_b, self.rate_b())?;
        write!(f, "Ties: {} ({:.2}%)", self.ties, self.tie_rate())
    }
}

/// Play one fresh game between the configured strategies.
pub fn simulate_game(dark: Strategy, light: Strategy, seed: u64) -> GameResult {
    let mut rng = Rng::with_seed(seed);
    GameState::new().play_out(dark, light, &mut rng)
}

/// Run every configured game and tally the results.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationStats, ConfigError> {
    let base_seed = config.seed.unwrap_or_else(|| fastrand::u64(..));
    info!(
        dark = %config.dark,
        light = %config.light,
        games = config.games,
        seed = base_seed,
        "starting simulation"
    );

    let run = || {
        (0..config.games)
            .into_par_iter()
            .map(|i| {
                let seed = base_seed.wrapping_add(i as u64);
                let result = simulate_game(config.dark, config.light, seed);
                debug!(game = i, dark = result.dark, light = result.light, "game done");
                result
            })
            .fold(SimulationStats::default, |stats, result| stats.record(&result))
            .reduce(SimulationStats::default, SimulationStats::merge)
    };

    let stats = match config.threads {
        Some(0) => return Err(ConfigError::ZeroThreads),
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .map_err(ConfigError::ThreadPool)?
            .install(run),
        None => run(),
    };

    info!(
        wins_a = stats.wins_a,
        wins_b = stats.wins_b,
        ties = stats.ties,
        "simulation finished"
    );
    Ok(stats)
}
