//! Reversegam: an Othello-style board game with computer strategies.
//!
//! ## Usage
//!
//! - `reversegam play` - Play against the computer in the terminal
//! - `reversegam watch` - Watch two strategies play one game
//! - `reversegam simulate` - Pit two strategies against each other many times
//! - `reversegam strategies` - List the available strategies

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use reversegam::board::Cell;
use reversegam::constants::DEFAULT_GAMES;
use reversegam::session::Session;
use reversegam::simulation::{SimulationConfig, run_simulation};
use reversegam::strategy::{PlayerKind, Strategy};

/// Reversegam: an Othello-style board game engine
#[derive(Parser)]
#[command(name = "reversegam")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log engine activity to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Mark {
    Dark,
    Light,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer
    Play {
        /// Your mark; Dark moves first
        #[arg(short, long, value_enum, default_value = "dark")]
        mark: Mark,
        /// Strategy the computer uses
        #[arg(short, long, default_value = "best-score")]
        opponent: Strategy,
    },
    /// Watch a single game; either side may be `human`
    Watch {
        #[arg(long, default_value = "corner-first")]
        dark: PlayerKind,
        #[arg(long, default_value = "best-score")]
        light: PlayerKind,
        /// Seed for random choices
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run many games between two strategies and report win rates
    Simulate {
        /// Strategy A (plays Dark)
        #[arg(long)]
        dark: PlayerKind,
        /// Strategy B (plays Light)
        #[arg(long)]
        light: PlayerKind,
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = DEFAULT_GAMES)]
        games: usize,
        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Worker threads (defaults to available parallelism)
        #[arg(short, long)]
        threads: Option<usize>,
    },
    /// List the available strategies
    Strategies,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Play { mark, opponent }) => {
            let computer = PlayerKind::Computer(opponent);
            let (dark, light) = match mark {
                Mark::Dark => (PlayerKind::Human, computer),
                Mark::Light => (computer, PlayerKind::Human),
            };
            run_session(dark, light, None)
        }
        Some(Commands::Watch { dark, light, seed }) => run_session(dark, light, seed),
        Some(Commands::Simulate {
            dark,
            light,
            games,
            seed,
            threads,
        }) => {
            let mut config = SimulationConfig::from_players(dark, light)?.games(games);
            if let Some(seed) = seed {
                config = config.seed(seed);
            }
            if let Some(threads) = threads {
                config = config.threads(threads);
            }
            simulate(&config)
        }
        Some(Commands::Strategies) | None => {
            list_strategies();
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "reversegam=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_session(dark: PlayerKind, light: PlayerKind, seed: Option<u64>) -> Result<()> {
    let rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    let mut session = Session::new(dark, light, rng);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout)
        .context("interactive session failed")?;
    Ok(())
}

fn simulate(config: &SimulationConfig) -> Result<()> {
    println!("R E V E R S E G A M : AI SIMULATION\n");
    println!("Strategy A ({}): {}", Cell::Dark, config.dark);
    println!("Strategy B ({}): {}", Cell::Light, config.light);
    println!("Running {} games...\n", config.games);

    let stats = run_simulation(config).context("simulation failed")?;
    println!("{stats}");
    Ok(())
}

fn list_strategies() {
    println!("Available strategies:\n");
    for strategy in Strategy::ALL {
        println!(
            "{}. {:<13} {}",
            strategy.number(),
            strategy.name(),
            strategy.description()
        );
    }
    println!("\nUse `human` for a side controlled from the terminal.");
}
