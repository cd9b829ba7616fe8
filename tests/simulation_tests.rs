//! Tests for the batch harness and the interactive session.

use std::io::Cursor;

use fastrand::Rng;

use reversegam::board::Cell;
use reversegam::simulation::{SimulationConfig, SimulationStats, run_simulation, simulate_game};
use reversegam::session::Session;
use reversegam::strategy::{PlayerKind, Strategy};

// =============================================================================
// Simulation harness
// =============================================================================

#[test]
fn test_every_pairing_accounts_for_all_games() {
    for dark in Strategy::ALL {
        for light in Strategy::ALL {
            let config = SimulationConfig::new(dark, light).games(4).seed(17);
            let stats = run_simulation(&config).unwrap();
            assert_eq!(stats.games_played, 4, "{dark} vs {light}");
            assert_eq!(stats.wins_a + stats.wins_b + stats.ties, 4, "{dark} vs {light}");
        }
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = SimulationConfig::new(Strategy::Random, Strategy::Random)
        .games(40)
        .seed(12345);
    assert_eq!(run_simulation(&config).unwrap(), run_simulation(&config).unwrap());
}

#[test]
fn test_thread_count_does_not_change_results() {
    let base = SimulationConfig::new(Strategy::SideFirst, Strategy::Random)
        .games(24)
        .seed(8);
    let single = run_simulation(&base.clone().threads(1)).unwrap();
    let several = run_simulation(&base.threads(4)).unwrap();
    assert_eq!(single, several);
}

#[test]
fn test_stats_match_individual_games() {
    let seed = 500;
    let games = 10;
    let expected = (0..games).fold(SimulationStats::default(), |stats, i| {
        stats.record(&simulate_game(Strategy::CornerFirst, Strategy::Random, seed + i))
    });
    let config = SimulationConfig::new(Strategy::CornerFirst, Strategy::Random)
        .games(games as usize)
        .seed(seed);
    assert_eq!(run_simulation(&config).unwrap(), expected);
}

#[test]
fn test_deterministic_pairing_repeats_one_outcome() {
    // No randomness on either side: every game is the same game.
    let config = SimulationConfig::new(Strategy::BestScore, Strategy::WorstScore).games(6);
    let stats = run_simulation(&config).unwrap();
    assert!(
        stats.wins_a == 6 || stats.wins_b == 6 || stats.ties == 6,
        "expected identical outcomes, got {stats:?}"
    );
}

// =============================================================================
// Interactive session
// =============================================================================

fn run_session(dark: PlayerKind, light: PlayerKind, input: &str) -> (Option<Cell>, bool, String) {
    let mut session = Session::new(dark, light, Rng::with_seed(3));
    let mut out = Vec::new();
    let result = session.run(Cursor::new(input.to_string()), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    (result.and_then(|r| r.winner), result.is_some(), text)
}

#[test]
fn test_watch_mode_plays_to_the_end() {
    let (_, finished, text) = run_session(
        PlayerKind::Computer(Strategy::CornerFirst),
        PlayerKind::Computer(Strategy::Random),
        "",
    );
    assert!(finished);
    assert!(text.contains("Dark (X) plays"));
    assert!(text.contains("Light (O) plays"));
    assert!(text.contains("GAME OVER!"));
}

#[test]
fn test_human_input_is_reprompted() {
    let (_, finished, text) = run_session(
        PlayerKind::Human,
        PlayerKind::Computer(Strategy::BestScore),
        "hello\nz1\na1\nd3\nquit\n",
    );
    assert!(!finished);
    assert!(text.contains("? unknown command 'hello'"));
    assert!(text.contains("? column 'z' is not a letter a-h"));
    assert!(text.contains("? illegal move: a1 does not flip any tiles"));
    assert!(text.contains("Dark (X) plays d3, flipping 1."));
    assert!(text.contains("Light (O) plays"));
    assert!(text.contains("Thanks for playing!"));
}

#[test]
fn test_human_as_light_waits_for_computer() {
    let (_, finished, text) = run_session(
        PlayerKind::Computer(Strategy::BestScore),
        PlayerKind::Human,
        "moves\n",
    );
    assert!(!finished);
    // best-score ties on the first move resolve to the first candidate, d3.
    assert!(text.contains("Dark (X) plays d3, flipping 1."));
    assert!(text.contains("Light (O) to move"));
    assert!(text.contains("Legal moves: c3 e3 c5"));
}

#[test]
fn test_end_of_input_stops_cleanly() {
    let (_, finished, text) = run_session(PlayerKind::Human, PlayerKind::Human, "d3\n");
    assert!(!finished);
    assert!(text.contains("Light (O) to move"));
}
