//! Integration tests for the reversegam engine.
//!
//! Most of these walk through many randomly played games (seeded, so they are
//! reproducible) and check rule invariants on every position reached.

use fastrand::Rng;

use reversegam::board::{Board, Cell};
use reversegam::constants::CELLS;
use reversegam::game::{GameState, GameStatus};
use reversegam::position::Position;
use reversegam::rules::{apply, is_legal, is_legal_and_flips, legal_moves};
use reversegam::strategy::Strategy;

// =============================================================================
// Helper functions
// =============================================================================

fn at(s: &str) -> Position {
    s.parse().unwrap()
}

/// Play a sequence of moves from the start, alternating Dark and Light and
/// passing automatically when the side to move is stuck.
fn setup_game(moves: &[&str]) -> GameState {
    let mut game = GameState::new();
    for mv in moves {
        if game.legal_moves().is_empty() {
            game.pass().unwrap();
        }
        game.play(at(mv)).unwrap();
    }
    game
}

/// Visit every position reached in `games` random self-play games.
fn for_each_position(games: u64, mut visit: impl FnMut(&GameState)) {
    for seed in 0..games {
        let mut rng = Rng::with_seed(seed);
        let mut game = GameState::new();
        while !game.is_over() {
            visit(&game);
            game.advance(Strategy::Random, &mut rng);
        }
        visit(&game);
    }
}

// =============================================================================
// Opening fixtures
// =============================================================================

#[test]
fn test_opening_moves_for_dark() {
    let moves = legal_moves(&Board::new(), Cell::Dark);
    let names: Vec<String> = moves.iter().map(|p| p.to_string()).collect();
    assert_eq!(names, ["d3", "c4", "f5", "e6"]);
}

#[test]
fn test_known_opening_sequence() {
    // Parallel opening: d3 c5 e6 (Dark), with Light answering in between.
    let game = setup_game(&["d3", "c5", "e6"]);
    assert_eq!(game.active, Cell::Light);
    assert_eq!(game.moves_played, 3);
    let (dark, light) = game.scores();
    assert_eq!(dark + light, 7);
    assert_eq!(game.board.get(at("d3")), Cell::Dark);
    assert_eq!(game.board.get(at("c5")), Cell::Light);
    assert_eq!(game.board.get(at("e6")), Cell::Dark);
}

#[test]
fn test_coordinate_roundtrip_all_cells() {
    for pos in Position::all() {
        let parsed: Position = pos.to_string().parse().unwrap();
        assert_eq!(parsed, pos);
    }
}

// =============================================================================
// Rule invariants over random play
// =============================================================================

#[test]
fn test_legal_moves_are_empty_and_capture() {
    for_each_position(30, |game| {
        for pos in game.legal_moves() {
            assert_eq!(game.board.get(pos), Cell::Empty, "{pos} is occupied");
            let result = is_legal_and_flips(&game.board, game.active, pos);
            assert!(result.legal, "{pos} listed but not legal");
            assert!(!result.flips.is_empty());
        }
    });
}

#[test]
fn test_legal_moves_are_complete() {
    for_each_position(10, |game| {
        let listed = game.legal_moves();
        for pos in Position::all() {
            assert_eq!(
                listed.contains(&pos),
                is_legal_and_flips(&game.board, game.active, pos).legal,
                "legal_moves disagrees at {pos}"
            );
            assert_eq!(
                is_legal(&game.board, game.active, pos),
                is_legal_and_flips(&game.board, game.active, pos).legal
            );
        }
    });
}

#[test]
fn test_apply_changes_exactly_the_flips() {
    for_each_position(30, |game| {
        let mark = game.active;
        for pos in game.legal_moves() {
            let result = is_legal_and_flips(&game.board, mark, pos);
            let mut after = game.board;
            let flips = apply(&mut after, mark, pos);
            assert_eq!(flips, result.flips);

            for p in Position::all() {
                let expected = if p == pos || flips.contains(&p) {
                    mark
                } else {
                    game.board.get(p)
                };
                assert_eq!(after.get(p), expected, "unexpected change at {p}");
            }

            let before_mine = game.board.count(mark);
            let before_empty = game.board.empty_count();
            assert!(after.count(mark) > before_mine);
            assert_eq!(after.count(mark), before_mine + 1 + flips.len());
            assert_eq!(after.empty_count(), before_empty - 1);
        }
    });
}

#[test]
fn test_cell_total_is_constant() {
    for_each_position(30, |game| {
        let b = &game.board;
        assert_eq!(
            b.count(Cell::Dark) + b.count(Cell::Light) + b.count(Cell::Empty),
            CELLS
        );
    });
}

#[test]
fn test_passes_never_exceed_two() {
    for_each_position(30, |game| {
        assert!(game.passes <= 2);
        if game.board.is_full() {
            assert_eq!(game.status(), GameStatus::Terminal);
        }
    });
}

#[test]
fn test_terminal_means_nobody_can_move() {
    for seed in 0..30 {
        let mut rng = Rng::with_seed(seed);
        let mut game = GameState::new();
        game.play_out(Strategy::Random, Strategy::Random, &mut rng);
        assert!(legal_moves(&game.board, Cell::Dark).is_empty());
        assert!(legal_moves(&game.board, Cell::Light).is_empty());
    }
}

// =============================================================================
// Strategy behaviour
// =============================================================================

#[test]
fn test_best_score_is_deterministic() {
    for_each_position(10, |game| {
        let legal = game.legal_moves();
        if legal.is_empty() {
            return;
        }
        let mark = game.active;
        let first = Strategy::BestScore.select(mark, &legal, &game.board, &mut Rng::with_seed(1));
        let second = Strategy::BestScore.select(mark, &legal, &game.board, &mut Rng::with_seed(2));
        assert_eq!(first, second);
    });
}

#[test]
fn test_best_score_maximizes_own_count() {
    for_each_position(10, |game| {
        let legal = game.legal_moves();
        if legal.is_empty() {
            return;
        }
        let mark = game.active;
        let count_after = |pos| {
            let mut b = game.board;
            apply(&mut b, mark, pos);
            b.count(mark)
        };
        let best = Strategy::BestScore.select(mark, &legal, &game.board, &mut Rng::with_seed(0));
        let worst = Strategy::WorstScore.select(mark, &legal, &game.board, &mut Rng::with_seed(0));
        let max = legal.iter().map(|&p| count_after(p)).max().unwrap();
        let min = legal.iter().map(|&p| count_after(p)).min().unwrap();
        assert_eq!(count_after(best), max);
        assert_eq!(count_after(worst), min);
    });
}

#[test]
fn test_corner_first_takes_available_corner() {
    for_each_position(40, |game| {
        let legal = game.legal_moves();
        let corners: Vec<Position> = ["a1", "h1", "a8", "h8"]
            .iter()
            .map(|s| at(s))
            .filter(|c| legal.contains(c))
            .collect();
        if let Some(&first) = corners.first() {
            let mut rng = Rng::with_seed(0);
            let pick = Strategy::CornerFirst.select(game.active, &legal, &game.board, &mut rng);
            assert_eq!(pick, first);
        }
    });
}
