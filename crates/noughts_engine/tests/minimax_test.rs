//! Perfect-play search: optimality, tie-break and pruning equivalence.

mod common;

use common::reachable_boards;
use noughts_engine::{
    Board, Cell, GameOutcome, LOSS_SCORE, Mark, Position, WIN_SCORE, apply_move, best_move,
    evaluate, minimax_score, random_move, score_moves,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

/// Plays `ai` with `best_move` against `opponent` until the game ends.
fn play_out(
    first: Mark,
    ai: Mark,
    mut opponent: impl FnMut(&Board) -> Position,
) -> GameOutcome {
    let mut board = Board::new();
    let mut to_move = first;
    loop {
        let pos = if to_move == ai {
            best_move(&board, ai, ai.opponent()).expect("open board has a move")
        } else {
            opponent(&board)
        };
        board = apply_move(&board, pos, to_move).expect("legal move");
        let outcome = evaluate(&board);
        if outcome.is_terminal() {
            return outcome;
        }
        to_move = to_move.opponent();
    }
}

#[test]
fn test_self_play_always_draws() {
    for first in [Mark::X, Mark::O] {
        let mut board = Board::new();
        let mut to_move = first;
        let outcome = loop {
            let pos = best_move(&board, to_move, to_move.opponent()).unwrap();
            board = apply_move(&board, pos, to_move).unwrap();
            let outcome = evaluate(&board);
            if outcome.is_terminal() {
                break outcome;
            }
            to_move = to_move.opponent();
        };
        assert_eq!(outcome, GameOutcome::Draw, "first mover {first}");
    }
}

#[test]
fn test_never_loses_to_random_play() {
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        for game in 0..50 {
            let first = if game % 2 == 0 { Mark::X } else { Mark::O };
            let outcome = play_out(first, Mark::O, |b| random_move(b, &mut rng).unwrap());
            assert_ne!(outcome.winner(), Some(Mark::X), "seed {seed} game {game}");
        }
    }
}

/// Walks every line of play the opponent can choose against `best_move`.
fn assert_never_loses(board: Board, to_move: Mark, ai: Mark) {
    match evaluate(&board) {
        GameOutcome::Win { mark, .. } => {
            assert_eq!(mark, ai, "lost on\n{}", board.display());
            return;
        }
        GameOutcome::Draw => return,
        GameOutcome::InProgress => {}
    }

    if to_move == ai {
        let pos = best_move(&board, ai, ai.opponent()).unwrap();
        let next = apply_move(&board, pos, ai).unwrap();
        assert_never_loses(next, to_move.opponent(), ai);
    } else {
        for pos in board.empty_positions().collect::<Vec<_>>() {
            let next = apply_move(&board, pos, to_move).unwrap();
            assert_never_loses(next, to_move.opponent(), ai);
        }
    }
}

#[test]
fn test_never_loses_to_any_opponent() {
    for first in [Mark::X, Mark::O] {
        for ai in [Mark::X, Mark::O] {
            assert_never_loses(Board::new(), first, ai);
        }
    }
}

#[test]
fn test_lowest_index_among_immediate_wins() {
    // O completes row [3,4,5] at 5 or column [1,4,7] at 7.
    let b = board("XO.|OO.|X.X");
    assert_eq!(best_move(&b, Mark::O, Mark::X), Ok(Position::MiddleRight));
}

#[test]
fn test_table_derived_reply_to_row_threat() {
    // X threatens 2 on the top row; O could win outright at 5, but blocking
    // at 2 also forces a win (double threat on 5 and 6). Without depth
    // discount both score +10 and the lower index is played.
    let b = board("XX.|OO.|...");
    let scores = score_moves(&b, Mark::O, Mark::X);
    assert_eq!(scores[0], (Position::TopRight, WIN_SCORE));
    assert!(scores.contains(&(Position::MiddleRight, WIN_SCORE)));
    assert_eq!(best_move(&b, Mark::O, Mark::X), Ok(Position::TopRight));
}

#[test]
fn test_never_allows_win_on_next_ply() {
    for first in [Mark::X, Mark::O] {
        for (board, ai) in reachable_boards(first) {
            if evaluate(&board).is_terminal() {
                continue;
            }
            // In a lost position every move scores the same, so nothing is promised.
            let scores = score_moves(&board, ai, ai.opponent());
            if scores.iter().all(|(_, score)| *score == LOSS_SCORE) {
                continue;
            }

            let pos = best_move(&board, ai, ai.opponent()).unwrap();
            let after = apply_move(&board, pos, ai).unwrap();
            if evaluate(&after).is_terminal() {
                continue;
            }
            for reply in after.empty_positions() {
                let mut threat = after;
                threat.set(reply, Cell::Occupied(ai.opponent()));
                assert_ne!(
                    evaluate(&threat).winner(),
                    Some(ai.opponent()),
                    "move {pos} on\n{}",
                    board.display()
                );
            }
        }
    }
}

#[test]
fn test_reply_to_center_is_deterministic() {
    let b = apply_move(&Board::new(), Position::Center, Mark::X).unwrap();
    let first = best_move(&b, Mark::O, Mark::X).unwrap();
    for _ in 0..10 {
        assert_eq!(best_move(&b, Mark::O, Mark::X), Ok(first));
    }
    // A corner draws; an edge loses. The lowest drawing index is the top-left corner.
    assert_eq!(first, Position::TopLeft);
    let scores = score_moves(&b, Mark::O, Mark::X);
    assert!(scores.contains(&(Position::TopCenter, LOSS_SCORE)));
}

#[test]
fn test_pruned_search_matches_plain_search() {
    for first in [Mark::X, Mark::O] {
        for (board, ai) in reachable_boards(first) {
            if board.is_full() {
                continue;
            }
            let human = ai.opponent();
            let scores = score_moves(&board, ai, human);

            let mut expected_best: Option<(Position, i32)> = None;
            for (pos, score) in &scores {
                let mut child = board;
                child.set(*pos, Cell::Occupied(ai));
                assert_eq!(*score, minimax_score(&child, ai, human, false));
                if expected_best.is_none_or(|(_, top)| *score > top) {
                    expected_best = Some((*pos, *score));
                }
            }

            let (expected, _) = expected_best.expect("open board has a move");
            assert_eq!(best_move(&board, ai, human), Ok(expected));
        }
    }
}
