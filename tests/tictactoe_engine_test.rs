//! Behavioural tests for the rules and the minimax engine.

use strictly_minimax::{
    Board, Mark, Minimax, Outcome, Position, Score, Square, available_moves, choose_best_move,
    evaluate, has_won, is_full, outcome,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

/// Every assignment of {empty, X, O} to the nine cells.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut b = Board::new();
        for pos in Position::ALL {
            let square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Mark::Player),
                _ => Square::Occupied(Mark::Ai),
            };
            b.set(pos, square);
            code /= 3;
        }
        b
    })
}

fn owns_line(b: &Board, mark: Mark) -> bool {
    let owns = |r: usize, c: usize| {
        b.get(Position::from_coords(r, c).unwrap()) == Square::Occupied(mark)
    };
    (0..3).any(|r| (0..3).all(|c| owns(r, c)))
        || (0..3).any(|c| (0..3).all(|r| owns(r, c)))
        || (0..3).all(|i| owns(i, i))
        || (0..3).all(|i| owns(i, 2 - i))
}

#[test]
fn test_has_won_matches_line_definition_on_every_board() {
    for b in all_boards() {
        for mark in [Mark::Player, Mark::Ai] {
            assert_eq!(has_won(&b, mark), owns_line(&b, mark), "board {}", b);
        }
    }
}

#[test]
fn test_is_full_iff_no_available_moves() {
    for b in all_boards() {
        assert_eq!(is_full(&b), available_moves(&b).is_empty(), "board {}", b);
    }
}

#[test]
fn test_immediate_win_is_taken() {
    let mut b = board("OO./.X./..X");
    assert_eq!(choose_best_move(&mut b), Some(Position::from_coords(0, 2).unwrap()));
}

#[test]
fn test_threat_is_blocked() {
    let mut b = board("XX./.O./...");
    assert_eq!(choose_best_move(&mut b), Some(Position::from_coords(0, 2).unwrap()));
}

#[test]
fn test_ties_keep_first_cell_in_row_major_order() {
    // Every reply to a centre opening draws except edges, which lose;
    // the first drawing reply is the top-left corner.
    let mut b = board(".../.X./...");
    let engine = Minimax::default();
    let scored = engine.score_moves(&mut b);
    let best = scored.iter().map(|(_, s)| *s).max().unwrap();
    let first_best = scored.iter().find(|(_, s)| *s == best).unwrap().0;
    assert_eq!(choose_best_move(&mut b), Some(first_best));
    assert_eq!(first_best, Position::TopLeft);
}

#[test]
fn test_terminal_evaluation_is_idempotent() {
    let terminal: Vec<Board> = all_boards()
        .filter(|b| b.is_turn_consistent() && outcome(b).is_terminal())
        .take(500)
        .collect();
    assert!(!terminal.is_empty());

    for mut b in terminal {
        let first = evaluate(&mut b, true);
        assert!([-1, 0, 1].contains(&first.value()));
        assert_eq!(evaluate(&mut b, true), first);
        assert_eq!(evaluate(&mut b, false), first);
    }
}

/// Plays both sides with perfect engines from `b`, `to_move` first.
fn play_out(mut b: Board, mut to_move: Mark) -> Outcome {
    loop {
        let result = outcome(&b);
        if result.is_terminal() {
            return result;
        }
        let pos = Minimax::new(to_move)
            .choose_best_move(&mut b)
            .expect("non-terminal board has a move");
        b.set(pos, Square::Occupied(to_move));
        to_move = to_move.opponent();
    }
}

#[test]
fn test_perfect_play_from_empty_board_is_a_draw() {
    assert_eq!(play_out(Board::new(), Mark::Player), Outcome::Draw);
    assert_eq!(play_out(Board::new(), Mark::Ai), Outcome::Draw);
}

#[test]
fn test_computer_opening_never_loses() {
    let mut b = Board::new();
    let opening = choose_best_move(&mut b).unwrap();
    assert!(matches!(
        opening,
        Position::TopLeft
            | Position::TopRight
            | Position::Center
            | Position::BottomLeft
            | Position::BottomRight
    ));

    b.set(opening, Square::Occupied(Mark::Ai));
    assert_ne!(play_out(b, Mark::Player), Outcome::PlayerWin);
}

/// Tries every human reply at every turn; returns false if any line loses.
fn survives_every_human_line(b: &mut Board) -> bool {
    if outcome(b).is_terminal() {
        return outcome(b) != Outcome::PlayerWin;
    }
    for pos in available_moves(b) {
        b.set(pos, Square::Occupied(Mark::Player));
        let ok = match outcome(b) {
            Outcome::PlayerWin => false,
            Outcome::Draw => true,
            _ => {
                let reply = choose_best_move(b).unwrap();
                b.set(reply, Square::Occupied(Mark::Ai));
                let ok = survives_every_human_line(b);
                b.clear(reply);
                ok
            }
        };
        b.clear(pos);
        if !ok {
            return false;
        }
    }
    true
}

#[test]
fn test_computer_never_loses_when_human_moves_first() {
    let mut b = Board::new();
    assert!(survives_every_human_line(&mut b));
    assert_eq!(b, Board::new());
}

#[test]
fn test_score_reflects_forced_results() {
    // O to move and wins on the spot.
    assert_eq!(evaluate(&mut board("XX./OO./X.."), true), Score::Win);
    // X threatens cells 3 and 8 at once; O cannot block both.
    assert_eq!(evaluate(&mut board("XX./OX./..O"), true), Score::Loss);
}
