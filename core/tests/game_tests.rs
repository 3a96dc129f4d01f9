// SPDX-License-Identifier: MIT OR Apache-2.0

use nineboard_core::{Board, Color, Coord, GameError, GameSession};

fn place(session: &mut GameSession, x: u8, y: u8) -> Vec<Coord> {
    session
        .place_stone(Coord::new(x, y))
        .expect("move should be legal")
        .expect("game should not be over")
        .captured
}

#[test]
fn opening_sequence_places_four_stones_without_captures() {
    let mut session = GameSession::new();

    // Black (4,4), White (4,5), Black (3,5), White (3,4) in row/col terms.
    assert!(place(&mut session, 4, 4).is_empty());
    assert!(place(&mut session, 5, 4).is_empty());
    assert!(place(&mut session, 5, 3).is_empty());
    assert!(place(&mut session, 4, 3).is_empty());

    assert_eq!(session.board().count_stones(Color::Black), 2);
    assert_eq!(session.board().count_stones(Color::White), 2);
    assert_eq!(session.captures(), (0, 0));
    assert_eq!(session.to_move(), Color::Black);
}

#[test]
fn completing_an_encirclement_captures_the_stone() {
    let mut session = GameSession::new();

    place(&mut session, 1, 0); // Black
    place(&mut session, 1, 1); // White, soon to be captured
    place(&mut session, 0, 1); // Black
    place(&mut session, 5, 5); // White elsewhere
    place(&mut session, 2, 1); // Black
    place(&mut session, 6, 6); // White elsewhere

    // The fourth neighbor removes the white stone.
    let captured = place(&mut session, 1, 2);
    assert_eq!(captured, vec![Coord::new(1, 1)]);

    assert_eq!(session.board().count_stones(Color::Black), 4);
    assert_eq!(session.board().count_stones(Color::White), 2);
    assert_eq!(session.board().get(Coord::new(1, 1)), None);
    assert_eq!(session.captures(), (1, 0));
}

#[test]
fn ko_recapture_is_forbidden_then_reopens() {
    let mut session = GameSession::new();

    place(&mut session, 1, 0); // B
    place(&mut session, 2, 0); // W
    place(&mut session, 0, 1); // B
    place(&mut session, 3, 1); // W
    place(&mut session, 1, 2); // B
    place(&mut session, 2, 2); // W
    place(&mut session, 7, 7); // B elsewhere
    place(&mut session, 1, 1); // W completes the mirrored shape

    // Black takes the ko.
    let captured = place(&mut session, 2, 1);
    assert_eq!(captured, vec![Coord::new(1, 1)]);

    // White's immediate recapture would repeat the position.
    assert_eq!(
        session.check_move(Coord::new(1, 1)),
        Err(GameError::KoViolation)
    );
    assert_eq!(
        session.place_stone(Coord::new(1, 1)),
        Err(GameError::KoViolation)
    );

    // After an exchange elsewhere the same recapture is legal again.
    place(&mut session, 5, 5); // W
    place(&mut session, 6, 5); // B
    let captured = place(&mut session, 1, 1);
    assert_eq!(captured, vec![Coord::new(2, 1)]);
}

#[test]
fn rejected_moves_leave_the_session_untouched() {
    let mut session = GameSession::new();
    place(&mut session, 4, 4);

    let board_before = session.board().clone();
    assert_eq!(
        session.place_stone(Coord::new(4, 4)),
        Err(GameError::OccupiedPosition)
    );

    assert_eq!(*session.board(), board_before);
    assert_eq!(session.to_move(), Color::White);
    assert_eq!(session.history_len(), 1);
}

#[test]
fn undo_restores_the_previous_ply_exactly() {
    let mut session = GameSession::new();
    session.set_opponent(false);

    place(&mut session, 4, 4); // B
    place(&mut session, 3, 3); // W

    let board = session.board().clone();
    let to_move = session.to_move();
    let passes = session.consecutive_passes();
    let ko = session.ko_memory().cloned();
    let last = session.last_move();

    place(&mut session, 5, 5); // B
    assert!(session.undo());

    assert_eq!(*session.board(), board);
    assert_eq!(session.to_move(), to_move);
    assert_eq!(session.consecutive_passes(), passes);
    assert_eq!(session.ko_memory().cloned(), ko);
    assert_eq!(session.last_move(), last);
}

#[test]
fn undo_on_a_fresh_session_is_a_noop() {
    let mut session = GameSession::new();
    assert!(!session.undo());
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.to_move(), Color::Black);
}

#[test]
fn undo_steps_over_the_opponents_reply() {
    let mut session = GameSession::new();
    assert!(session.opponent_enabled());

    place(&mut session, 4, 4); // human (Black)
    place(&mut session, 2, 2); // automated reply (White)

    assert!(session.undo());
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.to_move(), Color::Black);
    assert_eq!(session.history_len(), 0);
}

#[test]
fn undo_rolls_back_one_ply_when_opponent_disabled() {
    let mut session = GameSession::new();
    session.set_opponent(false);

    place(&mut session, 4, 4); // B
    place(&mut session, 2, 2); // W

    assert!(session.undo());
    assert_eq!(session.history_len(), 1);
    assert_eq!(session.to_move(), Color::White);
    assert_eq!(session.last_move(), Some(Coord::new(4, 4)));
}

#[test]
fn undo_restores_the_pass_counter() {
    let mut session = GameSession::new();
    session.set_opponent(false);

    place(&mut session, 4, 4); // B
    session.pass().expect("game in progress"); // W passes
    place(&mut session, 3, 3); // B

    assert!(session.undo());
    assert_eq!(session.consecutive_passes(), 1);
    assert_eq!(session.to_move(), Color::Black);
    assert_eq!(session.last_move(), None);
}

#[test]
fn two_consecutive_passes_end_and_score_the_game() {
    let mut session = GameSession::new();
    place(&mut session, 4, 4); // B

    let first = session.pass().expect("game in progress");
    assert!(first.score.is_none());
    assert_eq!(first.consecutive_passes, 1);

    let second = session.pass().expect("game in progress");
    assert_eq!(second.consecutive_passes, 2);
    let score = second.score.expect("second pass ends the game");

    // Lone black stone owns the whole board under area scoring.
    assert_eq!(score.black, 81);
    assert_eq!(score.white, 0);
    assert_eq!(score.winner(), Some(Color::Black));
    assert!(session.is_over());
}

#[test]
fn a_finished_game_ignores_further_actions() {
    let mut session = GameSession::new();
    session.pass();
    session.pass();
    assert!(session.is_over());

    assert_eq!(session.place_stone(Coord::new(0, 0)), Ok(None));
    assert!(session.pass().is_none());
    assert_eq!(session.history_len(), 2);
}

#[test]
fn undo_reopens_a_finished_game() {
    let mut session = GameSession::new();
    place(&mut session, 4, 4); // B
    session.pass(); // W
    session.pass(); // B ends the game
    assert!(session.is_over());

    assert!(session.undo());
    assert!(!session.is_over());
    assert!(session.history_len() < 3);
}

#[test]
fn undo_recounts_cumulative_captures() {
    let mut session = GameSession::new();
    session.set_opponent(false);

    place(&mut session, 1, 0); // B
    place(&mut session, 1, 1); // W
    place(&mut session, 0, 1); // B
    place(&mut session, 5, 5); // W
    place(&mut session, 2, 1); // B
    place(&mut session, 6, 6); // W
    place(&mut session, 1, 2); // B captures (1,1)
    assert_eq!(session.captures(), (1, 0));

    assert!(session.undo());
    assert_eq!(session.captures(), (0, 0));
    assert_eq!(session.board().get(Coord::new(1, 1)), Some(Color::White));
}

#[test]
fn status_reports_atari_for_the_side_to_move() {
    let mut board = Board::new();
    board.place(Coord::new(0, 0), Color::White);
    board.place(Coord::new(1, 0), Color::Black);

    // White's corner stone is down to one liberty at (0,1).
    let session = GameSession::from_position(board.clone(), Color::White);
    let status = session.status();
    assert_eq!(status.to_move, Color::White);
    assert!(status.in_atari);

    // Black's stone still has two liberties.
    let session = GameSession::from_position(board, Color::Black);
    assert!(!session.status().in_atari);
}
