// SPDX-License-Identifier: MIT OR Apache-2.0

use nineboard_core::{board::Board, scoring, Color, Coord};

fn board_with(stones: &[(u8, u8, Color)]) -> Board {
    let mut board = Board::new();
    for &(x, y, color) in stones {
        assert!(board.place(Coord::new(x, y), color), "bad fixture at ({x},{y})");
    }
    board
}

#[test]
fn empty_board_scores_nothing() {
    let score = scoring::score_board(&Board::new());

    // The single empty region borders neither color and stays neutral.
    assert_eq!(score.black, 0);
    assert_eq!(score.white, 0);
    assert!(score.territory.is_empty());
    assert_eq!(score.winner(), None);
}

#[test]
fn enclosed_point_counts_for_the_enclosing_color() {
    // Black ring around (1,1); white stones far away so the outside
    // region touches both colors and stays neutral.
    let board = board_with(&[
        (0, 0, Color::Black),
        (1, 0, Color::Black),
        (2, 0, Color::Black),
        (0, 1, Color::Black),
        (2, 1, Color::Black),
        (0, 2, Color::Black),
        (1, 2, Color::Black),
        (2, 2, Color::Black),
        (6, 6, Color::White),
        (6, 7, Color::White),
    ]);

    let score = scoring::score_board(&board);

    // 8 stones + 1 territory point for Black, 2 stones for White.
    assert_eq!(score.black, 9);
    assert_eq!(score.white, 2);
    assert_eq!(score.territory, vec![(Coord::new(1, 1), Color::Black)]);
    assert_eq!(score.winner(), Some(Color::Black));
}

#[test]
fn region_touching_both_colors_is_neutral() {
    let board = board_with(&[(0, 0, Color::Black), (8, 8, Color::White)]);

    let score = scoring::score_board(&board);
    assert_eq!(score.black, 1);
    assert_eq!(score.white, 1);
    assert!(score.territory.is_empty());
    assert_eq!(score.winner(), None);
}

#[test]
fn parallel_walls_split_the_board_evenly() {
    // A full black wall on column 3 and a white wall on column 5; the
    // column between them touches both and is neutral.
    let mut stones = Vec::new();
    for y in 0..9 {
        stones.push((3, y, Color::Black));
        stones.push((5, y, Color::White));
    }
    let board = board_with(&stones);

    let score = scoring::score_board(&board);
    assert_eq!(score.black, 9 + 27);
    assert_eq!(score.white, 9 + 27);
    assert_eq!(score.winner(), None);

    assert_eq!(score.territory.len(), 54);
    assert!(score.territory.contains(&(Coord::new(0, 0), Color::Black)));
    assert!(score.territory.contains(&(Coord::new(8, 8), Color::White)));
    assert!(!score.territory.iter().any(|(c, _)| c.x == 4));
}

#[test]
fn strictly_higher_total_wins() {
    // Black ring around (1,1) plus a lone white stone: 9 vs 1.
    let board = board_with(&[
        (0, 0, Color::Black),
        (1, 0, Color::Black),
        (2, 0, Color::Black),
        (0, 1, Color::Black),
        (2, 1, Color::Black),
        (0, 2, Color::Black),
        (1, 2, Color::Black),
        (2, 2, Color::Black),
        (7, 7, Color::White),
    ]);

    let score = scoring::score_board(&board);
    assert_eq!(score.black, 9);
    assert_eq!(score.white, 1);
    assert_eq!(score.winner(), Some(Color::Black));
}
