//! Board engine integration tests.

use dots_and_boxes::board::{BoardState, Edge, Geometry};
use dots_and_boxes::core::{MoveError, PlayerId};

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn test_edge_and_box_counts() {
    for (rows, columns) in [(2, 2), (2, 5), (3, 3), (5, 4), (32, 16)] {
        let board = BoardState::new(rows, columns);

        assert_eq!(board.edge_count(), rows * (columns - 1) + columns * (rows - 1));
        assert_eq!(board.box_count(), (rows - 1) * (columns - 1));
        assert_eq!(board.open_move_count(), board.edge_count());
        assert!(!board.is_over());
    }
}

#[test]
fn test_every_box_has_four_distinct_edges() {
    let geometry = Geometry::new(4, 5);

    for row in 0..3 {
        for column in 0..4 {
            let id = geometry.box_at(row, column).unwrap();
            let mut edges = geometry.box_edges(id).to_vec();
            edges.sort();
            edges.dedup();
            assert_eq!(edges.len(), 4);

            for edge in edges {
                assert!(geometry.boxes_of(edge).contains(&id));
            }
        }
    }
}

#[test]
fn test_non_adjacent_dots_are_not_edges() {
    let geometry = Geometry::new(3, 3);

    assert!(geometry.edge_id(Edge::new(0, 1)).is_some());
    assert!(geometry.edge_id(Edge::new(0, 3)).is_some());
    assert!(geometry.edge_id(Edge::new(0, 4)).is_none()); // diagonal
    assert!(geometry.edge_id(Edge::new(2, 3)).is_none()); // row wrap
    assert!(geometry.edge_id(Edge::new(0, 2)).is_none());
    assert!(geometry.edge_id(Edge::new(8, 9)).is_none()); // off the board
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn test_two_by_two_scenario() {
    let mut board = BoardState::new(2, 2);
    assert_eq!(board.edge_count(), 4);
    assert_eq!(board.box_count(), 1);

    for (a, b) in [(0, 1), (0, 2), (1, 3)] {
        let outcome = board.apply_dots(a, b, PlayerId::A).unwrap();
        assert_eq!(outcome.boxes_completed(), 0);
    }
    assert_eq!(board.owner_at(0, 0), None);
    assert!(!board.is_over());

    let outcome = board.apply_dots(3, 2, PlayerId::B).unwrap();

    assert_eq!(outcome.boxes_completed(), 1);
    assert_eq!(board.owner_at(0, 0), Some(PlayerId::B));
    assert_eq!(board.score(PlayerId::B), 1);
    assert_eq!(board.score(PlayerId::A), 0);
    assert!(board.is_over());
    assert!(board.open_moves().is_empty());
}

#[test]
fn test_rejections_leave_board_untouched() {
    let mut board = BoardState::new(3, 3);
    board.apply_dots(4, 5, PlayerId::A).unwrap();
    let before = board.clone();

    assert_eq!(
        board.apply_dots(4, 5, PlayerId::B),
        Err(MoveError::AlreadyClaimed { edge: Edge::new(4, 5) })
    );
    assert_eq!(
        board.apply_dots(1, 5, PlayerId::B),
        Err(MoveError::InvalidEdge { a: 1, b: 5 })
    );
    assert_eq!(
        board.apply_dots(3, 3, PlayerId::B),
        Err(MoveError::InvalidEdge { a: 3, b: 3 })
    );

    assert_eq!(board.open_moves(), before.open_moves());
    assert_eq!(board.scores(), before.scores());
}

#[test]
fn test_shared_edge_completes_two_boxes() {
    // 2x3 dots: boxes (0,0) and (0,1) share edge 1-4.
    let mut board = BoardState::new(2, 3);
    for (a, b) in [(0, 1), (0, 3), (3, 4), (1, 2), (2, 5), (4, 5)] {
        board.apply_dots(a, b, PlayerId::A).unwrap();
    }

    let outcome = board.apply_dots(1, 4, PlayerId::B).unwrap();

    assert_eq!(outcome.boxes_completed(), 2);
    assert_eq!(board.score(PlayerId::B), 2);
    assert!(board.is_over());
}

#[test]
fn test_render_after_moves() {
    let mut board = BoardState::new(2, 2);
    for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
        board.apply_dots(a, b, PlayerId::A).unwrap();
    }

    let text = board.to_string();

    assert!(text.starts_with(" 0  -  1 \n"));
    assert!(text.contains("|  A  |"));
    assert!(text.ends_with("Player A: 1 Player B: 0"));
}
