//! Movement rules, castling, promotion and clock bookkeeping.

use super::{play_line, sq};
use crate::board::{Color, Piece, PieceKind, Position, PositionBuilder};

#[test]
fn test_reset_is_idempotent() {
    let mut position = play_line(Position::new(), &["e2e4", "e7e5"]);
    position.reset();
    let once = position;
    position.reset();
    assert_eq!(position, once);
    assert_eq!(once, Position::new());
}

#[test]
fn test_all_pieces_in_board_order() {
    let position = Position::new();
    let views: Vec<_> = position.all_pieces().collect();
    assert_eq!(views.len(), 32);
    assert_eq!((views[0].col, views[0].row), (0, 0));
    assert_eq!(views[0].kind, PieceKind::Rook);
    assert_eq!((views[31].col, views[31].row), (7, 7));
    assert!(views.windows(2).all(|w| w[0].square() < w[1].square()));
}

#[test]
fn test_self_capture_and_null_move_rejected() {
    let position = Position::new();
    assert!(!position.is_legal_move(sq("a1"), sq("a2")));
    assert!(!position.is_legal_move(sq("e2"), sq("e2")));
    assert!(!position.is_legal_move(sq("e4"), sq("e5")));
}

#[test]
fn test_pawn_double_push_needs_clear_path() {
    let position = PositionBuilder::starting_position()
        .piece(sq("e3"), Color::Black, PieceKind::Knight)
        .build();
    assert!(!position.is_legal_move(sq("e2"), sq("e3")));
    assert!(!position.is_legal_move(sq("e2"), sq("e4")));
    assert!(position.is_legal_move(sq("d2"), sq("e3")));
    assert!(position.is_legal_move(sq("f2"), sq("e3")));
}

#[test]
fn test_pawn_cannot_capture_forward() {
    let position = Position::from_fen("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1");
    assert!(position.valid_moves(sq("e3")).is_empty());
}

#[test]
fn test_pawn_double_push_only_from_home_row() {
    let position = Position::from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1");
    assert_eq!(position.valid_moves(sq("e3")), vec![sq("e4")]);
}

#[test]
fn test_no_en_passant() {
    let position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    assert!(!position.is_legal_move(sq("e5"), sq("d6")));
    assert_eq!(position.valid_moves(sq("e5")), vec![sq("e6")]);
}

#[test]
fn test_sliders_blocked() {
    let position = Position::new();
    assert!(position.valid_moves(sq("a1")).is_empty());
    assert!(position.valid_moves(sq("c1")).is_empty());
    assert!(position.valid_moves(sq("d1")).is_empty());
}

#[test]
fn test_pinned_piece_cannot_move() {
    let position = Position::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
    assert!(position.is_pattern_valid(sq("e2"), sq("d3")));
    assert!(position.valid_moves(sq("e2")).is_empty());
}

#[test]
fn test_king_avoids_attacked_squares() {
    let position = Position::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1");
    assert_eq!(position.valid_moves(sq("e1")), vec![sq("f1"), sq("d2")]);
}

#[test]
fn test_kingside_castling() {
    let position = PositionBuilder::starting_position()
        .clear(sq("f1"))
        .clear(sq("g1"))
        .build();
    assert!(position.is_legal_move(sq("e1"), sq("g1")));

    let next = position.play(sq("e1"), sq("g1")).unwrap();
    assert!(next.piece_on(sq("g1")).is(Color::White, PieceKind::King));
    assert!(next.piece_on(sq("f1")).is(Color::White, PieceKind::Rook));
    assert!(next.is_empty(sq("h1")));
    assert!(next.is_empty(sq("e1")));
    assert!(!next.castling_rights().has(Color::White, true));
    assert!(!next.castling_rights().has(Color::White, false));
    assert!(next.castling_rights().has(Color::Black, true));
}

#[test]
fn test_queenside_castling() {
    let position = Position::from_fen("r3k3/8/8/8/8/8/8/4K3 b q - 0 1");
    let next = position.play(sq("e8"), sq("c8")).unwrap();
    assert!(next.piece_on(sq("c8")).is(Color::Black, PieceKind::King));
    assert!(next.piece_on(sq("d8")).is(Color::Black, PieceKind::Rook));
    assert!(next.is_empty(sq("a8")));
    assert!(next.castling_rights().is_empty());
}

#[test]
fn test_castling_requires_right() {
    let position = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 0 1");
    assert!(!position.is_legal_move(sq("e1"), sq("g1")));
    let position = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(position.is_legal_move(sq("e1"), sq("g1")));
}

#[test]
fn test_castling_requires_rook_on_corner() {
    let position = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w K - 0 1");
    assert!(!position.is_legal_move(sq("e1"), sq("g1")));
}

#[test]
fn test_no_castling_out_of_or_through_check() {
    let in_check = Position::from_fen("4k3/8/8/8/8/8/8/r3K2R w K - 0 1");
    assert!(!in_check.is_legal_move(sq("e1"), sq("g1")));

    let through = Position::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(!through.is_legal_move(sq("e1"), sq("g1")));

    let into = Position::from_fen("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(!into.is_legal_move(sq("e1"), sq("g1")));
}

#[test]
fn test_queenside_b_file_may_be_attacked() {
    let position = Position::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(position.is_legal_move(sq("e1"), sq("c1")));

    let blocked = Position::from_fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
    assert!(!blocked.is_legal_move(sq("e1"), sq("c1")));
}

#[test]
fn test_king_move_clears_both_rights() {
    let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let next = position.play(sq("e1"), sq("e2")).unwrap();
    assert_eq!(next.castling_rights().to_string(), "kq");
}

#[test]
fn test_rook_move_clears_one_right() {
    let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let next = position.play(sq("h1"), sq("h4")).unwrap();
    assert_eq!(next.castling_rights().to_string(), "Qkq");
}

#[test]
fn test_capturing_corner_rook_clears_its_right() {
    let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let next = position.play(sq("a1"), sq("a8")).unwrap();
    assert_eq!(next.castling_rights().to_string(), "Kk");
}

#[test]
fn test_white_promotion() {
    let position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let next = position.play(sq("a7"), sq("a8")).unwrap();
    assert_eq!(
        next.piece_on(sq("a8")),
        Piece::new(Color::White, PieceKind::Queen)
    );
}

#[test]
fn test_black_promotion_by_capture() {
    let position = Position::from_fen("k7/8/8/8/8/8/6p1/K6R b - - 0 1");
    let next = position.play(sq("g2"), sq("h1")).unwrap();
    assert_eq!(
        next.piece_on(sq("h1")),
        Piece::new(Color::Black, PieceKind::Queen)
    );
}

#[test]
fn test_clocks_and_side_to_move() {
    let position = play_line(Position::new(), &["e2e4"]);
    assert_eq!(position.side_to_move(), Color::Black);
    assert_eq!(position.fullmove_number(), 1);
    assert_eq!(position.halfmove_clock(), 0);

    let position = play_line(position, &["g8f6"]);
    assert_eq!(position.fullmove_number(), 2);
    assert_eq!(position.halfmove_clock(), 1);

    let position = play_line(position, &["g1f3", "f6e4"]);
    assert_eq!(position.halfmove_clock(), 0);
    assert_eq!(position.fullmove_number(), 3);
    assert_eq!(
        position.to_fen(),
        "rnbqkb1r/pppppppp/8/8/4n3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 3"
    );
}

#[test]
fn test_display_diagram() {
    let text = Position::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "8 r n b q k b n r");
    assert_eq!(lines[4], "4 . . . . . . . .");
    assert_eq!(lines[8], "  a b c d e f g h");
}
