//! Controller tests: human moves, background searches and published snapshots.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use chess_ai::{Color, GameController, GameStatus, PieceKind, Position, SearchConfig};

fn controller(ai_color: Color) -> GameController {
    GameController::new(
        SearchConfig::depth(2)
            .with_ai_color(ai_color)
            .with_seed(11),
    )
}

#[test]
fn human_then_book_reply() {
    let game = controller(Color::Black);
    assert!(game.move_text("e2e4"));
    let reply = game.play_ai_move().expect("black answers");
    assert!(["e7e5", "c7c5", "f7f6"].contains(&reply.to_string().as_str()));

    let position = game.snapshot();
    assert_eq!(position.side_to_move(), Color::White);
    assert_eq!(position.fullmove_number(), 2);
}

#[test]
fn ai_opens_when_playing_white() {
    let game = controller(Color::White);
    let first = game.play_ai_move().expect("white moves first");
    assert_eq!(first.piece().color(), Some(Color::White));
    assert_eq!(game.snapshot().side_to_move(), Color::Black);
    assert!(game.play_ai_move().is_none());
}

#[test]
fn several_moves_alternate_sides() {
    let game = controller(Color::Black);
    for text in ["d2d4", "g1f3", "b1c3"] {
        assert!(game.move_text(text), "{text}");
        let reply = game.play_ai_move().expect("black has a reply");
        assert_eq!(reply.piece().color(), Some(Color::Black));
    }
    assert_eq!(game.snapshot().side_to_move(), Color::White);
}

#[test]
fn valid_moves_for_knight_and_empty_square() {
    let game = controller(Color::Black);
    let targets: Vec<String> = game.valid_moves(1, 0).iter().map(ToString::to_string).collect();
    assert_eq!(targets, vec!["a3", "c3"]);
    assert!(game.valid_moves(4, 4).is_empty());
    assert!(game.valid_moves(12, 0).is_empty());
}

#[test]
fn checkmate_is_reported_and_moves_refused() {
    let game = controller(Color::Black);
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        assert!(game.move_text(text), "{text}");
    }
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert!(game.is_checkmate(Color::White));
    assert!(!game.is_stalemate(Color::White));
    assert!(!game.move_piece(4, 0, 5, 1));
}

#[test]
fn stalemate_is_reported() {
    let game = controller(Color::Black);
    game.set_position(Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"));
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert!(game.is_stalemate(Color::Black));
    assert!(game.play_ai_move().is_none());
}

#[test]
fn reset_restores_start() {
    let game = controller(Color::Black);
    assert!(game.move_text("e2e4"));
    game.reset();
    assert_eq!(game.snapshot(), Position::new());
    let king = game.piece_at(4, 7).unwrap();
    assert_eq!(king.kind, PieceKind::King);
    assert_eq!(king.color, Color::Black);
}

#[test]
fn readers_only_see_whole_positions() {
    let game = Arc::new(GameController::new(
        SearchConfig::depth(3).with_opening_book(false).with_seed(3),
    ));
    assert!(game.move_text("e2e4"));
    let origin = game.snapshot();

    let done = Arc::new(AtomicBool::new(false));
    let reader = {
        let game = Arc::clone(&game);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut seen = 0u32;
            while !done.load(Ordering::Acquire) {
                let snapshot = game.snapshot();
                if snapshot != origin {
                    assert_eq!(snapshot.side_to_move(), Color::White);
                    assert_eq!(snapshot.fullmove_number(), 2);
                    assert_eq!(snapshot.all_pieces().count(), 32);
                }
                seen += 1;
            }
            seen
        })
    };

    assert!(game.start_ai_search());
    let reply = game.wait_for_ai_move().expect("black replies");
    done.store(true, Ordering::Release);
    assert!(reader.join().unwrap() > 0);
    assert_eq!(reply.piece().color(), Some(Color::Black));
}
