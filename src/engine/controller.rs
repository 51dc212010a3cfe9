//! Game controller implementation.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::{Mutex, RwLock};

use crate::board::{
    AiEngine, Color, GameStatus, Move, PieceView, Position, SearchConfig, SearchResult, Square,
};

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// An in-flight background search
pub struct SearchJob {
    /// The position the worker is searching
    origin: Position,
    /// Handle to the search thread
    handle: JoinHandle<SearchResult>,
}

impl SearchJob {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the worker. `None` if it panicked.
    fn join(self) -> Option<SearchResult> {
        match self.handle.join() {
            Ok(result) => Some(result),
            Err(_) => {
                log::error!("search worker panicked");
                None
            }
        }
    }
}

/// Owns the live game and runs the automated side on a worker thread.
///
/// The current position is published behind a reader-writer lock and only
/// ever replaced whole, so readers see either the position before a move or
/// the one after it. At most one search runs at a time; while it runs, human
/// moves are refused. All methods take `&self`, so the controller can be
/// shared between a UI thread and others through an `Arc`.
pub struct GameController {
    position: RwLock<Position>,
    engine: Arc<Mutex<AiEngine>>,
    job: Mutex<Option<SearchJob>>,
    config: SearchConfig,
}

impl GameController {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self::with_engine(AiEngine::new(config))
    }

    /// Use a preconfigured engine, e.g. one with a custom search logger.
    #[must_use]
    pub fn with_engine(engine: AiEngine) -> Self {
        let config = engine.config().clone();
        GameController {
            position: RwLock::new(Position::new()),
            engine: Arc::new(Mutex::new(engine)),
            job: Mutex::new(None),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn ai_color(&self) -> Color {
        self.config.ai_color
    }

    /// A copy of the current position.
    #[must_use]
    pub fn snapshot(&self) -> Position {
        *self.position.read()
    }

    #[must_use]
    pub fn piece_at(&self, col: u8, row: u8) -> Option<PieceView> {
        let piece = self.position.read().piece_at(col, row)?;
        Some(PieceView {
            col,
            row,
            color: piece.color()?,
            kind: piece.kind()?,
        })
    }

    /// Legal destinations for the piece on `(col, row)`.
    #[must_use]
    pub fn valid_moves(&self, col: u8, row: u8) -> Vec<Square> {
        Square::new(col, row).map_or_else(Vec::new, |from| self.position.read().valid_moves(from))
    }

    /// Validate and apply a move for the side to move.
    ///
    /// Returns `false` and changes nothing if the request is off the board,
    /// moves the wrong side, is illegal, or arrives while a search is running.
    pub fn move_piece(&self, from_col: u8, from_row: u8, to_col: u8, to_row: u8) -> bool {
        if self.is_search_running() {
            log::warn!("move refused: search in progress");
            return false;
        }
        let (Some(from), Some(to)) = (Square::new(from_col, from_row), Square::new(to_col, to_row))
        else {
            return false;
        };

        let mut position = self.position.write();
        match position.play(from, to) {
            Some(next) => {
                log::info!("move {from}{to}");
                *position = next;
                true
            }
            None => {
                log::info!("move {from}{to} rejected");
                false
            }
        }
    }

    /// Parse coordinate text and apply it like [`move_piece`](Self::move_piece).
    pub fn move_text(&self, text: &str) -> bool {
        match self.snapshot().parse_move(text) {
            Ok(mv) => {
                let (from, to) = (mv.from(), mv.to());
                self.move_piece(from.col(), from.row(), to.col(), to.row())
            }
            Err(e) => {
                log::info!("move '{text}' rejected: {e}");
                false
            }
        }
    }

    /// Restore the starting position. A running search is waited for and
    /// its result discarded.
    pub fn reset(&self) {
        let job = self.job.lock().take();
        if let Some(job) = job {
            let _ = job.join();
        }
        self.position.write().reset();
        log::info!("new game");
    }

    /// Replace the live position, e.g. from text. Waits for a running search first.
    pub fn set_position(&self, position: Position) {
        let job = self.job.lock().take();
        if let Some(job) = job {
            let _ = job.join();
        }
        *self.position.write() = position;
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.position.read().is_checkmate(color)
    }

    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        self.position.read().is_stalemate(color)
    }

    /// Status of the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let position = self.position.read();
        position.status(position.side_to_move())
    }

    /// Spawn the background search for the automated side.
    ///
    /// Refuses when a search is already in flight or it is not the automated
    /// side's turn. The worker searches its own copy of the position; the
    /// move number handed to it is the position's full-move number.
    pub fn start_ai_search(&self) -> bool {
        let mut job = self.job.lock();
        if job.is_some() {
            return false;
        }
        let origin = self.snapshot();
        if origin.side_to_move() != self.config.ai_color {
            return false;
        }

        let engine = Arc::clone(&self.engine);
        let max_depth = self.config.max_depth;
        let spawned = thread::Builder::new()
            .name("ai-search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let mut ai = engine.lock();
                ai.search(&origin, max_depth, origin.fullmove_number())
            });

        match spawned {
            Ok(handle) => {
                log::info!("search started at depth {max_depth}");
                *job = Some(SearchJob { origin, handle });
                true
            }
            Err(e) => {
                log::error!("failed to spawn search thread: {e}");
                false
            }
        }
    }

    /// True from `start_ai_search` until the result is collected.
    #[must_use]
    pub fn is_search_running(&self) -> bool {
        self.job.lock().is_some()
    }

    /// True when a search has been started and its worker has returned, so
    /// `wait_for_ai_move` will not block.
    #[must_use]
    pub fn is_search_finished(&self) -> bool {
        self.job.lock().as_ref().is_some_and(SearchJob::is_finished)
    }

    /// Block until the running search finishes and apply its move.
    ///
    /// The move is applied only if the live position is still the one that
    /// was searched. Returns the applied move, or `None` when no search was
    /// running, the automated side had no move, or the result was stale.
    pub fn wait_for_ai_move(&self) -> Option<Move> {
        // The slot stays locked until the move is applied so no human move
        // can slip in between the join and the update.
        let mut slot = self.job.lock();
        let job = slot.take()?;
        let origin = job.origin;
        let result = job.join()?;
        let mv = result.best_move?;
        log::info!(
            "search finished: {mv} ({}, {} nodes, {:?})",
            result.source,
            result.stats.nodes,
            result.stats.elapsed
        );

        let mut position = self.position.write();
        if *position != origin {
            log::warn!("discarding {mv}: position changed during search");
            return None;
        }
        let next = position.play(mv.from(), mv.to())?;
        *position = next;
        Some(mv)
    }

    /// Run a search to completion and apply its move.
    pub fn play_ai_move(&self) -> Option<Move> {
        if !self.start_ai_search() {
            return None;
        }
        self.wait_for_ai_move()
    }
}

impl Default for GameController {
    fn default() -> Self {
        GameController::new(SearchConfig::default())
    }
}
