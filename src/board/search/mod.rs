//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Features:
//! - Material-only static evaluation from the automated side's perspective
//! - Opening book consulted on the first move when playing Black
//! - Make/unmake on an exclusively owned copy of the caller's position
//! - Unpruned reference `minimax` sharing the same terminal rules

mod book;
pub mod log;

use std::fmt;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::eval::evaluate_board;
use super::{Color, Move, Position};
pub use book::{OpeningBook, OpeningLine, OpeningSignature};
use self::log::{LogSearchLogger, SearchInfo, SearchLogger};

/// Depth used when none is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 3;

/// Score when the automated side is to move and has no legal move.
///
/// Checkmate and stalemate share this value.
pub const NO_MOVES_LOSS: i32 = i32::MIN / 2;
/// Score when the opponent is to move and has no legal move.
pub const NO_MOVES_WIN: i32 = i32::MAX / 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies explored from the root, the root move included
    pub max_depth: u32,
    /// The side the engine plays
    pub ai_color: Color,
    /// Whether the book may answer White's first move
    pub use_opening_book: bool,
    /// Seed for book selection; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            ai_color: Color::Black,
            use_opening_book: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Create a depth-limited search config
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_ai_color(mut self, color: Color) -> Self {
        self.ai_color = color;
        self
    }

    #[must_use]
    pub fn with_opening_book(mut self, enabled: bool) -> Self {
        self.use_opening_book = enabled;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Where a search result came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveSource {
    Book,
    Search,
    /// The automated side had no legal move
    NoMoves,
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSource::Book => write!(f, "book"),
            MoveSource::Search => write!(f, "search"),
            MoveSource::NoMoves => write!(f, "none"),
        }
    }
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
    pub elapsed: Duration,
}

/// Result of a search
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    /// The best move found, `None` when there is no legal move
    pub best_move: Option<Move>,
    /// Minimax value of `best_move`; `None` for book moves
    pub score: Option<i32>,
    pub source: MoveSource,
    pub stats: SearchStats,
}

/// Per-call search state. Nothing survives between calls.
struct SearchContext {
    ai_color: Color,
    max_depth: u32,
    prune: bool,
    nodes: u64,
    cutoffs: u64,
}

impl SearchContext {
    fn new(ai_color: Color, max_depth: u32, prune: bool) -> Self {
        SearchContext {
            ai_color,
            max_depth,
            prune,
            nodes: 0,
            cutoffs: 0,
        }
    }

    /// Alpha-beta over `board` with make/unmake. `board` is restored before
    /// returning. With pruning off the window is still threaded through but
    /// never cuts, which yields plain minimax.
    fn alpha_beta(
        &mut self,
        board: &mut Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;
        if depth >= self.max_depth {
            return evaluate_board(board, self.ai_color);
        }

        let side = if maximizing {
            self.ai_color
        } else {
            self.ai_color.opponent()
        };
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            return if maximizing { NO_MOVES_LOSS } else { NO_MOVES_WIN };
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in &moves {
                let info = board.make_move(*mv);
                let score = self.alpha_beta(board, depth + 1, alpha, beta, false);
                board.unmake_move(*mv, info);
                best = best.max(score);
                alpha = alpha.max(best);
                if self.prune && beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in &moves {
                let info = board.make_move(*mv);
                let score = self.alpha_beta(board, depth + 1, alpha, beta, true);
                board.unmake_move(*mv, info);
                best = best.min(score);
                beta = beta.min(best);
                if self.prune && beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Score every root move and keep the first strictly best one.
    fn root(&mut self, position: &Position) -> Option<(Move, i32)> {
        let mut board = *position;
        let mut best: Option<(Move, i32)> = None;
        for mv in position.legal_moves(self.ai_color) {
            let info = board.make_move(mv);
            let score = self.alpha_beta(&mut board, 1, i32::MIN, i32::MAX, false);
            board.unmake_move(mv, info);
            ::log::trace!("root {mv} score {score}");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        best
    }
}

/// Alpha-beta value of `position` seen from `ai_color`.
///
/// `depth` is the ply of `position` below the root; the static evaluation is
/// returned once it reaches `max_depth`. `maximizing` says whether
/// `ai_color` is to move. A side with no legal move scores
/// [`NO_MOVES_LOSS`] or [`NO_MOVES_WIN`].
#[must_use]
pub fn alpha_beta(
    position: &Position,
    depth: u32,
    max_depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    ai_color: Color,
) -> i32 {
    let mut board = *position;
    SearchContext::new(ai_color, max_depth, true).alpha_beta(
        &mut board, depth, alpha, beta, maximizing,
    )
}

/// Unpruned minimax with the same horizon and terminal rules as [`alpha_beta`].
#[must_use]
pub fn minimax(
    position: &Position,
    depth: u32,
    max_depth: u32,
    maximizing: bool,
    ai_color: Color,
) -> i32 {
    let mut board = *position;
    SearchContext::new(ai_color, max_depth, false).alpha_beta(
        &mut board,
        depth,
        i32::MIN,
        i32::MAX,
        maximizing,
    )
}

/// The automated player.
///
/// Holds its configuration, the book RNG and a logger; the position is
/// always passed in and never modified.
pub struct AiEngine {
    config: SearchConfig,
    rng: StdRng,
    logger: Box<dyn SearchLogger>,
}

impl AiEngine {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self::with_logger(config, Box::new(LogSearchLogger))
    }

    #[must_use]
    pub fn with_logger(config: SearchConfig, logger: Box<dyn SearchLogger>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        AiEngine {
            config,
            rng,
            logger,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best move for the configured side, or `None` if it has no legal move.
    pub fn find_best_move(
        &mut self,
        position: &Position,
        max_depth: u32,
        move_number: u32,
    ) -> Option<Move> {
        self.search(position, max_depth, move_number).best_move
    }

    /// Run a full search call and report it through the logger.
    ///
    /// On move 1 a book reply is returned without searching when the engine
    /// plays Black, the book is enabled and White's first move is known.
    pub fn search(&mut self, position: &Position, max_depth: u32, move_number: u32) -> SearchResult {
        let start = Instant::now();
        let ai_color = self.config.ai_color;

        let book_move = if move_number == 1
            && self.config.use_opening_book
            && ai_color == Color::Black
        {
            OpeningBook::standard().pick(position, &mut self.rng)
        } else {
            None
        };

        let result = if let Some(mv) = book_move {
            SearchResult {
                best_move: Some(mv),
                score: None,
                source: MoveSource::Book,
                stats: SearchStats {
                    elapsed: start.elapsed(),
                    ..SearchStats::default()
                },
            }
        } else {
            let mut ctx = SearchContext::new(ai_color, max_depth, true);
            let best = ctx.root(position);
            SearchResult {
                best_move: best.map(|(mv, _)| mv),
                score: best.map(|(_, score)| score),
                source: if best.is_some() {
                    MoveSource::Search
                } else {
                    MoveSource::NoMoves
                },
                stats: SearchStats {
                    nodes: ctx.nodes,
                    cutoffs: ctx.cutoffs,
                    elapsed: start.elapsed(),
                },
            }
        };

        self.logger.info(&SearchInfo {
            depth: max_depth,
            score: result.score,
            nodes: result.stats.nodes,
            cutoffs: result.stats.cutoffs,
            time_ms: result.stats.elapsed.as_millis(),
            best: result
                .best_move
                .map_or_else(|| "(none)".to_string(), |mv| mv.to_string()),
            source: result.source,
        });
        result
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        AiEngine::new(SearchConfig::default())
    }
}
