//! Main AI Engine integrating all search components
//!
//! The computer always plays White. A move is chosen in two steps:
//!
//! 1. **Immediate win**: any candidate that completes five in a row is
//!    played at once, without a deeper search
//! 2. **Alpha-Beta**: depth-limited minimax with alpha-beta pruning
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let engine = AIEngine::new(2);
//! let mut board = Board::new(9);
//!
//! // The opening stone is placed by the caller
//! board.apply(Pos::new(4, 4), Stone::Black);
//!
//! let result = engine.choose_move(&mut board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::eval::WIN_SCORE;
use crate::search::{SearchResult, Searcher};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Found immediate winning move (5-in-a-row)
    ImmediateWin,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Best move found, `None` when the board offers no candidate
    pub best_move: Option<Pos>,
    /// Relative score (White over Black) of the chosen line
    pub score: f64,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of positions evaluated
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(pos: Pos, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: WIN_SCORE as f64,
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Hooks fired around every engine call.
///
/// Purely informational, e.g. for a "thinking" indicator. Both methods
/// default to no-ops.
pub trait SearchObserver: Send + Sync {
    fn search_started(&self) {}

    fn search_finished(&self, _result: &MoveResult) {}
}

/// Main AI Engine for Gomoku.
///
/// Stateless between calls apart from its configuration, so it is cheap to
/// clone into a worker thread.
#[derive(Clone)]
pub struct AIEngine {
    /// Search depth in plies
    depth: u8,
    observer: Option<Arc<dyn SearchObserver>>,
}

impl AIEngine {
    /// Create an engine searching `depth` plies.
    #[must_use]
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            observer: None,
        }
    }

    /// Attach start/finish notification hooks.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn SearchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    /// Get the best move for White, or `None` if nothing can be played.
    #[must_use]
    pub fn get_move(&self, board: &mut Board) -> Option<Pos> {
        self.choose_move(board).best_move
    }

    /// Choose White's move with search statistics.
    ///
    /// The board is searched in place and is identical to its input when
    /// this returns. An empty board has no candidates, so the opening move
    /// must be placed by the caller; a full board yields `best_move == None`.
    pub fn choose_move(&self, board: &mut Board) -> MoveResult {
        if let Some(observer) = &self.observer {
            observer.search_started();
        }
        let start = Instant::now();
        let mut searcher = Searcher::new();

        let result = match searcher.find_winning_move(board, Stone::White) {
            Some(win) => {
                debug!("immediate win at {win}");
                MoveResult::immediate_win(win, elapsed_ms(start), searcher.nodes())
            }
            None => {
                let search = searcher.search(board, self.depth);
                debug!(
                    "alpha-beta depth {} finished: score {:.4}, {} nodes",
                    search.depth, search.score, search.nodes
                );
                // Win probes count too
                MoveResult {
                    nodes: searcher.nodes(),
                    ..MoveResult::from_alphabeta(search, elapsed_ms(start))
                }
            }
        };

        match result.best_move {
            Some(pos) => info!(
                "AI plays {pos} ({:?}): {} positions evaluated in {} ms",
                result.search_type, result.nodes, result.time_ms
            ),
            None => info!("AI has no move available"),
        }

        if let Some(observer) = &self.observer {
            observer.search_finished(&result);
        }
        result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(3)
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
