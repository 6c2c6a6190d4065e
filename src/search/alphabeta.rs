//! Alpha-Beta minimax search
//!
//! White (the computer) is the maximizing side and Black the minimizing
//! side. Leaves are scored with [`relative_score`], White's positional score
//! divided by Black's, so every leaf value is non-negative.
//!
//! The search plays and takes back moves on the caller's board. Every
//! [`Board::apply`] is paired with an [`Board::undo`] before the frame
//! returns, including on cutoffs, so the board is unchanged afterwards.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new(9);
//! board.apply(Pos::new(4, 4), Stone::Black);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&mut board, 2);
//! assert!(result.best_move.is_some());
//! assert_eq!(board.stone_count(), 1);
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::{relative_score, score, WIN_SCORE};

/// Initial alpha, below any leaf value
pub const MIN_SCORE: f64 = -1.0;
/// Initial beta and the minimizing side's starting best
pub const MAX_SCORE: f64 = WIN_SCORE as f64;

/// Score of a subtree and the move leading into it.
///
/// `best_move` is `None` only for leaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub score: f64,
    pub best_move: Option<Pos>,
}

impl ScoredMove {
    #[inline]
    fn leaf(score: f64) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Best move found, `None` when there was nothing to play
    pub best_move: Option<Pos>,
    /// Relative score of the principal line
    pub score: f64,
    /// Requested depth in plies
    pub depth: u8,
    /// Positions evaluated during this search
    pub nodes: u64,
}

/// Depth-limited alpha-beta searcher.
///
/// Holds the evaluation counter for one engine call; create a fresh one per
/// move so independent searches never share counters.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions evaluated so far (leaf evaluations and win probes)
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `depth` plies with White to move.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        let start_nodes = self.nodes;
        let result = self.alpha_beta(board, depth, true, MIN_SCORE, MAX_SCORE);
        SearchResult {
            best_move: result.best_move,
            score: result.score,
            depth,
            nodes: self.nodes - start_nodes,
        }
    }

    /// First candidate move that gives `color` five in a row.
    ///
    /// One-ply probe over [`Board::generate_moves`], in generation order.
    pub fn find_winning_move(&mut self, board: &mut Board, color: Stone) -> Option<Pos> {
        for mov in board.generate_moves() {
            self.nodes += 1;
            play(board, mov, color);
            let wins = score(board, color, false) >= WIN_SCORE;
            board.undo(mov);
            if wins {
                return Some(mov);
            }
        }
        None
    }

    fn evaluate(&mut self, board: &Board, blacks_turn: bool) -> ScoredMove {
        self.nodes += 1;
        ScoredMove::leaf(relative_score(board, blacks_turn))
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> ScoredMove {
        if depth == 0 {
            return self.evaluate(board, !maximizing);
        }

        let moves = board.generate_moves();
        let Some(&first) = moves.first() else {
            return self.evaluate(board, !maximizing);
        };

        if maximizing {
            let mut best = ScoredMove {
                score: MIN_SCORE,
                best_move: None,
            };
            for mov in moves {
                play(board, mov, Stone::White);
                let child = self.alpha_beta(board, depth - 1, false, alpha, beta);
                board.undo(mov);

                alpha = alpha.max(child.score);
                // Beta cutoff: Black already has a better line elsewhere
                if child.score >= beta {
                    return ScoredMove {
                        score: child.score,
                        best_move: Some(mov),
                    };
                }
                if child.score > best.score {
                    best = ScoredMove {
                        score: child.score,
                        best_move: Some(mov),
                    };
                }
            }
            best
        } else {
            let mut best = ScoredMove {
                score: MAX_SCORE,
                best_move: Some(first),
            };
            for mov in moves {
                play(board, mov, Stone::Black);
                let child = self.alpha_beta(board, depth - 1, true, alpha, beta);
                board.undo(mov);

                beta = beta.min(child.score);
                // Alpha cutoff: White already has a better line elsewhere
                if child.score <= alpha {
                    return ScoredMove {
                        score: child.score,
                        best_move: Some(mov),
                    };
                }
                if child.score < best.score {
                    best = ScoredMove {
                        score: child.score,
                        best_move: Some(mov),
                    };
                }
            }
            best
        }
    }
}

/// Place a generated candidate. Candidates are empty by construction.
#[inline]
fn play(board: &mut Board, mov: Pos, color: Stone) {
    let placed = board.apply(mov, color);
    debug_assert!(placed, "candidate {mov} was occupied");
}
