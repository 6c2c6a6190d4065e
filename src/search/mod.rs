//! Search module for Gomoku AI
//!
//! Contains the depth-limited alpha-beta minimax search and the one-ply
//! winning move probe.

pub mod alphabeta;

pub use alphabeta::{ScoredMove, SearchResult, Searcher, MAX_SCORE, MIN_SCORE};
