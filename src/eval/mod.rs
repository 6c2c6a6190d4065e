//! Evaluation module for Gomoku positions
//!
//! Positions are scored by scanning every row, column and diagonal for runs
//! of stones and summing a per-run value that depends on run length, blocked
//! ends and the side to move.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{directional_score, relative_score, score, Direction};
pub use patterns::{run_score, PatternScore, WIN_SCORE};
