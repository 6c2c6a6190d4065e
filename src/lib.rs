//! Gomoku AI Engine
//!
//! A five-in-a-row engine for a human (Black) playing against the computer
//! (White) on an N x N board:
//! - Candidate moves are empty cells next to existing stones
//! - Positions are scored by scanning runs of stones in four directions
//! - Moves are chosen by a depth-limited alpha-beta minimax search
//!
//! # Architecture
//!
//! - [`board`]: Board representation, apply/undo and move generation
//! - [`eval`]: Run scoring and position evaluation
//! - [`search`]: Alpha-beta search and the immediate-win probe
//! - [`engine`]: Main AI engine integrating all components
//! - [`game`]: Game session with turn order and win/tie detection
//! - [`config`]: Game settings loaded from TOML
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut board = Board::new(9);
//! let engine = AIEngine::new(2);
//!
//! // The first stone is always placed by the caller
//! board.apply(Pos::new(4, 4), Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&mut board) {
//!     board.apply(pos, Stone::White);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search Priority
//!
//! 1. Immediate winning move (one-ply probe, no tree search)
//! 2. Alpha-Beta minimax to the configured depth

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{AIEngine, MoveResult, SearchObserver, SearchType};
pub use error::{ConfigError, GameError};
pub use eval::WIN_SCORE;
pub use game::{GameSession, GameStatus};
