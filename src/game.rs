//! Game session: turn order, win/tie detection and the computer's moves
//!
//! The human plays Black and the computer White. When the computer starts,
//! its first stone goes to the board center, since the engine has no
//! candidates on an empty board.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::info;

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::eval::{score, WIN_SCORE};

/// Color played by the human
pub const HUMAN: Stone = Stone::Black;
/// Color played by the engine
pub const AI: Stone = Stone::White;

/// Game progress after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
    /// Board filled without a winner
    Tied,
}

/// AI computation state
enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// One human-versus-computer game.
pub struct GameSession {
    board: Board,
    engine: AIEngine,
    current_turn: Stone,
    status: GameStatus,
    move_history: Vec<(Pos, Stone)>,
    last_ai_result: Option<MoveResult>,
    ai_state: AiState,
}

/// The player with five in a row, Black checked first.
#[must_use]
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&color| score(board, color, false) >= WIN_SCORE)
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_engine(config, AIEngine::new(config.depth))
    }

    /// Start a game with a preconfigured engine (e.g. one with observers).
    pub fn with_engine(config: &GameConfig, engine: AIEngine) -> Self {
        let first = if config.ai_starts { AI } else { HUMAN };
        let mut session = Self::from_position(Board::new(config.board_size), engine, first);
        if config.ai_starts {
            session.play_opening();
        }
        info!(
            "new game: {0}x{0} board, depth {1}, AI starts: {2}",
            config.board_size,
            session.engine.depth(),
            config.ai_starts
        );
        session
    }

    /// Resume from an arbitrary position with `current_turn` to move.
    pub fn from_position(board: Board, engine: AIEngine, current_turn: Stone) -> Self {
        let status = match check_winner(&board) {
            Some(winner) => GameStatus::Won(winner),
            None if board.is_full() => GameStatus::Tied,
            None => GameStatus::InProgress,
        };
        Self {
            board,
            engine,
            current_turn,
            status,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    pub fn move_history(&self) -> &[(Pos, Stone)] {
        &self.move_history
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_turn == HUMAN
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Play a human (Black) move.
    pub fn play_human(&mut self, pos: Pos) -> Result<GameStatus, GameError> {
        self.ensure_turn(HUMAN)?;
        self.place(pos, HUMAN)
    }

    /// Let the engine choose and play White's move on the live board.
    pub fn play_ai_turn(&mut self) -> Result<GameStatus, GameError> {
        self.ensure_turn(AI)?;
        if let Some(status) = self.play_opening() {
            return Ok(status);
        }
        let result = self.engine.choose_move(&mut self.board);
        self.finish_ai_turn(result)
    }

    /// Start the engine on a snapshot of the board in a worker thread.
    ///
    /// Collect the move with [`GameSession::poll_ai`] or
    /// [`GameSession::wait_for_ai`]. Moves are refused until then. On an
    /// empty board the center is played at once and no worker is started.
    pub fn start_ai_thinking(&mut self) -> Result<(), GameError> {
        self.ensure_turn(AI)?;
        if self.play_opening().is_some() {
            return Ok(());
        }

        let mut board = self.board.clone();
        let engine = self.engine.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.choose_move(&mut board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
        Ok(())
    }

    /// Commit the worker's move if it is ready. `None` while still thinking
    /// or when no search was started.
    pub fn poll_ai(&mut self) -> Option<Result<GameStatus, GameError>> {
        let received = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Ok(result),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => Err(GameError::AiUnavailable),
            },
            AiState::Idle => return None,
        };
        self.ai_state = AiState::Idle;
        Some(received.and_then(|result| self.finish_ai_turn(result)))
    }

    /// Block until the worker's move arrives and commit it.
    pub fn wait_for_ai(&mut self) -> Option<Result<GameStatus, GameError>> {
        let received = match &self.ai_state {
            AiState::Thinking { receiver, .. } => {
                receiver.recv().map_err(|_| GameError::AiUnavailable)
            }
            AiState::Idle => return None,
        };
        self.ai_state = AiState::Idle;
        Some(received.and_then(|result| self.finish_ai_turn(result)))
    }

    fn ensure_turn(&self, color: Stone) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }
        if self.current_turn != color {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    /// The engine has no candidates on an empty board, so White opens at
    /// the center.
    fn play_opening(&mut self) -> Option<GameStatus> {
        if !self.board.is_board_empty() {
            return None;
        }
        let center = self.board.center();
        Some(self.commit(center, AI))
    }

    fn finish_ai_turn(&mut self, result: MoveResult) -> Result<GameStatus, GameError> {
        let best_move = result.best_move;
        self.last_ai_result = Some(result);
        match best_move {
            Some(pos) => self.place(pos, AI),
            None => {
                info!("no possible moves left, game tied");
                self.status = GameStatus::Tied;
                Ok(self.status)
            }
        }
    }

    fn place(&mut self, pos: Pos, color: Stone) -> Result<GameStatus, GameError> {
        if !self.board.contains(i32::from(pos.row), i32::from(pos.col)) {
            return Err(GameError::OutOfBounds {
                row: pos.row as usize,
                col: pos.col as usize,
                size: self.board.size(),
            });
        }
        if !self.board.apply(pos, color) {
            return Err(GameError::Occupied(pos));
        }
        Ok(self.after_move(pos, color))
    }

    /// Place a move already known to be legal.
    fn commit(&mut self, pos: Pos, color: Stone) -> GameStatus {
        let placed = self.board.apply(pos, color);
        debug_assert!(placed);
        self.after_move(pos, color)
    }

    fn after_move(&mut self, pos: Pos, color: Stone) -> GameStatus {
        self.move_history.push((pos, color));

        if let Some(winner) = check_winner(&self.board) {
            info!("{winner:?} wins after {} moves", self.move_history.len());
            self.status = GameStatus::Won(winner);
        } else if self.board.is_full() {
            info!("board full, game tied");
            self.status = GameStatus::Tied;
        } else {
            self.current_turn = color.opponent();
        }
        self.status
    }
}
