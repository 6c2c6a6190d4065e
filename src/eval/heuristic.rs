//! Heuristic evaluation function for Gomoku board positions
//!
//! Every line of the board is walked in each of the four directions. Runs of
//! the evaluated color are closed at the first empty cell, opponent stone or
//! board edge and valued with [`run_score`]. The edge and opponent stones
//! count as blocked ends, empty cells as open ends.

use crate::board::{Board, Stone};

use super::patterns::run_score;

/// Line orientations scanned by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Anti-diagonal (bottom-left to top-right)
    DiagonalUp,
    /// Main diagonal (top-left to bottom-right)
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// (row, col) increment between consecutive cells of a line
    #[inline]
    fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (1, -1),
            Direction::DiagonalDown => (1, 1),
        }
    }

    /// First cell of every line in this direction on an `n` x `n` board.
    ///
    /// Lines start on the top row, or the left column for rows. Diagonals
    /// also start down one side column, skipping the corner already covered.
    fn line_starts(self, n: usize) -> impl Iterator<Item = (i32, i32)> {
        let n = n as i32;
        let along_top = self != Direction::Horizontal;
        let side = match self {
            Direction::DiagonalUp => Some(n - 1),
            Direction::DiagonalDown => Some(0),
            Direction::Horizontal | Direction::Vertical => None,
        };
        (0..n)
            .map(move |i| if along_top { (0, i) } else { (i, 0) })
            .chain(side.into_iter().flat_map(move |col| (1..n).map(move |r| (r, col))))
    }
}

/// Running state while walking a single line.
struct LineScan {
    color: Stone,
    current_turn: bool,
    /// Length of the run being built
    consecutive: u32,
    /// Blocked ends seen for the run being built
    blocks: u8,
    score: i64,
}

impl LineScan {
    /// The line start behaves like a blocked cell.
    fn new(color: Stone, current_turn: bool) -> Self {
        Self {
            color,
            current_turn,
            consecutive: 0,
            blocks: 2,
            score: 0,
        }
    }

    fn visit(&mut self, stone: Stone) {
        if stone == self.color {
            self.consecutive += 1;
        } else if stone == Stone::Empty {
            if self.consecutive > 0 {
                // Open end
                self.blocks -= 1;
                self.close_run();
            }
            self.blocks = 1;
        } else {
            if self.consecutive > 0 {
                self.close_run();
            }
            self.blocks = 2;
        }
    }

    fn close_run(&mut self) {
        self.score += run_score(self.consecutive, self.blocks, self.current_turn);
        self.consecutive = 0;
    }

    /// Close a run touching the line end and return the line's score.
    fn finish(mut self) -> i64 {
        if self.consecutive > 0 {
            self.close_run();
        }
        self.score
    }
}

/// Score the position for one color.
///
/// Sum of the run scores over all lines in the four directions. The result
/// is never negative and reaches [`WIN_SCORE`](super::WIN_SCORE) exactly when
/// `color` has five or more stones in a row.
///
/// # Arguments
/// * `board` - The current board state
/// * `color` - The color to evaluate for
/// * `players_turn` - Whether `color` is the side to move
#[must_use]
pub fn score(board: &Board, color: Stone, players_turn: bool) -> i64 {
    if color == Stone::Empty {
        return 0;
    }
    Direction::ALL
        .iter()
        .map(|&dir| directional_score(board, color, players_turn, dir))
        .sum()
}

/// Score contribution of all lines in one direction.
#[must_use]
pub fn directional_score(board: &Board, color: Stone, players_turn: bool, dir: Direction) -> i64 {
    let (dr, dc) = dir.step();
    dir.line_starts(board.size())
        .map(|(start_r, start_c)| {
            let mut scan = LineScan::new(color, players_turn);
            let (mut r, mut c) = (start_r, start_c);
            while let Some(stone) = board.stone_at(r, c) {
                scan.visit(stone);
                r += dr;
                c += dc;
            }
            scan.finish()
        })
        .sum()
}

/// Leaf evaluation used by the search: White's score relative to Black's.
///
/// Higher is better for White. Black's score is clamped to at least 1.
#[must_use]
pub fn relative_score(board: &Board, blacks_turn: bool) -> f64 {
    let white = score(board, Stone::White, !blacks_turn) as f64;
    let black = score(board, Stone::Black, blacks_turn).max(1) as f64;
    white / black
}
