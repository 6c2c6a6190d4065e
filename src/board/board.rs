//! Square game board with in-place apply/undo

use std::fmt;

use super::{Pos, Stone, MAX_BOARD_SIZE};

/// The 8 neighboring offsets around a cell
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// N x N game board.
///
/// Only cells that were explicitly set are non-empty. The search mutates
/// the board in place with [`Board::apply`] / [`Board::undo`] pairs, so a
/// single board must never be searched from two threads at once; clone it
/// to hand a snapshot to another thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty board with the given side length.
    ///
    /// # Panics
    /// Panics if `size` is 0 or larger than [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(
            size > 0 && size <= MAX_BOARD_SIZE,
            "board size {size} out of range 1..={MAX_BOARD_SIZE}"
        );
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether signed coordinates fall on the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        row >= 0 && row < n && col >= 0 && col < n
    }

    /// Get stone at position.
    ///
    /// # Panics
    /// Panics if `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index_of(pos)]
    }

    /// Row-major cell index of an on-board position
    #[inline]
    fn index_of(&self, pos: Pos) -> usize {
        assert!(
            self.contains(i32::from(pos.row), i32::from(pos.col)),
            "{pos} is off the {0}x{0} board",
            self.size
        );
        pos.to_index(self.size)
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn stone_at(&self, row: i32, col: i32) -> Option<Stone> {
        if self.contains(row, col) {
            Some(self.cells[row as usize * self.size + col as usize])
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone if the target cell is on the board and empty.
    ///
    /// Returns `false` without touching the board otherwise. Placing
    /// [`Stone::Empty`] is rejected as well.
    pub fn apply(&mut self, pos: Pos, stone: Stone) -> bool {
        if stone == Stone::Empty || !self.contains(i32::from(pos.row), i32::from(pos.col)) {
            return false;
        }
        let idx = pos.to_index(self.size);
        if self.cells[idx] != Stone::Empty {
            return false;
        }
        self.cells[idx] = stone;
        true
    }

    /// Clear a cell placed by the matching [`Board::apply`].
    ///
    /// # Panics
    /// Panics if `pos` is off the board.
    #[inline]
    pub fn undo(&mut self, pos: Pos) {
        let idx = self.index_of(pos);
        debug_assert!(self.cells[idx] != Stone::Empty, "undo of empty cell {pos}");
        self.cells[idx] = Stone::Empty;
    }

    /// Candidate moves: every empty cell with at least one occupied neighbor.
    ///
    /// Row-major order, no duplicates. Empty on an empty board, so the
    /// opening move has to be chosen by the caller.
    pub fn generate_moves(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &stone)| stone == Stone::Empty)
            .map(|(idx, _)| Pos::from_index(idx, self.size))
            .filter(|&pos| self.has_neighbor(pos))
            .collect()
    }

    fn has_neighbor(&self, pos: Pos) -> bool {
        let (row, col) = (i32::from(pos.row), i32::from(pos.col));
        NEIGHBORS.iter().any(|&(dr, dc)| {
            matches!(
                self.stone_at(row + dr, col + dc),
                Some(Stone::Black | Stone::White)
            )
        })
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Center cell, where the opening stone goes
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:>3}", row)?;
            for col in 0..self.size {
                write!(f, "{:>3}", self.cells[row * self.size + col].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
