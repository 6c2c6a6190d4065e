//! Board representation for Gomoku

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Default board size (19x19)
pub const DEFAULT_BOARD_SIZE: usize = 19;
/// Smallest board on which five-in-a-row is possible
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest supported board (coordinates are stored as `u8`)
pub const MAX_BOARD_SIZE: usize = 64;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Single-character symbol used for text rendering
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board with the given side length
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    /// Inverse of [`Pos::to_index`]
    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
