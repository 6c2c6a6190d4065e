//! Run scores for Gomoku evaluation
//!
//! A run is a maximal line of same-colored stones. Its value depends on its
//! length, how many of its two ends are blocked (by an opponent stone or the
//! board edge) and whether the run's owner is the side to move.

/// Score of a five-in-a-row.
///
/// Larger than any sum of non-winning run scores the board can hold, so a
/// score at or above it means the player has won.
pub const WIN_SCORE: i64 = 100_000_000;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// More than five in a row. Unreachable through a five-stone win check
    /// in normal play, kept above [`WIN_SCORE`].
    pub const OVERLINE: i64 = 2 * WIN_SCORE;

    /// Open or half-open four on the owner's move: wins next move
    pub const FOUR_ON_TURN: i64 = 1_000_000;
    /// Open four on the opponent's move: can only be blocked at one end
    pub const OPEN_FOUR: i64 = 250_000;
    /// Half-open four: forces a block
    pub const CLOSED_FOUR: i64 = 200;

    /// Open three on the owner's move: becomes an open four
    pub const OPEN_THREE_ON_TURN: i64 = 50_000;
    /// Open three on the opponent's move: forces a block
    pub const OPEN_THREE: i64 = 200;
    pub const CLOSED_THREE_ON_TURN: i64 = 10;
    pub const CLOSED_THREE: i64 = 5;

    pub const OPEN_TWO_ON_TURN: i64 = 7;
    pub const OPEN_TWO: i64 = 5;
    pub const CLOSED_TWO: i64 = 3;

    pub const SINGLE: i64 = 1;
}

/// Value of one closed run.
///
/// # Arguments
/// * `count` - Run length (at least 1)
/// * `blocks` - Blocked ends, 0 to 2
/// * `current_turn` - Whether the run's owner moves next
pub fn run_score(count: u32, blocks: u8, current_turn: bool) -> i64 {
    // Dead runs can never grow into a five
    if blocks >= 2 && count < 5 {
        return 0;
    }

    match (count, blocks) {
        (5, _) => WIN_SCORE,
        (4, 0) if current_turn => PatternScore::FOUR_ON_TURN,
        (4, 0) => PatternScore::OPEN_FOUR,
        (4, _) => PatternScore::CLOSED_FOUR,
        (3, 0) if current_turn => PatternScore::OPEN_THREE_ON_TURN,
        (3, 0) => PatternScore::OPEN_THREE,
        (3, _) if current_turn => PatternScore::CLOSED_THREE_ON_TURN,
        (3, _) => PatternScore::CLOSED_THREE,
        (2, 0) if current_turn => PatternScore::OPEN_TWO_ON_TURN,
        (2, 0) => PatternScore::OPEN_TWO,
        (2, _) => PatternScore::CLOSED_TWO,
        (1, _) => PatternScore::SINGLE,
        (0, _) => 0,
        _ => PatternScore::OVERLINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(WIN_SCORE > PatternScore::FOUR_ON_TURN);
        assert!(PatternScore::FOUR_ON_TURN > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::OPEN_THREE_ON_TURN);
        assert!(PatternScore::OPEN_THREE_ON_TURN > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::OPEN_TWO_ON_TURN > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
    }

    #[test]
    fn test_run_score_table() {
        assert_eq!(run_score(4, 0, true), 1_000_000);
        assert_eq!(run_score(4, 0, false), 250_000);
        assert_eq!(run_score(4, 1, true), 200);
        assert_eq!(run_score(4, 1, false), 200);
        assert_eq!(run_score(3, 0, true), 50_000);
        assert_eq!(run_score(3, 0, false), 200);
        assert_eq!(run_score(3, 1, true), 10);
        assert_eq!(run_score(3, 1, false), 5);
        assert_eq!(run_score(2, 0, true), 7);
        assert_eq!(run_score(2, 0, false), 5);
        assert_eq!(run_score(2, 1, true), 3);
        assert_eq!(run_score(2, 1, false), 3);
        assert_eq!(run_score(1, 0, true), 1);
        assert_eq!(run_score(1, 1, false), 1);
    }

    #[test]
    fn test_dead_runs_score_zero() {
        for count in 1..5 {
            assert_eq!(run_score(count, 2, true), 0);
            assert_eq!(run_score(count, 2, false), 0);
        }
    }

    #[test]
    fn test_five_ignores_blocks() {
        for blocks in 0..=2 {
            assert_eq!(run_score(5, blocks, true), WIN_SCORE);
            assert_eq!(run_score(5, blocks, false), WIN_SCORE);
        }
    }

    #[test]
    fn test_overline() {
        assert_eq!(run_score(6, 2, false), 2 * WIN_SCORE);
        assert_eq!(run_score(9, 0, true), 2 * WIN_SCORE);
    }
}
