//! Running score, floored at zero.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Cumulative score for a session. Never negative.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{}", _0)]
pub struct Score(u32);

impl Score {
    /// A score of zero.
    pub const ZERO: Score = Score(0);

    /// Creates a score with the given value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Applies a delta, clamping at zero instead of going negative.
    #[instrument]
    pub fn apply(self, delta: i32) -> Self {
        if delta >= 0 {
            Self(self.0.saturating_add(delta.unsigned_abs()))
        } else {
            Self(self.0.saturating_sub(delta.unsigned_abs()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_positive() {
        assert_eq!(Score::ZERO.apply(1).apply(1), Score::new(2));
    }

    #[test]
    fn test_floor_at_zero() {
        let score = Score::ZERO.apply(-1).apply(-1).apply(-1);
        assert_eq!(score, Score::ZERO);
    }

    #[test]
    fn test_loss_after_win() {
        assert_eq!(Score::new(1).apply(-1), Score::ZERO);
        assert_eq!(Score::new(3).apply(-1), Score::new(2));
    }

    #[test]
    fn test_draw_is_identity() {
        assert_eq!(Score::new(4).apply(0), Score::new(4));
    }
}
