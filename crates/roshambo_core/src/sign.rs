//! Hand signs and the "naturally beats" relation.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A hand sign thrown by the player or the computer.
///
/// Parses case-insensitively from its name, its first letter, or its glyph:
///
/// ```
/// use roshambo_core::Sign;
///
/// assert_eq!("Rock".parse::<Sign>().unwrap(), Sign::Rock);
/// assert_eq!("✂️".parse::<Sign>().unwrap(), Sign::Scissors);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Sign {
    /// Rock beats scissors.
    #[strum(serialize = "rock", serialize = "r", serialize = "🪨")]
    Rock,
    /// Paper beats rock.
    #[strum(serialize = "paper", serialize = "p", serialize = "📄")]
    Paper,
    /// Scissors beat paper.
    #[strum(serialize = "scissors", serialize = "s", serialize = "✂️", serialize = "✂")]
    Scissors,
}

impl Sign {
    /// All signs in display order.
    pub const ALL: [Sign; 3] = [Sign::Rock, Sign::Paper, Sign::Scissors];

    /// Returns the one sign this sign naturally beats.
    #[instrument]
    pub fn beats_sign(self) -> Sign {
        match self {
            Sign::Rock => Sign::Scissors,
            Sign::Scissors => Sign::Paper,
            Sign::Paper => Sign::Rock,
        }
    }

    /// Returns the one sign that naturally beats this sign.
    #[instrument]
    pub fn beaten_by(self) -> Sign {
        match self {
            Sign::Rock => Sign::Paper,
            Sign::Paper => Sign::Scissors,
            Sign::Scissors => Sign::Rock,
        }
    }

    /// True when `self` beats `other` under standard rules.
    #[instrument]
    pub fn beats(self, other: Sign) -> bool {
        self.beats_sign() == other
    }

    /// Emoji glyph shown in the interface.
    pub fn glyph(self) -> &'static str {
        match self {
            Sign::Rock => "🪨",
            Sign::Paper => "📄",
            Sign::Scissors => "✂️",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Sign::Rock => "Rock",
            Sign::Paper => "Paper",
            Sign::Scissors => "Scissors",
        }
    }

    /// Position of this sign in [`Sign::ALL`].
    pub fn index(self) -> usize {
        match self {
            Sign::Rock => 0,
            Sign::Paper => 1,
            Sign::Scissors => 2,
        }
    }

    /// Sign at the given position in [`Sign::ALL`].
    pub fn from_index(index: usize) -> Option<Sign> {
        Self::ALL.get(index).copied()
    }

    /// Next sign in display order, wrapping around.
    pub fn next(self) -> Sign {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous sign in display order, wrapping around.
    pub fn previous(self) -> Sign {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_cycle_is_closed() {
        for sign in Sign::iter() {
            assert_eq!(sign.beats_sign().beaten_by(), sign);
            assert!(sign.beats(sign.beats_sign()));
            assert!(!sign.beats(sign));
            assert!(!sign.beats(sign.beaten_by()));
        }
    }

    #[test]
    fn test_standard_table() {
        assert!(Sign::Rock.beats(Sign::Scissors));
        assert!(Sign::Scissors.beats(Sign::Paper));
        assert!(Sign::Paper.beats(Sign::Rock));
    }

    #[test]
    fn test_parse_names_and_glyphs() {
        assert_eq!("ROCK".parse::<Sign>().unwrap(), Sign::Rock);
        assert_eq!("p".parse::<Sign>().unwrap(), Sign::Paper);
        assert_eq!("📄".parse::<Sign>().unwrap(), Sign::Paper);
        assert_eq!("✂".parse::<Sign>().unwrap(), Sign::Scissors);
        assert!("lizard".parse::<Sign>().is_err());
    }

    #[test]
    fn test_next_previous_wrap() {
        assert_eq!(Sign::Scissors.next(), Sign::Rock);
        assert_eq!(Sign::Rock.previous(), Sign::Scissors);
        for sign in Sign::ALL {
            assert_eq!(sign.next().previous(), sign);
            assert_eq!(Sign::from_index(sign.index()), Some(sign));
        }
        assert_eq!(Sign::from_index(3), None);
    }
}
