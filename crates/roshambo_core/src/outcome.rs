//! Declared goals and round results.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Banner shown when the session limit is reached.
pub const END_OF_GAME_BANNER: &str = "END OF THE GAME!";

/// The outcome the player is trying to achieve against the computer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum DesiredOutcome {
    /// The player scores by beating the computer.
    #[default]
    #[strum(serialize = "win", serialize = "w")]
    Win,
    /// The player scores by losing to the computer.
    #[strum(serialize = "lose", serialize = "l")]
    Lose,
}

impl DesiredOutcome {
    /// Both goals in display order.
    pub const ALL: [DesiredOutcome; 2] = [DesiredOutcome::Win, DesiredOutcome::Lose];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
        }
    }

    /// Switches between `Win` and `Lose`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
        }
    }

    /// Position of this goal in [`DesiredOutcome::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Win => 0,
            Self::Lose => 1,
        }
    }
}

impl std::fmt::Display for DesiredOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How a round scored from the player's perspective.
///
/// `Win` means the declared goal was met, not that the player's sign beat
/// the computer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// Goal met, score +1.
    Win,
    /// Goal missed, score -1 (floored at zero).
    Lose,
    /// Same sign thrown, score unchanged.
    Draw,
}

impl RoundResult {
    /// Score change this result asks for before the zero floor is applied.
    pub fn score_delta(self) -> i32 {
        match self {
            Self::Win => 1,
            Self::Lose => -1,
            Self::Draw => 0,
        }
    }

    /// Upper-case banner shown after the round.
    pub fn banner(self) -> &'static str {
        match self {
            Self::Win => "YOU WIN!",
            Self::Lose => "YOU LOSE!",
            Self::Draw => "IT'S A DRAW!",
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "You Win!"),
            Self::Lose => write!(f, "You Lose!"),
            Self::Draw => write!(f, "It's a draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(DesiredOutcome::Win.toggle(), DesiredOutcome::Lose);
        assert_eq!(DesiredOutcome::Lose.toggle().toggle(), DesiredOutcome::Lose);
    }

    #[test]
    fn test_parse_goal() {
        assert_eq!("WIN".parse::<DesiredOutcome>().unwrap(), DesiredOutcome::Win);
        assert_eq!("l".parse::<DesiredOutcome>().unwrap(), DesiredOutcome::Lose);
        assert!("tie".parse::<DesiredOutcome>().is_err());
    }

    #[test]
    fn test_banners_are_upper_case_display() {
        for result in [RoundResult::Win, RoundResult::Lose, RoundResult::Draw] {
            assert_eq!(result.banner(), result.to_string().to_uppercase());
        }
        assert_eq!(END_OF_GAME_BANNER, "End of the Game!".to_uppercase());
    }
}
