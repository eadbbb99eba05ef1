//! Round resolution rules.
//!
//! Pure functions only. The computer's sign is an input here; drawing it is
//! the job of an [`Opponent`](crate::Opponent).

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{DesiredOutcome, RoundResult, Sign};

/// Result and score delta of a single round, as produced by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    result: RoundResult,
    delta: i32,
}

impl Resolution {
    fn from_result(result: RoundResult) -> Self {
        Self {
            result,
            delta: result.score_delta(),
        }
    }

    /// Whether the player's goal was met.
    pub fn result(&self) -> RoundResult {
        self.result
    }

    /// Requested change to the running score. The floor at zero is applied
    /// by [`Score::apply`](crate::Score::apply).
    pub fn delta(&self) -> i32 {
        self.delta
    }
}

/// Resolves a round from the player's sign, goal, and the computer's sign.
///
/// Equal signs draw. Otherwise the player scores when "my sign beats
/// theirs" agrees with the declared goal.
#[instrument]
pub fn resolve(player: Sign, desired: DesiredOutcome, computer: Sign) -> Resolution {
    if player == computer {
        return Resolution::from_result(RoundResult::Draw);
    }

    let naturally_wins = player.beats(computer);
    let goal_met = match desired {
        DesiredOutcome::Win => naturally_wins,
        DesiredOutcome::Lose => !naturally_wins,
    };

    if goal_met {
        Resolution::from_result(RoundResult::Win)
    } else {
        Resolution::from_result(RoundResult::Lose)
    }
}
