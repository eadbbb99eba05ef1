//! First-class record of one resolved round.
//!
//! A round captures both throws, the declared goal, and the resolution, so
//! it can be displayed, logged, or checked against the rules after the fact.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::rules::{Resolution, resolve};
use crate::{DesiredOutcome, Opponent, RoundResult, Sign};

/// A resolved round.
///
/// Built by [`Round::resolve`] or [`Round::play`]. A deserialized round is
/// checked with [`Round::is_consistent`] before a session accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    player: Sign,
    desired: DesiredOutcome,
    computer: Sign,
    resolution: Resolution,
}

impl Round {
    /// Resolves a round against a known computer sign.
    #[instrument]
    pub fn resolve(player: Sign, desired: DesiredOutcome, computer: Sign) -> Self {
        Self {
            player,
            desired,
            computer,
            resolution: resolve(player, desired, computer),
        }
    }

    /// Draws the computer's sign from `opponent` and resolves the round.
    #[instrument(skip(opponent), fields(opponent = %opponent.name()))]
    pub fn play<O: Opponent + ?Sized>(
        player: Sign,
        desired: DesiredOutcome,
        opponent: &mut O,
    ) -> Self {
        let computer = opponent.choose();
        let round = Self::resolve(player, desired, computer);
        debug!(
            player = %player,
            computer = %computer,
            result = ?round.result(),
            "Round resolved"
        );
        round
    }

    /// Sign thrown by the player.
    pub fn player(&self) -> Sign {
        self.player
    }

    /// Goal the player declared.
    pub fn desired(&self) -> DesiredOutcome {
        self.desired
    }

    /// Sign thrown by the computer.
    pub fn computer(&self) -> Sign {
        self.computer
    }

    /// Result and requested score change.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Whether the player's goal was met.
    pub fn result(&self) -> RoundResult {
        self.resolution.result()
    }

    /// Requested score change.
    pub fn delta(&self) -> i32 {
        self.resolution.delta()
    }

    /// True when the stored resolution is what the rules give for the throws.
    pub fn is_consistent(&self) -> bool {
        resolve(self.player, self.desired, self.computer) == self.resolution
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} vs {} (goal: {}) -> {}",
            self.player.glyph(),
            self.computer.glyph(),
            self.desired,
            self.result()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Score, ScriptedOpponent, Session, SessionError};

    #[test]
    fn test_play_uses_opponent_sign() {
        let mut opponent = ScriptedOpponent::repeating(Sign::Scissors);
        let round = Round::play(Sign::Rock, DesiredOutcome::Win, &mut opponent);
        assert_eq!(round.computer(), Sign::Scissors);
        assert_eq!(round.result(), RoundResult::Win);
        assert_eq!(round.delta(), 1);
    }

    #[test]
    fn test_display_mentions_goal() {
        let round = Round::resolve(Sign::Paper, DesiredOutcome::Lose, Sign::Scissors);
        assert_eq!(round.to_string(), "📄 vs ✂️ (goal: Lose) -> You Win!");
    }

    #[test]
    fn test_resolved_rounds_are_consistent() {
        for player in Sign::ALL {
            for computer in Sign::ALL {
                assert!(Round::resolve(player, DesiredOutcome::Win, computer).is_consistent());
            }
        }
    }

    /// Same-sign throws carrying a winning resolution.
    fn forged_draw() -> Round {
        Round {
            player: Sign::Rock,
            desired: DesiredOutcome::Win,
            computer: Sign::Rock,
            resolution: resolve(Sign::Rock, DesiredOutcome::Win, Sign::Scissors),
        }
    }

    #[test]
    fn test_mismatched_resolution_is_inconsistent() {
        assert!(!forged_draw().is_consistent());
    }

    #[test]
    fn test_session_rejects_inconsistent_round() {
        let mut session = Session::new();
        let before = session.clone();

        assert_eq!(
            session.record(forged_draw()),
            Err(SessionError::InconsistentRound)
        );
        assert_eq!(session, before);
        assert_eq!(session.state().round(), 0);
        assert_eq!(session.state().score(), Score::ZERO);
    }
}
