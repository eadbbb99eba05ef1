//! Session state: score, round count, and the acknowledgment state machine.
//!
//! ```text
//! Playing ──play──▶ ShowingResult ──acknowledge──▶ Playing
//!    │
//!    └──play (round == limit)──▶ AwaitingReset ──acknowledge──▶ Playing (reset)
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

use crate::invariants::assert_invariants;
use crate::outcome::END_OF_GAME_BANNER;
use crate::{DesiredOutcome, Opponent, Round, RoundResult, Score, Sign};

/// Rounds per session unless configured otherwise.
pub const DEFAULT_ROUND_LIMIT: u32 = 10;

/// Errors from driving a session out of order.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// A result or end-of-session prompt must be acknowledged first.
    #[display("Acknowledge the current prompt before playing again")]
    AcknowledgmentPending,

    /// A session needs at least one round.
    #[display("Round limit must be at least 1, got {}", limit)]
    InvalidRoundLimit {
        /// The rejected limit.
        limit: u32,
    },

    /// The round's stored result does not follow from its throws.
    #[display("Round resolution does not match the rules for its signs")]
    InconsistentRound,
}

/// Why a prompt is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Per-round result.
    Round(RoundResult),
    /// The session limit was reached.
    EndOfGame,
}

/// A modal message the player must acknowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    kind: PromptKind,
    score: Score,
}

impl Prompt {
    /// What triggered the prompt.
    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    /// Upper-case banner title.
    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::Round(result) => result.banner(),
            PromptKind::EndOfGame => END_OF_GAME_BANNER,
        }
    }

    /// Body text shown under the title.
    pub fn message(&self) -> String {
        format!("Your score is: {}", self.score)
    }

    /// Whether acknowledging this prompt resets the session.
    pub fn resets_session(&self) -> bool {
        matches!(self.kind, PromptKind::EndOfGame)
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Ready for the next play action.
    #[default]
    Playing,
    /// A round result is waiting to be acknowledged.
    ShowingResult(Prompt),
    /// The session limit was reached; acknowledging resets.
    AwaitingReset(Prompt),
}

/// Mutable per-session values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    score: Score,
    round: u32,
    round_limit: u32,
    last_computer: Option<Sign>,
    rounds: Vec<Round>,
}

impl GameState {
    fn new(round_limit: u32) -> Self {
        Self {
            score: Score::ZERO,
            round: 0,
            round_limit,
            last_computer: None,
            rounds: Vec::new(),
        }
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Rounds played in this session.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Rounds per session.
    pub fn round_limit(&self) -> u32 {
        self.round_limit
    }

    /// Computer's most recent sign. `None` before the first round and after a reset.
    pub fn last_computer(&self) -> Option<Sign> {
        self.last_computer
    }

    /// Rounds resolved in this session, oldest first.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
}

/// Outcome of a play action, as the interface should report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct RoundReport {
    /// The resolved round.
    round: Round,
    /// Score after applying the round.
    score: Score,
    /// Round count after the play action (1-based).
    round_number: u32,
    /// The prompt the player now has to acknowledge.
    prompt: Prompt,
}

impl RoundReport {
    /// True when this round ended the session.
    pub fn session_over(&self) -> bool {
        self.prompt.resets_session()
    }
}

/// One player's session of up to `round_limit` rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: GameState,
    phase: SessionPhase,
}

impl Session {
    /// Creates a session with the default ten-round limit.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(DEFAULT_ROUND_LIMIT),
            phase: SessionPhase::Playing,
        }
    }

    /// Creates a session with a custom round limit.
    #[instrument]
    pub fn with_round_limit(limit: u32) -> Result<Self, SessionError> {
        if limit == 0 {
            warn!(limit, "Rejected round limit");
            return Err(SessionError::InvalidRoundLimit { limit });
        }
        Ok(Self {
            state: GameState::new(limit),
            phase: SessionPhase::Playing,
        })
    }

    /// Read-only view of the session values.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The prompt awaiting acknowledgment, if any.
    pub fn prompt(&self) -> Option<&Prompt> {
        match &self.phase {
            SessionPhase::Playing => None,
            SessionPhase::ShowingResult(prompt) | SessionPhase::AwaitingReset(prompt) => {
                Some(prompt)
            }
        }
    }

    /// True once the round limit is reached and until acknowledged.
    pub fn is_awaiting_reset(&self) -> bool {
        matches!(self.phase, SessionPhase::AwaitingReset(_))
    }

    /// Plays a round against `opponent` and applies it.
    #[instrument(skip(self, opponent), fields(round_count = self.state.round))]
    pub fn play<O: Opponent + ?Sized>(
        &mut self,
        player: Sign,
        desired: DesiredOutcome,
        opponent: &mut O,
    ) -> Result<RoundReport, SessionError> {
        self.ensure_playing()?;
        let round = Round::play(player, desired, opponent);
        self.record(round)
    }

    /// Applies an already resolved round.
    ///
    /// Increments the round count, applies the score delta with the zero
    /// floor, and raises either a result prompt or, on the final round, the
    /// end-of-session prompt. A round whose resolution disagrees with the
    /// rules is rejected and leaves the session untouched.
    #[instrument(skip(self), fields(round_count = self.state.round))]
    pub fn record(&mut self, round: Round) -> Result<RoundReport, SessionError> {
        self.ensure_playing()?;
        if !round.is_consistent() {
            warn!(round = %round, "Rejected inconsistent round");
            return Err(SessionError::InconsistentRound);
        }

        self.state.round += 1;
        self.state.score = self.state.score.apply(round.delta());
        self.state.last_computer = Some(round.computer());
        self.state.rounds.push(round);

        let session_over = self.state.round >= self.state.round_limit;
        let prompt = Prompt {
            kind: if session_over {
                PromptKind::EndOfGame
            } else {
                PromptKind::Round(round.result())
            },
            score: self.state.score,
        };

        self.phase = if session_over {
            info!(score = %self.state.score, "Session limit reached");
            SessionPhase::AwaitingReset(prompt)
        } else {
            SessionPhase::ShowingResult(prompt)
        };

        debug!(
            round = self.state.round,
            score = %self.state.score,
            result = ?round.result(),
            "Round recorded"
        );
        assert_invariants(self);

        Ok(RoundReport {
            round,
            score: self.state.score,
            round_number: self.state.round,
            prompt,
        })
    }

    /// Acknowledges the pending prompt.
    ///
    /// Dismisses a result prompt, or resets the session after the
    /// end-of-session prompt. Returns `false` when nothing was pending.
    #[instrument(skip(self))]
    pub fn acknowledge(&mut self) -> bool {
        match self.phase {
            SessionPhase::Playing => {
                debug!("Nothing to acknowledge");
                false
            }
            SessionPhase::ShowingResult(_) => {
                self.phase = SessionPhase::Playing;
                true
            }
            SessionPhase::AwaitingReset(_) => {
                self.reset();
                true
            }
        }
    }

    /// Restores the initial values, keeping the round limit.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(final_score = %self.state.score, "Resetting session");
        self.state = GameState::new(self.state.round_limit);
        self.phase = SessionPhase::Playing;
        assert_invariants(self);
    }

    fn ensure_playing(&self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Playing => Ok(()),
            _ => Err(SessionError::AcknowledgmentPending),
        }
    }
}

#[cfg(test)]
impl Session {
    /// Sets the phase without touching the state, bypassing every check.
    pub(crate) fn force_phase(&mut self, phase: SessionPhase) {
        self.phase = phase;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
