//! Session invariants.
//!
//! Logical properties that hold after every session mutation. They are
//! checked in debug builds and can be tested independently.

use tracing::{instrument, warn};

use crate::{Session, SessionPhase};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Round count never exceeds the session limit.
pub struct RoundWithinLimit;

impl Invariant<Session> for RoundWithinLimit {
    fn holds(session: &Session) -> bool {
        session.state().round() <= session.state().round_limit()
    }

    fn description() -> &'static str {
        "Round count must not exceed the round limit"
    }
}

/// One recorded round per play action.
pub struct HistoryMatchesRound;

impl Invariant<Session> for HistoryMatchesRound {
    fn holds(session: &Session) -> bool {
        session.state().rounds().len() == session.state().round() as usize
    }

    fn description() -> &'static str {
        "Recorded rounds must match the round count"
    }
}

/// Each round adds at most one point.
pub struct ScoreBoundedByRounds;

impl Invariant<Session> for ScoreBoundedByRounds {
    fn holds(session: &Session) -> bool {
        session.state().score().value() <= session.state().round()
    }

    fn description() -> &'static str {
        "Score must not exceed the number of rounds played"
    }
}

/// The reset prompt is raised exactly when the limit is reached.
pub struct PhaseMatchesRound;

impl Invariant<Session> for PhaseMatchesRound {
    fn holds(session: &Session) -> bool {
        let at_limit = session.state().round() == session.state().round_limit();
        match session.phase() {
            SessionPhase::AwaitingReset(_) => at_limit,
            SessionPhase::ShowingResult(_) => !at_limit && session.state().round() > 0,
            SessionPhase::Playing => !at_limit,
        }
    }

    fn description() -> &'static str {
        "Session must await reset exactly when the round limit is reached"
    }
}

/// All session invariants.
pub type SessionInvariants = (
    RoundWithinLimit,
    HistoryMatchesRound,
    ScoreBoundedByRounds,
    PhaseMatchesRound,
);

/// Asserts that all session invariants hold (debug builds only).
#[instrument(skip(session))]
pub fn assert_invariants(session: &Session) {
    if cfg!(debug_assertions)
        && let Err(violations) = SessionInvariants::check_all(session)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Session invariant violated");
        }
        debug_assert!(violations.is_empty(), "Session invariants violated: {:?}", violations);
    }
}
