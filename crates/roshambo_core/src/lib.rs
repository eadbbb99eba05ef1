//! Rock-paper-scissors game logic.
//!
//! The player throws a [`Sign`] and declares a [`DesiredOutcome`]: score by
//! beating the computer, or score by losing to it. The computer's sign comes
//! from an [`Opponent`]. [`rules::resolve`] turns the three into a
//! [`RoundResult`] and a score delta, and a [`Session`] applies rounds to a
//! running [`Score`] until the round limit is reached.
//!
//! # Example
//!
//! ```
//! use roshambo_core::{DesiredOutcome, ScriptedOpponent, Session, Sign};
//!
//! let mut session = Session::new();
//! let mut computer = ScriptedOpponent::repeating(Sign::Scissors);
//!
//! let report = session.play(Sign::Rock, DesiredOutcome::Win, &mut computer)?;
//! assert_eq!(report.prompt().title(), "YOU WIN!");
//! assert_eq!(session.state().score().value(), 1);
//! # Ok::<(), roshambo_core::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod invariants;
mod opponent;
mod outcome;
mod round;
pub mod rules;
mod score;
mod session;
mod sign;

pub use opponent::{Opponent, RandomOpponent, ScriptedOpponent};
pub use outcome::{DesiredOutcome, END_OF_GAME_BANNER, RoundResult};
pub use round::Round;
pub use rules::{Resolution, resolve};
pub use score::Score;
pub use session::{
    DEFAULT_ROUND_LIMIT, GameState, Prompt, PromptKind, RoundReport, Session, SessionError,
    SessionPhase,
};
pub use sign::Sign;
