//! Sources of the computer's sign.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use crate::Sign;

/// Anything that can throw a sign for the computer.
pub trait Opponent {
    /// Draws the computer's sign for the next round.
    fn choose(&mut self) -> Sign;

    /// Display name for logs.
    fn name(&self) -> &str;
}

impl<O: Opponent + ?Sized> Opponent for &mut O {
    fn choose(&mut self) -> Sign {
        (**self).choose()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<O: Opponent + ?Sized> Opponent for Box<O> {
    fn choose(&mut self) -> Sign {
        (**self).choose()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Draws each sign uniformly at random, independently every round.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R = ChaCha8Rng> {
    rng: R,
}

impl RandomOpponent<ChaCha8Rng> {
    /// Opponent seeded from OS entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Opponent with a fixed seed, for replayable sessions.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomOpponent<R> {
    /// Wraps an existing random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    fn choose(&mut self) -> Sign {
        let index = self.rng.gen_range(0..Sign::ALL.len());
        let sign = Sign::ALL[index];
        debug!(sign = %sign, "Computer drew sign");
        sign
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Replays a fixed sequence of signs, cycling when exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedOpponent {
    script: Vec<Sign>,
    cursor: usize,
}

impl ScriptedOpponent {
    /// Creates a scripted opponent. Returns `None` for an empty script.
    #[instrument]
    pub fn new(script: Vec<Sign>) -> Option<Self> {
        if script.is_empty() {
            return None;
        }
        Some(Self { script, cursor: 0 })
    }

    /// Always throws the same sign.
    pub fn repeating(sign: Sign) -> Self {
        Self {
            script: vec![sign],
            cursor: 0,
        }
    }
}

impl Opponent for ScriptedOpponent {
    fn choose(&mut self) -> Sign {
        let sign = self.script[self.cursor % self.script.len()];
        self.cursor = (self.cursor + 1) % self.script.len();
        sign
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}
