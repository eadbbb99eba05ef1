//! Non-interactive commands: one round, or a whole auto-played session.

use std::io::Write;

use roshambo_core::{DesiredOutcome, Opponent, Round, ScriptedOpponent, Sign};
use tracing::{info, instrument};

use crate::AppConfig;

/// Resolves one round and writes the result.
///
/// `computer` forces the computer's sign; otherwise it is drawn from the
/// configured opponent.
#[instrument(skip(config, out))]
pub fn run_round<W: Write>(
    config: &AppConfig,
    sign: Sign,
    goal: DesiredOutcome,
    computer: Option<Sign>,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut opponent: Box<dyn Opponent> = match computer {
        Some(forced) => Box::new(ScriptedOpponent::repeating(forced)),
        None => Box::new(config.opponent()),
    };

    let round = Round::play(sign, goal, &mut opponent);
    info!(round = %round, "Single round played");

    writeln!(out, "Player:   {} {} (goal: {})", sign.glyph(), sign, goal)?;
    writeln!(out, "Computer: {} {}", round.computer().glyph(), round.computer())?;
    writeln!(out, "{} ({:+})", round.result().banner(), round.delta())?;
    Ok(())
}

/// Plays a full session with the same picks every round and writes each round.
#[instrument(skip(config, out))]
pub fn run_session<W: Write>(
    config: &AppConfig,
    sign: Sign,
    goal: DesiredOutcome,
    rounds: Option<u32>,
    out: &mut W,
) -> anyhow::Result<()> {
    let config = match rounds {
        Some(limit) => config.clone().with_round_limit(limit)?,
        None => config.clone(),
    };
    let mut session = config.new_session()?;
    let mut opponent = config.opponent();

    loop {
        let report = session.play(sign, goal, &mut opponent)?;
        writeln!(
            out,
            "Round {:>2}: {}  score {}",
            report.round_number(),
            report.round(),
            report.score()
        )?;

        if report.session_over() {
            writeln!(out, "{} {}", report.prompt().title(), report.prompt().message())?;
            info!(score = %report.score(), "Auto-played session finished");
            break;
        }
        session.acknowledge();
    }

    Ok(())
}
