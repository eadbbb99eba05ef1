//! Tests for the session lifecycle.

use roshambo_core::{
    DEFAULT_ROUND_LIMIT, DesiredOutcome, Opponent, PromptKind, RandomOpponent, Round, Score,
    ScriptedOpponent, Session, SessionError, SessionPhase, Sign,
};

/// Plays one round and dismisses the prompt, returning whether it ended the session.
fn play_and_continue(session: &mut Session, opponent: &mut impl Opponent) -> bool {
    let report = session
        .play(Sign::Paper, DesiredOutcome::Win, opponent)
        .expect("session should accept a play");
    let over = report.session_over();
    if !over {
        assert!(session.acknowledge());
    }
    over
}

#[test]
fn test_round_count_increments_once_per_play() {
    let mut session = Session::new();
    let mut opponent = RandomOpponent::seeded(1);
    for expected in 1..DEFAULT_ROUND_LIMIT {
        assert!(!play_and_continue(&mut session, &mut opponent));
        assert_eq!(session.state().round(), expected);
    }
}

#[test]
fn test_tenth_play_marks_session_for_reset() {
    let mut session = Session::new();
    let mut opponent = ScriptedOpponent::repeating(Sign::Rock);

    for _ in 0..9 {
        assert!(!play_and_continue(&mut session, &mut opponent));
    }
    assert!(!session.is_awaiting_reset());

    assert!(play_and_continue(&mut session, &mut opponent));
    assert!(session.is_awaiting_reset());
    assert_eq!(session.state().round(), 10);
    assert_eq!(session.state().score(), Score::new(10));

    let prompt = session.prompt().expect("end prompt");
    assert_eq!(prompt.kind(), PromptKind::EndOfGame);
    assert_eq!(prompt.title(), "END OF THE GAME!");
    assert_eq!(prompt.message(), "Your score is: 10");
}

#[test]
fn test_reset_clears_score_round_and_computer_choice() {
    let mut session = Session::new();
    let mut opponent = ScriptedOpponent::repeating(Sign::Rock);
    while !play_and_continue(&mut session, &mut opponent) {}

    assert_eq!(session.state().last_computer(), Some(Sign::Rock));
    assert!(session.acknowledge());

    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.state().score(), Score::ZERO);
    assert_eq!(session.state().round(), 0);
    assert_eq!(session.state().last_computer(), None);
    assert!(session.state().rounds().is_empty());
}

#[test]
fn test_no_play_while_awaiting_reset() {
    let mut session = Session::with_round_limit(1).unwrap();
    session
        .record(Round::resolve(Sign::Rock, DesiredOutcome::Win, Sign::Rock))
        .unwrap();
    assert!(session.is_awaiting_reset());

    let mut opponent = ScriptedOpponent::repeating(Sign::Paper);
    assert_eq!(
        session.play(Sign::Rock, DesiredOutcome::Win, &mut opponent),
        Err(SessionError::AcknowledgmentPending)
    );
    assert_eq!(session.state().round(), 1);
}

#[test]
fn test_three_losses_from_zero_stay_at_zero() {
    let mut session = Session::new();
    // Paper/Win against scissors misses the goal.
    let mut opponent = ScriptedOpponent::repeating(Sign::Scissors);
    for _ in 0..3 {
        play_and_continue(&mut session, &mut opponent);
    }
    assert_eq!(session.state().score(), Score::ZERO);
}

#[test]
fn test_score_recovers_after_floor() {
    let mut session = Session::new();
    let mut opponent =
        ScriptedOpponent::new(vec![Sign::Scissors, Sign::Scissors, Sign::Rock]).unwrap();
    for _ in 0..3 {
        play_and_continue(&mut session, &mut opponent);
    }
    // lose, lose (floored), win
    assert_eq!(session.state().score(), Score::new(1));
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let run = |seed| {
        let mut session = Session::new();
        let mut opponent = RandomOpponent::seeded(seed);
        while !play_and_continue(&mut session, &mut opponent) {}
        session.state().rounds().to_vec()
    };
    assert_eq!(run(99), run(99));
}
