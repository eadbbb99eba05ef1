//! Focus movement and picker selection for keyboard navigation.

use crossterm::event::KeyCode;
use roshambo_core::{DesiredOutcome, Sign};

/// Control that currently receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The player's sign picker.
    #[default]
    Sign,
    /// The win/lose picker.
    Goal,
    /// The Play button.
    Play,
}

impl Focus {
    /// Next control, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Focus::Sign => Focus::Goal,
            Focus::Goal => Focus::Play,
            Focus::Play => Focus::Sign,
        }
    }

    /// Previous control, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Focus::Sign => Focus::Play,
            Focus::Goal => Focus::Sign,
            Focus::Play => Focus::Goal,
        }
    }
}

/// The player's picks for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Sign to throw.
    pub sign: Sign,
    /// Goal to declare.
    pub goal: DesiredOutcome,
}

/// Moves focus for Tab/BackTab and Up/Down.
pub fn move_focus(focus: Focus, key: KeyCode) -> Focus {
    match key {
        KeyCode::Tab | KeyCode::Down => focus.next(),
        KeyCode::BackTab | KeyCode::Up => focus.previous(),
        _ => focus,
    }
}

/// Changes the focused picker's value for Left/Right, and applies the
/// direct shortcuts (1/2/3 for signs, w/l for goals) regardless of focus.
pub fn adjust_selection(focus: Focus, selection: Selection, key: KeyCode) -> Selection {
    let Selection { sign, goal } = selection;

    match (focus, key) {
        (Focus::Sign, KeyCode::Right) => Selection { sign: sign.next(), goal },
        (Focus::Sign, KeyCode::Left) => Selection { sign: sign.previous(), goal },
        (Focus::Goal, KeyCode::Left | KeyCode::Right) => Selection { sign, goal: goal.toggle() },

        (_, KeyCode::Char(c @ '1'..='3')) => {
            let index = c as usize - '1' as usize;
            Selection { sign: Sign::from_index(index).unwrap_or(sign), goal }
        }
        (_, KeyCode::Char('w' | 'W')) => Selection { sign, goal: DesiredOutcome::Win },
        (_, KeyCode::Char('l' | 'L')) => Selection { sign, goal: DesiredOutcome::Lose },

        // No change for other keys
        _ => selection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Selection = Selection {
        sign: Sign::Paper,
        goal: DesiredOutcome::Win,
    };

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut focus = Focus::Sign;
        for _ in 0..3 {
            focus = move_focus(focus, KeyCode::Tab);
        }
        assert_eq!(focus, Focus::Sign);
        assert_eq!(move_focus(Focus::Sign, KeyCode::Up), Focus::Play);
        assert_eq!(move_focus(Focus::Goal, KeyCode::Left), Focus::Goal);
    }

    #[test]
    fn test_arrows_change_focused_picker_only() {
        let moved = adjust_selection(Focus::Sign, START, KeyCode::Right);
        assert_eq!(moved, Selection { sign: Sign::Scissors, ..START });

        let toggled = adjust_selection(Focus::Goal, START, KeyCode::Left);
        assert_eq!(toggled, Selection { goal: DesiredOutcome::Lose, ..START });

        assert_eq!(adjust_selection(Focus::Play, START, KeyCode::Right), START);
    }

    #[test]
    fn test_shortcuts_ignore_focus() {
        let picked = adjust_selection(Focus::Play, START, KeyCode::Char('1'));
        assert_eq!(picked.sign, Sign::Rock);
        let picked = adjust_selection(Focus::Play, picked, KeyCode::Char('3'));
        assert_eq!(picked.sign, Sign::Scissors);
        let picked = adjust_selection(Focus::Sign, picked, KeyCode::Char('l'));
        assert_eq!(picked.goal, DesiredOutcome::Lose);
    }
}
