//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};
use roshambo_core::{DesiredOutcome, Prompt, Sign};

use super::app::App;
use super::input::Focus;

/// Shown in place of the computer's sign before the first round.
const UNKNOWN_GLYPH: &str = "👀";

/// Renders the whole screen, plus the prompt popup when one is pending.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(5), // Computer choice
            Constraint::Length(3), // Player choice
            Constraint::Length(3), // Game mode
            Constraint::Length(4), // Score and round
            Constraint::Length(3), // Play button
            Constraint::Min(3),    // Status
        ])
        .split(area);

    let title = Paragraph::new("Game 🪨 📄 ✂️")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_computer_choice(frame, chunks[1], app);
    draw_sign_picker(frame, chunks[2], app);
    draw_goal_picker(frame, chunks[3], app);
    draw_scoreboard(frame, chunks[4], app);
    draw_play_button(frame, chunks[5], app);

    let help = if app.session().prompt().is_some() {
        "Enter: Continue | q: Quit"
    } else {
        "Tab/↑↓: Focus | ←→: Change | 1-3: Sign | w/l: Goal | Enter: Play | q: Quit"
    };
    let status = Paragraph::new(vec![
        Line::from(Span::styled(
            app.status_message().to_string(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[6]);

    if let Some(prompt) = app.session().prompt() {
        draw_prompt(frame, area, prompt);
    }
}

fn focused_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn draw_computer_choice(frame: &mut Frame, area: Rect, app: &App) {
    let (glyph, label) = match app.session().state().last_computer() {
        Some(sign) => (sign.glyph(), sign.label()),
        None => (UNKNOWN_GLYPH, "Waiting"),
    };

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(glyph, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(label),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("App Choice 🤖"));
    frame.render_widget(paragraph, area);
}

fn draw_sign_picker(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Sign::ALL
        .iter()
        .map(|sign| Line::from(format!("{} {}", sign.glyph(), sign.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.selection().sign.index())
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(focused_block("Player Choice", app.focus() == Focus::Sign));
    frame.render_widget(tabs, area);
}

fn draw_goal_picker(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = DesiredOutcome::ALL
        .iter()
        .map(|goal| Line::from(goal.label()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.selection().goal.index())
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(focused_block("Game Mode 🕹️", app.focus() == Focus::Goal));
    frame.render_widget(tabs, area);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.session().state();
    let paragraph = Paragraph::new(vec![
        Line::from(format!("Score: {}", state.score())),
        Line::from(format!("Round: {} / {}", state.round(), state.round_limit())),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_play_button(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Play;
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new(Span::styled("[ Play ]", style))
        .alignment(Alignment::Center)
        .block(focused_block("", focused));
    frame.render_widget(button, center_rect(area, 20, area.height));
}

fn draw_prompt(frame: &mut Frame, area: Rect, prompt: &Prompt) {
    let popup = center_rect(area, 36, 7);
    frame.render_widget(Clear, popup);

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            prompt.title(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(prompt.message()),
        Line::from(Span::styled("[ Continue ]", Style::default().fg(Color::Green))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
