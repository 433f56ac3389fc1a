use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::{COLOR_ACCENT, COLOR_MUTED};
use crate::ui::MatchResult;

/// Draws the title screen as a centered popup.
pub fn render_title_panel(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 80, 45);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
        title_row,
    );

    let body = vec![
        Line::from("[Enter]/[Space] Play"),
        Line::from("[I] About"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" title ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Arrows or WASD to steer"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(COLOR_MUTED)),
        footer_row,
    );
}

/// Draws the about screen.
pub fn render_about_panel(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 90, 60);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("ABOUT"),
        Line::from(""),
        Line::from("Eat the fruit to grow and score."),
        Line::from("Edges wrap around to the other side."),
        Line::from("Running into yourself ends the game."),
        Line::from("Fill the whole board to clear it."),
        Line::from(""),
        Line::from("[Esc]/[Backspace] Back"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" about ")),
        popup,
    );
}

/// Draws the end-of-match screen with the final score.
pub fn render_lose_panel(frame: &mut Frame<'_>, area: Rect, result: Option<MatchResult>) {
    let popup = centered_popup(area, 80, 40);
    frame.render_widget(Clear, popup);

    let (headline, final_score) = match result {
        Some(MatchResult::BoardCleared { final_score }) => ("BOARD CLEARED", final_score),
        Some(MatchResult::Collided { final_score }) => ("GAME OVER", final_score),
        None => ("GAME OVER", 0),
    };

    let lines = vec![
        Line::from(headline),
        Line::from(""),
        Line::from(format!("Final score: {final_score}")),
        Line::from(""),
        Line::from("[Enter]/[Space] Play again"),
        Line::from("[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
