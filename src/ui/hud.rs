use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::{COLOR_ACCENT, COLOR_MUTED};

/// Renders the one-line score bar and returns the area left above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, score: u32) -> Rect {
    let [play_area, hud_row] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let [score_area, hint_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(10)]).areas(hud_row);

    frame.render_widget(
        Paragraph::new(score_line(score)).alignment(Alignment::Left),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from("[Q] quit"))
            .alignment(Alignment::Right)
            .style(Style::default().fg(COLOR_MUTED)),
        hint_area,
    );

    play_area
}

fn score_line(score: u32) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Score ", Style::default().fg(COLOR_MUTED)),
        Span::styled(
            score.to_string(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
    ])
}
