use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, LOADING_DELAY};
use crate::ui::layout::centered_rect;

pub fn draw_loading(f: &mut Frame, area: Rect, state: &AppState) {
    // Dots march with the remaining delay.
    let remaining = state
        .loading_until
        .map(|t| t.saturating_duration_since(std::time::Instant::now()))
        .unwrap_or_default();
    let step = ((LOADING_DELAY.as_millis().saturating_sub(remaining.as_millis())) / 400) % 4;
    let dots = ".".repeat(step as usize);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("   Generating your quiz{:<3}", dots),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "   Picking questions and shuffling options",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    let rect = centered_rect(48, lines.len() as u16 + 2, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Left),
        rect,
    );
}
