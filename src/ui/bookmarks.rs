use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::session::CUSTOM_QUIZ_MAX;
use crate::state::AppState;
use crate::widgets;

pub fn draw_bookmarks(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    if state.bookmarks.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " No bookmarks yet. Press b on a question to save it here.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let height = area.height.saturating_sub(4) as usize;
        let (start, end) =
            widgets::visible_window(state.bookmarks.len(), height, state.bookmarks_cursor, 0);

        for (i, q) in state.bookmarks[start..end].iter().enumerate() {
            let idx = start + i;
            let selected = idx == state.bookmarks_cursor;
            let marker = if selected { ">" } else { " " };
            let style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} {}", marker, q.text), style),
                Span::styled(
                    format!("  [{}]", q.subject),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                " [c] Custom quiz from bookmarks (first {} questions)",
                CUSTOM_QUIZ_MAX.min(state.bookmarks.len())
            ),
            Style::default().fg(Color::Gray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Bookmarked Questions ({}) ", state.bookmarks.len()))
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
