use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, SearchFocus};
use crate::widgets;

pub fn draw_search(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    let input_focused = state.search_focus == SearchFocus::Input;
    let cursor = if input_focused { "_" } else { "" };
    let input_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("{}{}", state.search_input, cursor),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(" Search Questions ")
        .border_style(Style::default().fg(if input_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    f.render_widget(Paragraph::new(input_line).block(input_block), chunks[0]);

    let height = chunks[1].height.saturating_sub(2) as usize;
    let (start, end) = widgets::visible_window(
        state.search_results.len(),
        height,
        state.search_cursor,
        0,
    );

    let mut lines: Vec<Line> = Vec::new();
    if state.search_results.is_empty() {
        lines.push(Line::from(Span::styled(
            " Type a term and press Enter. Matches text, category and subject.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, q) in state.search_results[start..end].iter().enumerate() {
        let idx = start + i;
        let selected = state.search_focus == SearchFocus::Results && idx == state.search_cursor;
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
                format!("  [{} / {}]", q.subject, q.difficulty.label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let results_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Results ({}) ", state.search_results.len()))
        .border_style(Style::default().fg(if input_focused {
            Color::DarkGray
        } else {
            Color::Cyan
        }));
    f.render_widget(Paragraph::new(lines).block(results_block), chunks[1]);
}
