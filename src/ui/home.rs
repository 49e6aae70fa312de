use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::QuizMode;
use crate::state::AppState;
use crate::tui;
use crate::ui::layout::centered_rect;

pub fn draw_home(f: &mut Frame, area: Rect, state: &AppState) {
    let modes = QuizMode::SELECTABLE.len();
    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Test your knowledge across subjects",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    for (i, mode) in QuizMode::SELECTABLE.iter().enumerate() {
        lines.push(menu_line(
            &format!("{}. {}", i + 1, mode.label()),
            state.home_cursor == i,
        ));
    }
    lines.push(Line::from(""));
    for (i, extra) in tui::home_extras().iter().enumerate() {
        lines.push(menu_line(extra, state.home_cursor == modes + i));
    }

    lines.push(Line::from(""));
    if state.progress.quizzes_taken > 0 {
        lines.push(Line::from(Span::styled(
            format!(
                "  {} quizzes taken, average score {}%",
                state.progress.quizzes_taken,
                state.progress.average_score()
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let rect = centered_rect(46, lines.len() as u16 + 2, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Welcome ")
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}

fn menu_line(text: &str, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("  > {}", text),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(format!("    {}", text))
    }
}
