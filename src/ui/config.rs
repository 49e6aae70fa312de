use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::{DifficultyFilter, QuizMode};
use crate::state::{AppState, ConfigField};
use crate::ui::layout::centered_rect;

pub fn draw_config(f: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.config;
    let mut lines: Vec<Line> = vec![Line::from("")];

    if form.mode == QuizMode::SubjectSpecific {
        let subjects = state.catalog.subjects();
        let subject = subjects
            .get(form.subject_cursor)
            .map(String::as_str)
            .unwrap_or("-");
        lines.push(field_line(
            "Subject",
            &format!("< {} >", subject),
            form.field == ConfigField::Subject,
        ));
    }

    lines.push(field_line(
        "Questions",
        &form.count_input,
        form.field == ConfigField::Count,
    ));

    if form.mode == QuizMode::Adaptive {
        lines.push(Line::from(Span::styled(
            format!(
                "    Difficulty   chosen from your average ({})",
                state.adaptive_difficulty().label()
            ),
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(field_line(
            "Difficulty",
            &format!("< {} >", DifficultyFilter::ALL[form.difficulty_cursor].label()),
            form.field == ConfigField::Difficulty,
        ));
    }

    if form.mode == QuizMode::Timed {
        lines.push(field_line(
            "Time limit (s)",
            &form.time_limit_input,
            form.field == ConfigField::TimeLimit,
        ));
    }

    if !form.errors.is_empty() {
        lines.push(Line::from(""));
        for err in &form.errors {
            lines.push(Line::from(Span::styled(
                format!("    {}", err),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "    [Enter] Start quiz    [Esc] Back",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    let rect = centered_rect(52, lines.len() as u16 + 2, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", form.mode.label()))
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "  > " } else { "    " };
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{}{:<14}", marker, label), style),
        Span::styled(value.to_string(), style),
    ])
}
