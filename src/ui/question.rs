use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::{QuizMode, SKIPPED};
use crate::state::AppState;

pub fn draw_quiz(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(session) = state.session.as_ref() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };

    let practice = session.config.mode == QuizMode::Practice;
    let show_explanation = practice && state.explanation_shown;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // progress
            Constraint::Min(8),    // question + options
            Constraint::Length(if show_explanation { 6 } else { 0 }),
        ])
        .split(area);

    draw_progress(f, chunks[0], state);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", question.subject),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw("  "),
            Span::styled(
                question.difficulty.label(),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("  "),
            Span::styled(&question.category, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            question.text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let picked = session.current_answer().map(|a| a.selected);
    for (i, option) in question.options.iter().enumerate() {
        let selected = picked == Some(i as i32);
        let marker = if selected {
            state.caps.icon("●", "*")
        } else {
            state.caps.icon("○", "o")
        };
        let mut style = Style::default();
        if selected {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        // Practice reveals right and wrong once answered.
        if show_explanation {
            if i == question.correct {
                style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
            } else if selected {
                style = Style::default().fg(Color::Red);
            }
        }
        lines.push(Line::from(Span::styled(
            format!("  {} {}. {}", marker, i + 1, option),
            style,
        )));
    }

    if picked == Some(SKIPPED) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Skipped",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " Question {} of {} ",
            session.current + 1,
            session.questions.len()
        ))
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        chunks[1],
    );

    if show_explanation {
        let was_correct = session.current_answer().map_or(false, |a| a.correct);
        draw_explanation(f, chunks[2], state, was_correct);
    }
}

fn draw_progress(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(session) = state.session.as_ref() else {
        return;
    };
    let total = session.questions.len().max(1);
    let answered = session.answers.len().min(total);
    let ratio = answered as f64 / total as f64;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{} / {} answered", answered, total));
    f.render_widget(gauge, area);
}

fn draw_explanation(f: &mut Frame, area: Rect, state: &AppState, was_correct: bool) {
    let Some(question) = state
        .session
        .as_ref()
        .and_then(|s| s.current_question())
    else {
        return;
    };

    let (verdict, color) = if was_correct {
        ("Correct!", Color::Green)
    } else {
        ("Not quite.", Color::Red)
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", verdict),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(format!(" {}", question.explanation))),
        Line::from(""),
        Line::from(Span::styled(
            " [Enter] Next question",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Explanation ")
        .border_style(Style::default().fg(color));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
