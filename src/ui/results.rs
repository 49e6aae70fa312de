use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;
use crate::util;
use crate::widgets;

pub fn draw_results(f: &mut Frame, area: Rect, state: &AppState) {
    if state.results.is_none() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // score ring + totals
            Constraint::Min(6),    // breakdown + achievements
            Constraint::Length(2 + state.suggestions.len() as u16),
        ])
        .split(area);

    draw_score(f, chunks[0], state);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    draw_breakdown(f, middle[0], state);
    draw_achievements(f, middle[1], state);
    draw_suggestions(f, chunks[2], state);
}

fn draw_score(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(results) = state.results.as_ref() else {
        return;
    };
    let shown = state.score_counter.value();

    let ring = widgets::ring_lines(shown, state.caps.unicode);
    let mut lines: Vec<Line> = vec![Line::from("")];
    for (i, row) in ring.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("   {}", row),
            Style::default().fg(score_color(results.score)),
        )];
        if i == 2 {
            spans.push(Span::styled(
                format!("   {:>3}%", shown),
                Style::default()
                    .fg(score_color(results.score))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(
                "   {} correct, {} incorrect, {} total",
                results.correct, results.incorrect, results.total
            )));
        }
        if i == 3 {
            spans.push(Span::raw(format!(
                "          Time: {}  (avg {}/question)",
                util::format_elapsed(results.total_time_ms),
                util::format_elapsed(results.avg_time_ms)
            )));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Quiz Complete ")
        .border_style(Style::default().fg(score_color(results.score)));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn score_color(score: u32) -> Color {
    match score {
        0..=59 => Color::Red,
        60..=79 => Color::Yellow,
        _ => Color::Green,
    }
}

fn draw_breakdown(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(results) = state.results.as_ref() else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    for (subject, stats) in &results.breakdown {
        lines.push(Line::from(vec![
            Span::raw(format!(" {:<18}", subject)),
            Span::styled(
                format!("{:>3}%", stats.percentage),
                Style::default().fg(score_color(stats.percentage)),
            ),
            Span::styled(
                format!("  ({}/{})", stats.correct, stats.total),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Subject Breakdown ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_achievements(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(results) = state.results.as_ref() else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    if results.new_achievements.is_empty() {
        lines.push(Line::from(Span::styled(
            " No new achievements this time",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for achievement in &results.new_achievements {
            let icon = state.caps.icon(achievement.icon, "*");
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} {}", icon, achievement.name),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", achievement.description),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New Achievements ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_suggestions(f: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = state
        .suggestions
        .iter()
        .map(|s| Line::from(format!(" - {}", s)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggestions ");
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
