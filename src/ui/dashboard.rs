use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::achievements;
use crate::progress;
use crate::state::AppState;

pub fn draw_dashboard(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // stats
            Constraint::Min(8),    // achievements + subjects
            Constraint::Length(6), // trend
        ])
        .split(area);

    draw_stats(f, chunks[0], state);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    draw_achievements(f, middle[0], state);
    draw_subjects(f, middle[1], state);
    draw_trend(f, chunks[2], state);
}

fn draw_stats(f: &mut Frame, area: Rect, state: &AppState) {
    let p = &state.progress;
    let streak_icon = state.caps.icon("🔥", "~");
    let lines = vec![
        Line::from(vec![
            Span::raw(format!(" Quizzes taken: {:<6}", p.quizzes_taken)),
            Span::raw(format!("Average score: {}%   ", p.average_score())),
            Span::styled(
                format!("{} {} day streak", streak_icon, p.streak_days),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                " Achievements earned: {} of {}",
                p.achievements.len(),
                achievements::display_catalog(&state.catalog.subjects()).len()
            ),
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Your Progress ")
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_achievements(f: &mut Frame, area: Rect, state: &AppState) {
    let catalog = achievements::display_catalog(&state.catalog.subjects());
    let mut lines: Vec<Line> = Vec::new();

    for achievement in &catalog {
        let earned = state.progress.has_achievement(&achievement.id);
        let icon = if earned {
            state.caps.icon(achievement.icon, "*")
        } else {
            state.caps.icon("🔒", "-")
        };
        let style = if earned {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} {:<18}", icon, achievement.name), style),
            Span::styled(
                achievement.description.clone(),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Achievements ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_subjects(f: &mut Frame, area: Rect, state: &AppState) {
    let averages = progress::subject_averages(&state.progress);
    let mut lines: Vec<Line> = Vec::new();

    if averages.is_empty() {
        lines.push(Line::from(Span::styled(
            " No subject data yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (subject, avg) in &averages {
        let width = 12usize;
        let filled = (*avg as usize * width) / 100;
        let bar: String = state
            .caps
            .icon("█", "#")
            .repeat(filled)
            + &state.caps.icon("░", ".").repeat(width - filled);
        lines.push(Line::from(vec![
            Span::raw(format!(" {:<18}", subject)),
            Span::styled(bar, Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {:>3}%", avg)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Subject Averages ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_trend(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    match progress::trend(&state.progress) {
        Some(points) => {
            // Most recent days last; show what fits.
            let take = (area.height.saturating_sub(2)) as usize;
            let start = points.len().saturating_sub(take.max(1));
            for (date, score) in &points[start..] {
                let width = 30usize;
                let filled = (*score as usize * width) / 100;
                let bar: String = state.caps.icon("▇", "=").repeat(filled.max(1));
                lines.push(Line::from(vec![
                    Span::raw(format!(" {} ", date.format("%Y-%m-%d"))),
                    Span::styled(bar, Style::default().fg(Color::Green)),
                    Span::raw(format!(" {}%", score)),
                ]));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                " Not enough data yet. Take at least two quizzes to see your trend.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Score Trend ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}
