use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, Dialog};
use crate::ui::layout::centered_rect;

pub fn draw_dialog(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(dialog) = state.top_dialog() else {
        return;
    };

    match dialog {
        Dialog::ConfirmQuit => draw_confirm(
            f,
            area,
            "Quit QuizGenius?",
            "Progress for this run is kept in memory only.",
        ),
        Dialog::ConfirmAbandon => draw_confirm(
            f,
            area,
            "Abandon this quiz?",
            "Answers so far will be discarded.",
        ),
        Dialog::Help => draw_help(f, area),
    }
}

fn draw_confirm(f: &mut Frame, area: Rect, title: &str, detail: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("   {}", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("   {}", detail)),
        Line::from(""),
        Line::from(vec![
            Span::styled("   [Enter] Confirm", Style::default().fg(Color::Green)),
            Span::raw("    "),
            Span::styled("[Esc] Cancel", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    let rect = centered_rect(50, lines.len() as u16, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Key Bindings",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("   1-5        Pick a quiz mode (home)"),
        Line::from("   1-4        Pick an answer (quiz)"),
        Line::from("   Enter      Confirm / next question"),
        Line::from("   s          Skip the question"),
        Line::from("   b          Bookmark the question"),
        Line::from("   d          Dashboard"),
        Line::from("   /          Search the catalog"),
        Line::from("   e          Export results (results screen)"),
        Line::from("   Ctrl+Q     Quit from anywhere"),
        Line::from("   ?          This help"),
        Line::from("   Esc        Back / close dialog"),
        Line::from(""),
        Line::from(Span::styled(
            "        [Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let rect = centered_rect(44, lines.len() as u16, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), rect);
}
