use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Screen, SearchFocus};

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let bindings: Vec<(&str, &str)> = match state.screen {
        Screen::Home => vec![
            ("↑/↓", "select"),
            ("1-5", "mode"),
            ("Enter", "start"),
            ("d", "dashboard"),
            ("b", "bookmarks"),
            ("/", "search"),
            ("q", "quit"),
        ],
        Screen::Config => vec![
            ("Tab", "next field"),
            ("←/→", "change"),
            ("0-9", "type"),
            ("Enter", "start quiz"),
            ("Esc", "back"),
        ],
        Screen::Loading => vec![],
        Screen::Quiz => vec![
            ("1-4", "answer"),
            ("Enter", "next"),
            ("s", "skip"),
            ("b", "bookmark"),
            ("Esc", "abandon"),
        ],
        Screen::Results => vec![
            ("e", "export"),
            ("d", "dashboard"),
            ("Enter", "home"),
        ],
        Screen::Dashboard => vec![("Enter/Esc", "home")],
        Screen::Bookmarks => vec![
            ("↑/↓", "select"),
            ("d", "remove"),
            ("c", "custom quiz"),
            ("Esc", "back"),
        ],
        Screen::Search => match state.search_focus {
            SearchFocus::Input => vec![
                ("type", "search term"),
                ("Enter", "search"),
                ("Tab", "results"),
                ("Esc", "back"),
            ],
            SearchFocus::Results => vec![
                ("↑/↓", "select"),
                ("b", "bookmark"),
                ("Tab", "input"),
                ("Esc", "input"),
            ],
        },
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
