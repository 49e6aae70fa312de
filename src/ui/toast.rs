use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::state::AppState;
use crate::toast::ToastKind;

/// Stack active toasts in the top-right corner, newest at the bottom.
pub fn draw_toasts(f: &mut Frame, area: Rect, state: &AppState) {
    let width = 44u16.min(area.width);
    let x = area.x + area.width.saturating_sub(width);
    let mut y = area.y + 1;

    for toast in state.toasts.iter() {
        if y + 3 > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, 3);
        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
            ToastKind::Warning => Color::Yellow,
            ToastKind::Info => Color::Cyan,
        };
        let icon = toast.kind.icon(state.caps.unicode);
        let line = Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::raw(toast.message.clone()),
        ]);

        f.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        f.render_widget(Paragraph::new(line).block(block), rect);
        y += 3;
    }
}
