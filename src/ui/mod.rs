pub mod bookmarks;
pub mod config;
pub mod dashboard;
pub mod dialog;
pub mod home;
pub mod keybar;
pub mod layout;
pub mod loading;
pub mod question;
pub mod results;
pub mod search;
pub mod titlebar;
pub mod toast;

use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    keybar::draw_keybar(f, layout.keybar, state);

    match state.screen {
        Screen::Home => home::draw_home(f, layout.body, state),
        Screen::Config => config::draw_config(f, layout.body, state),
        Screen::Loading => loading::draw_loading(f, layout.body, state),
        Screen::Quiz => question::draw_quiz(f, layout.body, state),
        Screen::Results => results::draw_results(f, layout.body, state),
        Screen::Dashboard => dashboard::draw_dashboard(f, layout.body, state),
        Screen::Bookmarks => bookmarks::draw_bookmarks(f, layout.body, state),
        Screen::Search => search::draw_search(f, layout.body, state),
    }

    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
    if !state.toasts.is_empty() {
        toast::draw_toasts(f, area, state);
    }
}
