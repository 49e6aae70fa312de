use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::logger;
use crate::model::*;
use crate::report;
use crate::session;
use crate::state::*;
use crate::timer::TimerEvent;
use crate::toast::ToastKind;
use crate::validate::{Rule, Validator};

/// Home menu entries below the quiz modes.
const HOME_EXTRAS: [&str; 4] = ["Dashboard", "Bookmarked Questions", "Search Questions", "Quit"];

pub fn home_menu_len() -> usize {
    QuizMode::SELECTABLE.len() + HOME_EXTRAS.len()
}

pub fn home_extras() -> &'static [&'static str] {
    &HOME_EXTRAS
}

pub fn run_tui(mut state: AppState) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let result = main_loop(&mut terminal, &mut state);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            if let Event::Key(key) = event::read().map_err(|e| format!("Read error: {}", e))? {
                handle_key(key, state);
            }
        }

        drain_timer(state);
        tick(state);
    }

    Ok(())
}

/// Per-pass housekeeping: toast expiry, the loading deadline, and the
/// results count-up animation.
fn tick(state: &mut AppState) {
    state.toasts.prune();

    if state.screen == Screen::Loading {
        if let Some(deadline) = state.loading_until {
            if Instant::now() >= deadline {
                state.finish_loading();
                if state.screen == Screen::Quiz {
                    logger::log("quiz session started");
                }
            }
        }
    }

    if state.screen == Screen::Results && !state.score_counter.done() {
        state.score_counter.tick();
    }
}

fn drain_timer(state: &mut AppState) {
    let events = match &state.timer {
        Some(timer) => timer.try_events(),
        None => return,
    };

    for ev in events {
        match ev {
            TimerEvent::Tick(secs) => {
                state.remaining_secs = Some(secs);
            }
            TimerEvent::Warning => {
                state
                    .toasts
                    .push("One minute remaining!", ToastKind::Warning);
            }
            TimerEvent::Expired => {
                if let Some(session) = state.session.as_mut() {
                    session.expire();
                }
                state
                    .toasts
                    .push("Time's up! Quiz completed.", ToastKind::Warning);
                state.complete_session();
                logger::log("quiz session expired");
            }
        }
    }
}

fn handle_key(key: KeyEvent, state: &mut AppState) {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.push_dialog(Dialog::ConfirmQuit);
        return;
    }

    if state.has_dialog() {
        handle_dialog_key(key, state);
        return;
    }

    match state.screen {
        Screen::Home => handle_home_key(key, state),
        Screen::Config => handle_config_key(key, state),
        Screen::Loading => {}
        Screen::Quiz => handle_quiz_key(key, state),
        Screen::Results => handle_results_key(key, state),
        Screen::Dashboard => handle_passive_key(key, state),
        Screen::Bookmarks => handle_bookmarks_key(key, state),
        Screen::Search => handle_search_key(key, state),
    }
}

fn handle_home_key(key: KeyEvent, state: &mut AppState) {
    let total = home_menu_len();
    match key.code {
        KeyCode::Up => {
            state.home_cursor = (state.home_cursor + total - 1) % total;
        }
        KeyCode::Down => {
            state.home_cursor = (state.home_cursor + 1) % total;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as u8 - b'1') as usize;
            state.home_cursor = idx;
            activate_home_entry(state, idx);
        }
        KeyCode::Char('d') => {
            state.screen = Screen::Dashboard;
        }
        KeyCode::Char('b') => {
            state.bookmarks_cursor = 0;
            state.screen = Screen::Bookmarks;
        }
        KeyCode::Char('/') | KeyCode::Char('s') => {
            open_search(state);
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            state.push_dialog(Dialog::ConfirmQuit);
        }
        KeyCode::Char('?') => {
            state.push_dialog(Dialog::Help);
        }
        KeyCode::Enter => {
            activate_home_entry(state, state.home_cursor);
        }
        _ => {}
    }
}

fn open_search(state: &mut AppState) {
    state.search_input.clear();
    state.search_results.clear();
    state.search_cursor = 0;
    state.search_focus = SearchFocus::Input;
    state.screen = Screen::Search;
}

fn activate_home_entry(state: &mut AppState, idx: usize) {
    let modes = QuizMode::SELECTABLE.len();
    if idx < modes {
        state.config = ConfigForm::new(QuizMode::SELECTABLE[idx]);
        state.screen = Screen::Config;
        return;
    }
    match idx - modes {
        0 => state.screen = Screen::Dashboard,
        1 => {
            state.bookmarks_cursor = 0;
            state.screen = Screen::Bookmarks;
        }
        2 => open_search(state),
        _ => state.push_dialog(Dialog::ConfirmQuit),
    }
}

fn handle_config_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            state.screen = Screen::Home;
        }
        KeyCode::Tab | KeyCode::Down => {
            state.config.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.config.prev_field();
        }
        KeyCode::Left | KeyCode::Right => {
            cycle_config_choice(state, key.code == KeyCode::Right);
        }
        KeyCode::Char(c @ '0'..='9') => match state.config.field {
            ConfigField::Count => {
                if state.config.count_input.len() < 3 {
                    state.config.count_input.push(c);
                }
            }
            ConfigField::TimeLimit => {
                if state.config.time_limit_input.len() < 4 {
                    state.config.time_limit_input.push(c);
                }
            }
            _ => {}
        },
        KeyCode::Backspace => match state.config.field {
            ConfigField::Count => {
                state.config.count_input.pop();
            }
            ConfigField::TimeLimit => {
                state.config.time_limit_input.pop();
            }
            _ => {}
        },
        KeyCode::Enter => {
            start_configured_quiz(state);
        }
        _ => {}
    }
}

fn cycle_config_choice(state: &mut AppState, forward: bool) {
    match state.config.field {
        ConfigField::Subject => {
            let subjects = state.catalog.subjects();
            if subjects.is_empty() {
                return;
            }
            let len = subjects.len();
            state.config.subject_cursor = if forward {
                (state.config.subject_cursor + 1) % len
            } else {
                (state.config.subject_cursor + len - 1) % len
            };
        }
        ConfigField::Difficulty => {
            let len = DifficultyFilter::ALL.len();
            state.config.difficulty_cursor = if forward {
                (state.config.difficulty_cursor + 1) % len
            } else {
                (state.config.difficulty_cursor + len - 1) % len
            };
        }
        _ => {}
    }
}

fn config_validator(timed: bool) -> Validator {
    let mut v = Validator::new()
        .rule("count", Rule::Required, "Question count is required")
        .rule("count", Rule::MinValue(1), "At least 1 question")
        .rule("count", Rule::MaxValue(50), "At most 50 questions");
    if timed {
        v = v
            .rule("time_limit", Rule::Required, "Time limit is required")
            .rule("time_limit", Rule::MinValue(30), "Minimum time limit is 30 seconds")
            .rule("time_limit", Rule::MaxValue(3600), "Maximum time limit is 1 hour");
    }
    v
}

/// Validate the form, build the configuration, and hand it to the
/// loading screen.
fn start_configured_quiz(state: &mut AppState) {
    let timed = state.config.mode == QuizMode::Timed;

    let mut values: HashMap<&str, String> = HashMap::new();
    values.insert("count", state.config.count_input.clone());
    if timed {
        values.insert("time_limit", state.config.time_limit_input.clone());
    }

    let errors = config_validator(timed).validate(&values);
    if !errors.is_empty() {
        state.config.errors = errors.into_iter().map(|e| e.message).collect();
        return;
    }
    state.config.errors.clear();

    let subjects = state.catalog.subjects();
    let subject = if state.config.mode == QuizMode::SubjectSpecific {
        subjects.get(state.config.subject_cursor).cloned()
    } else {
        None
    };

    let difficulty = if state.config.mode == QuizMode::Adaptive {
        state.adaptive_difficulty()
    } else {
        DifficultyFilter::ALL[state.config.difficulty_cursor]
    };

    let config = QuizConfig {
        mode: state.config.mode,
        subject,
        question_count: state.config.count_input.parse().unwrap_or(10),
        difficulty,
        time_limit_secs: if timed {
            state.config.time_limit_input.parse().unwrap_or(300)
        } else {
            0
        },
    };

    let questions = session::generate_questions(&state.catalog, &config, &mut rand::thread_rng());
    state.begin_loading(config, questions);
}

fn handle_quiz_key(key: KeyEvent, state: &mut AppState) {
    let Some(current) = state.session.as_ref().and_then(|s| s.current_question()).cloned()
    else {
        return;
    };
    let practice = state
        .session
        .as_ref()
        .map_or(false, |s| s.config.mode == QuizMode::Practice);

    match key.code {
        KeyCode::Char(c @ '1'..='4') => {
            // Practice pauses on the explanation; no re-picking there.
            if practice && state.explanation_shown {
                return;
            }
            let option = (c as u8 - b'1') as usize;
            if let Some(session) = state.session.as_mut() {
                session.select_answer(option);
            }
            if practice {
                state.explanation_shown = true;
            }
        }
        KeyCode::Enter => {
            let answered = state
                .session
                .as_ref()
                .map_or(false, |s| s.current_answer().is_some());
            if !answered {
                state
                    .toasts
                    .push("Select an answer or skip the question", ToastKind::Info);
                return;
            }
            state.explanation_shown = false;
            let finished = state
                .session
                .as_mut()
                .map_or(false, |s| s.advance());
            if finished {
                state.complete_session();
                logger::log("quiz session completed");
            }
        }
        KeyCode::Char('s') => {
            state.explanation_shown = false;
            let finished = state.session.as_mut().map_or(false, |s| {
                s.skip();
                s.is_finished()
            });
            if finished {
                state.complete_session();
                logger::log("quiz session completed");
            }
        }
        KeyCode::Char('b') => {
            state.bookmark(&current);
        }
        KeyCode::Char('?') => {
            state.push_dialog(Dialog::Help);
        }
        KeyCode::Esc => {
            state.push_dialog(Dialog::ConfirmAbandon);
        }
        _ => {}
    }
}

fn handle_results_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('h') => {
            state.results = None;
            state.results_config = None;
            state.go_home();
        }
        KeyCode::Char('d') => {
            state.screen = Screen::Dashboard;
        }
        KeyCode::Char('e') => {
            export_results(state);
        }
        _ => {}
    }
}

fn export_results(state: &mut AppState) {
    let (Some(results), Some(config)) = (state.results.as_ref(), state.results_config.as_ref())
    else {
        return;
    };
    let today = chrono::Local::now().date_naive();
    match report::export(results, config, today, std::path::Path::new(".")) {
        Ok(path) => {
            state
                .toasts
                .push(format!("Results exported to {}", path.display()), ToastKind::Success);
            logger::log("results exported");
        }
        Err(msg) => {
            state.toasts.push(msg, ToastKind::Error);
        }
    }
}

fn handle_passive_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('h') => {
            state.screen = Screen::Home;
        }
        KeyCode::Char('?') => {
            state.push_dialog(Dialog::Help);
        }
        _ => {}
    }
}

fn handle_bookmarks_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            state.screen = Screen::Home;
        }
        KeyCode::Up => {
            if state.bookmarks_cursor > 0 {
                state.bookmarks_cursor -= 1;
            }
        }
        KeyCode::Down => {
            if state.bookmarks_cursor + 1 < state.bookmarks.len() {
                state.bookmarks_cursor += 1;
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            state.remove_bookmark(state.bookmarks_cursor);
        }
        KeyCode::Char('c') | KeyCode::Enter => {
            match session::custom_from_bookmarks(&state.bookmarks) {
                Ok((config, questions)) => {
                    state.begin_loading(config, questions);
                }
                Err(msg) => {
                    state.toasts.push(msg, ToastKind::Warning);
                }
            }
        }
        KeyCode::Char('?') => {
            state.push_dialog(Dialog::Help);
        }
        _ => {}
    }
}

fn handle_search_key(key: KeyEvent, state: &mut AppState) {
    match state.search_focus {
        SearchFocus::Input => match key.code {
            KeyCode::Esc => {
                state.screen = Screen::Home;
            }
            KeyCode::Enter => {
                state.run_search();
            }
            KeyCode::Tab | KeyCode::Down => {
                if !state.search_results.is_empty() {
                    state.search_focus = SearchFocus::Results;
                }
            }
            KeyCode::Backspace => {
                state.search_input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.search_input.push(c);
            }
            _ => {}
        },
        SearchFocus::Results => match key.code {
            KeyCode::Esc | KeyCode::Tab => {
                state.search_focus = SearchFocus::Input;
            }
            KeyCode::Up => {
                if state.search_cursor > 0 {
                    state.search_cursor -= 1;
                } else {
                    state.search_focus = SearchFocus::Input;
                }
            }
            KeyCode::Down => {
                if state.search_cursor + 1 < state.search_results.len() {
                    state.search_cursor += 1;
                }
            }
            KeyCode::Char('b') | KeyCode::Enter => {
                if let Some(q) = state.search_results.get(state.search_cursor).cloned() {
                    state.bookmark(&q);
                }
            }
            _ => {}
        },
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    let dialog = state.top_dialog().cloned();
    match dialog {
        Some(Dialog::ConfirmQuit) => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                state.pop_dialog();
                state.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::ConfirmAbandon) => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                state.pop_dialog();
                state.go_home();
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::Help) => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => {
                state.pop_dialog();
            }
            _ => {}
        },
        None => {}
    }
}
