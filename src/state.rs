use std::time::{Duration, Instant};

use crate::catalog::Catalog;
use crate::kv::MemoryStore;
use crate::model::*;
use crate::session::{self, QuizSession};
use crate::term::TermCaps;
use crate::timer::TimerHandle;
use crate::toast::{ToastKind, ToastQueue};
use crate::widgets::AnimatedCounter;

/// Artificial delay before a session starts, so the loading screen is
/// actually visible.
pub const LOADING_DELAY: Duration = Duration::from_millis(1500);

/// Search results stay cached this long.
const SEARCH_CACHE_TTL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Config,
    Loading,
    Quiz,
    Results,
    Dashboard,
    Bookmarks,
    Search,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    ConfirmQuit,
    ConfirmAbandon,
    Help,
}

/// Fields of the configuration form, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Subject,
    Count,
    Difficulty,
    TimeLimit,
}

#[derive(Debug, Clone)]
pub struct ConfigForm {
    pub mode: QuizMode,
    pub subject_cursor: usize,
    pub count_input: String,
    pub difficulty_cursor: usize,
    pub time_limit_input: String,
    pub field: ConfigField,
    pub errors: Vec<String>,
}

impl ConfigForm {
    pub fn new(mode: QuizMode) -> Self {
        Self {
            mode,
            subject_cursor: 0,
            count_input: "10".to_string(),
            difficulty_cursor: 0,
            time_limit_input: "300".to_string(),
            field: if mode == QuizMode::SubjectSpecific {
                ConfigField::Subject
            } else {
                ConfigField::Count
            },
            errors: Vec::new(),
        }
    }

    /// Fields applicable to this form's mode, in order.
    pub fn fields(&self) -> Vec<ConfigField> {
        let mut fields = Vec::new();
        if self.mode == QuizMode::SubjectSpecific {
            fields.push(ConfigField::Subject);
        }
        fields.push(ConfigField::Count);
        fields.push(ConfigField::Difficulty);
        if self.mode == QuizMode::Timed {
            fields.push(ConfigField::TimeLimit);
        }
        fields
    }

    pub fn next_field(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(pos + 1) % fields.len()];
    }

    pub fn prev_field(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(pos + fields.len() - 1) % fields.len()];
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    Input,
    Results,
}

pub struct AppState {
    pub screen: Screen,
    pub caps: TermCaps,
    pub catalog: Catalog,
    pub progress: UserProgress,
    pub bookmarks: Vec<Question>,
    pub toasts: ToastQueue,
    pub dialog_stack: Vec<Dialog>,
    pub should_quit: bool,

    pub home_cursor: usize,
    pub config: ConfigForm,

    /// Prepared session held while the loading screen shows.
    pub pending: Option<(QuizConfig, Vec<Question>)>,
    pub loading_until: Option<Instant>,

    pub session: Option<QuizSession>,
    pub timer: Option<TimerHandle>,
    pub remaining_secs: Option<u64>,
    /// Practice mode pauses on the explanation after each answer.
    pub explanation_shown: bool,

    pub results: Option<QuizResults>,
    /// Configuration of the session the results belong to.
    pub results_config: Option<QuizConfig>,
    pub suggestions: Vec<String>,
    pub score_counter: AnimatedCounter,

    pub search_input: String,
    pub search_focus: SearchFocus,
    pub search_results: Vec<Question>,
    pub search_cursor: usize,
    pub search_cache: MemoryStore,

    pub bookmarks_cursor: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, caps: TermCaps) -> Self {
        Self {
            screen: Screen::Home,
            caps,
            catalog,
            progress: UserProgress::default(),
            bookmarks: Vec::new(),
            toasts: ToastQueue::default(),
            dialog_stack: Vec::new(),
            should_quit: false,
            home_cursor: 0,
            config: ConfigForm::new(QuizMode::Mixed),
            pending: None,
            loading_until: None,
            session: None,
            timer: None,
            remaining_secs: None,
            explanation_shown: false,
            results: None,
            results_config: None,
            suggestions: Vec::new(),
            score_counter: AnimatedCounter::new(0),
            search_input: String::new(),
            search_focus: SearchFocus::Input,
            search_results: Vec::new(),
            search_cursor: 0,
            search_cache: MemoryStore::new(),
            bookmarks_cursor: 0,
        }
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }

    /// Stop and drop the countdown. Called on every transition out of an
    /// active quiz so a dead session can never receive ticks.
    pub fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.stop();
        }
        self.remaining_secs = None;
    }

    pub fn go_home(&mut self) {
        self.stop_timer();
        self.session = None;
        self.pending = None;
        self.loading_until = None;
        self.dialog_stack.clear();
        self.explanation_shown = false;
        self.screen = Screen::Home;
    }

    /// Queue the prepared session behind the loading delay.
    pub fn begin_loading(&mut self, config: QuizConfig, questions: Vec<Question>) {
        self.pending = Some((config, questions));
        self.loading_until = Some(Instant::now() + LOADING_DELAY);
        self.screen = Screen::Loading;
    }

    /// Promote the pending session once the loading deadline passes. The
    /// timer is armed only for a timed configuration.
    pub fn finish_loading(&mut self) {
        let Some((config, questions)) = self.pending.take() else {
            self.go_home();
            return;
        };
        self.loading_until = None;

        let limit = config.time_limit_secs;
        let session = QuizSession::new(config, questions);
        if session.is_finished() {
            // Empty pool: nothing to ask.
            self.toasts
                .push("No questions match that configuration.", ToastKind::Warning);
            self.go_home();
            return;
        }

        if limit > 0 {
            self.timer = Some(TimerHandle::start(limit));
            self.remaining_secs = Some(limit);
        }
        self.explanation_shown = false;
        self.session = Some(session);
        self.screen = Screen::Quiz;
    }

    /// Completion pipeline: stop the timer, fold the session into user
    /// history, evaluate achievements, then move to the results screen.
    pub fn complete_session(&mut self) {
        self.stop_timer();
        let Some(session) = self.session.take() else {
            return;
        };

        let today = chrono::Local::now().date_naive();
        let total_time_ms = session.elapsed_ms();
        let results = session::finalize(&session, &mut self.progress, today, total_time_ms);

        for achievement in &results.new_achievements {
            self.toasts.push(
                format!("Achievement unlocked: {}!", achievement.name),
                ToastKind::Success,
            );
        }

        self.suggestions = session::suggestions(&results, &session.config);
        self.score_counter = AnimatedCounter::new(results.score);
        self.results_config = Some(session.config.clone());
        self.results = Some(results);
        self.explanation_shown = false;
        self.screen = Screen::Results;
    }

    /// Add the question to the bookmark set, or report the duplicate.
    pub fn bookmark(&mut self, question: &Question) {
        if self.bookmarks.iter().any(|b| b.id == question.id) {
            self.toasts
                .push("Question already bookmarked", ToastKind::Info);
            return;
        }
        self.bookmarks.push(question.clone());
        self.toasts.push("Question bookmarked!", ToastKind::Success);
    }

    pub fn remove_bookmark(&mut self, idx: usize) {
        if idx < self.bookmarks.len() {
            self.bookmarks.remove(idx);
            self.toasts.push("Bookmark removed", ToastKind::Info);
            if self.bookmarks_cursor >= self.bookmarks.len() && self.bookmarks_cursor > 0 {
                self.bookmarks_cursor -= 1;
            }
        }
    }

    /// Adaptive mode picks a difficulty from the running average: under 50
    /// stays easy, under 75 medium, above that hard. No history means easy.
    pub fn adaptive_difficulty(&self) -> DifficultyFilter {
        if self.progress.quizzes_taken == 0 {
            return DifficultyFilter::Easy;
        }
        match self.progress.average_score() {
            0..=49 => DifficultyFilter::Easy,
            50..=74 => DifficultyFilter::Medium,
            _ => DifficultyFilter::Hard,
        }
    }

    /// Run a catalog search, serving repeated queries from the TTL cache.
    pub fn run_search(&mut self) {
        let term = self.search_input.clone();
        let key = format!("search:{}", term.trim().to_lowercase());

        if let Some(cached) = self.search_cache.get(&key) {
            let ids: Vec<u32> = cached
                .split(',')
                .filter_map(|s| s.parse().ok())
                .collect();
            self.search_results = self
                .catalog
                .all()
                .iter()
                .filter(|q| ids.contains(&q.id))
                .cloned()
                .collect();
            self.search_cursor = 0;
            if self.search_results.is_empty() {
                self.toasts
                    .push("No questions matched your search", ToastKind::Info);
            } else {
                self.search_focus = SearchFocus::Results;
            }
            return;
        }

        match self.catalog.search(&term, None, DifficultyFilter::Mixed) {
            Ok(hits) => {
                let ids: Vec<String> = hits.iter().map(|q| q.id.to_string()).collect();
                self.search_cache
                    .set_with_ttl(&key, &ids.join(","), SEARCH_CACHE_TTL);
                self.search_results = hits.into_iter().cloned().collect();
                self.search_cursor = 0;
                if self.search_results.is_empty() {
                    self.toasts
                        .push("No questions matched your search", ToastKind::Info);
                } else {
                    self.search_focus = SearchFocus::Results;
                }
            }
            Err(msg) => {
                self.toasts.push(msg, ToastKind::Warning);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Catalog::load().unwrap(), TermCaps::default())
    }

    #[test]
    fn bookmark_rejects_duplicates() {
        let mut state = state();
        let q = state.catalog.all()[0].clone();
        state.bookmark(&q);
        state.bookmark(&q);
        assert_eq!(state.bookmarks.len(), 1);
        assert_eq!(state.toasts.len(), 2);
    }

    #[test]
    fn loading_promotes_pending_session() {
        let mut state = state();
        let questions = state.catalog.all()[..3].to_vec();
        state.begin_loading(QuizConfig::default(), questions);
        assert_eq!(state.screen, Screen::Loading);

        state.finish_loading();
        assert_eq!(state.screen, Screen::Quiz);
        assert!(state.session.is_some());
        assert!(state.timer.is_none());
    }

    #[test]
    fn empty_pool_bounces_back_home() {
        let mut state = state();
        state.begin_loading(QuizConfig::default(), Vec::new());
        state.finish_loading();
        assert_eq!(state.screen, Screen::Home);
        assert!(state.session.is_none());
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn timed_loading_arms_the_timer() {
        let mut state = state();
        let config = QuizConfig {
            mode: QuizMode::Timed,
            time_limit_secs: 300,
            ..QuizConfig::default()
        };
        let questions = state.catalog.all()[..3].to_vec();
        state.begin_loading(config, questions);
        state.finish_loading();
        assert!(state.timer.is_some());
        assert_eq!(state.remaining_secs, Some(300));

        state.go_home();
        assert!(state.timer.is_none());
        assert!(state.session.is_none());
    }

    #[test]
    fn completion_records_history_and_toasts_achievements() {
        let mut state = state();
        let questions = state.catalog.all()[..2].to_vec();
        state.begin_loading(QuizConfig::default(), questions);
        state.finish_loading();

        let session = state.session.as_mut().unwrap();
        let correct = session.current_question().unwrap().correct;
        session.select_answer(correct);
        session.advance();
        let correct = session.current_question().unwrap().correct;
        session.select_answer(correct);
        session.advance();

        state.complete_session();
        assert_eq!(state.screen, Screen::Results);
        assert_eq!(state.progress.quizzes_taken, 1);
        let results = state.results.as_ref().unwrap();
        assert_eq!(results.score, 100);
        assert!(!results.new_achievements.is_empty());
        assert!(!state.suggestions.is_empty());
    }

    #[test]
    fn adaptive_difficulty_follows_average() {
        let mut state = state();
        assert_eq!(state.adaptive_difficulty(), DifficultyFilter::Easy);

        state.progress.quizzes_taken = 2;
        state.progress.total_score_sum = 120; // avg 60
        assert_eq!(state.adaptive_difficulty(), DifficultyFilter::Medium);

        state.progress.total_score_sum = 180; // avg 90
        assert_eq!(state.adaptive_difficulty(), DifficultyFilter::Hard);
    }

    #[test]
    fn search_caches_results() {
        let mut state = state();
        state.search_input = "chemistry".to_string();
        state.run_search();
        let first = state.search_results.len();
        assert!(first > 0);
        assert_eq!(state.search_cache.len(), 1);
        assert_eq!(state.search_focus, SearchFocus::Results);

        // second call is served from the cache and yields the same hits
        state.run_search();
        assert_eq!(state.search_cache.len(), 1);
        assert_eq!(state.search_results.len(), first);
    }

    #[test]
    fn cached_empty_search_keeps_input_focus() {
        let mut state = state();
        state.search_input = "zzzzzz".to_string();
        state.run_search();
        assert!(state.search_results.is_empty());
        assert_eq!(state.search_focus, SearchFocus::Input);
        assert_eq!(state.toasts.len(), 1);

        // repeat within the TTL hits the cache but behaves the same
        state.run_search();
        assert!(state.search_results.is_empty());
        assert_eq!(state.search_focus, SearchFocus::Input);
        assert_eq!(state.toasts.len(), 2);
    }

    #[test]
    fn blank_search_warns() {
        let mut state = state();
        state.search_input = "   ".to_string();
        state.run_search();
        assert!(state.search_results.is_empty());
        assert_eq!(state.toasts.len(), 1);
    }
}
