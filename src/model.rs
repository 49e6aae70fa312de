use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Difficulty filter used by quiz configuration and search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DifficultyFilter {
    #[default]
    Mixed,
    Easy,
    Medium,
    Hard,
}

impl DifficultyFilter {
    pub fn matches(&self, d: Difficulty) -> bool {
        match self {
            DifficultyFilter::Mixed => true,
            DifficultyFilter::Easy => d == Difficulty::Easy,
            DifficultyFilter::Medium => d == Difficulty::Medium,
            DifficultyFilter::Hard => d == Difficulty::Hard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyFilter::Mixed => "Mixed",
            DifficultyFilter::Easy => "Easy",
            DifficultyFilter::Medium => "Medium",
            DifficultyFilter::Hard => "Hard",
        }
    }

    pub const ALL: [DifficultyFilter; 4] = [
        DifficultyFilter::Mixed,
        DifficultyFilter::Easy,
        DifficultyFilter::Medium,
        DifficultyFilter::Hard,
    ];
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: u32,
    pub subject: String,
    pub category: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub difficulty: Difficulty,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    SubjectSpecific,
    Mixed,
    Timed,
    Practice,
    Adaptive,
    Custom,
}

impl QuizMode {
    pub fn label(&self) -> &'static str {
        match self {
            QuizMode::SubjectSpecific => "Subject Quiz",
            QuizMode::Mixed => "Mixed Quiz",
            QuizMode::Timed => "Timed Challenge",
            QuizMode::Practice => "Practice Mode",
            QuizMode::Adaptive => "Adaptive Quiz",
            QuizMode::Custom => "Custom Quiz",
        }
    }

    /// Modes selectable from the home screen. Custom is reachable only
    /// through the bookmark set.
    pub const SELECTABLE: [QuizMode; 5] = [
        QuizMode::SubjectSpecific,
        QuizMode::Mixed,
        QuizMode::Timed,
        QuizMode::Practice,
        QuizMode::Adaptive,
    ];
}

/// Immutable once a session starts.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub mode: QuizMode,
    pub subject: Option<String>,
    pub question_count: usize,
    pub difficulty: DifficultyFilter,
    pub time_limit_secs: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            mode: QuizMode::Mixed,
            subject: None,
            question_count: 10,
            difficulty: DifficultyFilter::Mixed,
            time_limit_secs: 0,
        }
    }
}

/// Sentinel for a skipped question.
pub const SKIPPED: i32 = -1;

#[derive(Debug, Clone)]
pub struct Answer {
    pub question_id: u32,
    /// Selected option index, or SKIPPED.
    pub selected: i32,
    pub correct: bool,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectStats {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone)]
pub struct QuizResults {
    pub score: u32,
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    pub total_time_ms: u64,
    pub avg_time_ms: u64,
    /// Per-subject breakdown, in first-seen question order.
    pub breakdown: Vec<(String, SubjectStats)>,
    pub new_achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreEntry {
    pub date: NaiveDate,
    pub score: u32,
}

/// Process-wide user history. Memory-only; reset on restart.
#[derive(Debug, Clone, Default)]
pub struct UserProgress {
    pub quizzes_taken: u32,
    pub total_score_sum: u32,
    pub subject_scores: HashMap<String, Vec<u32>>,
    /// Earned achievement ids. An id appears at most once.
    pub achievements: Vec<String>,
    pub streak_days: u32,
    pub last_quiz_date: Option<NaiveDate>,
    pub history: Vec<ScoreEntry>,
}

impl UserProgress {
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a == id)
    }

    pub fn average_score(&self) -> u32 {
        if self.quizzes_taken == 0 {
            0
        } else {
            (self.total_score_sum as f64 / self.quizzes_taken as f64).round() as u32
        }
    }
}
