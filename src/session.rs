use std::collections::HashMap;
use std::time::Instant;

use chrono::NaiveDate;
use rand::Rng;

use crate::achievements;
use crate::catalog::Catalog;
use crate::model::*;
use crate::progress;
use crate::util;

/// How many bookmarked questions a custom quiz takes, at most.
pub const CUSTOM_QUIZ_MAX: usize = 10;

/// Filter the catalog by the configured subject and difficulty, shuffle
/// the pool, and truncate to the requested count. A pool smaller than the
/// request silently runs short.
pub fn generate_questions<R: Rng>(
    catalog: &Catalog,
    config: &QuizConfig,
    rng: &mut R,
) -> Vec<Question> {
    let mut pool: Vec<Question> = catalog
        .all()
        .iter()
        .filter(|q| {
            config
                .subject
                .as_deref()
                .map_or(true, |s| q.subject.eq_ignore_ascii_case(s))
        })
        .filter(|q| config.difficulty.matches(q.difficulty))
        .cloned()
        .collect();

    util::shuffle(&mut pool, rng);
    pool.truncate(config.question_count.min(pool.len()));
    pool
}

/// Build the configuration and question list for a custom quiz from the
/// bookmark set: the first `CUSTOM_QUIZ_MAX` bookmarks, untimed.
pub fn custom_from_bookmarks(bookmarks: &[Question]) -> Result<(QuizConfig, Vec<Question>), String> {
    if bookmarks.is_empty() {
        return Err(
            "No bookmarked questions available. Bookmark some questions first!".to_string(),
        );
    }

    let questions: Vec<Question> = bookmarks.iter().take(CUSTOM_QUIZ_MAX).cloned().collect();
    let config = QuizConfig {
        mode: QuizMode::Custom,
        subject: None,
        question_count: questions.len(),
        difficulty: DifficultyFilter::Mixed,
        time_limit_secs: 0,
    };
    Ok((config, questions))
}

/// One run through a configured question sequence. Owned by the event
/// loop; discarded when a new session starts or the user returns home.
#[derive(Debug)]
pub struct QuizSession {
    pub config: QuizConfig,
    pub questions: Vec<Question>,
    pub answers: HashMap<usize, Answer>,
    pub current: usize,
    pub start: Instant,
    finished: bool,
}

impl QuizSession {
    pub fn new(config: QuizConfig, questions: Vec<Question>) -> Self {
        // An empty question list completes on arrival.
        let finished = questions.is_empty();
        Self {
            config,
            questions,
            answers: HashMap::new(),
            current: 0,
            start: Instant::now(),
            finished,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn current_answer(&self) -> Option<&Answer> {
        self.answers.get(&self.current)
    }

    /// Record an answer for the current question, overwriting any earlier
    /// pick made before advancing.
    pub fn select_answer(&mut self, option: usize) {
        let elapsed = self.elapsed_ms();
        self.select_answer_at(option, elapsed);
    }

    pub fn select_answer_at(&mut self, option: usize, elapsed_ms: u64) {
        if self.finished {
            return;
        }
        let Some(q) = self.questions.get(self.current) else {
            return;
        };
        if option >= q.options.len() {
            return;
        }
        self.answers.insert(
            self.current,
            Answer {
                question_id: q.id,
                selected: option as i32,
                correct: option == q.correct,
                elapsed_ms,
            },
        );
    }

    /// Record the skip sentinel and advance.
    pub fn skip(&mut self) {
        if self.finished {
            return;
        }
        if let Some(q) = self.questions.get(self.current) {
            self.answers.insert(
                self.current,
                Answer {
                    question_id: q.id,
                    selected: SKIPPED,
                    correct: false,
                    elapsed_ms: 0,
                },
            );
        }
        self.advance();
    }

    /// Move to the next question; past the last one the session completes.
    /// Returns true when this call finished the session.
    pub fn advance(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.current += 1;
        if self.current >= self.questions.len() {
            self.finished = true;
            return true;
        }
        false
    }

    /// Timer expiry: complete immediately, remaining questions unanswered.
    pub fn expire(&mut self) {
        self.finished = true;
    }

    /// Score and breakdown over the full question list. Unanswered
    /// questions count as incorrect.
    pub fn results_at(&self, total_time_ms: u64) -> QuizResults {
        let total = self.questions.len();
        let correct = self.answers.values().filter(|a| a.correct).count();
        let score = util::percentage(correct, total);

        let indexed: Vec<(usize, &Question)> = self.questions.iter().enumerate().collect();
        let breakdown = util::group_by(&indexed, |(_, q)| q.subject.clone())
            .into_iter()
            .map(|(subject, members)| {
                let sub_total = members.len();
                let sub_correct = members
                    .iter()
                    .filter(|(i, _)| self.answers.get(i).map_or(false, |a| a.correct))
                    .count();
                (
                    subject,
                    SubjectStats {
                        correct: sub_correct,
                        total: sub_total,
                        percentage: util::percentage(sub_correct, sub_total),
                    },
                )
            })
            .collect();

        QuizResults {
            score,
            correct,
            incorrect: total - correct,
            total,
            total_time_ms,
            avg_time_ms: if total == 0 { 0 } else { total_time_ms / total as u64 },
            breakdown,
            new_achievements: Vec::new(),
        }
    }

    pub fn results(&self) -> QuizResults {
        self.results_at(self.elapsed_ms())
    }
}

/// Completion side effects, in order: compute results, fold into user
/// history, evaluate achievements. The caller stops the timer before
/// calling and hands the returned results to rendering after.
pub fn finalize(
    session: &QuizSession,
    user: &mut UserProgress,
    today: NaiveDate,
    total_time_ms: u64,
) -> QuizResults {
    let mut results = session.results_at(total_time_ms);
    progress::record(user, &results, today);
    results.new_achievements = achievements::evaluate(&results, &session.config, user);
    results
}

/// Improvement suggestions shown on the results screen.
pub fn suggestions(results: &QuizResults, config: &QuizConfig) -> Vec<String> {
    let mut out = Vec::new();

    if results.score < 60 {
        out.push("Study fundamentals: focus on basic concepts to strengthen your foundation.".to_string());
    }
    if results.score < 80 {
        out.push("Practice more: take more quizzes to improve accuracy and confidence.".to_string());
    }
    for (subject, stats) in &results.breakdown {
        if stats.percentage < 70 {
            out.push(format!(
                "Improve {}: your {} score was {}%. Focus on this subject for better results.",
                subject, subject, stats.percentage
            ));
        }
    }
    if config.mode == QuizMode::Timed && results.avg_time_ms > 90_000 {
        out.push("Work on speed: practice quick decision-making for timed quizzes.".to_string());
    }

    if out.is_empty() {
        out.push("Excellent performance! Keep challenging yourself with harder questions.".to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn generation_respects_filters_and_bounds() {
        let catalog = catalog();
        let config = QuizConfig {
            mode: QuizMode::SubjectSpecific,
            subject: Some("Chemistry".to_string()),
            question_count: 10,
            difficulty: DifficultyFilter::Mixed,
            time_limit_secs: 0,
        };
        let questions = generate_questions(&catalog, &config, &mut rng());

        // The catalog has exactly 3 Chemistry questions; the request for
        // 10 silently runs short.
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.subject == "Chemistry"));

        let mut ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn generation_difficulty_filter() {
        let catalog = catalog();
        let config = QuizConfig {
            difficulty: DifficultyFilter::Easy,
            question_count: 100,
            ..QuizConfig::default()
        };
        let questions = generate_questions(&catalog, &config, &mut rng());
        assert!(!questions.is_empty());
        assert!(questions.iter().all(|q| q.difficulty == Difficulty::Easy));
    }

    #[test]
    fn empty_pool_yields_empty_finished_session() {
        let catalog = catalog();
        let config = QuizConfig {
            subject: Some("Astrology".to_string()),
            ..QuizConfig::default()
        };
        let questions = generate_questions(&catalog, &config, &mut rng());
        assert!(questions.is_empty());

        let session = QuizSession::new(config, questions);
        assert!(session.is_finished());
        let results = session.results_at(0);
        assert_eq!(results.score, 0);
        assert_eq!(results.total, 0);
    }

    fn two_question_session() -> QuizSession {
        let catalog = catalog();
        let questions: Vec<Question> = catalog.all()[..2].to_vec();
        QuizSession::new(QuizConfig::default(), questions)
    }

    #[test]
    fn answer_one_skip_one_scores_fifty() {
        let mut session = two_question_session();
        let correct = session.current_question().unwrap().correct;
        session.select_answer_at(correct, 1_000);
        assert!(!session.advance());
        session.skip();
        assert!(session.is_finished());

        let results = session.results_at(60_000);
        assert_eq!(results.correct, 1);
        assert_eq!(results.incorrect, 1);
        assert_eq!(results.score, 50);
        assert_eq!(results.correct + results.incorrect, results.total);
        assert_eq!(results.avg_time_ms, 30_000);
    }

    #[test]
    fn reanswer_before_advancing_overwrites() {
        let mut session = two_question_session();
        let correct = session.current_question().unwrap().correct;
        let wrong = (correct + 1) % 4;
        session.select_answer_at(wrong, 500);
        session.select_answer_at(correct, 900);
        assert_eq!(session.answers.len(), 1);
        assert!(session.current_answer().unwrap().correct);
    }

    #[test]
    fn skip_records_sentinel() {
        let mut session = two_question_session();
        let qid = session.current_question().unwrap().id;
        session.skip();
        let answer = &session.answers[&0];
        assert_eq!(answer.selected, SKIPPED);
        assert!(!answer.correct);
        assert_eq!(answer.question_id, qid);
        assert_eq!(session.current, 1);
    }

    #[test]
    fn expiry_counts_unanswered_as_incorrect() {
        let catalog = catalog();
        let config = QuizConfig {
            mode: QuizMode::Timed,
            question_count: 5,
            time_limit_secs: 600,
            ..QuizConfig::default()
        };
        let questions = generate_questions(&catalog, &config, &mut rng());
        let mut session = QuizSession::new(config, questions);

        let correct = session.current_question().unwrap().correct;
        session.select_answer_at(correct, 1_000);
        session.advance();
        session.expire();

        assert!(session.is_finished());
        let results = session.results_at(600_000);
        assert_eq!(results.total, 5);
        assert_eq!(results.correct, 1);
        assert_eq!(results.incorrect, 4);
        assert_eq!(results.score, 20);
    }

    #[test]
    fn no_mutation_after_completion() {
        let mut session = two_question_session();
        session.expire();
        session.select_answer_at(0, 10);
        session.skip();
        assert!(session.answers.is_empty());
    }

    #[test]
    fn breakdown_groups_by_subject() {
        let catalog = catalog();
        // Questions 1 and 6 are Chemistry, 3 is General Knowledge.
        let questions: Vec<Question> = catalog
            .all()
            .iter()
            .filter(|q| [1, 6, 3].contains(&q.id))
            .cloned()
            .collect();
        let mut session = QuizSession::new(QuizConfig::default(), questions);

        let correct = session.current_question().unwrap().correct;
        session.select_answer_at(correct, 100);
        session.advance();
        session.skip();
        session.skip();

        let results = session.results_at(10_000);
        let chem = results
            .breakdown
            .iter()
            .find(|(s, _)| s == "Chemistry")
            .map(|(_, st)| *st)
            .unwrap();
        assert_eq!(chem.total, 2);
        assert_eq!(chem.correct, 1);
        assert_eq!(chem.percentage, 50);
    }

    #[test]
    fn custom_quiz_requires_bookmarks() {
        assert!(custom_from_bookmarks(&[]).is_err());

        let catalog = catalog();
        let bookmarks: Vec<Question> = catalog.all()[..12].to_vec();
        let (config, questions) = custom_from_bookmarks(&bookmarks).unwrap();
        assert_eq!(questions.len(), CUSTOM_QUIZ_MAX);
        assert_eq!(config.mode, QuizMode::Custom);
        assert_eq!(config.time_limit_secs, 0);
        // First bookmarks win.
        assert_eq!(questions[0].id, bookmarks[0].id);
    }

    #[test]
    fn finalize_orders_side_effects() {
        let mut session = two_question_session();
        let correct = session.current_question().unwrap().correct;
        session.select_answer_at(correct, 1_000);
        session.advance();
        let correct = session.current_question().unwrap().correct;
        session.select_answer_at(correct, 2_000);
        session.advance();

        let mut user = UserProgress::default();
        let today = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let results = finalize(&session, &mut user, today, 5_000);

        assert_eq!(results.score, 100);
        assert_eq!(user.quizzes_taken, 1);
        let ids: Vec<&str> = results.new_achievements.iter().map(|a| a.id.as_str()).collect();
        assert!(ids.contains(&"first_steps"));
        assert!(ids.contains(&"perfect_score"));
    }

    #[test]
    fn suggestions_cover_weak_results() {
        let results = QuizResults {
            score: 50,
            correct: 1,
            incorrect: 1,
            total: 2,
            total_time_ms: 200_000,
            avg_time_ms: 100_000,
            breakdown: vec![(
                "Science".to_string(),
                SubjectStats { correct: 1, total: 2, percentage: 50 },
            )],
            new_achievements: Vec::new(),
        };
        let config = QuizConfig {
            mode: QuizMode::Timed,
            time_limit_secs: 600,
            ..QuizConfig::default()
        };
        let tips = suggestions(&results, &config);
        assert_eq!(tips.len(), 4);

        let perfect = QuizResults { score: 100, ..results.clone() };
        let perfect = QuizResults { breakdown: Vec::new(), avg_time_ms: 1_000, ..perfect };
        let tips = suggestions(&perfect, &QuizConfig::default());
        assert_eq!(tips.len(), 1);
    }
}
