use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizgenius::catalog::Catalog;
use quizgenius::model::*;
use quizgenius::report;
use quizgenius::session::{self, QuizSession};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

#[test]
fn full_session_from_generation_to_results() {
    let catalog = Catalog::load().unwrap();
    let config = QuizConfig {
        question_count: 5,
        ..QuizConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(7);
    let questions = session::generate_questions(&catalog, &config, &mut rng);
    assert_eq!(questions.len(), 5);

    let mut quiz = QuizSession::new(config, questions);
    while !quiz.is_finished() {
        let correct = quiz.current_question().unwrap().correct;
        quiz.select_answer_at(correct, 2_000);
        quiz.advance();
    }

    let mut user = UserProgress::default();
    let results = session::finalize(&quiz, &mut user, day(1), 10_000);

    assert_eq!(results.score, 100);
    assert_eq!(results.correct, 5);
    assert_eq!(results.incorrect, 0);
    assert_eq!(results.avg_time_ms, 2_000);

    // History reflects the run.
    assert_eq!(user.quizzes_taken, 1);
    assert_eq!(user.average_score(), 100);
    assert_eq!(user.streak_days, 1);
    assert_eq!(user.history.len(), 1);

    let ids: Vec<&str> = results
        .new_achievements
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert!(ids.contains(&"first_steps"));
    assert!(ids.contains(&"perfect_score"));
}

#[test]
fn second_perfect_run_awards_nothing_new() {
    let catalog = Catalog::load().unwrap();
    let mut user = UserProgress::default();

    for d in [1, 2] {
        let config = QuizConfig {
            question_count: 3,
            ..QuizConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(d as u64);
        let questions = session::generate_questions(&catalog, &config, &mut rng);
        let mut quiz = QuizSession::new(config, questions);
        while !quiz.is_finished() {
            let correct = quiz.current_question().unwrap().correct;
            quiz.select_answer_at(correct, 1_000);
            quiz.advance();
        }
        let results = session::finalize(&quiz, &mut user, day(d), 3_000);
        if d == 2 {
            let fixed: Vec<&str> = results
                .new_achievements
                .iter()
                .map(|a| a.id.as_str())
                .filter(|id| !id.ends_with("_expert"))
                .collect();
            assert!(fixed.is_empty(), "unexpected re-awards: {:?}", fixed);
        }
    }

    assert_eq!(user.streak_days, 2);
    assert_eq!(
        user.achievements.iter().filter(|a| *a == "perfect_score").count(),
        1
    );
}

#[test]
fn timed_expiry_completes_with_partial_answers() {
    let catalog = Catalog::load().unwrap();
    let config = QuizConfig {
        mode: QuizMode::Timed,
        question_count: 8,
        time_limit_secs: 120,
        ..QuizConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(99);
    let questions = session::generate_questions(&catalog, &config, &mut rng);
    let mut quiz = QuizSession::new(config, questions);

    // Answer two, then the clock runs out.
    for _ in 0..2 {
        let correct = quiz.current_question().unwrap().correct;
        quiz.select_answer_at(correct, 5_000);
        quiz.advance();
    }
    quiz.expire();
    assert!(quiz.is_finished());

    let mut user = UserProgress::default();
    let results = session::finalize(&quiz, &mut user, day(3), 120_000);
    assert_eq!(results.total, 8);
    assert_eq!(results.correct, 2);
    assert_eq!(results.incorrect, 6);
    assert_eq!(results.score, 25);
    // The full limit was used, so no speed award.
    assert!(!user.has_achievement("speed_master"));
}

#[test]
fn custom_quiz_round_trip() {
    let catalog = Catalog::load().unwrap();
    let bookmarks: Vec<Question> = catalog.all()[..4].to_vec();
    let (config, questions) = session::custom_from_bookmarks(&bookmarks).unwrap();
    assert_eq!(config.mode, QuizMode::Custom);
    assert_eq!(questions.len(), 4);

    let mut quiz = QuizSession::new(config, questions);
    while !quiz.is_finished() {
        quiz.skip();
    }

    let mut user = UserProgress::default();
    let results = session::finalize(&quiz, &mut user, day(4), 8_000);
    assert_eq!(results.score, 0);
    assert_eq!(results.incorrect, 4);
}

#[test]
fn exported_report_matches_results() {
    let catalog = Catalog::load().unwrap();
    let config = QuizConfig {
        mode: QuizMode::SubjectSpecific,
        subject: Some("Science".to_string()),
        question_count: 3,
        ..QuizConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(5);
    let questions = session::generate_questions(&catalog, &config, &mut rng);
    let mut quiz = QuizSession::new(config.clone(), questions);
    while !quiz.is_finished() {
        let correct = quiz.current_question().unwrap().correct;
        quiz.select_answer_at(correct, 4_000);
        quiz.advance();
    }

    let mut user = UserProgress::default();
    let results = session::finalize(&quiz, &mut user, day(5), 65_000);

    let dir = tempfile::tempdir().unwrap();
    let path = report::export(&results, &config, day(5), dir.path()).unwrap();
    let content = std::fs::read_to_string(path).unwrap();

    assert!(content.contains("Quiz Mode: SUBJECT QUIZ"));
    assert!(content.contains("Subject: Science"));
    assert!(content.contains(&format!("Final Score: {}%", results.score)));
    assert!(content.contains("Time Spent: 1m 5s"));
}
