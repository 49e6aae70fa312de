use chrono::{Duration, NaiveDate};

use crate::model::{QuizResults, ScoreEntry, UserProgress};
use crate::util;

/// Fold a completed session into the user's history. Called exactly once
/// per completion, before achievement evaluation.
pub fn record(progress: &mut UserProgress, results: &QuizResults, today: NaiveDate) {
    progress.quizzes_taken += 1;
    progress.total_score_sum += results.score;

    progress.streak_days = match progress.last_quiz_date {
        Some(last) if last == today => progress.streak_days.max(1),
        Some(last) if last + Duration::days(1) == today => progress.streak_days + 1,
        _ => 1,
    };
    progress.last_quiz_date = Some(today);

    for (subject, stats) in &results.breakdown {
        progress
            .subject_scores
            .entry(subject.clone())
            .or_default()
            .push(stats.percentage);
    }

    progress.history.push(ScoreEntry {
        date: today,
        score: results.score,
    });
}

/// Per-day average scores for the trend view, oldest first. None until
/// there are at least two recorded sessions; the dashboard shows an
/// explicit "not enough data" state instead of fabricated numbers.
pub fn trend(progress: &UserProgress) -> Option<Vec<(NaiveDate, u32)>> {
    if progress.history.len() < 2 {
        return None;
    }

    let days = util::group_by(&progress.history, |e| e.date);
    let mut points: Vec<(NaiveDate, u32)> = days
        .into_iter()
        .map(|(date, entries)| {
            let sum: u32 = entries.iter().map(|e| e.score).sum();
            (date, (sum as f64 / entries.len() as f64).round() as u32)
        })
        .collect();
    points.sort_by_key(|(date, _)| *date);
    Some(points)
}

/// Average percentage per subject across all sessions, catalog-agnostic,
/// sorted by subject name for stable display.
pub fn subject_averages(progress: &UserProgress) -> Vec<(String, u32)> {
    let mut averages: Vec<(String, u32)> = progress
        .subject_scores
        .iter()
        .map(|(subject, scores)| {
            let sum: u32 = scores.iter().sum();
            let avg = (sum as f64 / scores.len() as f64).round() as u32;
            (subject.clone(), avg)
        })
        .collect();
    averages.sort_by(|a, b| a.0.cmp(&b.0));
    averages
}
