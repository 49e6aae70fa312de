use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::model::{QuizConfig, QuizResults};
use crate::util;

pub const REPORT_FILENAME: &str = "quiz-results.txt";

/// Fixed plain-text results report.
pub fn build_report(results: &QuizResults, config: &QuizConfig, date: NaiveDate) -> String {
    let mut out = String::new();

    out.push_str("═══════════════════════════════════════\n");
    out.push_str("           QUIZ GENIUS\n");
    out.push_str("        QUIZ RESULTS REPORT\n");
    out.push_str("═══════════════════════════════════════\n\n");

    out.push_str(&format!("Date: {}\n", date.format("%Y-%m-%d")));
    out.push_str(&format!("Quiz Mode: {}\n", config.mode.label().to_uppercase()));
    out.push_str(&format!(
        "Subject: {}\n\n",
        config.subject.as_deref().unwrap_or("Mixed")
    ));

    out.push_str("───────────────────────────────────────\n");
    out.push_str("             PERFORMANCE\n");
    out.push_str("───────────────────────────────────────\n\n");

    out.push_str(&format!("Final Score: {}%\n", results.score));
    out.push_str(&format!(
        "Correct Answers: {}/{}\n",
        results.correct, results.total
    ));
    out.push_str(&format!(
        "Time Spent: {}\n\n",
        util::format_elapsed(results.total_time_ms)
    ));

    out.push_str("───────────────────────────────────────\n");
    out.push_str("            ACHIEVEMENTS\n");
    out.push_str("───────────────────────────────────────\n\n");

    if results.new_achievements.is_empty() {
        out.push_str("No new achievements\n");
    } else {
        for a in &results.new_achievements {
            out.push_str(&format!("{}\n", a.name));
        }
    }

    out.push_str("\n═══════════════════════════════════════\n");
    out.push_str("      Generated by Quiz Genius\n");
    out.push_str("═══════════════════════════════════════\n");

    out
}

/// Write the report to `quiz-results.txt` under `dir`.
pub fn export(
    results: &QuizResults,
    config: &QuizConfig,
    date: NaiveDate,
    dir: &Path,
) -> Result<PathBuf, String> {
    let path = dir.join(REPORT_FILENAME);
    let content = build_report(results, config, date);
    fs::write(&path, content).map_err(|e| format!("Cannot write {}: {}", path.display(), e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Achievement, QuizMode};

    fn sample_results() -> QuizResults {
        QuizResults {
            score: 50,
            correct: 1,
            incorrect: 1,
            total: 2,
            total_time_ms: 125_000,
            avg_time_ms: 62_500,
            breakdown: Vec::new(),
            new_achievements: vec![Achievement {
                id: "first_steps".to_string(),
                name: "First Steps".to_string(),
                description: "Complete your first quiz".to_string(),
                icon: "🎯",
            }],
        }
    }

    #[test]
    fn report_embeds_all_fields() {
        let config = QuizConfig {
            mode: QuizMode::SubjectSpecific,
            subject: Some("Chemistry".to_string()),
            ..QuizConfig::default()
        };
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let report = build_report(&sample_results(), &config, date);

        assert!(report.contains("Date: 2025-06-01"));
        assert!(report.contains("Quiz Mode: SUBJECT QUIZ"));
        assert!(report.contains("Subject: Chemistry"));
        assert!(report.contains("Final Score: 50%"));
        assert!(report.contains("Correct Answers: 1/2"));
        assert!(report.contains("Time Spent: 2m 5s"));
        assert!(report.contains("First Steps"));
    }

    #[test]
    fn report_without_achievements() {
        let config = QuizConfig::default();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut results = sample_results();
        results.new_achievements.clear();
        let report = build_report(&results, &config, date);
        assert!(report.contains("No new achievements"));
        assert!(report.contains("Subject: Mixed"));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let path = export(&sample_results(), &QuizConfig::default(), date, dir.path()).unwrap();
        assert!(path.ends_with(REPORT_FILENAME));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("QUIZ RESULTS REPORT"));
    }
}
