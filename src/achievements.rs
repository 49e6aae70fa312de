use crate::model::{Achievement, QuizConfig, QuizResults, UserProgress};
use crate::util;

/// Conditions checked at session completion, in presentation order.
/// `SubjectExpert` expands to one check per subject in the breakdown.
#[derive(Debug, Clone, Copy)]
enum Condition {
    FirstQuiz,
    PerfectScore,
    SpeedMaster,
    SubjectExpert,
    KnowledgeSeeker,
}

const RULES: [Condition; 5] = [
    Condition::FirstQuiz,
    Condition::PerfectScore,
    Condition::SpeedMaster,
    Condition::SubjectExpert,
    Condition::KnowledgeSeeker,
];

pub fn subject_expert_id(subject: &str) -> String {
    format!("{}_expert", util::slugify(subject).replace('-', "_"))
}

fn subject_icon(subject: &str) -> &'static str {
    match subject {
        "Chemistry" => "⚗",
        "Current Affairs" => "📰",
        "General Knowledge" => "🌍",
        "Mathematics" => "🔢",
        "Science" => "🔬",
        _ => "📖",
    }
}

fn fixed_achievement(id: &str) -> Achievement {
    let (name, description, icon) = match id {
        "first_steps" => ("First Steps", "Complete your first quiz", "🎯"),
        "perfect_score" => ("Perfect Score", "Achieve 100% accuracy", "🏆"),
        "speed_master" => ("Speed Master", "Complete timed quiz quickly", "⚡"),
        "knowledge_seeker" => ("Knowledge Seeker", "Complete 10 quizzes", "📚"),
        "streak_master" => ("Streak Master", "5 consecutive days", "🔥"),
        _ => ("Unknown", "", "📖"),
    };
    Achievement {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon,
    }
}

fn subject_expert(subject: &str) -> Achievement {
    Achievement {
        id: subject_expert_id(subject),
        name: format!("{} Expert", subject),
        description: format!("Score 95%+ in {} quiz", subject),
        icon: subject_icon(subject),
    }
}

/// Full display catalog for the dashboard grid, earned or not.
pub fn display_catalog(subjects: &[String]) -> Vec<Achievement> {
    let mut all = vec![
        fixed_achievement("first_steps"),
        fixed_achievement("perfect_score"),
        fixed_achievement("speed_master"),
    ];
    for subject in subjects {
        all.push(subject_expert(subject));
    }
    all.push(fixed_achievement("knowledge_seeker"));
    all.push(fixed_achievement("streak_master"));
    all
}

/// Evaluate the rule table against a just-completed session. Expects the
/// session to already be folded into `progress` (quizzes_taken counts this
/// one). Newly met conditions are appended to the achievement set and
/// returned; ids already present are never re-awarded.
pub fn evaluate(
    results: &QuizResults,
    config: &QuizConfig,
    progress: &mut UserProgress,
) -> Vec<Achievement> {
    let mut earned = Vec::new();

    let mut award = |progress: &mut UserProgress, achievement: Achievement| {
        if !progress.has_achievement(&achievement.id) {
            progress.achievements.push(achievement.id.clone());
            earned.push(achievement);
        }
    };

    for rule in RULES {
        match rule {
            Condition::FirstQuiz => {
                if progress.quizzes_taken == 1 {
                    award(progress, fixed_achievement("first_steps"));
                }
            }
            Condition::PerfectScore => {
                if results.score == 100 {
                    award(progress, fixed_achievement("perfect_score"));
                }
            }
            Condition::SpeedMaster => {
                if config.time_limit_secs > 0
                    && results.total_time_ms < (config.time_limit_secs as f64 * 0.8 * 1000.0) as u64
                {
                    award(progress, fixed_achievement("speed_master"));
                }
            }
            Condition::SubjectExpert => {
                for (subject, stats) in &results.breakdown {
                    if stats.percentage >= 95 {
                        award(progress, subject_expert(subject));
                    }
                }
            }
            Condition::KnowledgeSeeker => {
                if progress.quizzes_taken >= 10 {
                    award(progress, fixed_achievement("knowledge_seeker"));
                }
            }
        }
    }

    earned
}
