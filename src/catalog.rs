use crate::model::{DifficultyFilter, Question};
use crate::util;

/// Embedded question set. Fixed at build time; the catalog has no
/// insert/update/delete operations.
const QUESTIONS_YAML: &str = include_str!("../data/questions.yaml");

#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    pub fn load() -> Result<Self, String> {
        let questions: Vec<Question> = serde_yaml::from_str(QUESTIONS_YAML)
            .map_err(|e| format!("Invalid question catalog: {}", e))?;

        for q in &questions {
            if q.options.len() != 4 {
                return Err(format!("Question {} must have 4 options", q.id));
            }
            if q.correct >= q.options.len() {
                return Err(format!("Question {} has an out-of-range answer", q.id));
            }
        }

        let questions = util::dedup_by_key(questions, |q| q.id);
        Ok(Self { questions })
    }

    /// Deterministic, catalog order.
    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct subjects in catalog order.
    pub fn subjects(&self) -> Vec<String> {
        let mut subjects: Vec<String> = Vec::new();
        for q in &self.questions {
            if !subjects.contains(&q.subject) {
                subjects.push(q.subject.clone());
            }
        }
        subjects
    }

    /// Case-insensitive substring search over text, category and subject,
    /// narrowed by the optional filters. Results keep catalog order; there
    /// is no ranking. An empty term after trimming is rejected.
    pub fn search(
        &self,
        term: &str,
        subject: Option<&str>,
        difficulty: DifficultyFilter,
    ) -> Result<Vec<&Question>, String> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Err("Please enter a search term".to_string());
        }

        let results = self
            .questions
            .iter()
            .filter(|q| {
                q.text.to_lowercase().contains(&term)
                    || q.category.to_lowercase().contains(&term)
                    || q.subject.to_lowercase().contains(&term)
            })
            .filter(|q| subject.map_or(true, |s| q.subject.eq_ignore_ascii_case(s)))
            .filter(|q| difficulty.matches(q.difficulty))
            .collect();

        Ok(results)
    }

    /// CSV rendition of the catalog, one row per question.
    pub fn to_csv(&self) -> String {
        let headers = ["id", "subject", "category", "difficulty", "text"];
        let rows: Vec<Vec<String>> = self
            .questions
            .iter()
            .map(|q| {
                vec![
                    q.id.to_string(),
                    q.subject.clone(),
                    q.category.clone(),
                    q.difficulty.label().to_string(),
                    q.text.clone(),
                ]
            })
            .collect();
        util::to_csv(&headers, &rows, ',')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_loads_fifteen_unique_questions() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.len(), 15);

        let mut ids: Vec<u32> = catalog.all().iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn subjects_in_catalog_order() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(
            catalog.subjects(),
            vec![
                "Chemistry",
                "Current Affairs",
                "General Knowledge",
                "Mathematics",
                "Science"
            ]
        );
    }

    #[test]
    fn search_rejects_blank_terms() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.search("", None, DifficultyFilter::Mixed).is_err());
        assert!(catalog.search("   ", None, DifficultyFilter::Mixed).is_err());
    }

    #[test]
    fn search_matches_text_category_and_subject() {
        let catalog = Catalog::load().unwrap();

        let by_text = catalog
            .search("guitar", None, DifficultyFilter::Mixed)
            .unwrap();
        assert_eq!(by_text.len(), 1);
        assert_eq!(by_text[0].id, 3);

        let by_category = catalog
            .search("nobel", None, DifficultyFilter::Mixed)
            .unwrap();
        assert!(by_category.iter().any(|q| q.id == 1));

        let by_subject = catalog
            .search("chemistry", None, DifficultyFilter::Mixed)
            .unwrap();
        assert_eq!(by_subject.len(), 3);
    }

    #[test]
    fn search_applies_filters() {
        let catalog = Catalog::load().unwrap();
        let results = catalog
            .search("chemistry", Some("Chemistry"), DifficultyFilter::Easy)
            .unwrap();
        assert!(results.iter().all(|q| q.subject == "Chemistry"));
        assert!(results
            .iter()
            .all(|q| q.difficulty == crate::model::Difficulty::Easy));
    }

    #[test]
    fn csv_export_has_header_and_rows() {
        let catalog = Catalog::load().unwrap();
        let csv = catalog.to_csv();
        assert!(csv.starts_with("id,subject,category,difficulty,text\n"));
        assert_eq!(csv.lines().count(), 16);
    }
}
