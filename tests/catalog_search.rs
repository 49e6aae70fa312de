use quizgenius::catalog::Catalog;
use quizgenius::model::{Difficulty, DifficultyFilter};

#[test]
fn catalog_loads_complete_and_valid() {
    let catalog = Catalog::load().unwrap();
    assert_eq!(catalog.len(), 15);

    let subjects = catalog.subjects();
    assert_eq!(
        subjects,
        vec![
            "Chemistry",
            "Current Affairs",
            "General Knowledge",
            "Mathematics",
            "Science"
        ]
    );

    for q in catalog.all() {
        assert_eq!(q.options.len(), 4);
        assert!(q.correct < 4);
        assert!(!q.explanation.is_empty());
    }
}

#[test]
fn search_is_case_insensitive_and_ordered() {
    let catalog = Catalog::load().unwrap();
    let hits = catalog
        .search("WHICH", None, DifficultyFilter::Mixed)
        .unwrap();
    assert!(hits.len() >= 2);

    // Catalog order, no ranking.
    let ids: Vec<u32> = hits.iter().map(|q| q.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn search_filters_narrow_results() {
    let catalog = Catalog::load().unwrap();

    let all = catalog.search("the", None, DifficultyFilter::Mixed).unwrap();
    let chemistry = catalog
        .search("the", Some("Chemistry"), DifficultyFilter::Mixed)
        .unwrap();
    assert!(chemistry.len() <= all.len());
    assert!(chemistry.iter().all(|q| q.subject == "Chemistry"));

    let easy = catalog.search("the", None, DifficultyFilter::Easy).unwrap();
    assert!(easy.iter().all(|q| q.difficulty == Difficulty::Easy));
}

#[test]
fn search_matches_category_and_subject_text() {
    let catalog = Catalog::load().unwrap();
    let hits = catalog
        .search("chemistry", None, DifficultyFilter::Mixed)
        .unwrap();
    assert!(hits.iter().any(|q| q.subject == "Chemistry"));
}

#[test]
fn blank_search_term_is_rejected() {
    let catalog = Catalog::load().unwrap();
    let err = catalog.search("   ", None, DifficultyFilter::Mixed).unwrap_err();
    assert_eq!(err, "Please enter a search term");
}

#[test]
fn csv_export_covers_every_question() {
    let catalog = Catalog::load().unwrap();
    let csv = catalog.to_csv();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), catalog.len() + 1);
    assert!(lines[0].contains("subject"));
}
