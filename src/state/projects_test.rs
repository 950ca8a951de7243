use super::*;

fn project(id: i64, category: &str) -> Project {
    Project {
        id: ProjectId::Number(id),
        title: format!("Project {id}"),
        description: "A project".to_owned(),
        category: category.to_owned(),
        technologies: vec!["Rust".to_owned()],
        image: None,
        image_alt: None,
        role: None,
        overview: String::new(),
        challenges: Vec::new(),
        solution: Vec::new(),
        results: Vec::new(),
    }
}

fn loaded(categories: &[&str]) -> ProjectsState {
    let mut state = ProjectsState::default();
    let list = categories
        .iter()
        .enumerate()
        .map(|(i, c)| project(i64::try_from(i).unwrap() + 1, c))
        .collect();
    state.apply_loaded(list);
    state
}

#[test]
fn default_state_is_loading_with_empty_lists() {
    let state = ProjectsState::default();
    assert!(state.loading);
    assert!(state.all.is_empty());
    assert!(state.filtered.is_empty());
    assert_eq!(state.filter, Filter::All);
    assert!(state.load_error.is_none());
}

#[test]
fn apply_loaded_fills_both_lists_identically() {
    let state = loaded(&["backend", "fullstack", "backend"]);
    assert_eq!(state.all.len(), 3);
    assert_eq!(state.filtered, state.all);
    assert!(!state.loading);
    assert!(state.load_error.is_none());
}

#[test]
fn apply_load_failure_empties_lists_and_records_message() {
    let mut state = loaded(&["backend"]);
    state.apply_load_failure("unable to load");
    assert!(state.all.is_empty());
    assert!(state.filtered.is_empty());
    assert_eq!(state.load_error.as_deref(), Some("unable to load"));
    assert!(!state.loading);
}

#[test]
fn set_filter_category_keeps_matching_in_original_order() {
    let mut state = loaded(&["backend", "fullstack", "backend"]);
    state.set_filter(Filter::from_tag("backend"));
    let ids: Vec<_> = state.filtered.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![ProjectId::Number(1), ProjectId::Number(3)]);
}

#[test]
fn set_filter_all_restores_full_list() {
    let mut state = loaded(&["backend", "fullstack"]);
    state.set_filter(Filter::from_tag("fullstack"));
    state.set_filter(Filter::from_tag("all"));
    assert_eq!(state.filtered, state.all);
    assert_eq!(state.filter, Filter::All);
}

#[test]
fn set_filter_is_idempotent() {
    let mut state = loaded(&["backend", "fullstack", "backend"]);
    state.set_filter(Filter::from_tag("backend"));
    let first = state.filtered.clone();
    state.set_filter(Filter::from_tag("backend"));
    assert_eq!(state.filtered, first);
}

#[test]
fn filtering_never_mutates_the_full_list() {
    let mut state = loaded(&["backend", "fullstack"]);
    let full = state.all.clone();
    state.set_filter(Filter::from_tag("backend"));
    state.set_filter(Filter::from_tag("nonexistent"));
    assert!(state.filtered.is_empty());
    assert_eq!(state.all, full);
}

#[test]
fn find_looks_up_by_id_in_the_full_list() {
    let mut state = loaded(&["backend", "fullstack"]);
    // Filter out project 2, then look it up anyway.
    state.set_filter(Filter::from_tag("backend"));
    let found = state.find(&ProjectId::Number(2)).unwrap();
    assert_eq!(found.category, "fullstack");
}

#[test]
fn find_returns_first_match_for_duplicate_ids() {
    let mut state = ProjectsState::default();
    let mut first = project(7, "backend");
    first.title = "First".to_owned();
    let mut second = project(7, "fullstack");
    second.title = "Second".to_owned();
    state.apply_loaded(vec![first, second]);
    assert_eq!(state.find(&ProjectId::Number(7)).unwrap().title, "First");
}

#[test]
fn find_missing_id_returns_none() {
    let state = loaded(&["backend"]);
    assert!(state.find(&ProjectId::Number(99)).is_none());
    assert!(state.find(&ProjectId::Text("nope".to_owned())).is_none());
}

#[test]
fn filter_tag_round_trips() {
    assert_eq!(Filter::from_tag("all"), Filter::All);
    assert_eq!(Filter::All.tag(), "all");
    let backend = Filter::from_tag("backend");
    assert_eq!(backend, Filter::Category("backend".to_owned()));
    assert_eq!(backend.tag(), "backend");
}

#[test]
fn category_label_maps_known_tags_and_falls_back() {
    assert_eq!(category_label("fullstack"), "Full Stack");
    assert_eq!(category_label("backend"), "Backend");
    assert_eq!(category_label("devops"), "devops");
}

#[test]
fn project_deserializes_with_camel_case_and_defaults() {
    let raw = serde_json::json!({
        "id": "p-1",
        "title": "TaskFlow",
        "description": "Task tracking",
        "category": "fullstack",
        "technologies": ["Rust", "Postgres"],
        "imageAlt": "TaskFlow dashboard"
    });
    let project: Project = serde_json::from_value(raw).unwrap();
    assert_eq!(project.id, ProjectId::Text("p-1".to_owned()));
    assert_eq!(project.image_alt.as_deref(), Some("TaskFlow dashboard"));
    assert!(project.image.is_none());
    assert!(project.role.is_none());
    assert!(project.overview.is_empty());
    assert!(project.challenges.is_empty());
}

#[test]
fn project_id_deserializes_numbers_and_strings() {
    let numeric: ProjectId = serde_json::from_value(serde_json::json!(3)).unwrap();
    assert_eq!(numeric, ProjectId::Number(3));
    let text: ProjectId = serde_json::from_value(serde_json::json!("3")).unwrap();
    assert_eq!(text, ProjectId::Text("3".to_owned()));
    assert_ne!(numeric, text);
}
