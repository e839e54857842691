use small_lessons::{Level, LessonRegistry};

#[test]
fn test_catalog_has_all_twenty_lessons() {
    let registry = LessonRegistry::built_in();
    assert_eq!(registry.len(), 20);
    assert!(!registry.is_empty());
}

#[test]
fn test_level_counts_match_the_readme_split() {
    let registry = LessonRegistry::built_in();
    assert_eq!(registry.by_level(Level::Basics).len(), 4);
    assert_eq!(registry.by_level(Level::Intermediate).len(), 13);
    assert_eq!(registry.by_level(Level::Advanced).len(), 3);
}

#[test]
fn test_lookup_by_name() {
    let registry = LessonRegistry::built_in();
    let lesson = registry.get("text-patterns").unwrap();
    assert_eq!(lesson.info().level, Level::Intermediate);

    let err = registry.get("metaclasses").err().unwrap();
    assert!(err.user_friendly_message().contains("metaclasses"));
}

#[test]
fn test_suggestion_for_typos() {
    let registry = LessonRegistry::built_in();
    assert_eq!(registry.suggest("greet"), Some("greeting"));
    assert_eq!(registry.suggest("pointers"), Some("smart-pointers"));
    assert_eq!(registry.suggest("zzz"), None);
}

#[test]
fn test_infos_serialize_to_json() {
    let registry = LessonRegistry::built_in();
    let json = serde_json::to_string(&registry.infos()).unwrap();
    assert!(json.contains("\"name\":\"greeting\""));
    assert!(json.contains("\"level\":\"basics\""));
}

#[test]
fn test_summaries_are_filled_in() {
    let registry = LessonRegistry::built_in();
    for info in registry.infos() {
        assert!(!info.summary.is_empty(), "{} has no summary", info.name);
        assert!(!info.name.contains(' '), "{} is not kebab-case", info.name);
    }
}
