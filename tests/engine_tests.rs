use async_trait::async_trait;
use small_lessons::{
    JournalEngine, JournalError, Lesson, LessonInfo, LessonRegistry, Level, SelectionProvider,
};
use std::io::Write;

struct Selection {
    lessons: Vec<String>,
    level: Option<String>,
    stop_on_error: bool,
}

impl Selection {
    fn names(names: &[&str]) -> Self {
        Self {
            lessons: names.iter().map(|s| s.to_string()).collect(),
            level: None,
            stop_on_error: true,
        }
    }

    fn level(level: &str) -> Self {
        Self {
            lessons: vec![],
            level: Some(level.to_string()),
            stop_on_error: true,
        }
    }

    fn everything() -> Self {
        Self {
            lessons: vec![],
            level: None,
            stop_on_error: true,
        }
    }
}

impl SelectionProvider for Selection {
    fn lessons(&self) -> &[String] {
        &self.lessons
    }

    fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    fn stop_on_error(&self) -> bool {
        self.stop_on_error
    }
}

#[tokio::test]
async fn test_run_everything_in_reading_order() {
    let engine = JournalEngine::new(LessonRegistry::built_in());
    let report = engine.run(&Selection::everything()).await.unwrap();

    assert_eq!(report.runs.len(), 20);
    assert_eq!(report.completed(), 20);
    assert_eq!(report.failed(), 0);
    assert_eq!(report.runs[0].name, "greeting");
    assert_eq!(report.runs[19].name, "smart-pointers");
}

#[tokio::test]
async fn test_explicit_names_run_in_given_order() {
    let engine = JournalEngine::new(LessonRegistry::built_in());
    let selection = Selection::names(&["generics", "greeting"]);
    let report = engine.run(&selection).await.unwrap();

    let names: Vec<&str> = report.runs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["generics", "greeting"]);
}

#[tokio::test]
async fn test_level_filter() {
    let engine = JournalEngine::new(LessonRegistry::built_in());
    let report = engine.run(&Selection::level("basics")).await.unwrap();

    assert_eq!(report.runs.len(), 4);
    assert!(report.runs.iter().all(|r| r.level == Level::Basics));
}

#[tokio::test]
async fn test_unknown_lesson_aborts_before_running_anything() {
    let engine = JournalEngine::new(LessonRegistry::built_in());
    let selection = Selection::names(&["greeting", "metaclasses"]);
    let err = engine.run(&selection).await.unwrap_err();

    assert!(matches!(err, JournalError::UnknownLessonError { .. }));
}

#[tokio::test]
async fn test_unknown_level_is_a_config_error() {
    let engine = JournalEngine::new(LessonRegistry::built_in());
    let err = engine.run(&Selection::level("wizard")).await.unwrap_err();
    assert!(matches!(err, JournalError::UnknownLevelError { .. }));
}

struct BrokenLesson;

#[async_trait]
impl Lesson for BrokenLesson {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "broken",
            level: Level::Basics,
            summary: "always fails",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> small_lessons::Result<()> {
        writeln!(out, "partial output before the failure")?;
        Err(JournalError::LessonError {
            name: "broken".to_string(),
            message: "deliberate".to_string(),
        })
    }
}

#[tokio::test]
async fn test_failing_lesson_keeps_partial_output() {
    let engine = JournalEngine::new(LessonRegistry::built_in());
    let run = engine.run_lesson(&BrokenLesson).await.unwrap();

    assert!(!run.ok);
    assert!(run.output.contains("partial output before the failure"));
    assert!(run.error.as_deref().unwrap().contains("deliberate"));
}

#[tokio::test]
async fn test_run_report_serializes() {
    let engine = JournalEngine::new(LessonRegistry::built_in());
    let report = engine.run(&Selection::names(&["greeting"])).await.unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"name\":\"greeting\""));
    assert!(json.contains("\"ok\":true"));
    // Successful runs carry no error field at all.
    assert!(!json.contains("\"error\""));
}
