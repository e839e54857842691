use small_lessons::{JournalEngine, LessonRegistry};

async fn run_lesson(name: &str) -> String {
    let engine = JournalEngine::new(LessonRegistry::built_in());
    let lesson = engine.registry().get(name).unwrap();
    let run = engine.run_lesson(lesson).await.unwrap();
    assert!(run.ok, "lesson '{}' failed: {:?}", name, run.error);
    run.output
}

#[tokio::test]
async fn test_greeting_prints_exactly_one_line() {
    let output = run_lesson("greeting").await;
    assert_eq!(output, "Hello from the Rust learning journal!\n");
    assert_eq!(output.lines().count(), 1);
}

#[tokio::test]
async fn test_structs_lesson_output() {
    let output = run_lesson("structs-and-methods").await;
    assert!(output.starts_with("Buddy says hello!\n"));
    assert!(output.contains("still named Buddy"));
}

#[tokio::test]
async fn test_vectors_lesson_output() {
    let output = run_lesson("vectors-and-loops").await;
    assert!(output.contains("Fruit: apple\n"));
    assert!(output.contains("Squares: [1, 4, 9, 16, 25]"));
    assert!(output.contains("  3. cherry"));
}

#[tokio::test]
async fn test_basics_output_is_deterministic() {
    for name in ["greeting", "structs-and-methods", "vectors-and-loops"] {
        let first = run_lesson(name).await;
        let second = run_lesson(name).await;
        assert_eq!(first, second, "'{}' output changed between runs", name);
    }
}
