use small_lessons::{JournalEngine, LessonRegistry};

async fn run_lesson(name: &str) -> String {
    let engine = JournalEngine::new(LessonRegistry::built_in());
    let lesson = engine.registry().get(name).unwrap();
    let run = engine.run_lesson(lesson).await.unwrap();
    assert!(run.ok, "lesson '{}' failed: {:?}", name, run.error);
    run.output
}

#[tokio::test]
async fn test_closures_lesson_output() {
    let output = run_lesson("closures").await;
    assert!(output.contains("Square of 5: 25"));
    assert!(output.contains("Doubled: [2, 4, 6, 8, 10]"));
    assert!(output.contains("Words longer than 3 chars: [\"sleeping\", \"couch\"]"));
    assert!(output.contains("Sum via fold: 15"));
    assert!(output.contains("Youngest: Bob, age 25"));
    assert!(output.contains("Scaled by captured factor 3: [3, 6, 9, 12, 15]"));
}

#[tokio::test]
async fn test_iterators_lesson_output() {
    let output = run_lesson("iterators").await;
    assert!(output.contains("Fibonacci numbers below 100: [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]"));
    assert!(output.contains("from_fn running totals: [10, 20, 30]"));
    assert!(output.contains("Powers of two via successors: [1, 2, 4, 8, 16, 32, 64]"));
}

#[tokio::test]
async fn test_collections_lesson_is_hash_order_independent() {
    let output = run_lesson("collections").await;
    assert!(output.contains(
        "Word counts (most common first): [(\"apple\", 3), (\"banana\", 2), (\"cherry\", 1)]"
    ));
    assert!(output.contains("After rotate_right(2): [4, 5, 1, 2, 3]"));
    assert!(output.contains("Unique numbers: [1, 2, 3, 4]"));
    assert!(output.contains("Intersection: []"));

    // Twice in a row, byte for byte: nothing leaks hash ordering.
    let again = run_lesson("collections").await;
    assert_eq!(output, again);
}

#[tokio::test]
async fn test_collect_patterns_lesson_output() {
    let output = run_lesson("collect-patterns").await;
    assert!(output.contains("Name lengths: {\"Alice\": 5, \"Bob\": 3, \"Charlie\": 7}"));
    assert!(output.contains("Flattened matrix: [1, 2, 3, 4, 5, 6, 7, 8, 9]"));
    assert!(output.contains("Passing students: [\"Alice\", \"Charlie\"]"));
    assert!(output.contains("Labels: [\"odd\", \"even\", \"odd\", \"even\", \"odd\"]"));
}

#[tokio::test]
async fn test_operators_lesson_output() {
    let output = run_lesson("operators").await;
    assert!(output.contains("v1 + v2 = (4, 6)"));
    assert!(output.contains("-v1 = (-3, -4)"));
    assert!(output.contains("|v1| = 5"));
    assert!(output.contains("Deck length: 52"));
    assert!(output.contains("'A of Spades' in deck: true"));
}

#[tokio::test]
async fn test_traits_lesson_output() {
    let output = run_lesson("traits-and-dispatch").await;
    assert!(output.contains("Buddy is 5 years old"));
    assert!(output.contains("Rex says Woof!"));
    assert!(output.contains("Luna says Meow!"));
    assert!(output.contains("Loudest: BUDDY SAYS WOOF!"));
    assert!(output.contains("area = 15.00"));
    assert!(output.contains("area = 50.27"));
}

#[tokio::test]
async fn test_derived_structs_lesson_output() {
    let output = run_lesson("derived-structs").await;
    assert!(output.contains("p1 == p2 is true"));
    assert!(output.contains("\"title\":\"Rust Mastery\""));
    assert!(output.contains("Round-trips cleanly: true"));
}

#[tokio::test]
async fn test_accessors_lesson_output() {
    let output = run_lesson("accessors").await;
    assert!(output.contains("Diameter: 10"));
    assert!(output.contains("New radius: 10"));
    assert!(output.contains("Rejected: radius cannot be negative, got -1"));
    assert!(output.contains("Name: Alice"));
    assert!(output.contains("Rejected empty name"));
}

#[tokio::test]
async fn test_builders_lesson_output() {
    let output = run_lesson("builders").await;
    assert!(output.contains("host: \"localhost\""));
    assert!(output.contains("Serving on 0.0.0.0:80 with 4 workers (debug: true)"));
    assert!(output.contains("sum_all(&[1, 2, 3, 4, 5]): 15"));
    assert!(output.contains("Plain: hello!"));
    assert!(output.contains("Uppercased and truncated: HELLO"));
}

#[tokio::test]
async fn test_guards_lesson_output() {
    let output = run_lesson("guards").await;
    assert!(output.contains("Opening users_db"));
    assert!(output.contains("Closing users_db"));
    assert!(output.contains("After two acquires: 0"));
    assert!(output.contains("Third acquire succeeds: false"));
    assert!(output.contains("After returning both: 2"));

    // Release must be logged after the sends.
    let open = output.find("Opening users_db").unwrap();
    let close = output.find("Closing users_db").unwrap();
    assert!(open < close);
}

#[tokio::test]
async fn test_text_patterns_lesson_output() {
    let output = run_lesson("text-patterns").await;
    assert!(output.contains("Found 'fox' at position 16-19"));
    assert!(output.contains("Found emails: [\"support@example.com\", \"sales@company.org\"]"));
    assert!(output.contains("Year: 2024"));
    assert!(output.contains("After replace_all: Hi World! Hi Rust!"));
    assert!(output.contains("3-letter words uppercased: THE CAT SAT on THE MAT"));
    assert!(output.contains("Split result: [\"apple\", \"banana\", \"cherry\", \"date\"]"));
    assert!(output.contains("user@example.com: Valid"));
    assert!(output.contains("invalid.email: Invalid"));
}

#[tokio::test]
async fn test_recoverable_errors_lesson_output() {
    let output = run_lesson("recoverable-errors").await;
    assert!(output.contains("3 eggs -> 3 x eggs"));
    assert!(output.contains("butter -> error:"));
    assert!(output.contains("10 / 0 = None"));
    assert!(output.contains("Parsed and doubled: Ok(42)"));
    assert!(output.contains("Keeping only successes: [1, 3]"));
}
