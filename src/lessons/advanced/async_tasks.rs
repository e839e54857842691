use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::{sleep, timeout};

/// Cooperative concurrency with tokio: tasks, join, timeouts, cancellation
/// and a semaphore. Results are printed after the awaits so the output stays
/// deterministic regardless of task interleaving.
pub struct AsyncTasks;

async fn greet(name: &str, delay: Duration) -> String {
    sleep(delay).await;
    format!("Hello, {}!", name)
}

async fn fetch(source: &str, delay: Duration) -> (String, String) {
    sleep(delay).await;
    (source.to_string(), format!("Data from {}", source))
}

#[async_trait]
impl Lesson for AsyncTasks {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "async-tasks",
            level: Level::Advanced,
            summary: "tokio tasks, join!, timeouts, cancellation, semaphores",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(out, "=== Awaiting a single future ===")?;
        let message = greet("Alice", Duration::from_millis(10)).await;
        writeln!(out, "{}", message)?;

        writeln!(out, "=== join! runs futures concurrently ===")?;
        // Three sleeps overlap; results come back in argument order.
        let (a, b, c) = tokio::join!(
            greet("Alice", Duration::from_millis(30)),
            greet("Bob", Duration::from_millis(20)),
            greet("Charlie", Duration::from_millis(10)),
        );
        writeln!(out, "All results: [{}, {}, {}]", a, b, c)?;

        writeln!(out, "=== Spawned tasks ===")?;
        // spawn starts the work immediately on the runtime.
        let api = tokio::spawn(fetch("API", Duration::from_millis(30)));
        let db = tokio::spawn(fetch("Database", Duration::from_millis(20)));
        let cache = tokio::spawn(fetch("Cache", Duration::from_millis(10)));

        for handle in [api, db, cache] {
            match handle.await {
                Ok((source, data)) => writeln!(out, "  {}: {}", source, data)?,
                Err(e) => writeln!(out, "  task failed: {}", e)?,
            }
        }

        writeln!(out, "=== Timeouts ===")?;
        let slow = sleep(Duration::from_millis(200));
        match timeout(Duration::from_millis(50), slow).await {
            Ok(()) => writeln!(out, "Completed in time")?,
            Err(_) => writeln!(out, "Operation timed out!")?,
        }

        writeln!(out, "=== Cancellation ===")?;
        let task = tokio::spawn(async {
            sleep(Duration::from_secs(10)).await;
            "never reached"
        });
        sleep(Duration::from_millis(10)).await;
        task.abort();
        match task.await {
            Ok(value) => writeln!(out, "Task finished: {}", value)?,
            Err(e) if e.is_cancelled() => writeln!(out, "Task was cancelled!")?,
            Err(e) => writeln!(out, "Task failed: {}", e)?,
        }

        writeln!(out, "=== Semaphore limits concurrency ===")?;
        let semaphore = Arc::new(Semaphore::new(2));
        let in_flight = Arc::new(AtomicUsize::new(0));
        let observed_max = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let semaphore = Arc::clone(&semaphore);
            let in_flight = Arc::clone(&in_flight);
            let observed_max = Arc::clone(&observed_max);
            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await.expect("semaphore closed");
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                observed_max.fetch_max(now, Ordering::SeqCst);
                sleep(Duration::from_millis(20)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            if let Err(e) = handle.await {
                writeln!(out, "  worker failed: {}", e)?;
            }
        }
        writeln!(
            out,
            "4 tasks ran, never more than 2 at once: {}",
            observed_max.load(Ordering::SeqCst) <= 2
        )?;

        Ok(())
    }
}
