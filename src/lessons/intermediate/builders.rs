use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// The builder pattern: Rust's answer to flexible call signatures with
/// optional and keyword-style arguments.
pub struct Builders;

#[derive(Debug)]
struct ServerConfig {
    host: String,
    port: u16,
    debug: bool,
    workers: usize,
}

struct ServerConfigBuilder {
    host: String,
    port: u16,
    debug: bool,
    workers: usize,
}

impl ServerConfigBuilder {
    fn new() -> Self {
        // Defaults live in one place.
        Self {
            host: "localhost".to_string(),
            port: 8080,
            debug: false,
            workers: 4,
        }
    }

    fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    fn build(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            debug: self.debug,
            workers: self.workers,
        }
    }
}

/// Variadic-style input is a slice; a trailing options struct stands in for
/// keyword arguments.
fn sum_all(values: &[i64]) -> i64 {
    values.iter().sum()
}

#[derive(Debug, Default)]
struct ProcessOptions {
    uppercase: bool,
    max_length: Option<usize>,
}

fn process_text(input: &str, transforms: &[fn(&str) -> String], options: &ProcessOptions) -> String {
    let mut result = input.to_string();
    for transform in transforms {
        result = transform(&result);
    }
    if options.uppercase {
        result = result.to_uppercase();
    }
    if let Some(max) = options.max_length {
        result.truncate(max);
    }
    result
}

#[async_trait]
impl Lesson for Builders {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "builders",
            level: Level::Intermediate,
            summary: "builder pattern, slices as variadics, options structs",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(out, "=== Builder with defaults ===")?;
        let default_config = ServerConfigBuilder::new().build();
        writeln!(out, "Defaults: {:?}", default_config)?;

        let custom = ServerConfigBuilder::new()
            .host("0.0.0.0")
            .port(80)
            .debug(true)
            .build();
        writeln!(out, "Custom: {:?}", custom)?;
        writeln!(
            out,
            "Serving on {}:{} with {} workers (debug: {})",
            custom.host, custom.port, custom.workers, custom.debug
        )?;

        let tuned = ServerConfigBuilder::new().workers(16).build();
        writeln!(out, "Tuned workers only: {:?}", tuned)?;

        writeln!(out, "=== Slices as variadics ===")?;
        writeln!(out, "sum_all(&[1, 2]): {}", sum_all(&[1, 2]))?;
        writeln!(out, "sum_all(&[1, 2, 3, 4, 5]): {}", sum_all(&[1, 2, 3, 4, 5]))?;

        writeln!(out, "=== Options struct as keyword arguments ===")?;
        fn trim(s: &str) -> String {
            s.trim().to_string()
        }
        fn exclaim(s: &str) -> String {
            format!("{}!", s)
        }

        let plain = process_text("  hello  ", &[trim, exclaim], &ProcessOptions::default());
        writeln!(out, "Plain: {}", plain)?;

        let shouted = process_text(
            "  hello  ",
            &[trim, exclaim],
            &ProcessOptions {
                uppercase: true,
                max_length: Some(5),
            },
        );
        writeln!(out, "Uppercased and truncated: {}", shouted)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ServerConfigBuilder::new().build();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
        assert_eq!(config.workers, 4);
    }

    #[test]
    fn test_process_text_applies_transforms_in_order() {
        fn trim(s: &str) -> String {
            s.trim().to_string()
        }
        fn exclaim(s: &str) -> String {
            format!("{}!", s)
        }
        let result = process_text("  hi  ", &[trim, exclaim], &ProcessOptions::default());
        assert_eq!(result, "hi!");
    }
}
