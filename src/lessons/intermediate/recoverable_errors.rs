use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;
use std::num::ParseIntError;
use thiserror::Error;

/// Result, Option and the ? operator: recovery as ordinary control flow.
pub struct RecoverableErrors;

#[derive(Error, Debug, PartialEq)]
enum RecipeError {
    #[error("ingredient line '{0}' has no quantity")]
    MissingQuantity(String),

    #[error("bad quantity: {0}")]
    BadQuantity(#[from] ParseIntError),
}

/// Parses "3 eggs" into (3, "eggs"); ? propagates both failure shapes.
fn parse_ingredient(line: &str) -> std::result::Result<(u32, String), RecipeError> {
    let mut parts = line.splitn(2, ' ');
    let quantity = parts
        .next()
        .filter(|q| !q.is_empty())
        .ok_or_else(|| RecipeError::MissingQuantity(line.to_string()))?;
    let name = parts
        .next()
        .ok_or_else(|| RecipeError::MissingQuantity(line.to_string()))?;
    let quantity: u32 = quantity.parse()?;
    Ok((quantity, name.to_string()))
}

fn divide(dividend: f64, divisor: f64) -> Option<f64> {
    if divisor == 0.0 {
        None
    } else {
        Some(dividend / divisor)
    }
}

#[async_trait]
impl Lesson for RecoverableErrors {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "recoverable-errors",
            level: Level::Intermediate,
            summary: "Result, Option, ? and error conversion",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(out, "=== Matching on Result ===")?;
        for line in ["3 eggs", "two eggs", "butter"] {
            match parse_ingredient(line) {
                Ok((quantity, name)) => writeln!(out, "  {} -> {} x {}", line, quantity, name)?,
                Err(e) => writeln!(out, "  {} -> error: {}", line, e)?,
            }
        }

        writeln!(out, "=== Option for absence ===")?;
        writeln!(out, "10 / 4 = {:?}", divide(10.0, 4.0))?;
        writeln!(out, "10 / 0 = {:?}", divide(10.0, 0.0))?;

        let fallback = divide(10.0, 0.0).unwrap_or(f64::INFINITY);
        writeln!(out, "With unwrap_or: {}", fallback)?;

        writeln!(out, "=== Combinators instead of match ===")?;
        let doubled = "21".parse::<i32>().map(|n| n * 2);
        writeln!(out, "Parsed and doubled: {:?}", doubled)?;

        let recovered = "oops".parse::<i32>().unwrap_or_else(|_| -1);
        writeln!(out, "Recovered from parse failure: {}", recovered)?;

        // and_then chains fallible steps without nesting.
        let chained = "8"
            .parse::<f64>()
            .ok()
            .and_then(|n| divide(n, 2.0))
            .map(|n| n + 1.0);
        writeln!(out, "Chained fallible steps: {:?}", chained)?;

        writeln!(out, "=== Collecting Results ===")?;
        // A single Err flips the whole collection.
        let all_good: std::result::Result<Vec<i32>, _> =
            ["1", "2", "3"].iter().map(|s| s.parse::<i32>()).collect();
        writeln!(out, "All parse: {:?}", all_good)?;

        let one_bad: std::result::Result<Vec<i32>, _> =
            ["1", "x", "3"].iter().map(|s| s.parse::<i32>()).collect();
        writeln!(out, "One bad entry: {}", one_bad.is_err())?;

        // Or keep the successes and drop the failures.
        let partial: Vec<i32> = ["1", "x", "3"]
            .iter()
            .filter_map(|s| s.parse::<i32>().ok())
            .collect();
        writeln!(out, "Keeping only successes: {:?}", partial)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingredient() {
        assert_eq!(parse_ingredient("3 eggs").unwrap(), (3, "eggs".to_string()));
        assert!(matches!(
            parse_ingredient("butter"),
            Err(RecipeError::MissingQuantity(_))
        ));
        assert!(matches!(
            parse_ingredient("two eggs"),
            Err(RecipeError::BadQuantity(_))
        ));
    }
}
