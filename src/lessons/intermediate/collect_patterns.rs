use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::Write;

/// Building collections from iterator chains: what comprehensions become
/// in Rust. BTreeMap keeps printed maps in key order.
pub struct CollectPatterns;

#[async_trait]
impl Lesson for CollectPatterns {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "collect-patterns",
            level: Level::Intermediate,
            summary: "collecting iterator chains into Vec, maps and sets",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let squares: Vec<i32> = (1..=5).map(|x| x * x).collect();
        writeln!(out, "Squares: {:?}", squares)?;

        // Map from an iterator of pairs.
        let names = ["Alice", "Bob", "Charlie"];
        let name_lengths: BTreeMap<&str, usize> =
            names.into_iter().map(|name| (name, name.len())).collect();
        writeln!(out, "Name lengths: {:?}", name_lengths)?;

        // Filter before mapping: even squares only.
        let even_squares: BTreeMap<i32, i32> = (1..=10)
            .filter(|n| n % 2 == 0)
            .map(|n| (n, n * n))
            .collect();
        writeln!(out, "Even number squares: {:?}", even_squares)?;

        // Swapping keys and values is one more map.
        let original = BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let swapped: BTreeMap<i32, &str> = original.into_iter().map(|(k, v)| (v, k)).collect();
        writeln!(out, "Swapped map: {:?}", swapped)?;

        // zip builds a map from parallel slices.
        let keys = ["name", "age", "city"];
        let values = ["Alice", "30", "NYC"];
        let combined: BTreeMap<&str, &str> = keys.into_iter().zip(values).collect();
        writeln!(out, "Combined from two arrays: {:?}", combined)?;

        // Flattening nested data.
        let matrix = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];
        let flattened: Vec<i32> = matrix.into_iter().flatten().collect();
        writeln!(out, "Flattened matrix: {:?}", flattened)?;

        let even_elements: Vec<i32> = matrix
            .into_iter()
            .flatten()
            .filter(|n| n % 2 == 0)
            .collect();
        writeln!(out, "Even elements from matrix: {:?}", even_elements)?;

        // Nested map: a multiplication table.
        let table: Vec<Vec<i32>> = (1..=5)
            .map(|i| (1..=5).map(|j| i * j).collect())
            .collect();
        writeln!(out, "5x5 multiplication table:")?;
        for row in &table {
            writeln!(out, "  {:?}", row)?;
        }

        // Conditional expression inside the chain.
        let labels: Vec<&str> = (1..=5)
            .map(|n| if n % 2 == 0 { "even" } else { "odd" })
            .collect();
        writeln!(out, "Labels: {:?}", labels)?;

        // Filter-then-project over struct-shaped data.
        let students = [("Alice", 85), ("Bob", 72), ("Charlie", 90), ("David", 68)];
        let passing: Vec<&str> = students
            .into_iter()
            .filter(|&(_, score)| score >= 75)
            .map(|(name, _)| name)
            .collect();
        writeln!(out, "Passing students: {:?}", passing)?;

        let grades: BTreeMap<&str, char> = students
            .into_iter()
            .map(|(name, score)| {
                let grade = match score {
                    90..=100 => 'A',
                    80..=89 => 'B',
                    70..=79 => 'C',
                    _ => 'D',
                };
                (name, grade)
            })
            .collect();
        writeln!(out, "Grades: {:?}", grades)?;

        Ok(())
    }
}
