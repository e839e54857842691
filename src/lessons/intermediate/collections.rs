use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::io::Write;

/// The std containers beyond Vec: maps, sets and the double-ended queue.
/// Printed views are sorted so the output never depends on hash order.
pub struct Collections;

#[async_trait]
impl Lesson for Collections {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "collections",
            level: Level::Intermediate,
            summary: "HashMap, BTreeMap, HashSet and VecDeque",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        // Counting with the entry API, the idiomatic Counter.
        writeln!(out, "=== Counting with entry() ===")?;
        let words = ["apple", "banana", "apple", "cherry", "banana", "apple"];
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for word in words {
            *counts.entry(word).or_insert(0) += 1;
        }
        let mut sorted_counts: Vec<(&str, u32)> = counts.into_iter().collect();
        sorted_counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        writeln!(out, "Word counts (most common first): {:?}", sorted_counts)?;

        let mut char_counts: BTreeMap<char, u32> = BTreeMap::new();
        for c in "mississippi".chars() {
            *char_counts.entry(c).or_insert(0) += 1;
        }
        writeln!(out, "Character counts in 'mississippi': {:?}", char_counts)?;

        // Grouping with or_default, the defaultdict pattern. BTreeMap keeps
        // the keys ordered for printing.
        writeln!(out, "=== Grouping with or_default() ===")?;
        let words = ["apple", "ant", "banana", "bear", "cherry", "cat"];
        let mut grouped: BTreeMap<char, Vec<&str>> = BTreeMap::new();
        for word in words {
            if let Some(first) = word.chars().next() {
                grouped.entry(first).or_default().push(word);
            }
        }
        writeln!(out, "Words grouped by first letter: {:?}", grouped)?;

        // VecDeque pushes and pops at both ends.
        writeln!(out, "=== VecDeque ===")?;
        let mut deque: VecDeque<i32> = VecDeque::from([1, 2, 3]);
        deque.push_back(4);
        deque.push_front(0);
        writeln!(out, "After pushing both ends: {:?}", deque)?;

        deque.pop_back();
        deque.pop_front();
        writeln!(out, "After popping both ends: {:?}", deque)?;

        let mut deque: VecDeque<i32> = (1..=5).collect();
        deque.rotate_right(2);
        writeln!(out, "After rotate_right(2): {:?}", deque)?;
        deque.rotate_left(2);
        writeln!(out, "After rotate_left(2): {:?}", deque)?;

        // A bounded recent-items buffer.
        let mut recent: VecDeque<i32> = VecDeque::with_capacity(3);
        for i in 0..5 {
            if recent.len() == 3 {
                recent.pop_front();
            }
            recent.push_back(i);
            writeln!(out, "  Added {}: {:?}", i, recent)?;
        }

        // Sets deduplicate; BTreeSet-style ordering via sort after collect.
        writeln!(out, "=== HashSet ===")?;
        let numbers = [1, 2, 2, 3, 3, 3, 4, 4, 4, 4];
        let unique: HashSet<i32> = numbers.into_iter().collect();
        let mut unique: Vec<i32> = unique.into_iter().collect();
        unique.sort();
        writeln!(out, "Unique numbers: {:?}", unique)?;

        let evens: HashSet<i32> = (1..=10).filter(|n| n % 2 == 0).collect();
        let odds: HashSet<i32> = (1..=10).filter(|n| n % 2 == 1).collect();
        let mut all: Vec<i32> = evens.union(&odds).copied().collect();
        all.sort();
        writeln!(out, "Union of evens and odds: {:?}", all)?;
        let mut overlap: Vec<i32> = evens.intersection(&odds).copied().collect();
        overlap.sort();
        writeln!(out, "Intersection: {:?}", overlap)?;

        Ok(())
    }
}
