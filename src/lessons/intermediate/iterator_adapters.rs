use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// A tour of the std iterator adapters that cover the classic
/// chain/cycle/slice/accumulate toolbox.
pub struct IteratorAdapters;

#[async_trait]
impl Lesson for IteratorAdapters {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "iterator-adapters",
            level: Level::Intermediate,
            summary: "chain, zip, cycle, step_by, scan and friends",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        // chain combines iterables end to end.
        let combined: Vec<i32> = [1, 2, 3].into_iter().chain([10, 20]).collect();
        writeln!(out, "Chained: {:?}", combined)?;

        // flatten removes one level of nesting.
        let nested = [[1, 2], [3, 4], [5, 6]];
        let flattened: Vec<i32> = nested.into_iter().flatten().collect();
        writeln!(out, "Flattened: {:?}", flattened)?;

        // cycle is infinite; take makes it finite again.
        let colors: Vec<&str> = ["red", "green", "blue"].into_iter().cycle().take(7).collect();
        writeln!(out, "Cycling through colors: {:?}", colors)?;

        // repeat + zip pairs every element with a constant.
        let repeated: Vec<&str> = std::iter::repeat("Hello").take(3).collect();
        writeln!(out, "Repeated: {:?}", repeated)?;

        // skip/take/step_by slice a lazy sequence: (5..15).step_by(2).
        let sliced: Vec<u32> = (0..100).skip(5).take(10).step_by(2).collect();
        writeln!(out, "Sliced (5..15 step 2): {:?}", sliced)?;

        // zip as a selector mask, like compress().
        let data = ["a", "b", "c", "d", "e"];
        let selectors = [true, false, true, false, true];
        let compressed: Vec<&str> = data
            .into_iter()
            .zip(selectors)
            .filter_map(|(value, keep)| keep.then_some(value))
            .collect();
        writeln!(out, "Compressed: {:?}", compressed)?;

        // take_while / skip_while split at the first failing element.
        let numbers = [1, 3, 5, 7, 4, 2, 6, 8];
        let taken: Vec<i32> = numbers.into_iter().take_while(|&x| x < 6).collect();
        let dropped: Vec<i32> = numbers.into_iter().skip_while(|&x| x < 6).collect();
        writeln!(out, "Original: {:?}", numbers)?;
        writeln!(out, "take_while(x < 6): {:?}", taken)?;
        writeln!(out, "skip_while(x < 6): {:?}", dropped)?;

        // scan carries running state, like accumulate().
        let cumsum: Vec<i32> = [1, 2, 3, 4, 5]
            .into_iter()
            .scan(0, |acc, x| {
                *acc += x;
                Some(*acc)
            })
            .collect();
        writeln!(out, "Cumulative sum: {:?}", cumsum)?;

        let running_max: Vec<i32> = [3, 1, 4, 1, 5, 9, 2, 6]
            .into_iter()
            .scan(i32::MIN, |max, x| {
                *max = (*max).max(x);
                Some(*max)
            })
            .collect();
        writeln!(out, "Running maximum: {:?}", running_max)?;

        // flat_map builds a small cartesian product.
        let colors = ["red", "blue"];
        let sizes = ["S", "M", "L"];
        let product: Vec<String> = colors
            .into_iter()
            .flat_map(|c| sizes.into_iter().map(move |s| format!("{}-{}", c, s)))
            .collect();
        writeln!(out, "Color-size combinations: {:?}", product)?;

        Ok(())
    }
}
