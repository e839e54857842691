use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::cell::RefCell;
use std::io::Write;
use std::ops::Deref;
use std::rc::Rc;

/// Box, Rc, RefCell and Deref: ownership shapes beyond plain values.
pub struct SmartPointers;

/// Recursive types need indirection; Box provides it.
#[derive(Debug)]
enum List {
    Cons(i32, Box<List>),
    Nil,
}

impl List {
    fn sum(&self) -> i32 {
        match self {
            List::Cons(value, rest) => value + rest.sum(),
            List::Nil => 0,
        }
    }
}

/// Newtype with Deref: wraps a Vec but reads like one.
struct Playlist(Vec<String>);

impl Deref for Playlist {
    type Target = Vec<String>;

    fn deref(&self) -> &Vec<String> {
        &self.0
    }
}

#[async_trait]
impl Lesson for SmartPointers {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "smart-pointers",
            level: Level::Advanced,
            summary: "Box, Rc counts, RefCell mutation and Deref",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(out, "=== Box for recursive data ===")?;
        let list = List::Cons(
            1,
            Box::new(List::Cons(2, Box::new(List::Cons(3, Box::new(List::Nil))))),
        );
        writeln!(out, "List: {:?}", list)?;
        writeln!(out, "Sum: {}", list.sum())?;

        writeln!(out, "=== Rc shares ownership ===")?;
        let shared = Rc::new("shared configuration".to_string());
        writeln!(out, "Count after creation: {}", Rc::strong_count(&shared))?;

        let reader_a = Rc::clone(&shared);
        let reader_b = Rc::clone(&shared);
        writeln!(out, "Count with two clones: {}", Rc::strong_count(&shared))?;
        writeln!(out, "Both see: '{}' / '{}'", reader_a, reader_b)?;

        drop(reader_a);
        drop(reader_b);
        writeln!(out, "Count after drops: {}", Rc::strong_count(&shared))?;

        writeln!(out, "=== RefCell mutates through a shared handle ===")?;
        let scores: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(vec![10, 20]));
        let writer = Rc::clone(&scores);
        writer.borrow_mut().push(30);
        writeln!(out, "Scores after push via clone: {:?}", scores.borrow())?;

        // Borrow rules still hold, checked at runtime instead of compile
        // time: try_borrow_mut fails while a shared borrow is live.
        let reading = scores.borrow();
        writeln!(
            out,
            "Mutable borrow while reading succeeds: {}",
            scores.try_borrow_mut().is_ok()
        )?;
        drop(reading);
        writeln!(
            out,
            "Mutable borrow after reading ends succeeds: {}",
            scores.try_borrow_mut().is_ok()
        )?;

        writeln!(out, "=== Deref on a newtype ===")?;
        let playlist = Playlist(vec!["intro".to_string(), "outro".to_string()]);
        // Vec methods come through the Deref impl.
        writeln!(out, "Tracks: {}", playlist.len())?;
        writeln!(out, "First: {:?}", playlist.first())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sum() {
        let list = List::Cons(1, Box::new(List::Cons(2, Box::new(List::Nil))));
        assert_eq!(list.sum(), 3);
    }

    #[test]
    fn test_refcell_borrow_rules_at_runtime() {
        let cell = RefCell::new(1);
        let shared = cell.borrow();
        assert!(cell.try_borrow_mut().is_err());
        drop(shared);
        assert!(cell.try_borrow_mut().is_ok());
    }
}
