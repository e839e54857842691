use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt::Display;
use std::io::Write;

/// Generic functions and types with trait bounds: compile-time polymorphism.
pub struct Generics;

fn first<T: Copy>(items: &[T]) -> Option<T> {
    items.first().copied()
}

fn largest<T: PartialOrd + Copy>(items: &[T]) -> Option<T> {
    let mut iter = items.iter().copied();
    let mut best = iter.next()?;
    for item in iter {
        if item > best {
            best = item;
        }
    }
    Some(best)
}

/// A generic stack; the bound only appears where it is needed.
struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Two independent type parameters.
struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K, V> Pair<K, V> {
    fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    fn swap(self) -> Pair<V, K> {
        Pair::new(self.value, self.key)
    }
}

/// impl Trait hides the concrete type at both ends of a signature.
fn evens_up_to(limit: u32) -> impl Iterator<Item = u32> {
    (0..=limit).filter(|n| n % 2 == 0)
}

fn render_all(items: &[impl Display]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

#[async_trait]
impl Lesson for Generics {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "generics",
            level: Level::Advanced,
            summary: "generic functions, types, bounds and impl Trait",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(out, "=== Generic functions ===")?;
        writeln!(out, "First int: {:?}", first(&[1, 2, 3]))?;
        writeln!(out, "First char: {:?}", first(&['a', 'b', 'c']))?;
        writeln!(out, "Largest int: {:?}", largest(&[3, 9, 2]))?;
        writeln!(out, "Largest float: {:?}", largest(&[1.5, 0.5, 2.5]))?;
        writeln!(out, "Largest of nothing: {:?}", largest::<i32>(&[]))?;

        writeln!(out, "=== A generic stack ===")?;
        let mut int_stack: Stack<i32> = Stack::new();
        int_stack.push(1);
        int_stack.push(2);
        writeln!(out, "Int stack peek: {:?}", int_stack.peek())?;
        writeln!(out, "Int stack len: {}", int_stack.len())?;

        let mut str_stack: Stack<&str> = Stack::new();
        str_stack.push("hello");
        str_stack.push("world");
        writeln!(out, "String stack pop: {:?}", str_stack.pop())?;

        writeln!(out, "=== Two type parameters ===")?;
        let pair = Pair::new("age", 30);
        writeln!(out, "Pair: ({}, {})", pair.key, pair.value)?;
        let swapped = pair.swap();
        writeln!(out, "Swapped: ({}, {})", swapped.key, swapped.value)?;

        writeln!(out, "=== impl Trait ===")?;
        let evens: Vec<u32> = evens_up_to(10).collect();
        writeln!(out, "Evens up to 10: {:?}", evens)?;
        writeln!(out, "Rendered: {}", render_all(&[10, 20, 30]))?;
        writeln!(out, "Rendered: {}", render_all(&["a", "b"]))?;

        // Monomorphization: each instantiation is its own compiled function,
        // so all of the above dispatches statically.
        writeln!(out, "All dispatch is resolved at compile time")?;

        Ok(())
    }
}
