use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// RAII and Drop: cleanup that runs when a value leaves scope, the Rust
/// shape of enter/exit blocks.
pub struct Guards;

/// Logs acquisition on construction and release on Drop. The log is shared
/// through Rc<RefCell<..>> so the lesson can print it after the guard dies.
struct ConnectionGuard {
    name: String,
    log: Rc<RefCell<Vec<String>>>,
}

impl ConnectionGuard {
    fn open(name: &str, log: Rc<RefCell<Vec<String>>>) -> Self {
        log.borrow_mut().push(format!("Opening {}", name));
        Self {
            name: name.to_string(),
            log,
        }
    }

    fn send(&self, message: &str) {
        self.log
            .borrow_mut()
            .push(format!("{} <- {}", self.name, message));
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("Closing {}", self.name));
    }
}

/// A counted resource pool; the guard returns its slot on Drop.
struct Pool {
    available: Rc<RefCell<u32>>,
}

struct PoolSlot {
    available: Rc<RefCell<u32>>,
}

impl Pool {
    fn new(size: u32) -> Self {
        Self {
            available: Rc::new(RefCell::new(size)),
        }
    }

    fn available(&self) -> u32 {
        *self.available.borrow()
    }

    fn acquire(&self) -> Option<PoolSlot> {
        let mut available = self.available.borrow_mut();
        if *available == 0 {
            return None;
        }
        *available -= 1;
        Some(PoolSlot {
            available: Rc::clone(&self.available),
        })
    }
}

impl Drop for PoolSlot {
    fn drop(&mut self) {
        *self.available.borrow_mut() += 1;
    }
}

#[async_trait]
impl Lesson for Guards {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "guards",
            level: Level::Intermediate,
            summary: "RAII, Drop and scope-bound cleanup",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(out, "=== Drop runs at end of scope ===")?;
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let conn = ConnectionGuard::open("users_db", Rc::clone(&log));
            conn.send("INSERT");
            conn.send("SELECT");
            // conn dropped here, releasing the connection.
        }
        for line in log.borrow().iter() {
            writeln!(out, "{}", line)?;
        }

        writeln!(out, "=== Early drop with drop() ===")?;
        let log = Rc::new(RefCell::new(Vec::new()));
        let conn = ConnectionGuard::open("cache", Rc::clone(&log));
        conn.send("GET");
        drop(conn);
        log.borrow_mut().push("Continued after explicit drop".to_string());
        for line in log.borrow().iter() {
            writeln!(out, "{}", line)?;
        }

        writeln!(out, "=== A counted pool ===")?;
        let pool = Pool::new(2);
        writeln!(out, "Available: {}", pool.available())?;

        let first = pool.acquire();
        let second = pool.acquire();
        writeln!(out, "After two acquires: {}", pool.available())?;
        writeln!(out, "Third acquire succeeds: {}", pool.acquire().is_some())?;

        drop(first);
        writeln!(out, "After returning one: {}", pool.available())?;
        drop(second);
        writeln!(out, "After returning both: {}", pool.available())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_slots_return_on_drop() {
        let pool = Pool::new(1);
        {
            let slot = pool.acquire();
            assert!(slot.is_some());
            assert!(pool.acquire().is_none());
        }
        assert_eq!(pool.available(), 1);
    }

    #[test]
    fn test_guard_logs_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let conn = ConnectionGuard::open("db", Rc::clone(&log));
            conn.send("ping");
        }
        let lines = log.borrow();
        assert_eq!(
            *lines,
            vec![
                "Opening db".to_string(),
                "db <- ping".to_string(),
                "Closing db".to_string()
            ]
        );
    }
}
