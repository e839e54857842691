use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Ad hoc file I/O: write a scratch file, read it back, clean up. The only
/// lesson in the journal that touches the filesystem.
pub struct Files {
    scratch_dir: PathBuf,
}

impl Files {
    pub fn new() -> Self {
        Self {
            scratch_dir: std::env::temp_dir(),
        }
    }

    /// Tests point this at their own temp directory.
    pub fn with_scratch_dir(scratch_dir: PathBuf) -> Self {
        Self { scratch_dir }
    }

    fn scratch_path(&self) -> PathBuf {
        // Process id keeps parallel runs out of each other's way.
        self.scratch_dir
            .join(format!("small-lessons-sample-{}.txt", std::process::id()))
    }
}

impl Default for Files {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Lesson for Files {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "files",
            level: Level::Basics,
            summary: "writing and reading a scratch file",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let path = self.scratch_path();

        fs::write(&path, "This is a sample file.\nLearning Rust is fun!")?;

        // The scratch file comes off disk whether or not the read-back and
        // reporting succeed.
        let report = (|| -> Result<()> {
            let content = fs::read_to_string(&path)?;
            writeln!(out, "File content: {}", content)?;
            writeln!(out, "The file has {} lines", content.lines().count())?;
            Ok(())
        })();
        let removed = fs::remove_file(&path);
        report?;
        removed?;
        writeln!(out, "Scratch file removed")?;
        Ok(())
    }
}
