use std::path::{Path, PathBuf};

use eyre::Result;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// Content on disk was already identical
    Unchanged,
    /// File exists and the rules forbid overwriting it
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (emitted components, pages)
    #[default]
    Always,
    /// Only create if the file doesn't exist (hand-edited files)
    IfMissing,
}

/// A generated output file.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file that always overwrites.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Change the overwrite rule.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its overwrite rule.
    ///
    /// Identical content is left untouched so file watchers stay quiet.
    pub fn write(&self) -> Result<WriteResult> {
        if self.exists() {
            if self.overwrite == Overwrite::IfMissing {
                return Ok(WriteResult::Skipped);
            }
            if std::fs::read_to_string(&self.path).is_ok_and(|on_disk| on_disk == self.content) {
                return Ok(WriteResult::Unchanged);
            }
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("components").join("sections").join("Hero.tsx");

        let result = File::new(&path, "export {}").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "export {}");
    }

    #[test]
    fn test_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Hero.vue");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_write_identical_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.astro");
        fs::write(&path, "same").unwrap();

        let result = File::new(&path, "same").write().unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("global.css");
        fs::write(&path, "user styles").unwrap();

        let result = File::new(&path, "generated")
            .with_overwrite(Overwrite::IfMissing)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "user styles");
    }

    #[test]
    fn test_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("global.css");

        let result = File::new(&path, "generated")
            .with_overwrite(Overwrite::IfMissing)
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert!(path.exists());
    }
}
