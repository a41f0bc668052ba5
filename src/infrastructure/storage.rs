//! Storage port for the exam data file

use crate::error::{ExamError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Raw persistence for the serialized exam collection
pub trait ExamStorage {
    /// Where the data lives, used in error messages
    fn location(&self) -> &Path;

    /// Read the stored contents, or `None` if nothing has been stored yet
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored contents
    fn write(&mut self, contents: &str) -> Result<()>;
}

/// File system implementation of ExamStorage
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        FileStorage { path }
    }

    fn temp_path(&self) -> PathBuf {
        let tmp_name = format!(
            "{}.examplan-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("exams.json"),
            std::process::id()
        );
        self.path.with_file_name(tmp_name)
    }
}

impl ExamStorage for FileStorage {
    fn location(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ExamError::Storage(e)),
        }
    }

    /// Best-effort atomic replace: write a temp file in the same directory,
    /// then rename it over the target.
    fn write(&mut self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.temp_path();
        if let Err(e) = fs::write(&tmp_path, contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ExamError::Storage(e));
        }

        // rename does not overwrite on Windows
        #[cfg(windows)]
        {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ExamError::Storage(e));
        }

        Ok(())
    }
}

/// In-memory implementation of ExamStorage, for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    location: PathBuf,
    contents: Option<String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage {
            location: PathBuf::from("<memory>"),
            ..Default::default()
        }
    }

    /// Start with existing contents, as if a file were already present
    pub fn with_contents(contents: impl Into<String>) -> Self {
        MemoryStorage {
            contents: Some(contents.into()),
            ..Self::new()
        }
    }

    /// Make every subsequent write fail with an I/O error
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ExamStorage for MemoryStorage {
    fn location(&self) -> &Path {
        &self.location
    }

    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if self.fail_writes {
            return Err(ExamError::Storage(std::io::Error::other("write rejected")));
        }
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }
}
