//! core::persist::store
//!
//! Whole-file reads and writes of encoded lists.
//!
//! # Writes
//!
//! Content is written to a sibling `.tmp` file, synced, then renamed over
//! the target, so a failed write never leaves a half-written list behind.
//! Overwriting an existing file is allowed and logged as a warning, except
//! through [`ListFile::rewrite`], which stores a list back where it was read.
//!
//! # Example
//!
//! ```no_run
//! use typedlist::core::list::List;
//! use typedlist::core::persist::ListFile;
//!
//! let mut list = List::texts();
//! list.add(0, "hello").unwrap();
//!
//! let file = ListFile::new("/tmp/greetings.txt");
//! file.write(&list).unwrap();
//! assert_eq!(file.read().unwrap(), list);
//! ```

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::codec::{decode, encode};
use crate::core::error::ListError;
use crate::core::list::List;
use crate::ui::output::{self, Verbosity};

/// File name used when no path is given.
pub const DEFAULT_FILE_NAME: &str = "psp4c.txt";

/// `DEFAULT_FILE_NAME` inside the system temp directory.
pub fn default_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_FILE_NAME)
}

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    /// Whether a file already existed at `path`.
    pub overwritten: bool,
}

/// A list file at a fixed path.
#[derive(Debug, Clone)]
pub struct ListFile {
    path: PathBuf,
    verbosity: Verbosity,
}

impl ListFile {
    /// Bind to `path`. An empty path means [`default_path`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = if path.as_os_str().is_empty() {
            default_path()
        } else {
            path
        };
        Self {
            path,
            verbosity: Verbosity::Normal,
        }
    }

    /// Bind to `path`, or to [`default_path`] when `None`.
    pub fn or_default(path: Option<PathBuf>) -> Self {
        Self::new(path.unwrap_or_else(default_path))
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and decode the file.
    ///
    /// # Errors
    ///
    /// - [`ListError::FileNotFound`] if nothing exists at the path
    /// - [`ListError::Io`] for other read failures
    /// - Any error from [`decode`]
    pub fn read(&self) -> Result<List, ListError> {
        output::debug(
            format!("reading list from {}", self.path.display()),
            self.verbosity,
        );
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ListError::FileNotFound {
                path: self.path.clone(),
            },
            _ => self.io_error(e),
        })?;
        decode(&text)
    }

    /// Encode and write `list`, replacing any existing file.
    ///
    /// Creates parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Io`] if any filesystem step fails.
    pub fn write(&self, list: &List) -> Result<WriteOutcome, ListError> {
        let overwritten = self.exists();
        if overwritten {
            output::warn("file already exists, will overwrite.", self.verbosity);
        }
        self.store(list, overwritten)
    }

    /// Write back a list that was read from this file.
    ///
    /// Same as [`write`](Self::write) without the overwrite notice.
    pub fn rewrite(&self, list: &List) -> Result<WriteOutcome, ListError> {
        self.store(list, self.exists())
    }

    fn store(&self, list: &List, overwritten: bool) -> Result<WriteOutcome, ListError> {

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let temp_path = self.temp_path();
        output::debug(
            format!(
                "writing {} element(s) via {}",
                list.len(),
                temp_path.display()
            ),
            self.verbosity,
        );

        let contents = encode(list);
        let mut file = fs::File::create(&temp_path).map_err(|e| self.io_error(e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| self.io_error(e))?;
        file.sync_all().map_err(|e| self.io_error(e))?;

        fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))?;

        Ok(WriteOutcome {
            path: self.path.clone(),
            overwritten,
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> ListError {
        ListError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl List {
    /// Write this list to `path` (or the default path when empty).
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<WriteOutcome, ListError> {
        ListFile::new(path.as_ref()).write(self)
    }

    /// Read a list previously written with [`write_to_file`](Self::write_to_file).
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<List, ListError> {
        ListFile::new(path.as_ref()).read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_path_means_default() {
        assert_eq!(ListFile::new("").path(), default_path());
        assert_eq!(ListFile::or_default(None).path(), default_path());
        assert!(default_path().ends_with(DEFAULT_FILE_NAME));
    }

    #[test]
    fn write_then_read() {
        let temp = TempDir::new().unwrap();
        let file = ListFile::new(temp.path().join("list.txt")).with_verbosity(Verbosity::Quiet);

        let mut list = List::integers();
        list.add(0, 1).unwrap();
        list.add(1, 2).unwrap();

        let outcome = file.write(&list).unwrap();
        assert!(!outcome.overwritten);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "1\n1\n2\n");
        assert_eq!(file.read().unwrap(), list);
    }

    #[test]
    fn second_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let file = ListFile::new(temp.path().join("list.txt")).with_verbosity(Verbosity::Quiet);

        file.write(&List::texts()).unwrap();
        let outcome = file.write(&List::integers()).unwrap();
        assert!(outcome.overwritten);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "1\n");
        assert!(!temp.path().join("list.txt.tmp").exists());
    }

    #[test]
    fn rewrite_replaces_loaded_file() {
        let temp = TempDir::new().unwrap();
        let file = ListFile::new(temp.path().join("list.txt"));
        file.write(&List::texts()).unwrap();

        let mut list = file.read().unwrap();
        list.add(0, "kept").unwrap();
        let outcome = file.rewrite(&list).unwrap();

        assert!(outcome.overwritten);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "2\nkept\n");
        assert!(!temp.path().join("list.txt.tmp").exists());
    }

    #[test]
    fn creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a/b/list.txt");
        let file = ListFile::new(&path).with_verbosity(Verbosity::Quiet);
        file.write(&List::texts()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn missing_file_not_found() {
        let temp = TempDir::new().unwrap();
        let err = List::read_from_file(temp.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, ListError::FileNotFound { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }
}
