//! Append-only ledger of dedup keys that were already delivered.
//!
//! One key per line. The file is read in full for every membership check
//! and appended to at most once per run; there is no locking.

use crate::error::{Result, WotdError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Record of previously delivered words.
pub trait Ledger {
    /// Whether `key` was delivered before.
    fn contains(&self, key: &str) -> Result<bool>;
    /// Record `key` as delivered.
    fn append(&mut self, key: &str) -> Result<()>;
}

/// Flat-file ledger.
#[derive(Debug, Clone)]
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All recorded keys; a missing file is an empty ledger.
    pub fn keys(&self) -> Result<Vec<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> WotdError {
        WotdError::Ledger {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Ledger for FileLedger {
    fn contains(&self, key: &str) -> Result<bool> {
        let key = key.trim();
        Ok(self.keys()?.iter().any(|k| k == key))
    }

    fn append(&mut self, key: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        // Keys are line-delimited; keep a multi-line headword on one line.
        let key = key.split_whitespace().collect::<Vec<_>>().join(" ");
        writeln!(file, "{key}").map_err(|e| self.io_error(e))
    }
}
