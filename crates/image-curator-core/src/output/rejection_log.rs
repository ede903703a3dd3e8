use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::RejectionLogEntry;

/// Plain-text log with one `relativePath,reason` line per rejected file
#[derive(Debug, Clone)]
pub struct RejectionLog {
    path: PathBuf,
}

impl RejectionLog {
    /// Create parent directories, then create or truncate the log
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        File::create(&path)?;
        Ok(Self { path })
    }

    /// Append one entry, reopening the file for this write only
    pub fn append(&self, entry: &RejectionLogEntry) -> Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
