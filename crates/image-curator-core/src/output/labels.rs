use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::OutputRecord;

/// Column delimiter of the label index
pub const DELIMITER: &str = ";";

/// Header row of the label index
pub const HEADER: [&str; 2] = ["name", "label"];

/// Semicolon-delimited `name;label` index of accepted images
///
/// The file is reopened for every appended row so an interrupted run leaves
/// only complete rows behind.
#[derive(Debug, Clone)]
pub struct LabelIndex {
    path: PathBuf,
}

impl LabelIndex {
    /// Create or truncate the index and write its header
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut file = File::create(&path)?;
        writeln!(file, "{}", HEADER.join(DELIMITER))?;
        Ok(Self { path })
    }

    /// Append one row
    pub fn append(&self, record: &OutputRecord) -> Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{}{}{}", record.file_name, DELIMITER, record.label)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
