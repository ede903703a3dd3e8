//! Writing of accepted images and run artifacts.

pub mod labels;
pub mod rejection_log;

pub use labels::LabelIndex;
pub use rejection_log::RejectionLog;

use log::debug;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::types::{InputFile, OutputRecord};

/// Extension given to every output image
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Format a sequential index as a zero-padded output file name
pub fn output_file_name(index: usize, width: usize) -> String {
    format!("{:0width$}.{}", index, OUTPUT_EXTENSION, width = width)
}

/// Copies accepted images under sequential names and labels them
///
/// The writer owns the running index, so names are gap-free as long as
/// every accepted image goes through [`OutputWriter::write`].
#[derive(Debug)]
pub struct OutputWriter {
    output_dir: PathBuf,
    name_width: usize,
    next_index: usize,
    labels: LabelIndex,
}

impl OutputWriter {
    /// Create a writer over an existing output directory and label index
    pub fn new(output_dir: impl Into<PathBuf>, name_width: usize, labels: LabelIndex) -> Self {
        Self {
            output_dir: output_dir.into(),
            name_width,
            next_index: 0,
            labels,
        }
    }

    /// Copy `source` verbatim under the next name and append its label row
    pub fn write(&mut self, source: &InputFile, label: &str) -> Result<OutputRecord> {
        let index = self.next_index;
        let file_name = output_file_name(index, self.name_width);
        let destination = self.output_dir.join(&file_name);

        fs::copy(&source.path, &destination)?;

        let record = OutputRecord {
            index,
            file_name,
            label: label.to_string(),
        };
        self.labels.append(&record)?;
        self.next_index += 1;

        debug!(
            "Copied {} -> {} (label: {:?})",
            source.path.display(),
            destination.display(),
            record.label
        );

        Ok(record)
    }

    /// Number of images written so far
    pub fn written(&self) -> usize {
        self.next_index
    }
}
