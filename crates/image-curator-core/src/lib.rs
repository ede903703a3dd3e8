//! Core functionality for curating image datasets.
//!
//! This library provides the components of a single-pass curation run:
//! - File discovery in a deterministic order
//! - Ordered validation rules over decoded pixels
//! - Duplicate detection by pixel-content hash
//! - Sequential output naming, labelling and rejection logging

// -- External Dependencies --
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

// -- Standard Library --
use std::fs;
use std::path::{Path, PathBuf};

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::*;
pub use error::{Error, Result};
pub use types::*;

pub use deduplication::DedupIndex;
pub use processing::{ContentHash, Decoder, ImageDecoder, RuleEvaluator};

// -- Public Modules --
pub mod config;
pub mod deduplication;
pub mod discovery;
pub mod logging;
pub mod output;
pub mod processing;
pub mod types;


use crate::logging::{log_fs_modification, log_rejection};
use crate::output::{LabelIndex, OutputWriter, RejectionLog};

/// Main entry point for the curation process
///
/// Each call to [`ImageCurator::run`] starts from an empty dedup index and
/// output index 0, so runs never share state.
pub struct ImageCurator<D: Decoder = ImageDecoder> {
    config: Config,
    evaluator: RuleEvaluator<D>,
}

impl ImageCurator<ImageDecoder> {
    /// Create a new ImageCurator with the provided configuration
    pub fn new(config: Config) -> Self {
        Self::with_decoder(config, ImageDecoder::new())
    }
}

impl<D: Decoder> ImageCurator<D> {
    /// Create an ImageCurator that decodes through `decoder`
    pub fn with_decoder(config: Config, decoder: D) -> Self {
        Self {
            config,
            evaluator: RuleEvaluator::new(decoder),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full curation pipeline over `input_dir`
    ///
    /// Fails before touching any output if `input_dir` is not an existing
    /// directory. Per-file rule failures never fail the run; they are
    /// written to the rejection log.
    pub fn run(&self, input_dir: impl AsRef<Path>) -> Result<RunSummary> {
        let input_dir = input_dir.as_ref();
        if !input_dir.is_dir() {
            return Err(Error::Configuration(format!(
                "input directory {} is not an existing directory",
                input_dir.display()
            )));
        }
        self.config.validate()?;
        let input_root = fs::canonicalize(input_dir)?;

        // Prepare artifacts before processing any file
        fs::create_dir_all(&self.config.output_dir)?;
        log_fs_modification("create_dir", &self.config.output_dir, None);

        let rejections = RejectionLog::create(&self.config.log_file)?;
        log_fs_modification("truncate", rejections.path(), Some("rejection log"));

        let labels = LabelIndex::create(self.config.labels_path())?;
        log_fs_modification("truncate", labels.path(), Some("label index"));

        // Discover
        let excluded = self.artifacts_inside(&input_root);
        let files = discovery::discover_files(&input_root, &excluded)?;
        info!("Found {} files in {}", files.len(), input_root.display());

        // Validate and write
        let progress = self.progress_bar(files.len() as u64);
        let mut dedup = DedupIndex::new();
        let mut writer = OutputWriter::new(&self.config.output_dir, self.config.name_width, labels);
        let mut summary = RunSummary::default();

        for file in &files {
            summary.scanned += 1;

            match self.evaluator.evaluate(file, &mut dedup) {
                Verdict::Accepted(accepted) => {
                    let record = writer.write(file, &accepted.label)?;
                    debug!(
                        "ACCEPTED - Path: {}, Output: {}, Hash: {}",
                        file.relative_path.display(),
                        record.file_name,
                        accepted.hash
                    );
                    summary.accepted += 1;
                }
                Verdict::Rejected(reason) => {
                    let entry = RejectionLogEntry {
                        relative_path: file.relative_path.clone(),
                        reason,
                    };
                    log_rejection(&entry);
                    rejections.append(&entry)?;
                    summary.rejected += 1;
                }
            }

            progress.inc(1);
        }

        progress.finish_and_clear();
        info!(
            "Curation complete: {} scanned, {} accepted, {} rejected",
            summary.scanned, summary.accepted, summary.rejected
        );

        Ok(summary)
    }

    /// Run artifacts that live strictly inside the input tree
    fn artifacts_inside(&self, input_root: &Path) -> Vec<PathBuf> {
        [&self.config.output_dir, &self.config.log_file]
            .into_iter()
            .filter_map(|path| fs::canonicalize(path).ok())
            .filter(|path| path != input_root && path.starts_with(input_root))
            .collect()
    }

    fn progress_bar(&self, total: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{eta}] {bar:40.cyan/blue} {pos}/{len} ({percent}%) {msg}")
        {
            progress_bar.set_style(style.progress_chars("##-"));
        }
        progress_bar.set_message("Validating images...");
        progress_bar
    }
}

/// Validate every file under `input_dir`, returning the number accepted
///
/// Accepted images are copied to `output_dir` as `0000000.jpg`,
/// `0000001.jpg`, ... alongside `labels.csv`; rejections go to `log_file`.
pub fn validate_images(
    input_dir: impl AsRef<Path>,
    output_dir: impl Into<PathBuf>,
    log_file: impl Into<PathBuf>,
) -> Result<usize> {
    let config = Config {
        output_dir: output_dir.into(),
        log_file: log_file.into(),
        ..Default::default()
    };
    let summary = ImageCurator::new(config).run(input_dir)?;
    Ok(summary.accepted)
}
