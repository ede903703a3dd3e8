use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the image-curator library
///
/// Per-file rule failures are not errors; they surface as
/// [`crate::Verdict::Rejected`]. Anything returned as an `Error` from a run
/// aborts that run.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding error
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// File not found error
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Decoded image uses a pixel mode the pipeline does not accept
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Container header could not be parsed
    #[error("Header decoding error: {0}")]
    Header(String),
}
