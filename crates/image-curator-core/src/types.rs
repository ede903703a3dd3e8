use std::fmt;
use std::path::PathBuf;

use crate::processing::ContentHash;

/// A file discovered under the input root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Full path to the file
    pub path: PathBuf,

    /// Path relative to the input root, used for the rejection log
    pub relative_path: PathBuf,

    /// File size in bytes
    pub size: u64,
}

impl InputFile {
    /// File name as text, lossily converted
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Pixel layouts the pipeline accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelMode {
    /// 8-bit RGB
    Color,

    /// 8-bit luma
    Grayscale,
}

impl PixelMode {
    /// Number of bytes per pixel
    pub fn channels(self) -> usize {
        match self {
            PixelMode::Color => 3,
            PixelMode::Grayscale => 1,
        }
    }
}

/// A fully decoded image held in memory for validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mode: PixelMode,
    pub width: u32,
    pub height: u32,

    /// Row-major, channel-interleaved pixel bytes
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Iterate over pixels as channel slices
    pub fn pixel_values(&self) -> std::slice::ChunksExact<'_, u8> {
        self.pixels.chunks_exact(self.mode.channels())
    }

    /// True when at least two pixels differ
    pub fn has_variance(&self) -> bool {
        let mut values = self.pixel_values();
        match values.next() {
            Some(first) => values.any(|value| value != first),
            None => false,
        }
    }
}

/// Why a file was turned away, in rule evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RejectReason {
    InvalidExtension,
    FileTooLarge,
    InvalidModeOrUnreadable,
    TooSmall,
    ZeroVariance,
    Duplicate,
}

impl RejectReason {
    /// All reasons in the order their rules run
    pub const ALL: [RejectReason; 6] = [
        RejectReason::InvalidExtension,
        RejectReason::FileTooLarge,
        RejectReason::InvalidModeOrUnreadable,
        RejectReason::TooSmall,
        RejectReason::ZeroVariance,
        RejectReason::Duplicate,
    ];

    /// Stable numeric rule identifier, 1 through 6
    pub fn code(self) -> u8 {
        match self {
            RejectReason::InvalidExtension => 1,
            RejectReason::FileTooLarge => 2,
            RejectReason::InvalidModeOrUnreadable => 3,
            RejectReason::TooSmall => 4,
            RejectReason::ZeroVariance => 5,
            RejectReason::Duplicate => 6,
        }
    }

    /// Text written to the rejection log
    pub fn description(self) -> &'static str {
        match self {
            RejectReason::InvalidExtension => "invalid extension",
            RejectReason::FileTooLarge => "file too large",
            RejectReason::InvalidModeOrUnreadable => "invalid image mode / unreadable",
            RejectReason::TooSmall => "image too small",
            RejectReason::ZeroVariance => "zero variance (blank image)",
            RejectReason::Duplicate => "duplicate image",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// An image that passed every rule
#[derive(Debug, Clone)]
pub struct AcceptedImage {
    pub image: DecodedImage,
    pub hash: ContentHash,
    pub label: String,
}

/// Outcome of evaluating one input file
#[derive(Debug, Clone)]
pub enum Verdict {
    Accepted(AcceptedImage),
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    /// Rejection reason, if any
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected(reason) => Some(*reason),
        }
    }
}

/// A row of the label index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    /// Sequential position among accepted images
    pub index: usize,

    /// Output file name, e.g. `0000000.jpg`
    pub file_name: String,

    pub label: String,
}

/// A line of the rejection log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionLogEntry {
    pub relative_path: PathBuf,
    pub reason: RejectReason,
}

/// One rejection log line: `relative/path,description`. The reason is
/// written as its text, not its numeric code.
impl fmt::Display for RejectionLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.relative_path.display(), self.reason)
    }
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub scanned: usize,
    pub accepted: usize,
    pub rejected: usize,
}
