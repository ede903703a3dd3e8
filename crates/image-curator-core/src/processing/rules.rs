//! Ordered validation rules.
//!
//! Rules run strictly in order and the first failure decides the verdict:
//!
//! 1. extension is `.jpg` or `.jpeg` (case-insensitive)
//! 2. file size is at most [`MAX_FILE_SIZE`] bytes
//! 3. file decodes to 8-bit RGB or 8-bit grayscale
//! 4. width and height are at least [`MIN_DIMENSION`]
//! 5. at least two pixels differ
//! 6. pixel content has not been seen earlier in the run
//!
//! Only rule 6 touches state: a hash is recorded in the [`DedupIndex`] when,
//! and only when, the file passes every rule.

use log::debug;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::deduplication::DedupIndex;
use crate::processing::cryptographic::compute_content_hash;
use crate::processing::decode::{Decoder, ImageDecoder};
use crate::types::{AcceptedImage, InputFile, RejectReason, Verdict};

/// Largest accepted file size in bytes
pub const MAX_FILE_SIZE: u64 = 250_000;

/// Smallest accepted width and height in pixels
pub const MIN_DIMENSION: u32 = 100;

/// Accepted file name suffixes, compared in lowercase
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".jpg", ".jpeg"];

/// Returns true if the file name ends in an accepted extension
pub fn has_accepted_extension(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Derive a label from a file name
///
/// Keeps the letters of everything before the first `.` and lowercases
/// them. Names without letters give an empty label.
pub fn derive_label(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or_default();
    stem.chars()
        .filter(|&c| is_letter(c))
        .collect::<String>()
        .to_lowercase()
}

/// Unicode letter categories (Lu, Ll, Lt, Lm, Lo)
///
/// Narrower than [`char::is_alphabetic`], which also admits letter numbers
/// such as `Ⅻ` and combining vowel signs.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Applies the fixed rule set to input files
pub struct RuleEvaluator<D: Decoder = ImageDecoder> {
    decoder: D,
}

impl Default for RuleEvaluator<ImageDecoder> {
    fn default() -> Self {
        Self::new(ImageDecoder::new())
    }
}

impl<D: Decoder> RuleEvaluator<D> {
    /// Create an evaluator using the given decoder
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// Evaluate one file against every rule
    pub fn evaluate(&self, file: &InputFile, dedup: &mut DedupIndex) -> Verdict {
        let file_name = file.file_name();

        if !has_accepted_extension(&file_name) {
            return Verdict::Rejected(RejectReason::InvalidExtension);
        }

        if file.size > MAX_FILE_SIZE {
            return Verdict::Rejected(RejectReason::FileTooLarge);
        }

        let image = match self.decoder.decode(&file.path) {
            Ok(image) => image,
            Err(e) => {
                debug!("Decode failed for {}: {}", file.path.display(), e);
                return Verdict::Rejected(RejectReason::InvalidModeOrUnreadable);
            }
        };

        if image.width < MIN_DIMENSION || image.height < MIN_DIMENSION {
            return Verdict::Rejected(RejectReason::TooSmall);
        }

        if !image.has_variance() {
            return Verdict::Rejected(RejectReason::ZeroVariance);
        }

        let hash = compute_content_hash(&image);
        if dedup.seen(&hash) {
            return Verdict::Rejected(RejectReason::Duplicate);
        }
        dedup.record(hash);

        Verdict::Accepted(AcceptedImage {
            image,
            hash,
            label: derive_label(&file_name),
        })
    }
}
