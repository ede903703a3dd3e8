// Core modules
pub mod cryptographic;
pub mod decode;
pub mod rules;

// Expose content hashing
pub use cryptographic::{compute_content_hash, ContentHash};

// Expose the decoder seam
pub use decode::{Decoder, ImageDecoder};

// Reexport rule evaluation
pub use rules::{derive_label, has_accepted_extension, RuleEvaluator, MAX_FILE_SIZE, MIN_DIMENSION};
