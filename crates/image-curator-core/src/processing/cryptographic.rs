//! Content hashing over decoded pixel data.

use blake3::Hash as Blake3Hash;
use std::fmt;

use crate::types::DecodedImage;

/// BLAKE3 digest of an image's raw pixel buffer
///
/// The file bytes are never hashed, so the same pixels stored under a
/// different encoding or container produce the same hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash(Blake3Hash);

impl ContentHash {
    /// Hash a raw pixel buffer
    pub fn from_pixels(pixels: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(pixels);
        Self(hasher.finalize())
    }

    /// Lowercase hexadecimal form
    pub fn to_hex(&self) -> String {
        self.0.to_hex().to_string()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the content hash of a decoded image
pub fn compute_content_hash(image: &DecodedImage) -> ContentHash {
    ContentHash::from_pixels(&image.pixels)
}
