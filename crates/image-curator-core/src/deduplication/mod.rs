use std::collections::HashSet;

use crate::processing::ContentHash;

/// Set of pixel-content hashes accepted so far in a run
///
/// Append-only: once recorded, a hash stays seen until the index is dropped
/// at the end of the run.
#[derive(Debug, Default)]
pub struct DedupIndex {
    hashes: HashSet<ContentHash>,
}

impl DedupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the hash was recorded earlier
    pub fn seen(&self, hash: &ContentHash) -> bool {
        self.hashes.contains(hash)
    }

    /// Record a hash as seen
    pub fn record(&mut self, hash: ContentHash) {
        self.hashes.insert(hash);
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}
