use log::{debug, error, info, warn};
use std::path::Path;

use crate::types::RejectionLogEntry;

/// Log file operation that failed
pub fn log_file_error(path: &Path, operation: &str, error: &dyn std::error::Error) {
    error!(
        "File operation failed - Operation: {}, Path: {}, Error: {}",
        operation,
        path.display(),
        error
    );
}

/// Log a directory entry that could not be read during discovery
pub fn log_walk_error(path: Option<&Path>, error: &dyn std::error::Error) {
    match path {
        Some(path) => warn!("Skipping unreadable entry - Path: {}, Error: {}", path.display(), error),
        None => warn!("Skipping unreadable entry - Error: {}", error),
    }
}

/// Log a rejected input file
///
/// Rejections are logged at debug level; the rejection log file is the
/// record of truth.
pub fn log_rejection(entry: &RejectionLogEntry) {
    debug!(
        "REJECTED - Path: {}, Rule: {}, Reason: {}",
        entry.relative_path.display(),
        entry.reason.code(),
        entry.reason
    );
}

/// Log file system modification
pub fn log_fs_modification(operation: &str, path: &Path, details: Option<&str>) {
    let details_str = details.unwrap_or("");
    info!(
        "FS CHANGE - Operation: {}, Path: {}{}",
        operation,
        path.display(),
        if details_str.is_empty() {
            "".to_string()
        } else {
            format!(", Details: {}", details_str)
        }
    );
}
