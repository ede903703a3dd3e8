use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::logging::{log_file_error, log_walk_error};
use crate::types::InputFile;

/// Discover every file under `root` in deterministic processing order
///
/// Within a directory, files come first in path order, then each
/// subdirectory is walked the same way in name order. Entries at or below
/// any path in `excluded` are skipped. Unreadable entries are logged and
/// skipped.
pub fn discover_files(root: &Path, excluded: &[PathBuf]) -> Result<Vec<InputFile>> {
    if !root.exists() {
        return Err(Error::FileNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    for result in WalkDir::new(root).sort_by(files_before_directories) {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                log_walk_error(e.path(), &e);
                continue;
            }
        };

        let path = entry.path();
        if excluded.iter().any(|skip| path.starts_with(skip)) {
            continue;
        }
        if !is_regular_file(&entry) {
            continue;
        }

        match fs::metadata(path) {
            Ok(metadata) => files.push(InputFile {
                path: path.to_path_buf(),
                relative_path: path.strip_prefix(root).unwrap_or(path).to_path_buf(),
                size: metadata.len(),
            }),
            Err(e) => log_file_error(path, "metadata", &e),
        }
    }

    Ok(files)
}

/// Sibling order: non-directories before directories, then by path
fn files_before_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.path().cmp(b.path()))
}

/// Regular files, including symlinks that resolve to one
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

// -- Tests --
