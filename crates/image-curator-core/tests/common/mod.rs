#![allow(dead_code)]

pub mod test_images;
pub use test_images::*;

use image_curator_core::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Input tree and artifact locations for one test run
pub struct Workspace {
    pub root: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
    pub log_file: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let input = root.path().join("input");
        fs::create_dir_all(&input).unwrap();
        Self {
            output: root.path().join("validated_pictures"),
            log_file: root.path().join("logs").join("validation_log.txt"),
            input,
            root,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            output_dir: self.output.clone(),
            log_file: self.log_file.clone(),
            ..Default::default()
        }
    }

    /// Label index rows, header excluded
    pub fn label_rows(&self) -> Vec<(String, String)> {
        let content = fs::read_to_string(self.output.join("labels.csv")).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("name;label"));
        lines
            .map(|line| {
                let (name, label) = line.split_once(';').unwrap();
                (name.to_string(), label.to_string())
            })
            .collect()
    }

    /// Rejection log lines as (relative path, reason)
    pub fn log_rows(&self) -> Vec<(String, String)> {
        fs::read_to_string(&self.log_file)
            .unwrap()
            .lines()
            .map(|line| {
                let (path, reason) = line.rsplit_once(',').unwrap();
                (path.replace('\\', "/"), reason.to_string())
            })
            .collect()
    }

    /// Image files written to the output directory, sorted
    pub fn output_images(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.output)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".jpg"))
            .collect();
        names.sort();
        names
    }
}

pub fn read_bytes(path: &Path) -> Vec<u8> {
    fs::read(path).unwrap()
}
