//! Directory scanner module.
//!
//! Collects the video files below a directory for batch organizing.

use crate::utils::fs::is_video_file;
use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of scanning a directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Video files found, sorted by path.
    pub videos: Vec<PathBuf>,
    /// Total files scanned.
    pub total_files_scanned: usize,
}

/// Scan a directory recursively for video files.
pub fn scan_directory(path: &Path) -> Result<ScanResult> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::InvalidPath(path.display().to_string()));
    }

    let mut result = ScanResult::default();

    for entry in WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        result.total_files_scanned += 1;
        if is_video_file(entry.path()) {
            result.videos.push(entry.path().to_path_buf());
        }
    }

    result.videos.sort();

    tracing::info!(
        "Scanned {} files: {} videos",
        result.total_files_scanned,
        result.videos.len()
    );

    Ok(result)
}
