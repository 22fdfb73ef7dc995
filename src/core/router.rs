//! Routing files into `movie/` and `tv/` buckets.

use crate::models::media::{MediaFile, MediaKind};
use crate::utils::fs;
use crate::Result;
use std::path::{Path, PathBuf};

/// Directory a file in `directory` should live in for `kind`.
///
/// Already-routed directories are kept: the guard is a plain substring test,
/// so any directory whose path mentions the bucket name counts.
pub fn routed_directory(directory: &Path, kind: MediaKind) -> PathBuf {
    if directory.to_string_lossy().contains(kind.dir_name()) {
        directory.to_path_buf()
    } else {
        directory.join(kind.dir_name())
    }
}

/// Move a file into the bucket for `kind`, creating it when needed.
pub fn route(file: &mut MediaFile, kind: MediaKind) -> Result<()> {
    let target = routed_directory(file.directory(), kind);
    if target == file.directory() {
        return Ok(());
    }

    if file.is_backed() {
        fs::create_dir_all(&target)?;
    }
    tracing::debug!("Routing {} into {}", file.file_name(), target.display());
    file.set_directory(target);
    file.commit()
}

/// Move a file into the `movie` directory.
pub fn move_to_movie(file: &mut MediaFile) -> Result<()> {
    route(file, MediaKind::Movie)
}

/// Move a file into the `tv` directory.
pub fn move_to_tv(file: &mut MediaFile) -> Result<()> {
    route(file, MediaKind::Tv)
}
