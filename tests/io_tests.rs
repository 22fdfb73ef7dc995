//! Integration tests for on-disk renames and moves.
//!
//! Tests cover:
//! - Stem and directory changes moving the real file
//! - Router directory creation and idempotence
//! - Catalog rejection leaving the file in place
//! - Organizing files end to end

use release_organizer::core::classifier::get_show_info;
use release_organizer::core::organizer::{organize_path, OrganizeOptions};
use release_organizer::core::router::{move_to_movie, move_to_tv};
use release_organizer::core::tags::remove_group;
use release_organizer::models::media::{MediaFile, MediaKind, ShowInfo};
use release_organizer::services::catalog::StaticCatalog;
use release_organizer::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temp dir whose path does not already mention a bucket name, so the
/// router's substring guard never skips the move.
fn bucket_free_temp_dir() -> TempDir {
    for _ in 0..64 {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_string_lossy().to_lowercase();
        if !path.contains(MediaKind::Tv.dir_name()) && !path.contains(MediaKind::Movie.dir_name()) {
            return temp_dir;
        }
    }
    panic!("temp root {} mentions a bucket name", std::env::temp_dir().display());
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "fake video content").unwrap();
    path
}

// ========== RENAME TESTS ==========

#[test]
fn test_open_tracks_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = touch(temp_dir.path(), "test.file.name.mp4");

    let file = MediaFile::open(&path).unwrap();
    assert_eq!(file.path(), path);
    assert!(file.is_backed());
}

#[test]
fn test_update_stem_renames_file() {
    let temp_dir = TempDir::new().unwrap();
    let original = touch(temp_dir.path(), "test.file.name.mp4");

    let mut file = MediaFile::open(&original).unwrap();
    file.update_stem("test.file.name.2").unwrap();

    let renamed = temp_dir.path().join("test.file.name.2.mp4");
    assert_eq!(file.path(), renamed);
    assert!(renamed.is_file());
    assert!(!original.exists());
}

#[test]
fn test_staged_change_waits_for_commit() {
    let temp_dir = TempDir::new().unwrap();
    let original = touch(temp_dir.path(), "show.mkv");

    let mut file = MediaFile::open(&original).unwrap();
    file.set_stem("renamed").unwrap();
    assert!(file.is_dirty());
    assert!(original.exists());

    file.commit().unwrap();
    assert!(!file.is_dirty());
    assert!(!original.exists());
    assert!(temp_dir.path().join("renamed.mkv").is_file());
}

#[test]
fn test_commit_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let original = touch(temp_dir.path(), "show-GRP.mkv");
    touch(temp_dir.path(), "show.mkv");

    let mut file = MediaFile::open(&original).unwrap();
    let result = remove_group(&mut file);

    assert!(matches!(result, Err(Error::FileAlreadyExists(_))));
    assert!(original.exists());
}

// ========== ROUTER TESTS ==========

#[test]
fn test_move_to_movie_creates_directory() {
    let temp_dir = bucket_free_temp_dir();
    let original = touch(temp_dir.path(), "test.movie.resolution.mp4");

    let mut file = MediaFile::open(&original).unwrap();
    move_to_movie(&mut file).unwrap();

    let expected = temp_dir.path().join("movie").join("test.movie.resolution.mp4");
    assert_eq!(file.path(), expected);
    assert!(expected.is_file());
    assert!(!original.exists());
}

#[test]
fn test_move_to_tv_twice_routes_once() {
    let temp_dir = bucket_free_temp_dir();
    let original = touch(temp_dir.path(), "test.tv.s01e01.resolution.mp4");

    let mut file = MediaFile::open(&original).unwrap();
    move_to_tv(&mut file).unwrap();
    move_to_tv(&mut file).unwrap();

    let expected = temp_dir.path().join("tv").join("test.tv.s01e01.resolution.mp4");
    assert_eq!(file.path(), expected);
    assert!(expected.is_file());
    assert!(!temp_dir.path().join("tv").join("tv").exists());
}

// ========== CLASSIFIER TESTS ==========

#[test]
fn test_rejected_show_keeps_file_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let original = touch(temp_dir.path(), "test.tv.101.resolution.mp4");

    let mut file = MediaFile::open(&original).unwrap();
    let info = get_show_info(&mut file, &StaticCatalog::rejecting()).unwrap();

    assert_eq!(info, ShowInfo::none());
    assert_eq!(file.path(), original);
    assert!(original.is_file());
    assert!(!temp_dir.path().join("test.tv.s01e01.resolution.mp4").exists());
}

#[test]
fn test_accepted_show_renames_file_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let original = touch(temp_dir.path(), "test.tv.101.resolution.mp4");

    let mut file = MediaFile::open(&original).unwrap();
    let info = get_show_info(&mut file, &StaticCatalog::new()).unwrap();

    let renamed = temp_dir.path().join("test.tv.s01e01.resolution.mp4");
    assert_eq!(info.episodes, vec!["01"]);
    assert!(renamed.is_file());
    assert!(!original.exists());
}

// ========== ORGANIZE TESTS ==========

#[test]
fn test_organize_show() {
    let temp_dir = bucket_free_temp_dir();
    let original = touch(temp_dir.path(), "test.tv.10102.resolution.repack-GROUP.mkv");

    let outcome = organize_path(&original, &StaticCatalog::new(), &OrganizeOptions::default()).unwrap();

    let expected = temp_dir.path().join("tv").join("test.tv.s01e01e02.resolution.mkv");
    assert_eq!(outcome.kind, MediaKind::Tv);
    assert_eq!(outcome.source, original);
    assert_eq!(outcome.target, expected);
    assert!(expected.is_file());
    assert!(!original.exists());
}

#[test]
fn test_organize_rejected_show_goes_to_movies() {
    let temp_dir = bucket_free_temp_dir();
    let original = touch(temp_dir.path(), "test.movie.2015.resolution-GROUP.mkv");

    let outcome =
        organize_path(&original, &StaticCatalog::rejecting(), &OrganizeOptions::default()).unwrap();

    assert_eq!(outcome.kind, MediaKind::Movie);
    assert!(temp_dir
        .path()
        .join("movie")
        .join("test.movie.2015.resolution.mkv")
        .is_file());
}

#[test]
fn test_organize_missing_file() {
    let result = organize_path(
        Path::new("/nonexistent/show.101.mkv"),
        &StaticCatalog::new(),
        &OrganizeOptions::default(),
    );
    assert!(matches!(result, Err(Error::PathNotFound(_))));
}
