//! Media-related data models.

use crate::utils::fs;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Classification bucket a file is routed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// Directory segment the router appends for this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Show identity parsed from a normalized stem.
///
/// A file that is not an episode (or whose episodes were rejected by the
/// catalog) is represented by [`ShowInfo::none`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowInfo {
    /// Series name with surrounding dots trimmed, e.g. `test.tv`.
    pub name: Option<String>,
    /// Two-digit season without the `s` marker.
    pub season: Option<String>,
    /// Two-digit episodes in file order, without the `e` markers.
    pub episodes: Vec<String>,
}

impl ShowInfo {
    /// The movie/unparseable sentinel.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether a show, season and at least one episode were found.
    pub fn is_show(&self) -> bool {
        self.name.is_some() && self.season.is_some() && !self.episodes.is_empty()
    }
}

impl std::fmt::Display for ShowInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let quote = |v: &Option<String>| match v {
            Some(s) => format!("\"{}\"", s),
            None => "None".to_string(),
        };
        let episodes: Vec<String> = self.episodes.iter().map(|e| format!("\"{}\"", e)).collect();
        write!(
            f,
            "({}, {}, [{}])",
            quote(&self.name),
            quote(&self.season),
            episodes.join(", ")
        )
    }
}

/// A release file tracked as directory, stem and extension.
///
/// Mutations through [`MediaFile::set_stem`] and [`MediaFile::set_directory`]
/// are staged; [`MediaFile::commit`] moves the file on disk so that
/// [`MediaFile::path`] names it again. Detached files never touch disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    directory: PathBuf,
    stem: String,
    extension: String,
    /// Where the file currently lives; `None` for detached files.
    on_disk: Option<PathBuf>,
}

impl MediaFile {
    /// Track an existing file. Commits rename it on disk.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::PathNotFound(path.display().to_string()));
        }
        let mut file = Self::detached(path)?;
        file.on_disk = Some(file.path());
        Ok(file)
    }

    /// Track a path without touching disk, for dry runs and proposals.
    pub fn detached(path: &Path) -> Result<Self> {
        let invalid = || Error::InvalidPath(path.display().to_string());

        let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(invalid)?;
        let extension = match path.extension() {
            Some(ext) => format!(".{}", ext.to_str().ok_or_else(invalid)?),
            None => String::new(),
        };
        let directory = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();

        Ok(Self {
            directory,
            stem: stem.to_string(),
            extension,
            on_disk: None,
        })
    }

    /// Containing directory, without a trailing separator.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Filename without extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Extension including the leading dot, or empty.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Filename with extension.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, self.extension)
    }

    /// Full path the file should occupy.
    pub fn path(&self) -> PathBuf {
        self.directory.join(self.file_name())
    }

    /// Scene group: everything after the first `-` in the stem.
    pub fn scene_group(&self) -> &str {
        self.stem.split_once('-').map(|(_, group)| group).unwrap_or("")
    }

    /// Whether commits move a real file.
    pub fn is_backed(&self) -> bool {
        self.on_disk.is_some()
    }

    /// Whether a staged change has not been committed yet.
    pub fn is_dirty(&self) -> bool {
        self.on_disk.as_ref().is_some_and(|p| *p != self.path())
    }

    /// Stage a new stem.
    pub fn set_stem<S: Into<String>>(&mut self, stem: S) -> Result<()> {
        let stem = stem.into();
        if stem.is_empty() || stem.contains('/') || stem.contains(std::path::MAIN_SEPARATOR) {
            return Err(Error::InvalidPath(stem));
        }
        self.stem = stem;
        Ok(())
    }

    /// Replace the stem and commit, skipping unchanged stems.
    pub fn update_stem<S: Into<String>>(&mut self, stem: S) -> Result<()> {
        let stem = stem.into();
        if stem != self.stem {
            tracing::debug!("Stem {} -> {}", self.stem, stem);
            self.set_stem(stem)?;
        }
        self.commit()
    }

    /// Stage a new containing directory.
    pub fn set_directory<P: Into<PathBuf>>(&mut self, directory: P) {
        self.directory = directory.into();
    }

    /// Move the file on disk to match the staged directory and stem.
    ///
    /// The destination directory must already exist.
    pub fn commit(&mut self) -> Result<()> {
        let target = self.path();
        let Some(current) = self.on_disk.as_ref() else {
            return Ok(());
        };
        if *current == target {
            return Ok(());
        }
        if target.exists() {
            return Err(Error::FileAlreadyExists(target.display().to_string()));
        }

        tracing::debug!("Moving {} to {}", current.display(), target.display());
        fs::move_file(current, &target)?;
        self.on_disk = Some(target);
        Ok(())
    }
}
