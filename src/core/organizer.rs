//! Full organize pipeline.
//!
//! Strips release tags, normalizes the episode code, classifies the file and
//! routes it into `tv/` or `movie/`.

use crate::core::tags::ReleaseTag;
use crate::core::{classifier, normalizer, router, tags};
use crate::models::config::OrganizeConfig;
use crate::models::media::{MediaFile, MediaKind, ShowInfo};
use crate::services::catalog::Catalog;
use crate::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Which pipeline steps to run.
#[derive(Debug, Clone)]
pub struct OrganizeOptions {
    /// Drop the scene group suffix.
    pub strip_group: bool,
    /// Release tags to strip, in order.
    pub strip_tags: Vec<ReleaseTag>,
    /// Confirm episodes against the catalog before treating a file as a show.
    pub validate: bool,
}

impl Default for OrganizeOptions {
    fn default() -> Self {
        Self::from(&OrganizeConfig::default())
    }
}

impl From<&OrganizeConfig> for OrganizeOptions {
    fn from(config: &OrganizeConfig) -> Self {
        Self {
            strip_group: config.strip_group,
            strip_tags: config.strip_tags.clone(),
            validate: config.validate,
        }
    }
}

/// Result of organizing one file.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    /// Path before organizing.
    pub source: PathBuf,
    /// Path after organizing.
    pub target: PathBuf,
    /// Bucket the file was routed into.
    pub kind: MediaKind,
    /// Parsed show info, [`ShowInfo::none`] for movies.
    pub show: ShowInfo,
}

impl Outcome {
    /// Whether the file ends up somewhere else.
    pub fn is_move(&self) -> bool {
        self.source != self.target
    }
}

/// Run the whole pipeline on a file, committing each step.
pub fn organize(
    file: &mut MediaFile,
    catalog: &dyn Catalog,
    options: &OrganizeOptions,
) -> Result<Outcome> {
    let source = file.path();

    if options.strip_group {
        tags::remove_group(file)?;
    }
    tags::remove_tags(file, &options.strip_tags)?;
    normalizer::normalize_episode_code(file)?;

    let show = if options.validate {
        classifier::get_show_info(file, catalog)?
    } else {
        classifier::parse_show_info(file.stem())
    };

    let kind = if show.is_show() {
        MediaKind::Tv
    } else {
        MediaKind::Movie
    };
    router::route(file, kind)?;

    Ok(Outcome {
        source,
        target: file.path(),
        kind,
        show,
    })
}

/// Organize an existing file on disk.
pub fn organize_path(
    path: &Path,
    catalog: &dyn Catalog,
    options: &OrganizeOptions,
) -> Result<Outcome> {
    let mut file = MediaFile::open(path)?;
    let outcome = organize(&mut file, catalog, options)?;
    tracing::info!(
        "{} -> {} ({})",
        outcome.source.display(),
        outcome.target.display(),
        outcome.kind
    );
    Ok(outcome)
}

/// Compute where a file would go without touching disk.
pub fn propose(path: &Path, catalog: &dyn Catalog, options: &OrganizeOptions) -> Result<Outcome> {
    let mut file = MediaFile::detached(path)?;
    organize(&mut file, catalog, options)
}
