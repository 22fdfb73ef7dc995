//! Release tag stripping.
//!
//! Removes scene annotations from a stem: the trailing group after the first
//! hyphen and the `.proper` / `.repack` / `.internal` markers. Tags match
//! case-insensitively; the surrounding text keeps its case.

use crate::models::media::MediaFile;
use crate::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PROPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.proper").expect("valid proper pattern"));
static REPACK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.repack").expect("valid repack pattern"));
static INTERNAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.internal").expect("valid internal pattern"));

/// Release annotation that can be stripped from a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseTag {
    Proper,
    Repack,
    Internal,
}

impl ReleaseTag {
    /// Every strippable tag.
    pub const ALL: [ReleaseTag; 3] = [ReleaseTag::Proper, ReleaseTag::Repack, ReleaseTag::Internal];

    /// Lowercase tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseTag::Proper => "proper",
            ReleaseTag::Repack => "repack",
            ReleaseTag::Internal => "internal",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            ReleaseTag::Proper => &PROPER,
            ReleaseTag::Repack => &REPACK,
            ReleaseTag::Internal => &INTERNAL,
        }
    }
}

impl std::fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keep everything before the first hyphen.
///
/// A hyphen inside the title truncates there too.
pub fn strip_group(stem: &str) -> &str {
    stem.split_once('-').map(|(head, _)| head).unwrap_or(stem)
}

/// Delete every `.<tag>` occurrence, ignoring case.
pub fn strip_tag(stem: &str, tag: ReleaseTag) -> String {
    tag.pattern().replace_all(stem, "").into_owned()
}

/// Remove the scene group suffix from a file.
pub fn remove_group(file: &mut MediaFile) -> Result<()> {
    let stem = strip_group(file.stem()).to_string();
    file.update_stem(stem)
}

/// Remove one release tag from a file.
pub fn remove_tag(file: &mut MediaFile, tag: ReleaseTag) -> Result<()> {
    let stem = strip_tag(file.stem(), tag);
    file.update_stem(stem)
}

/// Remove several release tags from a file, in order.
pub fn remove_tags(file: &mut MediaFile, tags: &[ReleaseTag]) -> Result<()> {
    let stem = tags
        .iter()
        .fold(file.stem().to_string(), |stem, tag| strip_tag(&stem, *tag));
    file.update_stem(stem)
}

/// Remove the `.proper` tag.
pub fn remove_proper(file: &mut MediaFile) -> Result<()> {
    remove_tag(file, ReleaseTag::Proper)
}

/// Remove the `.repack` tag.
pub fn remove_repack(file: &mut MediaFile) -> Result<()> {
    remove_tag(file, ReleaseTag::Repack)
}

/// Remove the `.internal` tag.
pub fn remove_internal(file: &mut MediaFile) -> Result<()> {
    remove_tag(file, ReleaseTag::Internal)
}
