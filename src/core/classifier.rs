//! Episode classification.
//!
//! Extracts `(series_name, season, episodes)` from a normalized stem and
//! confirms every episode against a [`Catalog`] before accepting the file as
//! a show.

use crate::core::normalizer;
use crate::models::media::{MediaFile, ShowInfo};
use crate::services::catalog::Catalog;
use crate::Result;
use once_cell::sync::Lazy;
use regex::Regex;

// Greedy prefix so the token nearest the end of the name wins.
static SHOW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.*)\.(s\d{2})((?:e\d{2})+)").expect("valid show pattern"));

/// Parse show info from a canonical stem without validating it.
///
/// Returns [`ShowInfo::none`] when the stem carries no canonical token.
pub fn parse_show_info(stem: &str) -> ShowInfo {
    let Some(caps) = SHOW.captures(stem) else {
        return ShowInfo::none();
    };

    let name = caps[1].trim_matches('.').to_string();
    let season = caps[2][1..].to_string();
    let episodes = caps[3]
        .split(|c: char| c.eq_ignore_ascii_case(&'e'))
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect();

    ShowInfo {
        name: Some(name),
        season: Some(season),
        episodes,
    }
}

/// Normalize, parse and validate a file's show info.
///
/// The normalized stem is committed only when every episode validates. A
/// rejected episode leaves the stem as it was and yields
/// [`ShowInfo::none`]; catalog errors propagate, also leaving the stem
/// untouched.
pub fn get_show_info(file: &mut MediaFile, catalog: &dyn Catalog) -> Result<ShowInfo> {
    let candidate = if normalizer::is_canonical(file.stem()) {
        file.stem().to_string()
    } else {
        normalizer::normalize(file.stem())
    };

    let info = parse_show_info(&candidate);
    let (Some(name), Some(season)) = (info.name.as_deref(), info.season.as_deref()) else {
        return Ok(ShowInfo::none());
    };

    for episode in &info.episodes {
        if !catalog.validate_show_episode(name, season, episode)? {
            tracing::debug!(
                "Catalog rejected {} s{}e{}, keeping {}",
                name,
                season,
                episode,
                file.stem()
            );
            return Ok(ShowInfo::none());
        }
    }

    file.update_stem(candidate)?;
    Ok(info)
}
