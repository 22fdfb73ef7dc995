//! Episode code normalization.
//!
//! Rewrites the loose episode codes found in release names into a single
//! canonical `sSSeEE[eEE...]` token. The rules run in a fixed order, each one
//! assuming the shape left behind by the previous one:
//!
//! 1. Stems that already carry a complete canonical token are left alone.
//! 2. A dot-bounded digit run (`.101.`, `.10102.`) becomes `.s1e01.` /
//!    `.s1e0102.`, unless some `sN.eNN` form is already present. When several
//!    runs exist the one nearest the end wins, so a title number does not
//!    shadow the episode code.
//! 3. `.sN[.]eNN[.][NN].` is zero-padded and de-dotted to `.s0NeNN[NN].`.
//! 4. `eNN[.]NN.` following a season marker gets its own marker: `eNNeNN.`.
//!    A lone `eNNNN.` elsewhere in the name is left alone.
//! 5. `.sNN.eNN[eNN...].` is joined into `.sNNeNN[eNN...].`.
//! 6. `eNN.eNN` is joined into `eNNeNN` anywhere in the stem.
//!
//! Existing `s`/`e` markers keep their case. Markers introduced by rule 2 are
//! uppercase when the stem has no lowercase letters.

use crate::models::media::MediaFile;
use crate::Result;
use once_cell::sync::Lazy;
use regex::Regex;

static CANONICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.s\d{2}(?:e\d{2})+").expect("valid canonical pattern"));

// Episode material left after a canonical token that rules 4 or 6 would still fold in.
static DANGLING_EPISODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:\.?\d{2}\.|\.?e\d)").expect("valid dangling pattern"));

static NEAR_CANONICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.s\d{1,2}\.?e\d{2}").expect("valid near-canonical pattern"));

// Anchored; tried at each dot from the end of the stem.
static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.(\d)((?:\d{2}){1,2})\.").expect("valid digit run pattern"));

static PAD_SEASON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(s)(\d)\.?(e\d{2})\.?(\d{2})?\.").expect("valid season pad pattern")
});

// Anchored on the season marker so unrelated `eNNNN.` tokens are not split.
static SPLIT_EPISODES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\.s\d+\.?(?:e\d{2})*)(e)(\d{2})\.?(\d{2})\.")
        .expect("valid episode split pattern")
});

static JOIN_SEASON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(s\d+)\.((?:e\d+)+)\.").expect("valid season join pattern")
});

static JOIN_EPISODES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(e\d+)\.(e\d+)").expect("valid episode join pattern"));

/// Whether the stem already holds a complete canonical token.
///
/// The last `.sNNeNN` token counts, and only if no bare or marked episode
/// trails it (`.sNNeNN.NN.` is not complete yet).
pub fn is_canonical(stem: &str) -> bool {
    CANONICAL
        .find_iter(stem)
        .last()
        .is_some_and(|m| !DANGLING_EPISODE.is_match(&stem[m.end()..]))
}

/// Rewrite any episode code in `stem` into canonical form.
///
/// Stems without an episode signal come back unchanged, and the result is
/// stable under a second call.
pub fn normalize(stem: &str) -> String {
    if is_canonical(stem) {
        return stem.to_string();
    }

    let mut stem = stem.to_string();

    if !NEAR_CANONICAL.is_match(&stem) {
        if let Some(expanded) = expand_digit_run(&stem) {
            stem = expanded;
        }
    }

    stem = PAD_SEASON.replace_all(&stem, ".${1}0${2}${3}${4}.").into_owned();
    stem = rewrite_until_stable(&SPLIT_EPISODES, stem, "${1}${2}${3}${2}${4}.");
    stem = JOIN_SEASON.replace_all(&stem, ".${1}${2}.").into_owned();
    rewrite_until_stable(&JOIN_EPISODES, stem, "${1}${2}")
}

/// Normalize a file's episode code and commit the rename.
pub fn normalize_episode_code(file: &mut MediaFile) -> Result<()> {
    let stem = normalize(file.stem());
    file.update_stem(stem)
}

/// Replace the last dot-bounded 3 or 5 digit run with `s<season>e<episodes>`.
///
/// The first digit is the season, the remaining pairs are episodes.
fn expand_digit_run(stem: &str) -> Option<String> {
    let (start, caps) = stem
        .rmatch_indices('.')
        .find_map(|(i, _)| DIGIT_RUN.captures(&stem[i..]).map(|caps| (i, caps)))?;
    let end = start + caps.get(0)?.end();

    let (season_marker, episode_marker) = if uppercase_markers(stem) {
        ("S", "E")
    } else {
        ("s", "e")
    };

    Some(format!(
        "{}.{}{}{}{}.{}",
        &stem[..start],
        season_marker,
        &caps[1],
        episode_marker,
        &caps[2],
        &stem[end..]
    ))
}

/// Fresh markers follow an all-uppercase stem; anything else gets lowercase.
fn uppercase_markers(stem: &str) -> bool {
    stem.chars().any(char::is_alphabetic) && !stem.chars().any(char::is_lowercase)
}

fn rewrite_until_stable(re: &Regex, stem: String, replacement: &str) -> String {
    let mut current = stem;
    loop {
        let next = re.replace_all(&current, replacement).into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Check a conversion in lowercase and in uppercase.
    fn assert_normalizes(input: &str, expected: &str) {
        assert_eq!(normalize(&input.to_lowercase()), expected.to_lowercase());
        assert_eq!(normalize(&input.to_uppercase()), expected.to_uppercase());
    }

    #[test]
    fn test_canonical_unchanged() {
        assert_normalizes("test.tv.s01e01.resolution", "test.tv.s01e01.resolution");
        assert_normalizes("test.tv.s01e01e02.resolution", "test.tv.s01e01e02.resolution");
        assert_eq!(normalize("Test.Tv.S01E01.720p"), "Test.Tv.S01E01.720p");
    }

    #[test]
    fn test_movie_unchanged() {
        assert_normalizes("test.movie.2015.resolution", "test.movie.2015.resolution");
        assert_normalizes("test.movie.resolution", "test.movie.resolution");
        assert_normalizes("test.movie.1080p.x264", "test.movie.1080p.x264");
        assert_normalizes("movie.title.e2015.resolution", "movie.title.e2015.resolution");
        assert_normalizes("movie.title.e01.02.resolution", "movie.title.e01.02.resolution");
    }

    #[test]
    fn test_digit_run_not_dot_bounded() {
        assert_eq!(normalize("test.movie.x101.resolution"), "test.movie.x101.resolution");
        assert_eq!(normalize("test.movie.101"), "test.movie.101");
        assert_eq!(normalize("test.movie.1010.resolution"), "test.movie.1010.resolution");
    }

    #[test]
    fn test_numbers_only_one_episode() {
        assert_normalizes("test.tv.show.101.resolution", "test.tv.show.s01e01.resolution");
    }

    #[test]
    fn test_numbers_only_two_episodes() {
        assert_normalizes("test.tv.show.10102.resolution", "test.tv.show.s01e01e02.resolution");
    }

    #[test]
    fn test_extra_dots() {
        assert_normalizes("test.tv.show.s01.e01.resolution", "test.tv.show.s01e01.resolution");
        assert_normalizes("test.tv.s01.e01.e02.resolution", "test.tv.s01e01e02.resolution");
        assert_normalizes("test.tv.s01.e01.02.resolution", "test.tv.s01e01e02.resolution");
        assert_normalizes("test.tv.s01.e0102.resolution", "test.tv.s01e01e02.resolution");
    }

    #[test]
    fn test_single_digit_season() {
        assert_normalizes("test.tv.s1.e01.resolution", "test.tv.s01e01.resolution");
        assert_normalizes("test.tv.s1e01.resolution", "test.tv.s01e01.resolution");
        assert_normalizes("test.tv.s1.e01.02.resolution", "test.tv.s01e01e02.resolution");
    }

    #[test]
    fn test_trailing_bare_episode() {
        assert_normalizes("test.tv.s01e01.02.resolution", "test.tv.s01e01e02.resolution");
        assert_normalizes("test.tv.s01e0102.resolution", "test.tv.s01e01e02.resolution");
    }

    #[test]
    fn test_three_episodes() {
        assert_normalizes("test.tv.s01e01.02.03.resolution", "test.tv.s01e01e02e03.resolution");
        assert_normalizes("test.tv.s01.e01.e02.e03.resolution", "test.tv.s01e01e02e03.resolution");
    }

    #[test]
    fn test_last_digit_run_wins() {
        assert_eq!(normalize("show.101.dalmatians.205.720p"), "show.101.dalmatians.s02e05.720p");
    }

    #[test]
    fn test_year_in_title() {
        assert_eq!(normalize("show.2010.101.720p"), "show.2010.s01e01.720p");
        assert_eq!(normalize("show.2010.s01.e01.720p"), "show.2010.s01e01.720p");
        assert_eq!(normalize("show.2010.S01E01.720p"), "show.2010.S01E01.720p");
    }

    #[test]
    fn test_mixed_case_markers_preserved() {
        assert_eq!(normalize("Show.Name.S1.E01.720p"), "Show.Name.S01E01.720p");
        assert_eq!(normalize("Show.Name.101.720p"), "Show.Name.s01e01.720p");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "test.tv.show.101.resolution",
            "test.tv.show.10102.resolution",
            "TEST.TV.S1.E01.02.RESOLUTION",
            "test.tv.s01e01.02.resolution",
            "test.tv.s01.e01.02.resolution",
            "TEST.TV.S01.E01.02.RESOLUTION",
            "test.movie.2015.resolution",
            "movie.title.e2015.resolution",
            "show.101.dalmatians.205.720p",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {}", input);
        }
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("test.tv.s01e01.resolution"));
        assert!(is_canonical("test.tv.S01E01E02"));
        assert!(!is_canonical("test.tv.s01e01.02.resolution"));
        assert!(!is_canonical("test.tv.s01.e01.resolution"));
        assert!(!is_canonical("test.movie.2015.resolution"));
    }
}
