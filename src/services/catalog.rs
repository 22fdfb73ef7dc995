//! Catalog lookup contract.
//!
//! The classifier only depends on this surface, never on a transport. Lookups
//! that find nothing fail with [`Error::NotFound`](crate::Error::NotFound) and
//! lookups that find several titles with
//! [`Error::Ambiguous`](crate::Error::Ambiguous).

use crate::Result;

/// A title database able to confirm shows, seasons, episodes and movies.
pub trait Catalog {
    /// Catalog id of the single show matching `name`.
    fn get_show_id(&self, name: &str) -> Result<u64>;

    /// Whether `name` resolves to a show. Zero matches is `false`.
    fn validate_show(&self, name: &str) -> Result<bool>;

    /// Whether the show has the given season.
    fn validate_show_season(&self, name: &str, season: &str) -> Result<bool>;

    /// Whether the show has the given episode.
    fn validate_show_episode(&self, name: &str, season: &str, episode: &str) -> Result<bool>;

    /// Catalog id of the single movie matching `name`.
    fn get_movie_id(&self, name: &str) -> Result<u64>;

    /// Whether `name` resolves to a movie. Zero matches is `false`.
    fn validate_movie(&self, name: &str) -> Result<bool>;
}

/// Deterministic catalog answering every lookup the same way.
///
/// Used for offline runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticCatalog {
    id: u64,
    valid: bool,
}

impl StaticCatalog {
    /// Catalog that accepts everything with id 1.
    pub fn new() -> Self {
        Self { id: 1, valid: true }
    }

    /// Catalog that rejects every validation.
    pub fn rejecting() -> Self {
        Self { id: 1, valid: false }
    }

    /// Use a different fixed id.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for StaticCatalog {
    fn get_show_id(&self, _name: &str) -> Result<u64> {
        Ok(self.id)
    }

    fn validate_show(&self, _name: &str) -> Result<bool> {
        Ok(self.valid)
    }

    fn validate_show_season(&self, _name: &str, _season: &str) -> Result<bool> {
        Ok(self.valid)
    }

    fn validate_show_episode(&self, _name: &str, _season: &str, _episode: &str) -> Result<bool> {
        Ok(self.valid)
    }

    fn get_movie_id(&self, _name: &str) -> Result<u64> {
        Ok(self.id)
    }

    fn validate_movie(&self, _name: &str) -> Result<bool> {
        Ok(self.valid)
    }
}
