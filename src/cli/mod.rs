//! Command line interface.

pub mod args;
pub mod commands;

use crate::models::config::Config;
use crate::services::catalog::{Catalog, StaticCatalog};
use crate::services::tmdb::TmdbClient;
use crate::Result;

/// Pick the catalog for this run: TMDB, or the always-valid stand-in offline.
pub fn build_catalog(config: &Config, offline: bool) -> Result<Box<dyn Catalog>> {
    if offline {
        tracing::debug!("Offline mode, catalog validation always succeeds");
        return Ok(Box::new(StaticCatalog::new()));
    }
    Ok(Box::new(TmdbClient::from_config(&config.tmdb)?))
}
