//! Parse command implementation.
//!
//! Prints the show info triple and the proposed target for a single file
//! without touching it.

use crate::core::organizer::{self, OrganizeOptions};
use crate::services::catalog::Catalog;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Print parsed show info and proposed rename target.
pub fn parse(path: &Path, catalog: &dyn Catalog, options: &OrganizeOptions) -> Result<()> {
    let outcome = organizer::propose(path, catalog, options)?;

    println!("{} {}", "File:".bold(), path.display());
    println!("{} {}", "Show info:".bold(), outcome.show);
    println!("{} {}", "Kind:".bold(), outcome.kind);
    println!("{} {}", "Target:".bold(), outcome.target.display().to_string().green());

    Ok(())
}
