//! Check command implementation.

use crate::models::config::Config;
use crate::preflight;
use crate::Result;
use colored::Colorize;

/// Run the catalog preflight checks and fail if any does.
pub fn check(config: &Config) -> Result<()> {
    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config);
    preflight::print_results(&results);
    println!();

    if !preflight::all_passed(&results) {
        return Err(crate::Error::other(
            "Preflight checks failed. Fix the issues above and try again.",
        ));
    }

    Ok(())
}
