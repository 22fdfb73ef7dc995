//! Organize command implementation.

use crate::core::organizer::{self, OrganizeOptions, Outcome};
use crate::core::scanner;
use crate::models::media::MediaKind;
use crate::services::catalog::Catalog;
use crate::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Organize a single file or every video file below a directory.
pub fn organize(
    path: &Path,
    catalog: &dyn Catalog,
    options: &OrganizeOptions,
    dry_run: bool,
) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }

    if dry_run {
        println!("{}", "🔍 Dry run - no changes will be made".bold().yellow());
    } else {
        println!("{}", "📦 Organizing releases...".bold().cyan());
    }
    println!();

    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        println!("📁 Scanning directory: {}", path.display());
        scanner::scan_directory(path)?.videos
    };

    if files.is_empty() {
        println!("No video files found.");
        return Ok(());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map_err(|e| crate::Error::other(e.to_string()))?
            .progress_chars("█▓░"),
    );

    let mut outcomes: Vec<Outcome> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for file in &files {
        let filename = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        pb.set_message(filename);
        pb.inc(1);

        let result = if dry_run {
            organizer::propose(file, catalog, options)
        } else {
            organizer::organize_path(file, catalog, options)
        };

        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", file.display(), e);
                errors.push(format!("{}: {}", file.display(), e));
            }
        }
    }

    pb.finish_with_message("Done!");
    println!();

    print_summary(&outcomes, &errors, dry_run);

    Ok(())
}

fn print_summary(outcomes: &[Outcome], errors: &[String], dry_run: bool) {
    let arrow = if dry_run { "would move to" } else { "->" };
    for outcome in outcomes.iter().filter(|o| o.is_move()) {
        println!(
            "  {} {} {}",
            outcome.source.display(),
            arrow,
            outcome.target.display().to_string().green()
        );
    }
    println!();

    let shows = outcomes.iter().filter(|o| o.kind == MediaKind::Tv).count();
    println!("{}", "📊 Summary".bold().green());
    println!("  {} {}", "TV episodes:".bold(), shows);
    println!("  {} {}", "Movies:".bold(), outcomes.len() - shows);
    println!("  {} {}", "Failed:".bold(), errors.len());

    if !errors.is_empty() {
        println!();
        println!("{}", "❌ Failed files:".bold().red());
        for error in errors {
            println!("  {}", error);
        }
    }
}
