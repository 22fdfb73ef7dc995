//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release Organizer - Normalize scene release names and sort them into tv/movie folders
#[derive(Parser, Debug)]
#[command(name = "release-organizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip catalog lookups and accept every parsed episode
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the parsed show info and proposed target for a file
    Parse {
        /// Path to the release file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Rename and sort a file or every video below a directory
    Organize {
        /// File or directory to organize
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,

        /// Keep the scene group suffix
        #[arg(long)]
        keep_group: bool,
    },

    /// Check catalog connectivity
    Check,
}
