//! Release Organizer CLI
//!
//! Normalizes scene release filenames and sorts them into tv/movie folders.

use clap::Parser;
use release_organizer::cli::{
    args::{Cli, Commands},
    build_catalog,
    commands::{check, organize, parse},
};
use release_organizer::core::organizer::OrganizeOptions;
use release_organizer::models::config;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config();
    let mut options = OrganizeOptions::from(&config.organize);

    match cli.command {
        Commands::Parse { file } => {
            let catalog = build_catalog(&config, cli.offline)?;
            parse::parse(&file, catalog.as_ref(), &options)?;
        }

        Commands::Organize {
            path,
            dry_run,
            keep_group,
        } => {
            if keep_group {
                options.strip_group = false;
            }
            let catalog = build_catalog(&config, cli.offline)?;
            organize::organize(&path, catalog.as_ref(), &options, dry_run)?;
        }

        Commands::Check => {
            check::check(&config)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("release_organizer=debug")
    } else {
        EnvFilter::new("release_organizer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
