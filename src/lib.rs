//! Release Organizer Library
//!
//! Normalizes scene release filenames into a canonical `sSSeEE` form, strips
//! release tags and sorts files into `tv/` and `movie/` folders.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
