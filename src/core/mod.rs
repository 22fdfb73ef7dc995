//! Core business logic modules.

pub mod classifier;
pub mod normalizer;
pub mod organizer;
pub mod router;
pub mod scanner;
pub mod tags;
