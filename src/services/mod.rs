//! External services.

pub mod catalog;
pub mod tmdb;
