//! CLI command implementations.

pub mod check;
pub mod organize;
pub mod parse;
