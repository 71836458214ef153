//! Tooling & Integration Layer
//!
//! Command-line front end: argument parsing, request validation and rendering
//! on top of the query engine and review lookup.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
