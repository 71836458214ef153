//! Cinedex: Read-only Movie Catalog
//!
//! Loads a fixed set of movie records once at startup and answers lookup,
//! search and genre-listing queries over them.
//!
//! ```
//! use cinedex::catalog::Catalog;
//! use cinedex::query::{QueryEngine, SearchQuery};
//!
//! let engine = QueryEngine::new(Catalog::bundled());
//! let results = engine.search(&SearchQuery::new().with_name("family"));
//! assert!(results.iter().all(|m| m.name.to_lowercase().contains("family")));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod resource;
pub mod review;
pub mod tooling;
pub mod types;
