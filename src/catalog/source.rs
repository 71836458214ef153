//! Catalog loading from a [`Resource`].

use super::movie::Movie;
use crate::error::LoadError;
use crate::resource::Resource;
use tracing::{debug, error};

const BUNDLED_MOVIES: &str = include_str!("../../data/movies.json");

/// The movie list compiled into the binary.
pub fn bundled() -> Resource {
    Resource::Bundled {
        name: "movies.json",
        payload: BUNDLED_MOVIES,
    }
}

/// Parse the resource into records, in source order.
pub fn try_load(source: &Resource) -> Result<Vec<Movie>, LoadError> {
    let movies: Vec<Movie> = source.parse()?;
    debug!(source = %source.describe(), count = movies.len(), "Parsed movie records");
    Ok(movies)
}

/// Parse the resource into records; a missing or malformed resource yields no
/// records and an error log entry.
pub fn load(source: &Resource) -> Vec<Movie> {
    match try_load(source) {
        Ok(movies) => movies,
        Err(e) => {
            error!(source = %source.describe(), "Failed to load movies: {}", e);
            Vec::new()
        }
    }
}
