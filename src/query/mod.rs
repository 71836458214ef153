//! Query Engine
//!
//! Stateless search and aggregation over a shared [`Catalog`]. Every operation
//! is a pure function of its arguments and the catalog snapshot, so an engine
//! can be cloned freely and used from several threads at once.

mod criteria;

pub use criteria::SearchQuery;

use crate::catalog::{Catalog, Movie};
use crate::types::MovieId;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Read-only query handle over a catalog.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Arc<Catalog>,
}

impl QueryEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_shared(Arc::new(catalog))
    }

    /// Create an engine over a catalog that is already shared.
    pub fn with_shared(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// All movies in load order.
    pub fn get_all(&self) -> &[Movie] {
        self.catalog.get_all()
    }

    pub fn get_by_id(&self, id: Option<MovieId>) -> Option<&Movie> {
        self.catalog.get_by_id(id)
    }

    /// Movies satisfying every supplied constraint, in load order.
    ///
    /// An unconstrained query returns the whole catalog.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Movie> {
        info!(
            name = ?query.name,
            id = ?query.id,
            genre = ?query.genre,
            "Searching movies"
        );
        let matcher = query.matcher();
        let results: Vec<&Movie> = self
            .catalog
            .iter()
            .filter(|movie| matcher.matches(movie))
            .collect();
        debug!(matches = results.len(), "Search complete");
        results
    }

    /// Positional form of [`QueryEngine::search`].
    pub fn search_by(
        &self,
        name: Option<&str>,
        id: Option<MovieId>,
        genre: Option<&str>,
    ) -> Vec<&Movie> {
        let query = SearchQuery {
            name: name.map(str::to_string),
            id,
            genre: genre.map(str::to_string),
        };
        self.search(&query)
    }

    /// Distinct genre values, compared exactly, in ascending order.
    ///
    /// Compound values such as "Action/Crime" are kept whole.
    pub fn list_genres(&self) -> Vec<String> {
        self.catalog
            .iter()
            .map(|movie| movie.genre.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
