//! Catalog Store
//!
//! Owns the movie records loaded at startup. The ordered sequence and the
//! identifier index are built together in [`Catalog::from_movies`] and are
//! never mutated afterwards, so both views always agree.

mod movie;
pub mod source;

pub use movie::Movie;

use crate::resource::Resource;
use crate::types::{is_valid_id, MovieId};
use std::collections::HashMap;
use tracing::{info, warn};

/// Immutable, load-once collection of movies plus its identifier index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    /// MovieId -> position in `movies`
    index: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records in load order.
    ///
    /// Every record is kept in the ordered sequence. When an identifier occurs
    /// more than once the index points at its last occurrence.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let mut index = HashMap::with_capacity(movies.len());
        for (pos, movie) in movies.iter().enumerate() {
            if let Some(previous) = index.insert(movie.id, pos) {
                warn!(
                    id = movie.id,
                    name = %movie.name,
                    shadowed = %movies[previous].name,
                    "Duplicate movie id in catalog resource, indexing last occurrence"
                );
            }
        }
        Self { movies, index }
    }

    /// Load and index the records of `source`. Never fails: an unreadable
    /// source produces an empty catalog.
    pub fn load(source: &Resource) -> Self {
        let catalog = Self::from_movies(source::load(source));
        info!(
            source = %source.describe(),
            movies = catalog.len(),
            "Catalog loaded"
        );
        catalog
    }

    /// Load the bundled movie list.
    pub fn bundled() -> Self {
        Self::load(&source::bundled())
    }

    /// All records in load order.
    pub fn get_all(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a record by identifier. Absent, zero and negative ids are
    /// never found.
    pub fn get_by_id(&self, id: Option<MovieId>) -> Option<&Movie> {
        let id = id.filter(|id| is_valid_id(*id))?;
        self.index.get(&id).map(|&pos| &self.movies[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
