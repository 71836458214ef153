//! Review lookup
//!
//! Reviews are consumed by the presentation layer when it renders a single
//! movie; the query engine never touches them. [`ReviewLookup`] is the port,
//! [`InMemoryReviews`] the adapter backed by a JSON resource.

use crate::error::LoadError;
use crate::resource::Resource;
use crate::types::MovieId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{error, info};

const BUNDLED_REVIEWS: &str = include_str!("../data/reviews.json");

/// A single review of a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub movie_id: MovieId,
    pub reviewer: String,
    pub rating: f64,
    pub comment: String,
}

/// Lookup of reviews by movie identifier.
pub trait ReviewLookup: Send + Sync {
    /// Reviews for `movie_id` in source order; empty when there are none.
    fn reviews_for_movie(&self, movie_id: MovieId) -> Vec<Review>;
}

/// Reviews grouped by movie, loaded once.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviews {
    by_movie: HashMap<MovieId, Vec<Review>>,
}

impl InMemoryReviews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        let mut by_movie: HashMap<MovieId, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_movie.entry(review.movie_id).or_default().push(review);
        }
        Self { by_movie }
    }

    /// The review list compiled into the binary.
    pub fn bundled_source() -> Resource {
        Resource::Bundled {
            name: "reviews.json",
            payload: BUNDLED_REVIEWS,
        }
    }

    pub fn try_load(source: &Resource) -> Result<Self, LoadError> {
        let reviews: Vec<Review> = source.parse()?;
        Ok(Self::from_reviews(reviews))
    }

    /// Load reviews; an unreadable source yields no reviews and an error log
    /// entry.
    pub fn load(source: &Resource) -> Self {
        match Self::try_load(source) {
            Ok(reviews) => {
                info!(
                    source = %source.describe(),
                    reviews = reviews.len(),
                    "Reviews loaded"
                );
                reviews
            }
            Err(e) => {
                error!(source = %source.describe(), "Failed to load reviews: {}", e);
                Self::new()
            }
        }
    }

    /// Total number of reviews across all movies
    pub fn len(&self) -> usize {
        self.by_movie.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_movie.is_empty()
    }
}

impl ReviewLookup for InMemoryReviews {
    fn reviews_for_movie(&self, movie_id: MovieId) -> Vec<Review> {
        self.by_movie.get(&movie_id).cloned().unwrap_or_default()
    }
}
