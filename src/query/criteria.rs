//! Search constraints and their matching rules.

use crate::catalog::Movie;
use crate::types::MovieId;
use serde::{Deserialize, Serialize};

/// A search request. Every field is optional; empty or whitespace-only text
/// constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MovieId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: MovieId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// True when no field narrows the result set.
    pub fn is_unconstrained(&self) -> bool {
        text_needle(self.name.as_deref()).is_none()
            && self.id.is_none()
            && text_needle(self.genre.as_deref()).is_none()
    }

    /// Normalize into a predicate over movies.
    pub(crate) fn matcher(&self) -> Matcher {
        Matcher {
            id: self.id,
            name: text_needle(self.name.as_deref()),
            genre: text_needle(self.genre.as_deref()),
        }
    }
}

/// Trimmed, lower-cased search text, or None when nothing is left.
fn text_needle(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalized conjunction of the supplied constraints.
#[derive(Debug, Clone)]
pub(crate) struct Matcher {
    id: Option<MovieId>,
    name: Option<String>,
    genre: Option<String>,
}

impl Matcher {
    pub(crate) fn matches(&self, movie: &Movie) -> bool {
        // Ids are positive, so a non-positive constraint never equals one.
        if let Some(id) = self.id {
            if movie.id != id {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if !movie.name.to_lowercase().contains(name.as_str()) {
                return false;
            }
        }
        if let Some(genre) = &self.genre {
            if !movie.genre.to_lowercase().contains(genre.as_str()) {
                return false;
            }
        }
        true
    }
}
