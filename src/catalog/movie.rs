//! Movie record as stored in the catalog resource.

use crate::types::MovieId;
use serde::{Deserialize, Serialize};

/// One catalog entry. Field names on the wire follow the resource format
/// (`movieName`, `imdbRating`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    #[serde(rename = "movieName")]
    pub name: String,
    pub director: String,
    pub year: i32,
    /// Free-form, may join several tags ("Action/Crime").
    pub genre: String,
    pub description: String,
    /// Running time in minutes
    pub duration: i32,
    #[serde(rename = "imdbRating")]
    pub rating: f64,
}
