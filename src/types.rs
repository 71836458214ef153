//! Core types shared by the catalog, query engine and review lookup.

/// MovieId: Identifier of a movie record. Valid identifiers are positive.
pub type MovieId = i64;

/// Returns true when `id` can name a record at all.
pub fn is_valid_id(id: MovieId) -> bool {
    id > 0
}
