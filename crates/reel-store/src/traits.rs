use reel_types::{Movie, MovieId, MoviePayload, NewMovie};

use crate::error::StoreResult;

/// Ordered movie collection.
///
/// All implementations must satisfy these invariants:
/// - Ids are unique for the lifetime of the store and never reused.
/// - `list_all` returns records in insertion order.
/// - `update` mutates in place and keeps the record's position.
/// - `delete` removes exactly one record and keeps the order of the rest.
/// - Absence of an id yields `Ok(None)` from every by-id operation.
pub trait MovieStore: Send + Sync {
    /// All records, in insertion order.
    fn list_all(&self) -> StoreResult<Vec<Movie>>;

    /// Look up a record by id.
    fn get(&self, id: MovieId) -> StoreResult<Option<Movie>>;

    /// Assign a fresh id to the draft, append it, and return the stored record.
    fn create(&self, draft: NewMovie) -> StoreResult<Movie>;

    /// Apply a partial update to the record with the given id.
    ///
    /// Only truthy payload fields replace existing values. Returns the
    /// updated record, or `Ok(None)` if no record has this id.
    fn update(&self, id: MovieId, payload: &MoviePayload) -> StoreResult<Option<Movie>>;

    /// Remove the record with the given id and return it.
    ///
    /// Returns `Ok(None)` if no record has this id.
    fn delete(&self, id: MovieId) -> StoreResult<Option<Movie>>;

    /// Number of records currently stored.
    fn len(&self) -> StoreResult<usize>;

    /// Returns `true` if the store holds no records.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
