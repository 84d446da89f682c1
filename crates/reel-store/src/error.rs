use reel_types::MovieId;

/// Errors from movie store operations.
///
/// A missing id is not an error; lookups report it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The id counter cannot advance past the last issued id.
    #[error("movie id space exhausted after {0}")]
    IdSpaceExhausted(MovieId),

    /// A writer panicked while holding the collection lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
