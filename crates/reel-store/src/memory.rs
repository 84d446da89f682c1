use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use reel_types::{Movie, MovieId, MoviePayload, NewMovie};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::MovieStore;

/// Records plus the id counter, guarded together so that id assignment and
/// append happen under one lock.
#[derive(Default)]
struct Collection {
    movies: Vec<Movie>,
    last_issued: Option<MovieId>,
}

impl Collection {
    fn position(&self, id: MovieId) -> Option<usize> {
        self.movies.iter().position(|m| m.id == id)
    }

    fn next_id(&self) -> StoreResult<MovieId> {
        match self.last_issued {
            None => Ok(MovieId::FIRST),
            Some(last) => last
                .checked_next()
                .ok_or(StoreError::IdSpaceExhausted(last)),
        }
    }
}

/// In-memory, `Vec`-based movie store.
///
/// Records live behind a `RwLock` for safe concurrent access from request
/// handlers. Records are cloned on the way out.
pub struct InMemoryMovieStore {
    inner: RwLock<Collection>,
}

impl InMemoryMovieStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collection::default()),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Collection>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Collection>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }

    #[cfg(test)]
    fn with_last_issued(last: MovieId) -> Self {
        Self {
            inner: RwLock::new(Collection {
                movies: Vec::new(),
                last_issued: Some(last),
            }),
        }
    }
}

impl Default for InMemoryMovieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieStore for InMemoryMovieStore {
    fn list_all(&self) -> StoreResult<Vec<Movie>> {
        Ok(self.read()?.movies.clone())
    }

    fn get(&self, id: MovieId) -> StoreResult<Option<Movie>> {
        let collection = self.read()?;
        Ok(collection.movies.iter().find(|m| m.id == id).cloned())
    }

    fn create(&self, draft: NewMovie) -> StoreResult<Movie> {
        let mut collection = self.write()?;
        let id = collection.next_id()?;
        let movie = Movie::from_draft(id, draft);
        collection.movies.push(movie.clone());
        collection.last_issued = Some(id);
        debug!(%id, count = collection.movies.len(), "movie appended");
        Ok(movie)
    }

    fn update(&self, id: MovieId, payload: &MoviePayload) -> StoreResult<Option<Movie>> {
        let mut collection = self.write()?;
        let Some(movie) = collection.movies.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        movie.apply(payload);
        Ok(Some(movie.clone()))
    }

    fn delete(&self, id: MovieId) -> StoreResult<Option<Movie>> {
        let mut collection = self.write()?;
        let Some(index) = collection.position(id) else {
            return Ok(None);
        };
        let removed = collection.movies.remove(index);
        debug!(%id, index, remaining = collection.movies.len(), "movie removed");
        Ok(Some(removed))
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.movies.len())
    }
}

impl std::fmt::Debug for InMemoryMovieStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("InMemoryMovieStore");
        match self.inner.read() {
            Ok(collection) => s
                .field("movie_count", &collection.movies.len())
                .field("last_issued", &collection.last_issued),
            Err(_) => s.field("poisoned", &true),
        };
        s.finish()
    }
}
