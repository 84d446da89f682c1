use std::sync::Arc;

use reel_gate::{GateConfig, Intent, ValidationGate, Verdict, REQUIRED_FIELDS_MESSAGE};
use reel_store::{InMemoryMovieStore, MovieStore};
use reel_types::{MovieId, MoviePayload, NewMovie};
use tracing::{debug, error, info, warn};

use crate::error::ServerResult;
use crate::outcome::Outcome;

/// One inbound request against the movie collection.
///
/// Ids arrive as raw path segments; one that does not parse cannot name a
/// record and is reported as not found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    List,
    Get { id: String },
    Create { payload: MoviePayload },
    Update { id: String, payload: MoviePayload },
    Delete { id: String },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get { .. } => "get",
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Owns the store and the gate, and turns operations into outcomes.
///
/// Create and update always consult the gate first and stop on a rejection;
/// the store is only reached with an accepted payload.
pub struct MovieService {
    store: Arc<dyn MovieStore>,
    gate: ValidationGate,
}

impl MovieService {
    pub fn new(store: Arc<dyn MovieStore>, gate: ValidationGate) -> Self {
        Self { store, gate }
    }

    /// A service over a fresh, empty in-memory store.
    pub fn in_memory(gate_config: GateConfig) -> Self {
        Self::new(
            Arc::new(InMemoryMovieStore::new()),
            ValidationGate::with_default_stages(gate_config),
        )
    }

    pub fn store(&self) -> &Arc<dyn MovieStore> {
        &self.store
    }

    pub fn gate(&self) -> &ValidationGate {
        &self.gate
    }

    /// Run one operation to completion.
    ///
    /// Internal failures (a poisoned store, a broken gate stage) are logged
    /// and reported as a 500 outcome; they never escape as panics.
    pub fn dispatch(&self, op: Operation) -> Outcome {
        let name = op.name();
        match self.try_dispatch(op) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(operation = name, error = %e, "operation failed");
                Outcome::internal(e.to_string())
            }
        }
    }

    fn try_dispatch(&self, op: Operation) -> ServerResult<Outcome> {
        match op {
            Operation::List => self.list(),
            Operation::Get { id } => self.get(&id),
            Operation::Create { payload } => self.create(&payload),
            Operation::Update { id, payload } => self.update(&id, &payload),
            Operation::Delete { id } => self.delete(&id),
        }
    }

    fn list(&self) -> ServerResult<Outcome> {
        let movies = self.store.list_all()?;
        debug!(count = movies.len(), "listing movies");
        Ok(Outcome::ok(serde_json::to_value(movies)?))
    }

    fn get(&self, raw_id: &str) -> ServerResult<Outcome> {
        let Some(id) = parse_id(raw_id) else {
            return Ok(Outcome::not_found());
        };
        match self.store.get(id)? {
            Some(movie) => Ok(Outcome::ok(serde_json::to_value(movie)?)),
            None => {
                debug!(%id, "movie not found");
                Ok(Outcome::not_found())
            }
        }
    }

    fn create(&self, payload: &MoviePayload) -> ServerResult<Outcome> {
        if let Verdict::Reject { reason } = self.gate.validate(Intent::Create, payload)?.verdict {
            warn!(%reason, "create rejected");
            return Ok(Outcome::bad_request(reason));
        }
        // The gate accepted, but a custom pipeline may not include the
        // required-field stage.
        let Some(draft) = NewMovie::from_payload(payload) else {
            warn!("create accepted by gate with incomplete payload");
            return Ok(Outcome::bad_request(REQUIRED_FIELDS_MESSAGE));
        };

        let movie = self.store.create(draft)?;
        info!(id = %movie.id, title = %movie.title, "movie created");
        Ok(Outcome::created(serde_json::to_value(movie)?))
    }

    fn update(&self, raw_id: &str, payload: &MoviePayload) -> ServerResult<Outcome> {
        if let Verdict::Reject { reason } = self.gate.validate(Intent::Update, payload)?.verdict {
            warn!(id = raw_id, %reason, "update rejected");
            return Ok(Outcome::bad_request(reason));
        }
        let Some(id) = parse_id(raw_id) else {
            return Ok(Outcome::not_found());
        };

        match self.store.update(id, payload)? {
            Some(movie) => {
                info!(%id, "movie updated");
                Ok(Outcome::ok(serde_json::to_value(movie)?))
            }
            None => Ok(Outcome::not_found()),
        }
    }

    fn delete(&self, raw_id: &str) -> ServerResult<Outcome> {
        let Some(id) = parse_id(raw_id) else {
            return Ok(Outcome::not_found());
        };
        match self.store.delete(id)? {
            Some(movie) => {
                info!(%id, title = %movie.title, "movie deleted");
                Ok(Outcome::no_content())
            }
            None => Ok(Outcome::not_found()),
        }
    }
}

impl std::fmt::Debug for MovieService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieService")
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

fn parse_id(raw: &str) -> Option<MovieId> {
    raw.parse().ok()
}
