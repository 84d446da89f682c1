use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("store error: {0}")]
    Store(#[from] reel_store::StoreError),

    #[error("gate error: {0}")]
    Gate(#[from] reel_gate::GateError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;
