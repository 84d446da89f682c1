/// HTTP endpoint paths.
pub mod endpoints {
    pub const MOVIES: &str = "/movies";
    pub const MOVIE: &str = "/movies/:id";
    pub const HEALTH: &str = "/health";
    pub const INFO: &str = "/info";
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
