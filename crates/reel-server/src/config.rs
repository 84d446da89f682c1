use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use reel_gate::GateConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub gate: GateConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            gate: GateConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Reject inconsistent settings.
    pub fn check(&self) -> ServerResult<()> {
        self.gate.check()?;
        Ok(())
    }
}
