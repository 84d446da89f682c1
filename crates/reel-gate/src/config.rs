use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// Configuration for the validation gate.
///
/// The required-field check always runs. Everything here adds optional,
/// stricter stages on top of it and defaults to off.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Reject titles and genres that consist only of whitespace.
    pub reject_blank_text: bool,
    /// Smallest accepted year, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_year: Option<i64>,
    /// Largest accepted year, inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_year: Option<i64>,
}

impl GateConfig {
    /// Returns `true` if a year bound is configured.
    pub fn has_year_bounds(&self) -> bool {
        self.min_year.is_some() || self.max_year.is_some()
    }

    /// Check that the configuration is internally consistent.
    pub fn check(&self) -> Result<(), GateError> {
        if let (Some(min), Some(max)) = (self.min_year, self.max_year) {
            if min > max {
                return Err(GateError::Config(format!(
                    "min_year ({min}) is greater than max_year ({max})"
                )));
            }
        }
        Ok(())
    }
}
