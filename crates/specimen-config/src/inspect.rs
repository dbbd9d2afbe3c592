//! Settings for the copy-as-JSON views.

use serde::{Deserialize, Serialize};
use specimen_core::{DEFAULT_MAX_DEPTH, InspectOptions};

use crate::ConfigError;

const fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct InspectConfig {
    /// Values nested deeper than this are replaced with a marker.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Pretty-print composite values.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            pretty: default_pretty(),
        }
    }
}

impl InspectConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "inspect.max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn options(&self) -> InspectOptions {
        InspectOptions {
            max_depth: self.max_depth,
            pretty: self.pretty,
        }
    }
}
