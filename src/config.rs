//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Maximum number of states a machine may declare unless configured otherwise.
pub const DEFAULT_MAX_STATES: usize = 10;

/// Construction-time limits for an [`Engine`](crate::engine::Engine).
///
/// Missing fields take their defaults when deserialized, so an empty document
/// yields the default configuration.
///
/// # Example
///
/// ```rust
/// use nestate::config::{EngineConfig, DEFAULT_MAX_STATES};
///
/// let config = EngineConfig::default();
/// assert_eq!(config.max_states, DEFAULT_MAX_STATES);
///
/// let wide = EngineConfig::default().with_max_states(64);
/// assert_eq!(wide.max_states, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on the number of declared states.
    pub max_states: usize,
}

impl EngineConfig {
    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_states: DEFAULT_MAX_STATES,
        }
    }
}
