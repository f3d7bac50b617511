//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Depth a fresh priority queue starts at (capacity 3)
pub const DEFAULT_INITIAL_DEPTH: u32 = 2;

/// Largest accepted queue depth
pub const MAX_DEPTH: u32 = 30;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathstepConfig {
    /// Priority queue sizing
    #[serde(default)]
    pub queue: QueueConfig,

    /// Logging setup
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration for priority queue sizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Capacity depth of a new queue (capacity = 2^depth - 1)
    #[serde(default = "default_initial_depth")]
    pub initial_depth: u32,
}

/// Configuration for the tracing subscriber
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable debug output for this crate
    #[serde(default)]
    pub verbose: bool,

    /// Explicit filter directive; overrides `verbose`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_depth: default_initial_depth(),
        }
    }
}

fn default_initial_depth() -> u32 {
    DEFAULT_INITIAL_DEPTH
}
