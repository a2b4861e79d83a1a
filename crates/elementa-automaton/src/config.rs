//! Construction-time configuration for the engine.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AutomatonError, AutomatonResult};

/// Hard ceiling on the length of a run, whatever the caller requests.
pub const MAX_ALLOWED_GENERATIONS: usize = 3000;

/// Default row width.
pub const DEFAULT_WIDTH: usize = 100;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of cells per row.
    pub width: usize,

    /// Requested run length. Clamped to [`MAX_ALLOWED_GENERATIONS`].
    pub max_generations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            max_generations: MAX_ALLOWED_GENERATIONS,
        }
    }
}

impl EngineConfig {
    /// Create a config for the given width and requested run length.
    pub fn new(width: usize, max_generations: usize) -> Self {
        Self {
            width,
            max_generations,
        }
    }

    /// Check the config and apply the generation ceiling.
    pub fn validated(self) -> AutomatonResult<Self> {
        if self.width == 0 {
            return Err(AutomatonError::invalid_config("width must be at least 1"));
        }
        if self.max_generations == 0 {
            return Err(AutomatonError::invalid_config(
                "max_generations must be at least 1",
            ));
        }
        Ok(Self {
            width: self.width,
            max_generations: clamp_generations(self.max_generations),
        })
    }
}

/// Apply the [`MAX_ALLOWED_GENERATIONS`] ceiling.
pub fn clamp_generations(requested: usize) -> usize {
    if requested > MAX_ALLOWED_GENERATIONS {
        warn!(
            requested,
            max = MAX_ALLOWED_GENERATIONS,
            "max_generations_clamped"
        );
        MAX_ALLOWED_GENERATIONS
    } else {
        requested
    }
}
