//! Error types for the automaton engine.

use thiserror::Error;

/// Result type alias for automaton operations.
pub type AutomatonResult<T> = Result<T, AutomatonError>;

/// Errors that can occur during automaton operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// The engine was configured with values it cannot run with.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A textual rule number could not be read as an integer.
    #[error("invalid rule number: {input:?} (expected an integer, usually 0-255)")]
    InvalidRuleNumber { input: String },

    /// `step` was called while no run is active.
    #[error("automaton is not running; call start() first")]
    NotRunning,
}

impl AutomatonError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}
