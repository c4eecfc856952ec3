//! Error types for the EcoCitizen state engine.
//!
//! The taxonomy is deliberately small: the engine has no I/O surface, so
//! every error is a programming-contract violation surfaced immediately to
//! the caller. Nothing here is retryable.

use thiserror::Error;

/// Result alias used throughout the engine.
pub type EcoResult<T> = Result<T, EngineError>;

/// Errors surfaced by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A view-switch request named a view outside the fixed six-member set.
    #[error("unknown view '{got}'")]
    InvalidView {
        /// The rejected view identifier as received.
        got: String,
    },

    /// An activity-log request named a label outside the fixed catalog.
    #[error("unknown activity '{label}'")]
    InvalidActivity {
        /// The rejected activity label as received.
        label: String,
    },

    /// `start` was called on a refresh scheduler that is already running.
    ///
    /// Distinct from `stop`, which is idempotent: a double start would leave
    /// two live timers mutating the same state, so it is reported rather
    /// than ignored.
    #[error("refresh scheduler is already running")]
    SchedulerAlreadyRunning,

    /// A handle operation was attempted after the engine task ended.
    #[error("engine task has shut down")]
    EngineClosed,
}

impl EngineError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::InvalidView { .. } => "E_ENGINE_VIEW",
            EngineError::InvalidActivity { .. } => "E_ENGINE_ACTIVITY",
            EngineError::SchedulerAlreadyRunning => "E_ENGINE_SCHED_RUNNING",
            EngineError::EngineClosed => "E_ENGINE_CLOSED",
        }
    }

    /// User-friendly message suitable for direct display.
    pub fn user_message(&self) -> String {
        match self {
            EngineError::InvalidView { got } => {
                format!("'{}' is not a dashboard view.", got)
            }
            EngineError::InvalidActivity { label } => {
                format!("'{}' is not a recognized eco-activity.", label)
            }
            EngineError::SchedulerAlreadyRunning => {
                "The metrics refresh is already running.".to_string()
            }
            EngineError::EngineClosed => {
                "The session has ended. Please restart the application.".to_string()
            }
        }
    }
}
