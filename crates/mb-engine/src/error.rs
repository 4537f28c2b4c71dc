//! Error types for the session engine.

use std::path::PathBuf;

use mb_core::{ActionKind, CatalogError, Profile};
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while configuring or playing a session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Session settings or game data are unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The catalog failed validation.
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// The outcome table has no entry for a reachable combination.
    #[error("no outcome defined for {profile} under {action}")]
    UnhandledCombination {
        /// Profile of the creature being probed.
        profile: Profile,
        /// Kind of the probing action.
        action: ActionKind,
    },

    /// The action costs more than the remaining budget.
    #[error("not enough action points: need {cost}, have {remaining}")]
    InsufficientBudget {
        /// Cost of the rejected action.
        cost: u32,
        /// Budget left when the action was attempted.
        remaining: u32,
    },

    /// The session already reached a terminal state.
    #[error("the session has already ended")]
    SessionAlreadyEnded,

    /// No action with this name exists in the catalog.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// Game data JSON could not be parsed or written.
    #[error("invalid game data JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A game data file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl EngineError {
    /// Returns true for everyday conditions the caller can simply refuse
    /// and carry on from. Everything else indicates broken configuration.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientBudget { .. } | Self::SessionAlreadyEnded | Self::UnknownAction(_)
        )
    }
}
