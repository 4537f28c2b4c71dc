//! Error types for catalog construction and loading.

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur when building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog defines no creatures at all.
    #[error("catalog has no creatures")]
    NoCreatures,

    /// The catalog defines no probing actions.
    #[error("catalog has no actions")]
    NoActions,

    /// A creature or action was defined with a blank name.
    #[error("{0} with an empty name")]
    EmptyName(&'static str),

    /// Two creatures share the same name.
    #[error("creature already exists: \"{0}\"")]
    DuplicateCreature(String),

    /// Two actions share the same name (compared case-insensitively).
    #[error("action already exists: \"{0}\"")]
    DuplicateAction(String),

    /// The catalog JSON could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
