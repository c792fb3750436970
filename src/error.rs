//! Error type for the fallible parts of the crate: loading tables and registering block types.

/// Errors raised while loading provider data or registering block types.
///
/// The lookup operations themselves never fail; they return `None`.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("invalid embed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("provider '{provider}' has an invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        provider: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("provider '{0}' is defined more than once")]
    DuplicateProvider(String),

    #[error("block type '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("block type name '{0}' must be of the form namespace/name")]
    InvalidBlockName(String),
}
