//! Connection store error types.

/// Errors from a connection store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not answer the query
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Reading the network file failed
    #[error("failed to load network from {path}: {message}")]
    Load { path: String, message: String },

    /// The network document is malformed
    #[error("failed to parse network: {0}")]
    Parse(String),

    /// A record refers to an entity that does not exist
    #[error("unknown {kind} referenced: {id}")]
    UnknownReference { kind: &'static str, id: String },

    /// Two records of the same kind share an id
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}
