//! Error types for the snapshot pipeline.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Errors produced while extracting a holder snapshot.
///
/// Every variant is terminal for the run; nothing is retried and no
/// partial snapshot is ever written.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Invalid or missing configuration, raised before any network activity.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Transport or query failure reported by the RPC endpoint.
    #[error("RPC error: {0}")]
    RpcError(String),

    /// A tracked token account no longer exists on-chain.
    #[error("Missing account: token account {0} does not exist")]
    MissingAccount(String),

    /// A batched lookup returned a different number of results than requested.
    #[error("Malformed lookup response: requested {requested} accounts, received {received}")]
    MalformedResponse { requested: usize, received: usize },

    /// Account data did not match the token-account layout.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Snapshot serialization failure.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Output file write failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
