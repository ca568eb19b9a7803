//! Error handling for Netsketch
//!
//! The core distinguishes hard failures (a caller used an index that no
//! longer refers to a layer or node) from non-fatal refusals (an operation
//! would empty a layer or the network, which is reported as a boolean
//! `false` by the mutating call rather than an error).

use thiserror::Error;

/// Result type alias for Netsketch operations
pub type Result<T> = std::result::Result<T, NetsketchError>;

/// Main error type for Netsketch operations
#[derive(Error, Debug)]
pub enum NetsketchError {
    // Index Errors
    #[error("layer index {index} is out of range (network has {layer_count} layers)")]
    LayerOutOfRange { index: usize, layer_count: usize },

    #[error("node index {index} is out of range (layer {layer_index} has {node_count} nodes)")]
    NodeOutOfRange {
        layer_index: usize,
        index: usize,
        node_count: usize,
    },

    // Wire Errors
    #[error("malformed topology: {reason}")]
    MalformedTopology { reason: String },

    // Bridge Errors
    #[error("training bridge error: {reason}")]
    Bridge { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NetsketchError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            NetsketchError::LayerOutOfRange { .. } => "LAYER_OUT_OF_RANGE",
            NetsketchError::NodeOutOfRange { .. } => "NODE_OUT_OF_RANGE",
            NetsketchError::MalformedTopology { .. } => "MALFORMED_TOPOLOGY",
            NetsketchError::Bridge { .. } => "BRIDGE_ERROR",
            NetsketchError::Io(_) => "IO_ERROR",
            NetsketchError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable by correcting the request
    pub fn is_recoverable(&self) -> bool {
        match self {
            NetsketchError::LayerOutOfRange { .. } => true,
            NetsketchError::NodeOutOfRange { .. } => true,
            NetsketchError::MalformedTopology { .. } => true,
            NetsketchError::Bridge { .. } => true,
            _ => false,
        }
    }
}
