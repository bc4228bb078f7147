//! Error types for node construction and price resolution.

use thiserror::Error;

/// Error type for DLOB node operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// Factory received a tag outside the closed set of node types.
    #[error("unknown DLOB node type: {0}")]
    UnknownNodeType(String),

    /// Caller-supplied oracle data is flagged unusable.
    #[error("oracle price data invalid at slot {oracle_slot}")]
    OracleInvalid { oracle_slot: u64 },

    /// Resolved price is negative or does not fit the price type.
    #[error("order {order_id} resolved to a price out of range")]
    PriceOutOfRange { order_id: u32 },

    /// Order snapshot breaks an invariant the caller should have upheld.
    #[error("order {order_id} violates precondition: {reason}")]
    PreconditionViolation { order_id: u32, reason: &'static str },

    #[error("order encode failed: {0}")]
    Encode(String),

    #[error("order decode failed: {0}")]
    Decode(String),
}

/// Result type for node operations.
pub type NodeResult<T> = Result<T, NodeError>;
