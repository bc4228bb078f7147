//! # DLOB Node
//!
//! Order nodes for an off-chain view of a perpetual-futures limit order book.
//!
//! ## Architecture
//!
//! - **Types**: Order snapshots, oracle readings, account keys, fixed-point helpers
//! - **DLOB**: Order nodes with per-type sort keys, price resolution and a factory
//! - **Config**: Factory settings loaded from the environment
//!
//! The sorted container that threads nodes together and the matching engine
//! that crosses them live outside this crate. They consume the node contract:
//! a stable sort key fixed at construction, typed adjacency handles, and
//! `get_price(oracle, slot)`.
//!
//! ## Design Principles
//!
//! 1. **Owned snapshots**: a node owns its order; later changes to the source never leak in
//! 2. **No Floating Point**: prices and sizes are fixed-point integers
//! 3. **Pure pricing**: price resolution has no side effects and may run concurrently
//! 4. **Closed node set**: unknown node types are errors, never defaults

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, OraclePriceData, UserAccount
pub mod types;

/// Order nodes, sort keys, pricing and the node factory
pub mod dlob;

/// Factory configuration
pub mod config;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::FactoryConfig;
pub use dlob::{
    create_node, DlobNode, NodeFactory, NodeType, OrderNode, SortValue, SyntheticLiquidityNode,
};
pub use error::{NodeError, NodeResult};
pub use types::{Direction, OraclePriceData, Order, OrderType, TriggerCondition, UserAccount};
