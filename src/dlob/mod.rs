//! Decentralized limit order book (DLOB) nodes.
//!
//! ## Components
//!
//! - [`DlobNode`]: Contract the matching engine prices and fills against
//! - [`TypedOrderNode`]: Order node of one kind with typed adjacency slots
//! - [`OrderNode`]: Sum type over the four order node kinds
//! - [`SyntheticLiquidityNode`]: Protocol-owned liquidity without an order
//! - [`NodeFactory`] / [`create_node`]: Tag-driven construction
//!
//! ## Sort Keys
//!
//! | Node | Key |
//! |------|-----|
//! | Limit | price |
//! | FloatingLimit | oracle price offset |
//! | Market | slot |
//! | Trigger | trigger price |
//!
//! Ties on equal keys are left to the container (FIFO by insertion).

pub mod factory;
pub mod kind;
pub mod node;
pub mod pricing;
pub mod synthetic;

pub use factory::{create_node, validate_order, NodeFactory};
pub use kind::{NodeType, SortValue};
pub use node::{
    DlobNode, FloatingLimit, FloatingLimitOrderNode, Limit, LimitOrderNode, Market,
    MarketOrderNode, NodeHandle, NodeKey, NodeKind, OrderNode, Trigger, TriggerOrderNode,
    TypedOrderNode,
};
pub use synthetic::SyntheticLiquidityNode;
