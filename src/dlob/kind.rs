//! Node types and their sort-key rules.
//!
//! Every resting order competes for priority along one axis, chosen by the
//! node type:
//!
//! | Node type | Sort key | Semantic |
//! |-----------|----------|----------|
//! | `limit` | `price` | static limit price |
//! | `floatingLimit` | `oracle_price_offset` | limit tracks oracle + offset |
//! | `market` | `slot` | arrival order |
//! | `trigger` | `trigger_price` | dormant until triggered |
//!
//! All four keys are widened into one [`SortValue`] so a single generic
//! container can order any node type.

use std::fmt;
use std::str::FromStr;

use crate::error::NodeError;
use crate::types::{Order, OrderStatus};

// ============================================================================
// SortValue
// ============================================================================

/// Fixed-point sort key of a node.
///
/// Wide enough to hold every key type losslessly: unsigned prices and slots
/// as well as signed oracle offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SortValue(i128);

impl SortValue {
    pub const ZERO: SortValue = SortValue(0);

    pub const fn new(value: i128) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i128 {
        self.0
    }
}

impl From<u64> for SortValue {
    fn from(value: u64) -> Self {
        Self(value as i128)
    }
}

impl From<i32> for SortValue {
    fn from(value: i32) -> Self {
        Self(value as i128)
    }
}

impl fmt::Display for SortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// NodeType
// ============================================================================

/// Closed set of order node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Limit,
    FloatingLimit,
    Market,
    Trigger,
}

impl NodeType {
    pub const ALL: [NodeType; 4] = [
        NodeType::Limit,
        NodeType::FloatingLimit,
        NodeType::Market,
        NodeType::Trigger,
    ];

    /// Canonical tag accepted by the node factory
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Limit => "limit",
            NodeType::FloatingLimit => "floatingLimit",
            NodeType::Market => "market",
            NodeType::Trigger => "trigger",
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            NodeType::Limit => 0,
            NodeType::FloatingLimit => 1,
            NodeType::Market => 2,
            NodeType::Trigger => 3,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(NodeType::Limit),
            1 => Some(NodeType::FloatingLimit),
            2 => Some(NodeType::Market),
            3 => Some(NodeType::Trigger),
            _ => None,
        }
    }

    /// Derive the sort key of `order` for this node type.
    ///
    /// Pure and total: equal orders always produce equal keys. Nothing is
    /// validated here, a limit order without a price simply sorts at zero.
    pub fn sort_value(self, order: &Order) -> SortValue {
        match self {
            NodeType::Limit => SortValue::from(order.price),
            NodeType::FloatingLimit => SortValue::from(order.oracle_price_offset()),
            NodeType::Market => SortValue::from(order.slot),
            NodeType::Trigger => SortValue::from(order.trigger_price),
        }
    }

    /// Pick the node type an order should rest under.
    ///
    /// Returns `None` for empty (`Init`) order slots.
    ///
    /// 1. Trigger order types whose condition has not fired yet → `Trigger`
    /// 2. Market, trigger-market and oracle order types → `Market`
    /// 3. Non-zero oracle offset → `FloatingLimit`
    /// 4. Otherwise → `Limit`
    pub fn classify(order: &Order) -> Option<NodeType> {
        if order.status() == OrderStatus::Init {
            return None;
        }

        let order_type = order.order_type();
        let awaiting_trigger =
            order_type.must_be_triggered() && !order.trigger_condition().is_triggered();

        let node_type = if awaiting_trigger {
            NodeType::Trigger
        } else if order_type.is_market() {
            NodeType::Market
        } else if order.oracle_price_offset() != 0 {
            NodeType::FloatingLimit
        } else {
            NodeType::Limit
        };

        Some(node_type)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "limit" => Ok(NodeType::Limit),
            "floatingLimit" => Ok(NodeType::FloatingLimit),
            "market" => Ok(NodeType::Market),
            "trigger" => Ok(NodeType::Trigger),
            other => Err(NodeError::UnknownNodeType(other.to_string())),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
