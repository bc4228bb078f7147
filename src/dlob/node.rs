//! Order nodes.
//!
//! ## Design
//!
//! An order node owns a private copy of an [`Order`] snapshot together with
//! the sort key derived from it at construction. The key is never recomputed:
//! when a sort-relevant field of the order changes, the container must drop
//! the node and build a new one.
//!
//! Each node type is a [`TypedOrderNode<K>`] parameterised by a marker kind.
//! Adjacency slots are [`NodeHandle<K>`], so a container cannot link a limit
//! node to a market node by accident. [`OrderNode`] is the sum type over the
//! four kinds, used where nodes of any type travel together.
//!
//! ## Linked List
//!
//! The container owns adjacency. Handles are container keys (for example
//! slab keys), not references:
//! - `next`: the following node in the container's order
//! - `previous`: the preceding node

use std::fmt;
use std::marker::PhantomData;

use crate::dlob::kind::{NodeType, SortValue};
use crate::dlob::pricing;
use crate::error::NodeResult;
use crate::types::price::{format_fixed, BASE_PRECISION, LABEL_DECIMALS, PRICE_PRECISION};
use crate::types::{order_signature, OraclePriceData, Order, UserAccount};

// ============================================================================
// DlobNode contract
// ============================================================================

/// Contract every node of the book exposes to a matching engine.
pub trait DlobNode {
    /// Effective price at `current_slot` given the caller's oracle reading.
    fn get_price(&self, oracle: &OraclePriceData, current_slot: u64) -> NodeResult<u64>;

    /// True only for protocol-owned liquidity without a backing order.
    fn is_synthetic_liquidity_node(&self) -> bool;

    /// Resting order snapshot, if the node is backed by one.
    fn order(&self) -> Option<&Order>;

    /// Account that placed the order, if the node is backed by one.
    fn user_account(&self) -> Option<&UserAccount>;

    fn is_base_filled(&self) -> bool;

    /// Whether the matching engine already processed this node for a fill.
    fn have_filled(&self) -> bool;
}

// ============================================================================
// Kinds and handles
// ============================================================================

/// Marker type selecting one node type at compile time.
pub trait NodeKind: Copy + fmt::Debug + Send + Sync + 'static {
    const NODE_TYPE: NodeType;
}

/// Static limit order kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limit;

/// Oracle-offset limit order kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatingLimit;

/// Market order kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Market;

/// Trigger order kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trigger;

impl NodeKind for Limit {
    const NODE_TYPE: NodeType = NodeType::Limit;
}

impl NodeKind for FloatingLimit {
    const NODE_TYPE: NodeType = NodeType::FloatingLimit;
}

impl NodeKind for Market {
    const NODE_TYPE: NodeType = NodeType::Market;
}

impl NodeKind for Trigger {
    const NODE_TYPE: NodeType = NodeType::Trigger;
}

/// Container key of a node of kind `K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle<K: NodeKind> {
    key: usize,
    _kind: PhantomData<K>,
}

impl<K: NodeKind> NodeHandle<K> {
    #[inline]
    pub fn new(key: usize) -> Self {
        Self {
            key,
            _kind: PhantomData,
        }
    }

    #[inline]
    pub fn key(self) -> usize {
        self.key
    }
}

/// Identity of a node: the owning account plus the account-scoped order id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    pub user_account: UserAccount,
    pub order_id: u32,
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&order_signature(self.order_id, &self.user_account))
    }
}

// ============================================================================
// TypedOrderNode
// ============================================================================

/// Order node of kind `K`.
///
/// ## Example
///
/// ```
/// use dlob_node::dlob::{DlobNode, LimitOrderNode};
/// use dlob_node::types::{Direction, OraclePriceData, Order, UserAccount};
///
/// let order = Order::new(1, Direction::Long, 1_000_000_000, 100_000_000, 10);
/// let node = LimitOrderNode::new(order, UserAccount::default());
///
/// assert_eq!(node.sort_value().get(), 100_000_000);
/// assert_eq!(node.get_price(&OraclePriceData::new(50_000_000, 0, 10), 10), Ok(100_000_000));
/// assert!(node.next.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedOrderNode<K: NodeKind> {
    order: Order,
    user_account: UserAccount,
    sort_value: SortValue,
    has_triggered: bool,

    /// Set by the matching engine once it has attempted a fill this pass
    pub has_been_processed_for_fill: bool,

    /// Following node in the container, same kind only
    pub next: Option<NodeHandle<K>>,

    /// Preceding node in the container, same kind only
    pub previous: Option<NodeHandle<K>>,
}

pub type LimitOrderNode = TypedOrderNode<Limit>;
pub type FloatingLimitOrderNode = TypedOrderNode<FloatingLimit>;
pub type MarketOrderNode = TypedOrderNode<Market>;
pub type TriggerOrderNode = TypedOrderNode<Trigger>;

impl<K: NodeKind> TypedOrderNode<K> {
    /// Wrap an order snapshot, taking ownership of it.
    ///
    /// The sort key is derived here, once.
    pub fn new(order: Order, user_account: UserAccount) -> Self {
        let sort_value = K::NODE_TYPE.sort_value(&order);
        Self {
            order,
            user_account,
            sort_value,
            has_triggered: false,
            has_been_processed_for_fill: false,
            next: None,
            previous: None,
        }
    }

    #[inline]
    pub fn node_type(&self) -> NodeType {
        K::NODE_TYPE
    }

    #[inline]
    pub fn sort_value(&self) -> SortValue {
        self.sort_value
    }

    /// The owned order snapshot
    #[inline]
    pub fn snapshot(&self) -> &Order {
        &self.order
    }

    #[inline]
    pub fn owner(&self) -> &UserAccount {
        &self.user_account
    }

    pub fn key(&self) -> NodeKey {
        NodeKey {
            user_account: self.user_account,
            order_id: self.order.order_id,
        }
    }

    #[inline]
    pub fn has_triggered(&self) -> bool {
        self.has_triggered
    }

    /// Check if this node is unlinked (not part of any container)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.previous.is_none()
    }

    pub fn label(&self) -> String {
        self.label_with_decimals(LABEL_DECIMALS)
    }

    /// Single-line summary, e.g. `Order <account>-7 LONG 1.000 @ 100.000 BELOW 95.000`
    pub fn label_with_decimals(&self, decimals: u32) -> String {
        let order = &self.order;
        let mut msg = format!(
            "Order {} {} {}",
            self.key(),
            order.direction().as_str(),
            format_fixed(order.base_asset_amount, BASE_PRECISION, decimals)
        );
        if order.price > 0 {
            msg.push_str(" @ ");
            msg.push_str(&format_fixed(order.price, PRICE_PRECISION, decimals));
        }
        if order.trigger_price > 0 {
            msg.push(' ');
            msg.push_str(order.trigger_condition().as_str());
            msg.push(' ');
            msg.push_str(&format_fixed(order.trigger_price, PRICE_PRECISION, decimals));
        }
        msg
    }
}

impl TriggerOrderNode {
    /// Record that the trigger fired. One-way.
    pub fn mark_triggered(&mut self) {
        self.has_triggered = true;
    }
}

impl<K: NodeKind> DlobNode for TypedOrderNode<K> {
    fn get_price(&self, oracle: &OraclePriceData, current_slot: u64) -> NodeResult<u64> {
        pricing::limit_price(&self.order, oracle, current_slot)
    }

    fn is_synthetic_liquidity_node(&self) -> bool {
        false
    }

    fn order(&self) -> Option<&Order> {
        Some(&self.order)
    }

    fn user_account(&self) -> Option<&UserAccount> {
        Some(&self.user_account)
    }

    fn is_base_filled(&self) -> bool {
        self.order.is_filled()
    }

    fn have_filled(&self) -> bool {
        self.has_been_processed_for_fill
    }
}

impl<K: NodeKind> fmt::Display for TypedOrderNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ============================================================================
// OrderNode
// ============================================================================

/// A node of any of the four order node types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderNode {
    Limit(LimitOrderNode),
    FloatingLimit(FloatingLimitOrderNode),
    Market(MarketOrderNode),
    Trigger(TriggerOrderNode),
}

/// Apply `$body` to the typed node inside any variant.
macro_rules! with_node {
    ($node:expr, $inner:ident => $body:expr) => {
        match $node {
            OrderNode::Limit($inner) => $body,
            OrderNode::FloatingLimit($inner) => $body,
            OrderNode::Market($inner) => $body,
            OrderNode::Trigger($inner) => $body,
        }
    };
}

impl OrderNode {
    /// Build the variant matching `node_type`.
    pub fn new(node_type: NodeType, order: Order, user_account: UserAccount) -> Self {
        match node_type {
            NodeType::Limit => OrderNode::Limit(TypedOrderNode::new(order, user_account)),
            NodeType::FloatingLimit => {
                OrderNode::FloatingLimit(TypedOrderNode::new(order, user_account))
            }
            NodeType::Market => OrderNode::Market(TypedOrderNode::new(order, user_account)),
            NodeType::Trigger => OrderNode::Trigger(TypedOrderNode::new(order, user_account)),
        }
    }

    pub fn node_type(&self) -> NodeType {
        with_node!(self, n => n.node_type())
    }

    pub fn sort_value(&self) -> SortValue {
        with_node!(self, n => n.sort_value())
    }

    pub fn snapshot(&self) -> &Order {
        with_node!(self, n => n.snapshot())
    }

    pub fn owner(&self) -> &UserAccount {
        with_node!(self, n => n.owner())
    }

    pub fn key(&self) -> NodeKey {
        with_node!(self, n => n.key())
    }

    pub fn has_triggered(&self) -> bool {
        with_node!(self, n => n.has_triggered())
    }

    /// Mark a trigger node as fired. Returns false for every other node type.
    pub fn mark_triggered(&mut self) -> bool {
        match self {
            OrderNode::Trigger(node) => {
                node.mark_triggered();
                true
            }
            _ => false,
        }
    }

    pub fn set_processed_for_fill(&mut self, processed: bool) {
        with_node!(self, n => n.has_been_processed_for_fill = processed)
    }

    pub fn label(&self) -> String {
        with_node!(self, n => n.label())
    }

    pub fn label_with_decimals(&self, decimals: u32) -> String {
        with_node!(self, n => n.label_with_decimals(decimals))
    }

    pub fn as_limit(&self) -> Option<&LimitOrderNode> {
        match self {
            OrderNode::Limit(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_floating_limit(&self) -> Option<&FloatingLimitOrderNode> {
        match self {
            OrderNode::FloatingLimit(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_market(&self) -> Option<&MarketOrderNode> {
        match self {
            OrderNode::Market(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_trigger(&self) -> Option<&TriggerOrderNode> {
        match self {
            OrderNode::Trigger(node) => Some(node),
            _ => None,
        }
    }
}

impl DlobNode for OrderNode {
    fn get_price(&self, oracle: &OraclePriceData, current_slot: u64) -> NodeResult<u64> {
        with_node!(self, n => n.get_price(oracle, current_slot))
    }

    fn is_synthetic_liquidity_node(&self) -> bool {
        false
    }

    fn order(&self) -> Option<&Order> {
        Some(self.snapshot())
    }

    fn user_account(&self) -> Option<&UserAccount> {
        Some(self.owner())
    }

    fn is_base_filled(&self) -> bool {
        with_node!(self, n => n.is_base_filled())
    }

    fn have_filled(&self) -> bool {
        with_node!(self, n => n.have_filled())
    }
}

impl fmt::Display for OrderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
