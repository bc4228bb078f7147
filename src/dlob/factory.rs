//! Node factory.
//!
//! Turns a node type tag (or an order's own classification) into the right
//! [`OrderNode`] variant. The tag set is closed: an unrecognized tag fails
//! with [`NodeError::UnknownNodeType`] and nothing is built.
//!
//! ## Example
//!
//! ```
//! use dlob_node::dlob::{create_node, NodeType};
//! use dlob_node::types::{Direction, Order, UserAccount};
//!
//! let order = Order::new(1, Direction::Long, 1_000_000_000, 0, 10);
//! let node = create_node("market", order.clone(), UserAccount::default()).unwrap();
//! assert_eq!(node.node_type(), NodeType::Market);
//!
//! assert!(create_node("stop", order, UserAccount::default()).is_err());
//! ```

use tracing::{debug, warn};

use crate::config::FactoryConfig;
use crate::dlob::kind::NodeType;
use crate::dlob::node::OrderNode;
use crate::error::{NodeError, NodeResult};
use crate::types::{Order, UserAccount};

/// Build a node from a tag without validating the order.
pub fn create_node(tag: &str, order: Order, user_account: UserAccount) -> NodeResult<OrderNode> {
    let node_type = parse_tag(tag, &order)?;
    Ok(OrderNode::new(node_type, order, user_account))
}

fn parse_tag(tag: &str, order: &Order) -> NodeResult<NodeType> {
    tag.parse::<NodeType>().inspect_err(|_| {
        warn!(tag, order_id = order.order_id, "unknown DLOB node type");
    })
}

/// Check the preconditions a node of `node_type` relies on.
///
/// * filled amount never exceeds the order size
/// * the order size is positive
/// * a limit node carries a positive price
pub fn validate_order(node_type: NodeType, order: &Order) -> NodeResult<()> {
    let violation = |reason| NodeError::PreconditionViolation {
        order_id: order.order_id,
        reason,
    };

    if order.base_asset_amount == 0 {
        return Err(violation("base_asset_amount is zero"));
    }
    if order.base_asset_amount_filled > order.base_asset_amount {
        return Err(violation("base_asset_amount_filled exceeds base_asset_amount"));
    }
    if node_type == NodeType::Limit && order.price == 0 {
        return Err(violation("limit node requires a positive price"));
    }
    Ok(())
}

/// Node factory carrying construction settings.
#[derive(Debug, Clone, Default)]
pub struct NodeFactory {
    config: FactoryConfig,
}

impl NodeFactory {
    pub fn new(config: FactoryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Build a node from a tag.
    ///
    /// # Errors
    ///
    /// * [`NodeError::UnknownNodeType`] - tag outside the closed set
    /// * [`NodeError::PreconditionViolation`] - only with `validate_orders` enabled
    pub fn create(
        &self,
        tag: &str,
        order: Order,
        user_account: UserAccount,
    ) -> NodeResult<OrderNode> {
        let node_type = parse_tag(tag, &order)?;
        self.create_typed(node_type, order, user_account)
    }

    /// Build a node of a known type.
    pub fn create_typed(
        &self,
        node_type: NodeType,
        order: Order,
        user_account: UserAccount,
    ) -> NodeResult<OrderNode> {
        if self.config.validate_orders {
            validate_order(node_type, &order).inspect_err(|e| {
                warn!(%node_type, error = %e, "rejecting order snapshot");
            })?;
        }

        let node = OrderNode::new(node_type, order, user_account);
        debug!(
            key = %node.key(),
            %node_type,
            sort_value = %node.sort_value(),
            "created order node"
        );
        Ok(node)
    }

    /// Build a node under the type the order classifies as.
    ///
    /// Returns `Ok(None)` for empty order slots.
    pub fn create_for_order(
        &self,
        order: Order,
        user_account: UserAccount,
    ) -> NodeResult<Option<OrderNode>> {
        match NodeType::classify(&order) {
            Some(node_type) => self.create_typed(node_type, order, user_account).map(Some),
            None => Ok(None),
        }
    }

    /// Label rendered with the configured precision.
    pub fn label(&self, node: &OrderNode) -> String {
        node.label_with_decimals(self.config.label_decimals)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, OrderStatus, OrderType};

    fn order() -> Order {
        Order::new(5, Direction::Long, 1_000_000_000, 100_000_000, 12)
    }

    #[test]
    fn test_create_node_each_tag() {
        for node_type in NodeType::ALL {
            let node = create_node(node_type.as_str(), order(), UserAccount::default()).unwrap();
            assert_eq!(node.node_type(), node_type);
        }
    }

    #[test]
    fn test_create_node_unknown_tag() {
        let result = create_node("iceberg", order(), UserAccount::default());
        assert_eq!(result, Err(NodeError::UnknownNodeType("iceberg".to_string())));

        assert!(create_node("", order(), UserAccount::default()).is_err());
    }

    #[test]
    fn test_validate_order() {
        assert_eq!(validate_order(NodeType::Limit, &order()), Ok(()));

        let overfilled = order().with_filled(2_000_000_000);
        assert!(matches!(
            validate_order(NodeType::Market, &overfilled),
            Err(NodeError::PreconditionViolation { order_id: 5, .. })
        ));

        let empty = Order::new(5, Direction::Long, 0, 1, 1);
        assert!(validate_order(NodeType::Market, &empty).is_err());

        let unpriced = Order::new(5, Direction::Long, 1, 0, 1);
        assert!(validate_order(NodeType::Limit, &unpriced).is_err());
        assert_eq!(validate_order(NodeType::FloatingLimit, &unpriced), Ok(()));
    }

    #[test]
    fn test_default_factory_does_not_validate() {
        let factory = NodeFactory::default();
        let unpriced = Order::new(5, Direction::Long, 1, 0, 1);

        let node = factory.create("limit", unpriced, UserAccount::default()).unwrap();
        assert_eq!(node.sort_value().get(), 0);
    }

    #[test]
    fn test_strict_factory_rejects() {
        let factory = NodeFactory::new(FactoryConfig::strict());
        let unpriced = Order::new(5, Direction::Long, 1, 0, 1);

        assert!(matches!(
            factory.create("limit", unpriced.clone(), UserAccount::default()),
            Err(NodeError::PreconditionViolation { .. })
        ));
        assert!(factory.create("market", unpriced, UserAccount::default()).is_ok());
    }

    #[test]
    fn test_unknown_tag_checked_before_validation() {
        let factory = NodeFactory::new(FactoryConfig::strict());
        let bad = Order::new(5, Direction::Long, 0, 0, 1);

        assert_eq!(
            factory.create("twap", bad, UserAccount::default()),
            Err(NodeError::UnknownNodeType("twap".to_string()))
        );
    }

    #[test]
    fn test_create_for_order() {
        let factory = NodeFactory::default();

        let market = order().with_order_type(OrderType::Market);
        let node = factory.create_for_order(market, UserAccount::default()).unwrap();
        assert_eq!(node.map(|n| n.node_type()), Some(NodeType::Market));

        let empty = order().with_status(OrderStatus::Init);
        assert_eq!(factory.create_for_order(empty, UserAccount::default()), Ok(None));
    }

    #[test]
    fn test_factory_label_precision() {
        let factory = NodeFactory::new(FactoryConfig {
            validate_orders: false,
            label_decimals: 2,
        });
        let node = factory.create("limit", order(), UserAccount::default()).unwrap();

        assert!(factory.label(&node).ends_with("LONG 1.00 @ 100.00"));
    }
}
