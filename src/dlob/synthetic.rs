//! Protocol-owned liquidity node.
//!
//! The vAMM quotes without a backing order. The matching engine treats this
//! node as the counterparty of last resort.

use crate::dlob::node::DlobNode;
use crate::error::NodeResult;
use crate::types::{OraclePriceData, Order, UserAccount};

/// Synthetic liquidity at a fixed quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticLiquidityNode {
    /// Quoted price (PRICE_PRECISION)
    pub price: u64,
}

impl SyntheticLiquidityNode {
    pub fn new(price: u64) -> Self {
        Self { price }
    }
}

impl DlobNode for SyntheticLiquidityNode {
    fn get_price(&self, _oracle: &OraclePriceData, _current_slot: u64) -> NodeResult<u64> {
        Ok(self.price)
    }

    fn is_synthetic_liquidity_node(&self) -> bool {
        true
    }

    fn order(&self) -> Option<&Order> {
        None
    }

    fn user_account(&self) -> Option<&UserAccount> {
        None
    }

    fn is_base_filled(&self) -> bool {
        false
    }

    fn have_filled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_node_contract() {
        let node = SyntheticLiquidityNode::new(101_000_000);
        let oracle = OraclePriceData::invalid(1, 1);

        assert!(node.is_synthetic_liquidity_node());
        assert_eq!(node.get_price(&oracle, 10), Ok(101_000_000));
        assert!(node.order().is_none());
        assert!(node.user_account().is_none());
        assert!(!node.is_base_filled());
        assert!(!node.have_filled());
    }

    #[test]
    fn test_mixed_nodes_behind_trait_objects() {
        use crate::dlob::{NodeType, OrderNode};
        use crate::types::Direction;

        let order = Order::new(1, Direction::Long, 1, 0, 0).with_oracle_price_offset(-5);
        let nodes: Vec<Box<dyn DlobNode>> = vec![
            Box::new(OrderNode::new(NodeType::FloatingLimit, order, UserAccount::default())),
            Box::new(SyntheticLiquidityNode::new(99)),
        ];
        let oracle = OraclePriceData::new(100, 0, 0);

        let prices: Vec<_> = nodes.iter().map(|n| n.get_price(&oracle, 0)).collect();
        assert_eq!(prices, vec![Ok(95), Ok(99)]);
        assert_eq!(
            nodes.iter().filter(|n| n.is_synthetic_liquidity_node()).count(),
            1
        );
    }
}
