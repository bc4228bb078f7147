//! Order snapshot types.
//!
//! ## SSZ Serialization
//!
//! `Order` derives `SimpleSerialize` from ssz_rs so a snapshot decoded from
//! ledger state can be stored and replayed byte-for-byte. SSZ only knows
//! unsigned integers, so enums are stored as `u8` and signed fixed-point
//! fields as their two's complement bit pattern; typed accessors convert.
//!
//! ## Fixed-Point Representation
//!
//! Prices use `PRICE_PRECISION` (10^6) and base amounts use
//! `BASE_PRECISION` (10^9), see [`crate::types::price`].

use ssz_rs::prelude::*;

use crate::error::{NodeError, NodeResult};

// ============================================================================
// Direction enum
// ============================================================================

/// Position direction of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Buys base asset (bid)
    #[default]
    Long,
    /// Sells base asset (ask)
    Short,
}

impl Direction {
    pub fn to_u8(self) -> u8 {
        match self {
            Direction::Long => 0,
            Direction::Short => 1,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Direction::Long),
            1 => Some(Direction::Short),
            _ => None,
        }
    }

    /// Label used in human-readable order summaries
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Long => "LONG",
            Direction::Short => "SHORT",
        }
    }
}

// ============================================================================
// OrderType enum
// ============================================================================

/// Order type as placed on the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderType {
    Market,
    #[default]
    Limit,
    TriggerMarket,
    TriggerLimit,
    /// Market order priced relative to the oracle
    Oracle,
}

impl OrderType {
    pub fn to_u8(self) -> u8 {
        match self {
            OrderType::Market => 0,
            OrderType::Limit => 1,
            OrderType::TriggerMarket => 2,
            OrderType::TriggerLimit => 3,
            OrderType::Oracle => 4,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(OrderType::Market),
            1 => Some(OrderType::Limit),
            2 => Some(OrderType::TriggerMarket),
            3 => Some(OrderType::TriggerLimit),
            4 => Some(OrderType::Oracle),
            _ => None,
        }
    }

    /// Trigger order types stay dormant until their trigger condition fires
    pub fn must_be_triggered(self) -> bool {
        matches!(self, OrderType::TriggerMarket | OrderType::TriggerLimit)
    }

    /// Order types that take liquidity at whatever price the book offers
    pub fn is_market(self) -> bool {
        matches!(
            self,
            OrderType::Market | OrderType::TriggerMarket | OrderType::Oracle
        )
    }
}

// ============================================================================
// TriggerCondition enum
// ============================================================================

/// Trigger condition of a stop/trigger order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriggerCondition {
    /// Fires once the oracle price rises above the trigger price
    #[default]
    Above,
    /// Fires once the oracle price falls below the trigger price
    Below,
    TriggeredAbove,
    TriggeredBelow,
}

impl TriggerCondition {
    pub fn to_u8(self) -> u8 {
        match self {
            TriggerCondition::Above => 0,
            TriggerCondition::Below => 1,
            TriggerCondition::TriggeredAbove => 2,
            TriggerCondition::TriggeredBelow => 3,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(TriggerCondition::Above),
            1 => Some(TriggerCondition::Below),
            2 => Some(TriggerCondition::TriggeredAbove),
            3 => Some(TriggerCondition::TriggeredBelow),
            _ => None,
        }
    }

    pub fn is_triggered(self) -> bool {
        matches!(
            self,
            TriggerCondition::TriggeredAbove | TriggerCondition::TriggeredBelow
        )
    }

    pub fn is_below(self) -> bool {
        matches!(
            self,
            TriggerCondition::Below | TriggerCondition::TriggeredBelow
        )
    }

    pub fn as_str(self) -> &'static str {
        if self.is_below() {
            "BELOW"
        } else {
            "ABOVE"
        }
    }
}

// ============================================================================
// OrderStatus enum
// ============================================================================

/// Lifecycle status of the on-chain order slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    /// Empty slot, no order placed
    #[default]
    Init,
    Open,
    Filled,
    Canceled,
}

impl OrderStatus {
    pub fn to_u8(self) -> u8 {
        match self {
            OrderStatus::Init => 0,
            OrderStatus::Open => 1,
            OrderStatus::Filled => 2,
            OrderStatus::Canceled => 3,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(OrderStatus::Init),
            1 => Some(OrderStatus::Open),
            2 => Some(OrderStatus::Filled),
            3 => Some(OrderStatus::Canceled),
            _ => None,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// Snapshot of an on-chain order at the moment it was observed.
///
/// ## Example
///
/// ```
/// use dlob_node::types::{Direction, Order};
///
/// // Long 1.0 base at 100.0, placed at slot 42
/// let order = Order::new(1, Direction::Long, 1_000_000_000, 100_000_000, 42)
///     .with_oracle_price_offset(-5_000_000);
///
/// assert_eq!(order.direction(), Direction::Long);
/// assert_eq!(order.oracle_price_offset(), -5_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Order {
    /// Order identifier, unique within the owning account
    pub order_id: u32,

    /// Perpetual market the order belongs to
    pub market_index: u16,

    /// Slot at which the order was placed
    pub slot: u64,

    /// Limit price (PRICE_PRECISION), 0 when the order has no explicit limit
    pub price: u64,

    /// Order size (BASE_PRECISION)
    pub base_asset_amount: u64,

    /// Portion of the order already filled (BASE_PRECISION)
    pub base_asset_amount_filled: u64,

    /// Trigger threshold (PRICE_PRECISION), 0 when not a trigger order
    pub trigger_price: u64,

    /// Signed i32 offset from the oracle price, stored as its bit pattern
    pub oracle_price_offset_raw: u32,

    /// Signed i64 auction start price, stored as its bit pattern
    pub auction_start_price_raw: u64,

    /// Signed i64 auction end price, stored as its bit pattern
    pub auction_end_price_raw: u64,

    /// Auction length in slots
    pub auction_duration: u8,

    /// Direction as u8 (0=Long, 1=Short)
    pub direction_raw: u8,

    /// Order type as u8, see [`OrderType::to_u8`]
    pub order_type_raw: u8,

    /// Trigger condition as u8, see [`TriggerCondition::to_u8`]
    pub trigger_condition_raw: u8,

    /// Status as u8, see [`OrderStatus::to_u8`]
    pub status_raw: u8,

    pub reduce_only: bool,

    pub post_only: bool,
}

impl Order {
    /// Create an open limit order with no oracle offset, trigger or auction
    ///
    /// # Arguments
    ///
    /// * `order_id` - Identifier within the owning account
    /// * `direction` - Long or Short
    /// * `base_asset_amount` - Size (BASE_PRECISION)
    /// * `price` - Limit price (PRICE_PRECISION), 0 for none
    /// * `slot` - Placement slot
    pub fn new(
        order_id: u32,
        direction: Direction,
        base_asset_amount: u64,
        price: u64,
        slot: u64,
    ) -> Self {
        Self {
            order_id,
            slot,
            price,
            base_asset_amount,
            direction_raw: direction.to_u8(),
            order_type_raw: OrderType::Limit.to_u8(),
            status_raw: OrderStatus::Open.to_u8(),
            ..Default::default()
        }
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type_raw = order_type.to_u8();
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status_raw = status.to_u8();
        self
    }

    pub fn with_market_index(mut self, market_index: u16) -> Self {
        self.market_index = market_index;
        self
    }

    pub fn with_filled(mut self, base_asset_amount_filled: u64) -> Self {
        self.base_asset_amount_filled = base_asset_amount_filled;
        self
    }

    pub fn with_oracle_price_offset(mut self, offset: i32) -> Self {
        self.set_oracle_price_offset(offset);
        self
    }

    pub fn with_trigger(mut self, trigger_price: u64, condition: TriggerCondition) -> Self {
        self.trigger_price = trigger_price;
        self.trigger_condition_raw = condition.to_u8();
        self
    }

    /// Attach a linear auction from `start_price` to `end_price` over `duration` slots
    pub fn with_auction(mut self, start_price: i64, end_price: i64, duration: u8) -> Self {
        self.auction_start_price_raw = start_price as u64;
        self.auction_end_price_raw = end_price as u64;
        self.auction_duration = duration;
        self
    }

    pub fn direction(&self) -> Direction {
        Direction::from_u8(self.direction_raw).unwrap_or_default()
    }

    pub fn order_type(&self) -> OrderType {
        OrderType::from_u8(self.order_type_raw).unwrap_or_default()
    }

    pub fn trigger_condition(&self) -> TriggerCondition {
        TriggerCondition::from_u8(self.trigger_condition_raw).unwrap_or_default()
    }

    pub fn status(&self) -> OrderStatus {
        OrderStatus::from_u8(self.status_raw).unwrap_or_default()
    }

    pub fn oracle_price_offset(&self) -> i32 {
        self.oracle_price_offset_raw as i32
    }

    pub fn set_oracle_price_offset(&mut self, offset: i32) {
        self.oracle_price_offset_raw = offset as u32;
    }

    pub fn auction_start_price(&self) -> i64 {
        self.auction_start_price_raw as i64
    }

    pub fn auction_end_price(&self) -> i64 {
        self.auction_end_price_raw as i64
    }

    /// An order carries an auction when either auction price is set
    pub fn has_auction(&self) -> bool {
        self.auction_start_price_raw != 0 || self.auction_end_price_raw != 0
    }

    /// Check if the order is fully filled
    pub fn is_filled(&self) -> bool {
        self.base_asset_amount_filled == self.base_asset_amount
    }

    pub fn unfilled_amount(&self) -> u64 {
        self.base_asset_amount
            .saturating_sub(self.base_asset_amount_filled)
    }

    /// Encode the snapshot with SSZ
    pub fn to_ssz_bytes(&self) -> NodeResult<Vec<u8>> {
        ssz_rs::serialize(self).map_err(|e| NodeError::Encode(format!("{e:?}")))
    }

    /// Decode a snapshot previously produced by [`Order::to_ssz_bytes`]
    ///
    /// Every enum byte must name a known variant.
    pub fn from_ssz_bytes(bytes: &[u8]) -> NodeResult<Self> {
        let order: Order =
            ssz_rs::deserialize(bytes).map_err(|e| NodeError::Decode(format!("{e:?}")))?;
        order.check_enum_fields()?;
        Ok(order)
    }

    fn check_enum_fields(&self) -> NodeResult<()> {
        let invalid = |field: &str, value: u8| {
            NodeError::Decode(format!("order {}: invalid {field} {value}", self.order_id))
        };

        if Direction::from_u8(self.direction_raw).is_none() {
            return Err(invalid("direction", self.direction_raw));
        }
        if OrderType::from_u8(self.order_type_raw).is_none() {
            return Err(invalid("order type", self.order_type_raw));
        }
        if TriggerCondition::from_u8(self.trigger_condition_raw).is_none() {
            return Err(invalid("trigger condition", self.trigger_condition_raw));
        }
        if OrderStatus::from_u8(self.status_raw).is_none() {
            return Err(invalid("status", self.status_raw));
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_conversion() {
        assert_eq!(Direction::Long.to_u8(), 0);
        assert_eq!(Direction::Short.to_u8(), 1);
        assert_eq!(Direction::from_u8(1), Some(Direction::Short));
        assert_eq!(Direction::from_u8(2), None);
    }

    #[test]
    fn test_order_type_classes() {
        assert!(OrderType::TriggerMarket.must_be_triggered());
        assert!(OrderType::TriggerLimit.must_be_triggered());
        assert!(!OrderType::Limit.must_be_triggered());

        assert!(OrderType::Market.is_market());
        assert!(OrderType::Oracle.is_market());
        assert!(OrderType::TriggerMarket.is_market());
        assert!(!OrderType::TriggerLimit.is_market());
        assert_eq!(OrderType::from_u8(5), None);
    }

    #[test]
    fn test_trigger_condition_labels() {
        assert_eq!(TriggerCondition::Above.as_str(), "ABOVE");
        assert_eq!(TriggerCondition::Below.as_str(), "BELOW");
        assert_eq!(TriggerCondition::TriggeredBelow.as_str(), "BELOW");
        assert!(TriggerCondition::TriggeredAbove.is_triggered());
        assert!(!TriggerCondition::Below.is_triggered());
    }

    #[test]
    fn test_order_new() {
        let order = Order::new(7, Direction::Short, 2_000_000_000, 100_000_000, 10);

        assert_eq!(order.order_id, 7);
        assert_eq!(order.direction(), Direction::Short);
        assert_eq!(order.order_type(), OrderType::Limit);
        assert_eq!(order.status(), OrderStatus::Open);
        assert_eq!(order.oracle_price_offset(), 0);
        assert!(!order.has_auction());
        assert!(!order.is_filled());
        assert_eq!(order.unfilled_amount(), 2_000_000_000);
    }

    #[test]
    fn test_signed_fields_preserve_sign() {
        let order = Order::new(1, Direction::Long, 1, 0, 0)
            .with_oracle_price_offset(i32::MIN)
            .with_auction(-42, i64::MAX, 10);

        assert_eq!(order.oracle_price_offset(), i32::MIN);
        assert_eq!(order.auction_start_price(), -42);
        assert_eq!(order.auction_end_price(), i64::MAX);
        assert!(order.has_auction());
    }

    #[test]
    fn test_order_fill_state() {
        let order = Order::new(1, Direction::Long, 100, 0, 0).with_filled(40);
        assert!(!order.is_filled());
        assert_eq!(order.unfilled_amount(), 60);

        let order = order.with_filled(100);
        assert!(order.is_filled());
    }

    #[test]
    fn test_order_ssz_roundtrip() {
        let order = Order::new(9, Direction::Short, 3_000_000_000, 0, 1_234)
            .with_order_type(OrderType::TriggerLimit)
            .with_market_index(2)
            .with_oracle_price_offset(-250_000)
            .with_trigger(99_000_000, TriggerCondition::Below)
            .with_auction(101_000_000, 99_500_000, 20)
            .with_filled(1_000_000_000);

        let bytes = order.to_ssz_bytes().expect("Failed to serialize");
        let decoded = Order::from_ssz_bytes(&bytes).expect("Failed to deserialize");

        assert_eq!(order, decoded);
        assert_eq!(decoded.trigger_condition(), TriggerCondition::Below);
    }

    #[test]
    fn test_order_decode_truncated() {
        let bytes = Order::default().to_ssz_bytes().unwrap();
        let result = Order::from_ssz_bytes(&bytes[..bytes.len() - 1]);
        assert!(matches!(result, Err(NodeError::Decode(_))));
    }

    #[test]
    fn test_order_decode_rejects_unknown_enum_bytes() {
        let order = Order::new(3, Direction::Short, 1_000_000_000, 0, 1)
            .with_trigger(95_000_000, TriggerCondition::Below);

        let corruptions: [fn(&mut Order); 4] = [
            |o| o.direction_raw = 9,
            |o| o.order_type_raw = 5,
            |o| o.trigger_condition_raw = 200,
            |o| o.status_raw = 77,
        ];

        for corrupt in corruptions {
            let mut bad = order.clone();
            corrupt(&mut bad);
            let bytes = bad.to_ssz_bytes().unwrap();

            assert!(matches!(
                Order::from_ssz_bytes(&bytes),
                Err(NodeError::Decode(_))
            ));
        }

        // the untouched snapshot still decodes with its meaning intact
        let decoded = Order::from_ssz_bytes(&order.to_ssz_bytes().unwrap()).unwrap();
        assert_eq!(decoded.direction(), Direction::Short);
        assert_eq!(decoded.trigger_condition(), TriggerCondition::Below);
    }
}
