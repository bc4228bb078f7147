//! Price resolution for resting orders.
//!
//! ## Resolution Order
//!
//! 1. A positive `order.price` is a true limit and always wins.
//! 2. An order carrying an auction interpolates linearly from the auction
//!    start price to the end price over `auction_duration` slots, counted
//!    from the placement slot and clamped at both ends.
//! 3. Anything else floats with the oracle: `oracle.price + oracle_price_offset`.
//!
//! All arithmetic is integer fixed-point; nothing here mutates state, so a
//! node may be priced any number of times per slot.

use tracing::debug;

use crate::error::{NodeError, NodeResult};
use crate::types::{OraclePriceData, Order};

/// Resolve the effective price of `order` at `current_slot`.
///
/// # Errors
///
/// * [`NodeError::OracleInvalid`] - the oracle is needed and flagged invalid
/// * [`NodeError::PriceOutOfRange`] - the result is negative or overflows
///
/// # Example
///
/// ```
/// use dlob_node::dlob::pricing::limit_price;
/// use dlob_node::types::{Direction, OraclePriceData, Order};
///
/// let order = Order::new(1, Direction::Long, 1, 0, 0).with_oracle_price_offset(-5);
/// let oracle = OraclePriceData::new(100, 0, 0);
/// assert_eq!(limit_price(&order, &oracle, 0), Ok(95));
/// ```
pub fn limit_price(
    order: &Order,
    oracle: &OraclePriceData,
    current_slot: u64,
) -> NodeResult<u64> {
    if order.price > 0 {
        return Ok(order.price);
    }

    if order.has_auction() {
        return to_price(auction_price(order, current_slot), order);
    }

    oracle_price(order, oracle)
}

/// Oracle price shifted by the order's offset.
pub fn oracle_price(order: &Order, oracle: &OraclePriceData) -> NodeResult<u64> {
    if !oracle.is_valid() {
        debug!(
            order_id = order.order_id,
            oracle_slot = oracle.slot,
            "refusing to price order off invalid oracle"
        );
        return Err(NodeError::OracleInvalid {
            oracle_slot: oracle.slot,
        });
    }

    let price = oracle
        .price
        .checked_add(i64::from(order.oracle_price_offset()))
        .ok_or(NodeError::PriceOutOfRange {
            order_id: order.order_id,
        })?;

    to_price(price, order)
}

/// Auction price of `order` at `current_slot`.
///
/// Zero-duration auctions are instantaneous and resolve to the end price.
/// Slots before placement count as the auction start. Division truncates
/// toward zero, so intermediate prices never overshoot the end price.
pub fn auction_price(order: &Order, current_slot: u64) -> i64 {
    let duration = u64::from(order.auction_duration);
    if duration == 0 {
        return order.auction_end_price();
    }

    let start = i128::from(order.auction_start_price());
    let end = i128::from(order.auction_end_price());
    let elapsed = current_slot.saturating_sub(order.slot).min(duration);

    let delta = (end - start) * i128::from(elapsed) / i128::from(duration);

    // start + delta lies between start and end, both i64
    (start + delta) as i64
}

/// True once the auction window has fully elapsed.
pub fn is_auction_complete(order: &Order, current_slot: u64) -> bool {
    let duration = u64::from(order.auction_duration);
    duration == 0 || current_slot.saturating_sub(order.slot) >= duration
}

fn to_price(value: i64, order: &Order) -> NodeResult<u64> {
    u64::try_from(value).map_err(|_| NodeError::PriceOutOfRange {
        order_id: order.order_id,
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
