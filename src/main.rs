//! DLOB Node - Binary Entry Point
//!
//! Builds one node of each type from sample orders and logs how each would
//! sort and price against a sample oracle reading.
//!
//! Logging honours `RUST_LOG` (default `info`); factory settings come from
//! `DLOB_*` environment variables.

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dlob_node::types::price::PRICE_PRECISION;
use dlob_node::{
    Direction, DlobNode, FactoryConfig, NodeFactory, OraclePriceData, Order, OrderType,
    SyntheticLiquidityNode, TriggerCondition, UserAccount,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match FactoryConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid DLOB_* configuration");
            std::process::exit(1);
        }
    };
    info!(?config, "starting DLOB node demo");

    let factory = NodeFactory::new(config);
    let account = UserAccount::new([0x42; 32]);
    let slot = 1_000;
    let oracle = OraclePriceData::new(100 * PRICE_PRECISION as i64, 10_000, slot);

    let samples = [
        ("limit", Order::new(1, Direction::Long, 1_000_000_000, 99 * PRICE_PRECISION, 990)),
        (
            "floatingLimit",
            Order::new(2, Direction::Short, 500_000_000, 0, 995).with_oracle_price_offset(250_000),
        ),
        (
            "market",
            Order::new(3, Direction::Long, 2_000_000_000, 0, 998)
                .with_order_type(OrderType::Market)
                .with_auction(100 * PRICE_PRECISION as i64, 101 * PRICE_PRECISION as i64, 10),
        ),
        (
            "trigger",
            Order::new(4, Direction::Short, 1_000_000_000, 0, 900)
                .with_order_type(OrderType::TriggerMarket)
                .with_trigger(95 * PRICE_PRECISION, TriggerCondition::Below),
        ),
    ];

    for (tag, order) in samples {
        let node = match factory.create(tag, order, account) {
            Ok(node) => node,
            Err(e) => {
                error!(tag, error = %e, "failed to build node");
                continue;
            }
        };

        match node.get_price(&oracle, slot) {
            Ok(price) => info!(
                label = %factory.label(&node),
                sort_value = %node.sort_value(),
                price,
                "node priced"
            ),
            Err(e) => error!(label = %factory.label(&node), error = %e, "pricing failed"),
        }
    }

    let vamm = SyntheticLiquidityNode::new(100 * PRICE_PRECISION);
    if let Ok(price) = vamm.get_price(&oracle, slot) {
        info!(price, "synthetic liquidity quote");
    }
}
