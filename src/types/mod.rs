//! Core data types for DLOB nodes
//!
//! ## Types
//!
//! - [`Order`]: On-chain order snapshot (SSZ-serializable)
//! - [`Direction`], [`OrderType`], [`TriggerCondition`], [`OrderStatus`]
//! - [`OraclePriceData`]: Oracle reading used to price floating orders
//! - [`UserAccount`]: Key of the account owning an order
//!
//! ## Fixed-Point Arithmetic
//!
//! Prices are integers scaled by 10^6, base amounts by 10^9.
//! Example: 100.5 is stored as 100_500_000u64

mod account;
mod oracle;
mod order;
pub mod price;

pub use account::{order_signature, UserAccount};
pub use oracle::OraclePriceData;
pub use order::{Direction, Order, OrderStatus, OrderType, TriggerCondition};
