//! Fixed-point price and quantity utilities.
//!
//! ## Overview
//!
//! All prices and base amounts are integers scaled by an implicit precision
//! factor, mirroring the on-chain program:
//!
//! | Quantity | Precision | Example |
//! |----------|-----------|---------|
//! | Price | 10^6 | `100.5` = `100_500_000` |
//! | Base asset amount | 10^9 | `1.0` = `1_000_000_000` |
//!
//! Conversion to human-readable form goes through `rust_decimal` so no
//! floating-point rounding ever leaks into a label.
//!
//! ## Examples
//!
//! ```
//! use dlob_node::types::price::{PRICE_PRECISION, format_fixed};
//!
//! let price = 50_000_125_000;
//! assert_eq!(format_fixed(price, PRICE_PRECISION, 3), "50000.125");
//! ```

use rust_decimal::Decimal;

/// Precision of prices, oracle prices and oracle offsets: 10^6
pub const PRICE_PRECISION: u64 = 1_000_000;

/// Precision of base asset amounts: 10^9
pub const BASE_PRECISION: u64 = 1_000_000_000;

/// Number of decimal places used by order labels
pub const LABEL_DECIMALS: u32 = 3;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert a fixed-point u64 to a Decimal
pub fn fixed_to_decimal(value: u64, precision: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(precision)
}

/// Render a fixed-point u64 with exactly `decimals` decimal places
///
/// # Example
///
/// ```
/// use dlob_node::types::price::{PRICE_PRECISION, format_fixed};
///
/// assert_eq!(format_fixed(95_000_000, PRICE_PRECISION, 3), "95.000");
/// assert_eq!(format_fixed(1_234_567, PRICE_PRECISION, 3), "1.235");
/// ```
pub fn format_fixed(value: u64, precision: u64, decimals: u32) -> String {
    let decimal = fixed_to_decimal(value, precision).round_dp(decimals);
    format!("{:.*}", decimals as usize, decimal)
}

// ============================================================================
// Unit Tests
// ============================================================================
