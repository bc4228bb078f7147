//! Oracle price snapshot consumed by price resolution.

/// Oracle reading supplied by the caller.
///
/// The node never checks staleness itself. The only validity signal it
/// honours is `has_sufficient_number_of_data_points`, set upstream when the
/// reading was ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OraclePriceData {
    /// Oracle price (PRICE_PRECISION)
    pub price: i64,

    /// Confidence interval (PRICE_PRECISION)
    pub confidence: u64,

    /// Slot the reading was published at
    pub slot: u64,

    /// False when upstream marked the reading unusable
    pub has_sufficient_number_of_data_points: bool,
}

impl OraclePriceData {
    /// Create a valid oracle reading
    pub fn new(price: i64, confidence: u64, slot: u64) -> Self {
        Self {
            price,
            confidence,
            slot,
            has_sufficient_number_of_data_points: true,
        }
    }

    /// Create a reading flagged invalid upstream
    pub fn invalid(price: i64, slot: u64) -> Self {
        Self {
            price,
            confidence: 0,
            slot,
            has_sufficient_number_of_data_points: false,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.has_sufficient_number_of_data_points
    }
}
