//! Response DTOs for the rate engine.

use rust_decimal::Decimal;
use serde::Serialize;

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// Quoted total for a stay plus explanation lines for any adjustment
/// applied.
///
/// The breakdown carries no per-night itemization; line items describe
/// rate adjustments only.
#[derive(Debug, Clone, Serialize)]
pub struct RateBreakdown {
    pub total: Money,
    pub line_items: Vec<String>,
}
