//! Pricing engine module for the pousada.
//!
//! Provides lodging rate calculations: day-by-day seasonal pricing,
//! occupancy tiers, 2-night package overrides and seasonal adjustments.
//! Everything here is pure computation over injected configuration.

pub mod calculators;
pub mod engine;
pub mod models;
pub mod rate_table;
pub mod requests;
pub mod responses;

// Re-export commonly used items
pub use calculators::round_money;
pub use engine::{MissingCategoryPolicy, RateEngine};
pub use models::{PeriodType, PricingModel, SeasonalAdjustment};
pub use rate_table::{CategoryRates, RateTable, TierRates};
pub use requests::StayRequest;
pub use responses::{Money, RateBreakdown};
