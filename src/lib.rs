//! Rate calculation engine for a pousada (guesthouse).
//!
//! Computes the total lodging charge for a stay: day-by-day seasonal
//! pricing, occupancy-tiered rates, 2-night package overrides and a
//! priority-ordered system of percentage adjustments. A small billing
//! module covers stay folio arithmetic (consumption, payments, balance).
//!
//! The engine is pure and stateless: all configuration is injected at
//! construction, every call computes from scratch, and no I/O happens
//! anywhere in the crate. Currency math uses `rust_decimal` throughout.

pub mod billing;
pub mod error;
pub mod pricing;

// Re-export the main entry points
pub use error::{RateError, Result};
pub use pricing::{RateBreakdown, RateEngine, RateTable, SeasonalAdjustment, StayRequest};
