//! Stay folio arithmetic: consumption, payments and closing totals.

pub mod models;

pub use models::{ConsumptionLine, Payment, StayFolio};
