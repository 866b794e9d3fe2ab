//! Folio types for a stay: what was consumed, what was paid, what is owed.
//!
//! Pure arithmetic over recorded amounts; the lodging total comes from the
//! pricing engine and everything here composes around it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One frigobar or bar consumption entry, priced at the moment of
/// consumption so later stock price changes never affect the folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionLine {
    pub description: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
}

impl ConsumptionLine {
    pub fn total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// A payment registered against a stay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// E.g. "dinheiro", "cartao", "pix".
    pub method: String,
    pub paid_at: DateTime<Utc>,
}

/// Charges and payments accumulated over one stay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StayFolio {
    /// Lodging total as quoted by the rate engine.
    #[serde(default)]
    pub lodging_total: Decimal,
    #[serde(default)]
    pub consumption: Vec<ConsumptionLine>,
    #[serde(default)]
    pub discount: Decimal,
    /// Additional fees or charges outside lodging and consumption.
    #[serde(default)]
    pub extra_charges: Decimal,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl StayFolio {
    pub fn consumption_total(&self) -> Decimal {
        self.consumption.iter().map(ConsumptionLine::total).sum()
    }

    /// Lodging plus consumption and extras, minus the discount.
    pub fn total_due(&self) -> Decimal {
        self.lodging_total + self.consumption_total() - self.discount + self.extra_charges
    }

    pub fn total_paid(&self) -> Decimal {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Outstanding balance; negative when the guest overpaid.
    pub fn balance_due(&self) -> Decimal {
        self.total_due() - self.total_paid()
    }
}
