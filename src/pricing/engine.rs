//! The rate engine: injected configuration plus the quote entry point.

use std::borrow::Cow;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{RateError, Result};

use super::calculators::{
    adjustment_line_item, apply_percentage, round_money, select_adjustment, stay_total,
};
use super::models::SeasonalAdjustment;
use super::rate_table::{CategoryRates, RateTable};
use super::requests::StayRequest;
use super::responses::{Money, RateBreakdown};

/// What to do when a stay names a category missing from the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingCategoryPolicy {
    /// Fail with `UnknownCategory`.
    #[default]
    Strict,
    /// Price every tier at zero, as the legacy system did.
    Lenient,
}

/// Stateless rate calculator over an immutable rate table.
///
/// Cheap to clone and safe to share across threads; every call computes
/// from scratch with no caching. Seasonal adjustment rules are passed per
/// call so callers can snapshot them from wherever they live.
#[derive(Debug, Clone)]
pub struct RateEngine {
    table: RateTable,
    missing_category: MissingCategoryPolicy,
    currency: String,
}

impl RateEngine {
    pub fn new(table: RateTable) -> Self {
        Self {
            table,
            missing_category: MissingCategoryPolicy::Strict,
            currency: "BRL".to_string(),
        }
    }

    pub fn with_missing_category_policy(mut self, policy: MissingCategoryPolicy) -> Self {
        self.missing_category = policy;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    fn category_rates(&self, key: &str) -> Result<Cow<'_, CategoryRates>> {
        match self.table.get(key) {
            Some(rates) => Ok(Cow::Borrowed(rates)),
            None => match self.missing_category {
                MissingCategoryPolicy::Strict => Err(RateError::UnknownCategory(key.to_string())),
                MissingCategoryPolicy::Lenient => {
                    warn!(category = key, "category missing from rate table, pricing at zero");
                    Ok(Cow::Owned(CategoryRates::default()))
                }
            },
        }
    }

    /// Total lodging charge for the stay before adjustments.
    ///
    /// Day-by-day accumulation over the stay's nights, with the 2-night
    /// package override when it qualifies. Emits no line items.
    pub fn calculate_base_rate(&self, stay: &StayRequest) -> Result<Decimal> {
        stay.validate()?;
        let rates = self.category_rates(&stay.category)?;
        Ok(stay_total(
            &rates,
            stay.checkin_date(),
            stay.nights(),
            stay.adults,
            stay.children_6_to_12,
        ))
    }

    /// Apply the single winning adjustment rule to a base amount, if any
    /// rule matches the stay.
    ///
    /// Client-scoped rules override accommodation-scoped rules override
    /// general rules; matching rules are never stacked.
    pub fn apply_seasonal_adjustment(
        &self,
        base: Decimal,
        stay: &StayRequest,
        rules: &[SeasonalAdjustment],
    ) -> (Decimal, Vec<String>) {
        match select_adjustment(
            rules,
            stay.checkin_date(),
            stay.checkout_date(),
            stay.client_id,
            stay.accommodation_id,
        ) {
            Some(rule) => {
                debug!(
                    rule = %rule.name,
                    percentage = %rule.percentage,
                    "applying seasonal adjustment"
                );
                (
                    apply_percentage(base, rule.percentage),
                    vec![adjustment_line_item(rule)],
                )
            }
            None => (base, Vec::new()),
        }
    }

    /// Quote a stay: base rate, then adjustment, rounded to cents.
    pub fn quote(
        &self,
        stay: &StayRequest,
        rules: &[SeasonalAdjustment],
    ) -> Result<RateBreakdown> {
        let base = self.calculate_base_rate(stay)?;
        let (total, line_items) = self.apply_seasonal_adjustment(base, stay, rules);
        // quotes always carry two fraction digits
        let mut amount = round_money(total, 2);
        amount.rescale(2);
        Ok(RateBreakdown {
            total: Money {
                amount,
                currency: self.currency.clone(),
            },
            line_items,
        })
    }
}
