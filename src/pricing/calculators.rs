//! Core rate calculation functions.
//!
//! Pure functions for pricing math - no configuration resolution, no
//! logging, no I/O. The engine composes these; tests exercise them
//! directly.

use chrono::{Days, NaiveDate};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::models::{PeriodType, PricingModel, SeasonalAdjustment};
use super::rate_table::CategoryRates;

/// Children aged 6-12 pay half of the adult surcharge or per-person rate.
const CHILD_FACTOR: Decimal = dec!(0.5);

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is
/// exactly halfway between two possibilities. This reduces cumulative
/// rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use pousada_rates::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Cost of a single night for the given guest mix.
///
/// Tiered categories include 2 adults in the couple rate (1 in the single
/// rate); extras pay the surcharge, children half of it. Per-person
/// categories charge every adult the per-person rate and children half.
pub fn nightly_cost(category: &CategoryRates, period: PeriodType, adults: i32, children: i32) -> Decimal {
    let tier = category.for_period(period);
    match category.pricing_model {
        PricingModel::PerPerson => {
            Decimal::from(adults) * tier.per_person
                + Decimal::from(children) * tier.per_person * CHILD_FACTOR
        }
        PricingModel::Tiered => {
            let (base, included) = if adults >= 2 {
                (tier.couple, 2)
            } else {
                (tier.single, 1)
            };
            let extra_adults = (adults - included).max(0);
            base + Decimal::from(extra_adults) * tier.surcharge
                + Decimal::from(children) * tier.surcharge * CHILD_FACTOR
        }
    }
}

/// Accumulate nightly costs over `[checkin, checkin + nights)`, then apply
/// the 2-night package override when the stay qualifies.
///
/// The package replaces the accumulated total outright for 2 nights, 2
/// adults and no children aged 6-12; eligibility looks only at the
/// check-in night's period classification.
pub fn stay_total(
    category: &CategoryRates,
    checkin: NaiveDate,
    nights: i64,
    adults: i32,
    children: i32,
) -> Decimal {
    let mut total = Decimal::ZERO;
    for i in 0..nights {
        let date = checkin + Days::new(i as u64);
        total += nightly_cost(category, PeriodType::classify(date), adults, children);
    }

    if nights == 2 && adults == 2 && children == 0 {
        let tier = category.for_period(PeriodType::classify(checkin));
        if let Some(package) = tier.two_night_package {
            total = package;
        }
    }

    total
}

/// Pick the single adjustment rule to apply to a stay, if any.
///
/// Client-scoped rules beat accommodation-scoped rules beat general
/// rules; within a tier the highest percentage wins and equal
/// percentages break to the most recently created rule. Rules never
/// stack. A scoped rule is only considered when every scope it sets
/// matches the stay.
pub fn select_adjustment<'a>(
    rules: &'a [SeasonalAdjustment],
    checkin: NaiveDate,
    checkout: NaiveDate,
    client_id: Option<Uuid>,
    accommodation_id: Option<Uuid>,
) -> Option<&'a SeasonalAdjustment> {
    let applicable: Vec<&SeasonalAdjustment> = rules
        .iter()
        .filter(|r| r.active && r.overlaps(checkin, checkout))
        .filter(|r| r.client_id.is_none() || r.client_id == client_id)
        .filter(|r| r.accommodation_id.is_none() || r.accommodation_id == accommodation_id)
        .collect();

    best_of(applicable.iter().copied().filter(|r| r.client_id.is_some()))
        .or_else(|| {
            best_of(
                applicable
                    .iter()
                    .copied()
                    .filter(|r| r.client_id.is_none() && r.accommodation_id.is_some()),
            )
        })
        .or_else(|| best_of(applicable.iter().copied().filter(|r| r.is_general())))
}

fn best_of<'a>(
    rules: impl Iterator<Item = &'a SeasonalAdjustment>,
) -> Option<&'a SeasonalAdjustment> {
    rules.max_by_key(|r| (r.percentage, r.created_at))
}

/// Apply a signed percentage: `base * (1 + percentage / 100)`.
pub fn apply_percentage(base: Decimal, percentage: Decimal) -> Decimal {
    base * (Decimal::ONE + percentage / Decimal::ONE_HUNDRED)
}

/// Human-readable description of an applied rule, e.g.
/// `"Adjustment of +20% (New Year's)"`.
pub fn adjustment_line_item(rule: &SeasonalAdjustment) -> String {
    let sign = if rule.percentage >= Decimal::ZERO { "+" } else { "-" };
    format!(
        "Adjustment of {}{}% ({})",
        sign,
        rule.percentage.abs().normalize(),
        rule.name
    )
}
