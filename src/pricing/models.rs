//! Domain types for rate calculation.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Night classification used for rate lookup.
///
/// Weekend covers Friday, Saturday and Sunday nights. The 3-day window
/// is house policy, not an off-by-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    Weekday,
    Weekend,
}

impl PeriodType {
    /// Classify a calendar date: Friday through Sunday is weekend.
    pub fn classify(date: NaiveDate) -> Self {
        if date.weekday().num_days_from_monday() >= 4 {
            PeriodType::Weekend
        } else {
            PeriodType::Weekday
        }
    }
}

/// How a category prices a night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingModel {
    /// Private rooms and chalets: single/couple base plus surcharges.
    #[default]
    Tiered,
    /// Shared dormitory: every guest pays the per-person rate, children half.
    PerPerson,
}

/// A named percentage adjustment over a date range, optionally scoped to
/// a specific client or accommodation.
///
/// A rule with neither scope set is a "general" rule. Scoped rules only
/// ever apply to stays matching every scope they set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalAdjustment {
    pub name: String,
    pub start: NaiveDate,
    /// Inclusive end date.
    pub end: NaiveDate,
    /// Signed percentage: 20 means +20%, -10 means -10%.
    #[serde(with = "rust_decimal::serde::str")]
    pub percentage: Decimal,
    pub active: bool,
    /// Restricts the rule to one client when set.
    #[serde(default)]
    pub client_id: Option<Uuid>,
    /// Restricts the rule to one accommodation when set.
    #[serde(default)]
    pub accommodation_id: Option<Uuid>,
    /// Tie-break between equal-percentage rules at the same priority:
    /// the most recently created rule wins.
    pub created_at: DateTime<Utc>,
}

impl SeasonalAdjustment {
    /// True when the rule's date range overlaps the stay span, both ends
    /// inclusive.
    pub fn overlaps(&self, checkin: NaiveDate, checkout: NaiveDate) -> bool {
        self.start <= checkout && self.end >= checkin
    }

    /// True when the rule has neither a client nor an accommodation scope.
    pub fn is_general(&self) -> bool {
        self.client_id.is_none() && self.accommodation_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule(start: NaiveDate, end: NaiveDate) -> SeasonalAdjustment {
        SeasonalAdjustment {
            name: "High season".to_string(),
            start,
            end,
            percentage: dec!(20),
            active: true,
            client_id: None,
            accommodation_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_classify_full_week() {
        // 2025-01-06 is a Monday
        assert_eq!(PeriodType::classify(date(2025, 1, 6)), PeriodType::Weekday);
        assert_eq!(PeriodType::classify(date(2025, 1, 7)), PeriodType::Weekday);
        assert_eq!(PeriodType::classify(date(2025, 1, 8)), PeriodType::Weekday);
        assert_eq!(PeriodType::classify(date(2025, 1, 9)), PeriodType::Weekday);
        // Friday, Saturday and Sunday all count as weekend
        assert_eq!(PeriodType::classify(date(2025, 1, 10)), PeriodType::Weekend);
        assert_eq!(PeriodType::classify(date(2025, 1, 11)), PeriodType::Weekend);
        assert_eq!(PeriodType::classify(date(2025, 1, 12)), PeriodType::Weekend);
    }

    #[test]
    fn test_overlaps_inclusive_edges() {
        let r = rule(date(2025, 1, 10), date(2025, 1, 20));

        // stay ends exactly on the rule's first day
        assert!(r.overlaps(date(2025, 1, 5), date(2025, 1, 10)));
        // stay starts exactly on the rule's last day
        assert!(r.overlaps(date(2025, 1, 20), date(2025, 1, 25)));
        // stay fully inside
        assert!(r.overlaps(date(2025, 1, 12), date(2025, 1, 14)));
        // rule fully inside the stay
        assert!(r.overlaps(date(2025, 1, 1), date(2025, 1, 31)));
        // disjoint on either side
        assert!(!r.overlaps(date(2025, 1, 1), date(2025, 1, 9)));
        assert!(!r.overlaps(date(2025, 1, 21), date(2025, 1, 25)));
    }

    #[test]
    fn test_is_general() {
        let mut r = rule(date(2025, 1, 1), date(2025, 1, 31));
        assert!(r.is_general());
        r.client_id = Some(Uuid::new_v4());
        assert!(!r.is_general());
    }
}
