//! Request DTOs for the rate engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{RateError, Result};

/// A single stay to price.
///
/// Capacity checks (guest count vs. room capacity) are the caller's
/// responsibility; the engine only validates date ordering and
/// non-negative counts.
#[derive(Debug, Clone, Deserialize)]
pub struct StayRequest {
    /// Pricing key for the accommodation category, e.g. "quarto" or "chale".
    pub category: String,
    pub checkin: DateTime<Utc>,
    pub checkout: DateTime<Utc>,
    pub adults: i32,
    /// Children aged 6-12. Younger children stay free and are not counted.
    pub children_6_to_12: i32,
    /// Client identity, used only for adjustment scoping.
    #[serde(default)]
    pub client_id: Option<Uuid>,
    /// Accommodation identity, used only for adjustment scoping.
    #[serde(default)]
    pub accommodation_id: Option<Uuid>,
}

impl StayRequest {
    pub fn checkin_date(&self) -> NaiveDate {
        self.checkin.date_naive()
    }

    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout.date_naive()
    }

    /// Whole nights between the check-in and check-out calendar dates.
    pub fn nights(&self) -> i64 {
        (self.checkout_date() - self.checkin_date()).num_days()
    }

    /// Precondition check: non-negative guest counts and at least one
    /// night between check-in and check-out.
    pub fn validate(&self) -> Result<()> {
        if self.adults < 0 || self.children_6_to_12 < 0 {
            return Err(RateError::InvalidGuestCount {
                adults: self.adults,
                children: self.children_6_to_12,
            });
        }
        if self.nights() < 1 {
            return Err(RateError::InvalidDateRange {
                checkin: self.checkin_date(),
                checkout: self.checkout_date(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stay(checkin: (u32, u32), checkout: (u32, u32)) -> StayRequest {
        StayRequest {
            category: "quarto".to_string(),
            checkin: Utc
                .with_ymd_and_hms(2025, checkin.0, checkin.1, 14, 0, 0)
                .unwrap(),
            checkout: Utc
                .with_ymd_and_hms(2025, checkout.0, checkout.1, 11, 0, 0)
                .unwrap(),
            adults: 2,
            children_6_to_12: 0,
            client_id: None,
            accommodation_id: None,
        }
    }

    #[test]
    fn test_nights_ignores_time_of_day() {
        // 14:00 check-in to 11:00 check-out is still 2 whole nights
        assert_eq!(stay((1, 6), (1, 8)).nights(), 2);
        assert_eq!(stay((1, 6), (1, 7)).nights(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_dates() {
        let same_day = stay((1, 6), (1, 6));
        assert!(matches!(
            same_day.validate(),
            Err(RateError::InvalidDateRange { .. })
        ));

        let reversed = stay((1, 8), (1, 6));
        assert!(matches!(
            reversed.validate(),
            Err(RateError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_counts() {
        let mut s = stay((1, 6), (1, 8));
        s.adults = -1;
        assert_eq!(
            s.validate(),
            Err(RateError::InvalidGuestCount {
                adults: -1,
                children: 0
            })
        );
    }

    #[test]
    fn test_validate_allows_zero_adults() {
        let mut s = stay((1, 6), (1, 8));
        s.adults = 0;
        assert!(s.validate().is_ok());
    }
}
