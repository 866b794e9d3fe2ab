//! Error handling for the rate engine

use chrono::NaiveDate;

/// Rate engine error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateError {
    #[error("check-out {checkout} must be after check-in {checkin}")]
    InvalidDateRange {
        checkin: NaiveDate,
        checkout: NaiveDate,
    },

    #[error("unknown accommodation category '{0}'")]
    UnknownCategory(String),

    #[error("guest counts must be non-negative (adults: {adults}, children: {children})")]
    InvalidGuestCount { adults: i32, children: i32 },
}

pub type Result<T> = std::result::Result<T, RateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_error_display() {
        let err = RateError::InvalidDateRange {
            checkin: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            checkout: NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
        };
        assert!(err.to_string().contains("2025-01-10"));
        assert!(err.to_string().contains("2025-01-08"));

        let err = RateError::UnknownCategory("suite_master".to_string());
        assert!(err.to_string().contains("suite_master"));

        let err = RateError::InvalidGuestCount {
            adults: -1,
            children: 0,
        };
        assert!(err.to_string().contains("-1"));
    }
}
