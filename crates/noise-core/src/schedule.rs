//! Operation-time predicates: voluntary curfew and weekend checks.
//!
//! Times are local to the field; converting from UTC is the caller's job.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Voluntary curfew window start (local), inclusive.
pub const CURFEW_START_HOUR: u32 = 21;
/// Curfew window end (local), exclusive.
pub const CURFEW_END_HOUR: u32 = 7;

/// Whether a local hour falls inside the 9 PM - 7 AM voluntary curfew.
pub fn is_curfew_hour(hour: u32) -> bool {
    hour >= CURFEW_START_HOUR || hour < CURFEW_END_HOUR
}

/// Whether a local timestamp falls inside the curfew window.
pub fn in_curfew(local: NaiveDateTime) -> bool {
    is_curfew_hour(local.hour())
}

/// Whether a date is a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curfew_covers_overnight_window() {
        assert!(is_curfew_hour(21));
        assert!(is_curfew_hour(23));
        assert!(is_curfew_hour(0));
        assert!(is_curfew_hour(6));
        assert!(!is_curfew_hour(7));
        assert!(!is_curfew_hour(12));
        assert!(!is_curfew_hour(20));
    }

    #[test]
    fn in_curfew_uses_local_hour() {
        let late = NaiveDate::from_ymd_opt(2025, 7, 4)
            .unwrap()
            .and_hms_opt(22, 15, 0)
            .unwrap();
        assert!(in_curfew(late));

        let midday = NaiveDate::from_ymd_opt(2025, 7, 4)
            .unwrap()
            .and_hms_opt(13, 0, 0)
            .unwrap();
        assert!(!in_curfew(midday));
    }

    #[test]
    fn weekend_detection() {
        // 2025-07-05 is a Saturday
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 7, 5).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 7, 6).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap()));
    }
}
