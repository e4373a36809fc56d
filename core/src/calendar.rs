use chrono::{Datelike, Duration, NaiveDate};
use log::debug;

use crate::error::PaydayError;
use crate::model::frequency::PayFrequency;

const US_DATE_FORMAT: &str = "%m/%d/%Y";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Time between `reference` and the next payday.
///
/// Monthly pay uses a fixed 30 days (29 from February in a leap year)
/// rather than calendar-month arithmetic, so monthly paydays drift across
/// months that are not 30 days long.
pub fn interval_for_frequency(frequency: PayFrequency, reference: NaiveDate, is_leap: bool) -> Duration {
    match frequency {
        PayFrequency::Weekly => Duration::weeks(1),
        PayFrequency::BiWeekly => Duration::weeks(2),
        PayFrequency::Monthly => {
            if is_leap && reference.month() == 2 {
                Duration::days(29)
            } else {
                Duration::days(30)
            }
        }
    }
}

/// Parses a seed date after trimming whitespace.
///
/// The format is picked by separator: `/` means MM/DD/YYYY, `-` means
/// YYYY-MM-DD. Anything else is rejected.
pub fn parse_seed_date(input: &str) -> Result<NaiveDate, PaydayError> {
    let input = input.trim();

    let format = if input.contains('/') {
        US_DATE_FORMAT
    } else if input.contains('-') {
        ISO_DATE_FORMAT
    } else {
        return Err(PaydayError::InvalidDateFormat(input.to_string()));
    };

    let date = NaiveDate::parse_from_str(input, format)
        .map_err(|_| PaydayError::InvalidDateFormat(input.to_string()))?;
    debug!("Parsed seed date '{}' as {}", input, date);
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_weekly_intervals() {
        let date = ymd(2024, 5, 10);
        assert_eq!(interval_for_frequency(PayFrequency::Weekly, date, true), Duration::days(7));
        assert_eq!(interval_for_frequency(PayFrequency::BiWeekly, date, false), Duration::days(14));
    }

    #[test]
    fn test_monthly_interval_february() {
        assert_eq!(
            interval_for_frequency(PayFrequency::Monthly, ymd(2024, 2, 1), true),
            Duration::days(29)
        );
        assert_eq!(
            interval_for_frequency(PayFrequency::Monthly, ymd(2023, 2, 1), false),
            Duration::days(30)
        );
    }

    #[test]
    fn test_monthly_interval_ignores_month_length() {
        assert_eq!(
            interval_for_frequency(PayFrequency::Monthly, ymd(2024, 1, 31), true),
            Duration::days(30)
        );
        assert_eq!(
            interval_for_frequency(PayFrequency::Monthly, ymd(2024, 3, 15), true),
            Duration::days(30)
        );
    }

    #[test]
    fn test_parse_seed_date_formats() {
        assert_eq!(parse_seed_date("03/15/2024").unwrap(), ymd(2024, 3, 15));
        assert_eq!(parse_seed_date("2024-03-15").unwrap(), ymd(2024, 3, 15));
        assert_eq!(parse_seed_date("  01/05/2024 \n").unwrap(), ymd(2024, 1, 5));
    }

    #[test]
    fn test_parse_seed_date_invalid() {
        for bad in ["", "20240315", "13/01/2024", "2024-02-30", "15.03.2024", "2024/03/15", "03-15-2024"] {
            assert_eq!(
                parse_seed_date(bad),
                Err(PaydayError::InvalidDateFormat(bad.to_string())),
                "expected '{}' to be rejected",
                bad
            );
        }
    }
}
