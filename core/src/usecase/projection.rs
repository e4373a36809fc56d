use chrono::{Datelike, Local, NaiveDate};
use log::debug;

use crate::calendar::{interval_for_frequency, is_leap_year, parse_seed_date};
use crate::error::PaydayError;
use crate::model::frequency::PayFrequency;
use crate::model::report::{ProjectedPayday, YearReport};
use crate::model::salary::SalaryBasis;
use crate::service::earnings::earnings_per_payday;

/// Projects paydays for the current local year.
pub fn project_paydays<S: AsRef<str>>(
    seed_dates: &[S],
    frequency: PayFrequency,
    rate: f64,
    basis: SalaryBasis,
) -> Result<YearReport, PaydayError> {
    let year = Local::now().year();
    project_paydays_for_year(year, seed_dates, frequency, rate, basis)
}

/// Projects paydays forward from each seed date until the cursor leaves
/// `year`. Seeds outside `year` contribute nothing. Any unparseable seed
/// fails the whole projection.
pub fn project_paydays_for_year<S: AsRef<str>>(
    year: i32,
    seed_dates: &[S],
    frequency: PayFrequency,
    rate: f64,
    basis: SalaryBasis,
) -> Result<YearReport, PaydayError> {
    let is_leap = is_leap_year(year);
    let earnings = earnings_per_payday(frequency, rate, basis)?;

    let seeds = seed_dates
        .iter()
        .map(|s| parse_seed_date(s.as_ref()))
        .collect::<Result<Vec<NaiveDate>, _>>()?;

    let mut report = YearReport::new(year, earnings);

    for seed in seeds {
        let interval = interval_for_frequency(frequency, seed, is_leap);
        let mut cursor = seed;
        let mut emitted = 0;

        while cursor.year() == year {
            if report.insert(ProjectedPayday { date: cursor, amount: earnings }) {
                emitted += 1;
            }
            match cursor.checked_add_signed(interval) {
                Some(next) => cursor = next,
                None => break,
            }
        }

        debug!(
            "Seed {} ({} every {} days) produced {} new paydays in {}",
            seed,
            frequency,
            interval.num_days(),
            emitted,
            year
        );
    }

    report.finalize();
    if !report.total.is_finite() {
        return Err(PaydayError::InvalidPayRate(rate));
    }
    Ok(report)
}
