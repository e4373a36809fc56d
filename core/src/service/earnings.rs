use crate::error::PaydayError;
use crate::model::frequency::PayFrequency;
use crate::model::salary::SalaryBasis;

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const HOURS_PER_WEEK: f64 = 40.0;

/// Amount paid on each payday.
///
/// Hourly rates assume a 40 hour week; a month is 52/12 weeks. Fixed rates
/// are an annual salary split evenly across the pay periods of the year.
pub fn earnings_per_payday(
    frequency: PayFrequency,
    rate: f64,
    basis: SalaryBasis,
) -> Result<f64, PaydayError> {
    validate_rate(rate)?;

    let amount = match basis {
        SalaryBasis::Hourly => rate * HOURS_PER_WEEK * weeks_per_payday(frequency),
        SalaryBasis::Fixed => rate / frequency.periods_per_year() as f64,
    };
    if !amount.is_finite() {
        return Err(PaydayError::InvalidPayRate(rate));
    }
    Ok(amount)
}

/// Per-payday earnings scaled to a full year of pay periods.
pub fn annual_equivalent(
    frequency: PayFrequency,
    rate: f64,
    basis: SalaryBasis,
) -> Result<f64, PaydayError> {
    let per_payday = earnings_per_payday(frequency, rate, basis)?;
    let annual = per_payday * frequency.periods_per_year() as f64;
    if !annual.is_finite() {
        return Err(PaydayError::InvalidPayRate(rate));
    }
    Ok(annual)
}

fn validate_rate(rate: f64) -> Result<(), PaydayError> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(())
    } else {
        Err(PaydayError::InvalidPayRate(rate))
    }
}

fn weeks_per_payday(frequency: PayFrequency) -> f64 {
    match frequency {
        PayFrequency::Weekly => 1.0,
        PayFrequency::BiWeekly => 2.0,
        PayFrequency::Monthly => WEEKS_PER_YEAR / MONTHS_PER_YEAR,
    }
}
