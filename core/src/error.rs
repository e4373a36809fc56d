use thiserror::Error;

/// Failures of the projection core. All of them abort the run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PaydayError {
    #[error("Invalid pay frequency '{0}'. Choose 'weekly', 'bi-weekly', or 'monthly'.")]
    InvalidFrequency(String),

    #[error("Invalid salary basis '{0}'. Choose 'hourly' or 'salary'.")]
    InvalidSalaryBasis(String),

    #[error("Invalid date '{0}'. Use MM/DD/YYYY or YYYY-MM-DD.")]
    InvalidDateFormat(String),

    #[error("Invalid pay rate {0}. The rate must be a non-negative number.")]
    InvalidPayRate(f64),
}
