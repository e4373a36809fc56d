pub mod calendar;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use calendar::{interval_for_frequency, is_leap_year, parse_seed_date};
pub use error::PaydayError;
pub use input::expand_key;
pub use model::config::PaydayConfig;
pub use model::frequency::PayFrequency;
pub use model::report::{MonthBucket, ProjectedPayday, YearReport};
pub use model::salary::SalaryBasis;
pub use repository::{ConfigRepository, FileConfigRepository};
pub use service::earnings::{annual_equivalent, earnings_per_payday};
pub use usecase::projection::{project_paydays, project_paydays_for_year};
