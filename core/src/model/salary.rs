use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaydayError;
use crate::input::expand_key;

/// How the pay rate is read: an hourly wage or a fixed annual salary.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum SalaryBasis {
    Hourly,
    Fixed,
}

const BASIS_KEYS: [&str; 4] = ["hourly", "salary", "fixed", "annual"];

impl SalaryBasis {
    pub fn as_str(self) -> &'static str {
        match self {
            SalaryBasis::Hourly => "hourly",
            SalaryBasis::Fixed => "salary",
        }
    }
}

impl FromStr for SalaryBasis {
    type Err = PaydayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let key = expand_key(&normalized, &BASIS_KEYS)
            .map_err(|_| PaydayError::InvalidSalaryBasis(s.trim().to_string()))?;

        match key {
            "hourly" => Ok(SalaryBasis::Hourly),
            _ => Ok(SalaryBasis::Fixed),
        }
    }
}

impl TryFrom<String> for SalaryBasis {
    type Error = PaydayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SalaryBasis> for String {
    fn from(value: SalaryBasis) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SalaryBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
