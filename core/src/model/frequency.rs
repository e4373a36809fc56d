use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaydayError;
use crate::input::expand_key;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum PayFrequency {
    Weekly,
    BiWeekly,
    Monthly,
}

impl Default for PayFrequency {
    fn default() -> Self {
        PayFrequency::BiWeekly
    }
}

const FREQUENCY_KEYS: [&str; 3] = ["weekly", "biweekly", "monthly"];

impl PayFrequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            PayFrequency::Weekly => 52,
            PayFrequency::BiWeekly => 26,
            PayFrequency::Monthly => 12,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::BiWeekly => "bi-weekly",
            PayFrequency::Monthly => "monthly",
        }
    }
}

impl FromStr for PayFrequency {
    type Err = PaydayError;

    /// Accepts the names, the menu digits 1-3, and unambiguous prefixes.
    /// Separators are ignored so "bi-weekly" and "biweekly" are the same.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        let key = match normalized.as_str() {
            "1" => "weekly",
            "2" => "biweekly",
            "3" => "monthly",
            other => expand_key(other, &FREQUENCY_KEYS)
                .map_err(|_| PaydayError::InvalidFrequency(s.trim().to_string()))?,
        };

        match key {
            "weekly" => Ok(PayFrequency::Weekly),
            "biweekly" => Ok(PayFrequency::BiWeekly),
            _ => Ok(PayFrequency::Monthly),
        }
    }
}

impl TryFrom<String> for PayFrequency {
    type Error = PaydayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayFrequency> for String {
    fn from(value: PayFrequency) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("weekly".parse::<PayFrequency>().unwrap(), PayFrequency::Weekly);
        assert_eq!("Bi-Weekly".parse::<PayFrequency>().unwrap(), PayFrequency::BiWeekly);
        assert_eq!("biweekly".parse::<PayFrequency>().unwrap(), PayFrequency::BiWeekly);
        assert_eq!(" monthly ".parse::<PayFrequency>().unwrap(), PayFrequency::Monthly);
        assert_eq!("2".parse::<PayFrequency>().unwrap(), PayFrequency::BiWeekly);
        assert_eq!("m".parse::<PayFrequency>().unwrap(), PayFrequency::Monthly);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "quarterly".parse::<PayFrequency>(),
            Err(PaydayError::InvalidFrequency("quarterly".to_string()))
        );
        assert!("4".parse::<PayFrequency>().is_err());
        assert!("".parse::<PayFrequency>().is_err());
    }

    #[test]
    fn test_periods_per_year() {
        assert_eq!(PayFrequency::Weekly.periods_per_year(), 52);
        assert_eq!(PayFrequency::BiWeekly.periods_per_year(), 26);
        assert_eq!(PayFrequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&PayFrequency::BiWeekly).unwrap();
        assert_eq!(json, "\"bi-weekly\"");
        let parsed: PayFrequency = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(parsed, PayFrequency::Weekly);
        assert!(serde_json::from_str::<PayFrequency>("\"quarterly\"").is_err());
    }
}
