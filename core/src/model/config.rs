use serde::{Deserialize, Serialize};

use crate::model::frequency::PayFrequency;
use crate::model::salary::SalaryBasis;

/// User defaults. Every field is optional so a file may set only some of them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PaydayConfig {
    pub salary_basis: Option<SalaryBasis>,
    pub pay_rate: Option<f64>,
    pub frequency: Option<PayFrequency>,
}

impl PaydayConfig {
    /// Layers `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: PaydayConfig) -> PaydayConfig {
        PaydayConfig {
            salary_basis: overrides.salary_basis.or(self.salary_basis),
            pay_rate: overrides.pay_rate.or(self.pay_rate),
            frequency: overrides.frequency.or(self.frequency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_overrides() {
        let file = PaydayConfig {
            salary_basis: Some(SalaryBasis::Hourly),
            pay_rate: Some(20.0),
            frequency: Some(PayFrequency::Weekly),
        };
        let cli = PaydayConfig {
            pay_rate: Some(25.0),
            ..Default::default()
        };

        let merged = file.merge(cli);
        assert_eq!(merged.salary_basis, Some(SalaryBasis::Hourly));
        assert_eq!(merged.pay_rate, Some(25.0));
        assert_eq!(merged.frequency, Some(PayFrequency::Weekly));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: PaydayConfig = serde_json::from_str(r#"{ "frequency": "monthly" }"#).unwrap();
        assert_eq!(config.frequency, Some(PayFrequency::Monthly));
        assert_eq!(config.salary_basis, None);
        assert_eq!(config.pay_rate, None);
    }

    #[test]
    fn test_deserialize_rejects_bad_values() {
        assert!(serde_json::from_str::<PaydayConfig>(r#"{ "salary_basis": "contract" }"#).is_err());
        assert!(serde_json::from_str::<PaydayConfig>(r#"{ "rate": 10 }"#).is_err());
    }
}
