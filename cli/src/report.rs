use chrono::NaiveDate;
use payday_core::{MonthBucket, PayFrequency, SalaryBasis, YearReport};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Paydays")]
    paydays: String,
    #[tabled(rename = "Earnings ($)")]
    earnings: String,
}

impl MonthRow {
    fn from_bucket(year: i32, bucket: &MonthBucket) -> Self {
        let month = NaiveDate::from_ymd_opt(year, bucket.month, 1)
            .map(|d| d.format("%b").to_string())
            .unwrap_or_else(|| bucket.month.to_string());

        let paydays = bucket
            .paydays
            .iter()
            .map(|p| format!("{} (${:.2})", p.date.format("%d"), p.amount))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            month,
            paydays,
            earnings: format!("{:.2}", bucket.subtotal()),
        }
    }
}

pub fn render_report(report: &YearReport) -> String {
    let mut out = String::new();

    if report.is_empty() {
        out.push_str(&format!("No paydays remaining in {}.\n", report.year));
    } else {
        let rows: Vec<MonthRow> = report
            .non_empty_months()
            .map(|bucket| MonthRow::from_bucket(report.year, bucket))
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::modern())
            .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

        out.push_str(&table.to_string());
        out.push('\n');
    }

    out.push_str(&format!("Year-End Total Earnings: ${:.2}", report.total));
    out
}

pub fn render_earnings(frequency: PayFrequency, basis: SalaryBasis, per_payday: f64, annual: f64) -> String {
    format!(
        "Earnings per payday: ${:.2} ({}, {})\nAnnual equivalent:   ${:.2}",
        per_payday, basis, frequency, annual
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use payday_core::project_paydays_for_year;

    #[test]
    fn test_render_lists_only_months_with_paydays() {
        let report = project_paydays_for_year(
            2023,
            &["11/24/2023"],
            PayFrequency::BiWeekly,
            20.0,
            SalaryBasis::Hourly,
        )
        .unwrap();

        let out = render_report(&report);
        assert!(out.contains("Nov"));
        assert!(out.contains("24 ($1600.00)"));
        assert!(out.contains("Dec"));
        assert!(out.contains("08 ($1600.00), 22 ($1600.00)"));
        assert!(out.contains("3200.00"));
        assert!(!out.contains("Oct"));
        assert!(out.ends_with("Year-End Total Earnings: $4800.00"));
    }

    #[test]
    fn test_render_empty_report() {
        let seeds: [&str; 0] = [];
        let report =
            project_paydays_for_year(2024, &seeds, PayFrequency::Weekly, 20.0, SalaryBasis::Hourly).unwrap();

        let out = render_report(&report);
        assert_eq!(out, "No paydays remaining in 2024.\nYear-End Total Earnings: $0.00");
    }

    #[test]
    fn test_render_earnings() {
        let out = render_earnings(PayFrequency::Monthly, SalaryBasis::Hourly, 3466.6666, 41600.0);
        assert!(out.contains("$3466.67 (hourly, monthly)"));
        assert!(out.contains("$41600.00"));
    }
}
