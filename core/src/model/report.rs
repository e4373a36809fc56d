use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPayday {
    pub date: NaiveDate,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    pub month: u32,
    pub paydays: Vec<ProjectedPayday>,
}

impl MonthBucket {
    pub fn new(month: u32) -> Self {
        Self {
            month,
            paydays: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paydays.is_empty()
    }

    pub fn subtotal(&self) -> f64 {
        self.paydays.iter().map(|p| p.amount).sum()
    }
}

/// Paydays of one calendar year bucketed by month, January first.
#[derive(Debug, Clone, PartialEq)]
pub struct YearReport {
    pub year: i32,
    pub earnings_per_payday: f64,
    pub months: Vec<MonthBucket>,
    pub total: f64,
}

impl YearReport {
    pub fn new(year: i32, earnings_per_payday: f64) -> Self {
        Self {
            year,
            earnings_per_payday,
            months: (1..=12).map(MonthBucket::new).collect(),
            total: 0.0,
        }
    }

    /// Files a payday under its month. Returns false when the date is
    /// outside this year or already present.
    pub fn insert(&mut self, payday: ProjectedPayday) -> bool {
        if payday.date.year() != self.year {
            return false;
        }
        let bucket = &mut self.months[payday.date.month0() as usize];
        if bucket.paydays.iter().any(|p| p.date == payday.date) {
            return false;
        }
        bucket.paydays.push(payday);
        true
    }

    /// Sorts every bucket by date and recomputes the year total.
    pub fn finalize(&mut self) {
        for bucket in &mut self.months {
            bucket.paydays.sort_by_key(|p| p.date);
        }
        self.total = self.months.iter().map(MonthBucket::subtotal).sum();
    }

    pub fn paydays(&self) -> impl Iterator<Item = &ProjectedPayday> {
        self.months.iter().flat_map(|m| m.paydays.iter())
    }

    pub fn payday_count(&self) -> usize {
        self.months.iter().map(|m| m.paydays.len()).sum()
    }

    pub fn non_empty_months(&self) -> impl Iterator<Item = &MonthBucket> {
        self.months.iter().filter(|m| !m.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.payday_count() == 0
    }
}
