//! Calendar buckets.
//!
//! Keys are small typed structs rather than formatted strings. Their derived
//! ordering is `(year, month)` / `(year, quarter)`, i.e. chronological, so
//! a `BTreeMap` keyed by them iterates periods oldest first.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::domain::{DailyOverallRecord, ManufacturerTally, RegistrationRecord};

/// A calendar month, displayed as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Same month one year earlier.
    pub fn previous_year(self) -> Self {
        Self {
            year: self.year - 1,
            month: self.month,
        }
    }

    pub fn quarter(self) -> QuarterKey {
        QuarterKey {
            year: self.year,
            quarter: (self.month - 1) / 3 + 1,
        }
    }

    /// First day of the month, or `None` if the key is not a real month.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A calendar quarter, displayed as `YYYY-Qn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuarterKey {
    pub year: i32,
    pub quarter: u32,
}

impl fmt::Display for QuarterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{}", self.year, self.quarter)
    }
}

/// Summed vehicle-category counts for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    pub two_wheeler: u64,
    pub three_wheeler: u64,
    pub four_wheeler: u64,
    pub total: u64,
}

impl CategoryTotals {
    pub fn add(&mut self, record: &DailyOverallRecord) {
        self.two_wheeler += record.two_wheeler;
        self.three_wheeler += record.three_wheeler;
        self.four_wheeler += record.four_wheeler;
        self.total += record.total;
    }
}

/// Every record folded into its month and quarter.
#[derive(Debug, Clone, Default)]
pub struct PeriodBuckets {
    pub overall_by_month: BTreeMap<MonthKey, CategoryTotals>,
    pub overall_by_quarter: BTreeMap<QuarterKey, CategoryTotals>,
    pub manufacturers_by_month: BTreeMap<MonthKey, ManufacturerTally>,
    pub manufacturers_by_quarter: BTreeMap<QuarterKey, ManufacturerTally>,
}

impl PeriodBuckets {
    pub fn from_records(records: &[RegistrationRecord]) -> Self {
        let mut buckets = Self::default();
        for record in records {
            buckets.add(record);
        }
        buckets
    }

    pub fn add(&mut self, record: &RegistrationRecord) {
        let month = MonthKey::from_date(record.date());
        let quarter = month.quarter();

        match record {
            RegistrationRecord::Overall(r) => {
                self.overall_by_month.entry(month).or_default().add(r);
                self.overall_by_quarter.entry(quarter).or_default().add(r);
            }
            RegistrationRecord::Manufacturer(r) => {
                self.manufacturers_by_month
                    .entry(month)
                    .or_default()
                    .add(r.manufacturer, r.registrations);
                self.manufacturers_by_quarter
                    .entry(quarter)
                    .or_default()
                    .add(r.manufacturer, r.registrations);
            }
        }
    }

    /// The overall-series quarter immediately before `quarter`, if any.
    ///
    /// "Before" means the previous key present in the data, not the previous
    /// calendar quarter; gaps are skipped.
    pub fn previous_quarter(&self, quarter: QuarterKey) -> Option<QuarterKey> {
        self.overall_by_quarter
            .range(..quarter)
            .next_back()
            .map(|(key, _)| *key)
    }
}
