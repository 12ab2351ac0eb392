//! Shared domain types.
//!
//! Records are produced by the generator and consumed by the aggregator; the
//! growth rows and `RegistrationReport` are the serialized output. Field names
//! in the JSON are fixed by the dashboard that reads them.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Four-wheeler manufacturers that receive a share of each day's 4W count.
///
/// The declaration order is the base-stage iteration order of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Manufacturer {
    MarutiSuzuki,
    Hyundai,
    TataMotors,
    Mahindra,
    Honda,
    Toyota,
    Kia,
    MgMotor,
}

impl Manufacturer {
    pub const ALL: [Manufacturer; 8] = [
        Manufacturer::MarutiSuzuki,
        Manufacturer::Hyundai,
        Manufacturer::TataMotors,
        Manufacturer::Mahindra,
        Manufacturer::Honda,
        Manufacturer::Toyota,
        Manufacturer::Kia,
        Manufacturer::MgMotor,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Manufacturer::MarutiSuzuki => "Maruti Suzuki",
            Manufacturer::Hyundai => "Hyundai",
            Manufacturer::TataMotors => "Tata Motors",
            Manufacturer::Mahindra => "Mahindra",
            Manufacturer::Honda => "Honda",
            Manufacturer::Toyota => "Toyota",
            Manufacturer::Kia => "Kia",
            Manufacturer::MgMotor => "MG Motor",
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for Manufacturer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

/// Per-day vehicle category split.
///
/// `two_wheeler + three_wheeler + four_wheeler == total` for every generated day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyOverallRecord {
    pub date: NaiveDate,
    pub two_wheeler: u64,
    pub three_wheeler: u64,
    pub four_wheeler: u64,
    pub total: u64,
}

/// One manufacturer's share of a day's four-wheeler registrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManufacturerRecord {
    pub date: NaiveDate,
    pub manufacturer: Manufacturer,
    pub registrations: u64,
}

/// Per-manufacturer counts kept in first-insertion order.
///
/// Used both for a single day's 4W split and for monthly/quarterly sums.
/// A manufacturer appears once it has been added to, even with 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManufacturerTally {
    entries: Vec<(Manufacturer, u64)>,
}

impl ManufacturerTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-add.
    pub fn add(&mut self, manufacturer: Manufacturer, amount: u64) {
        match self.entries.iter_mut().find(|(m, _)| *m == manufacturer) {
            Some((_, count)) => *count += amount,
            None => self.entries.push((manufacturer, amount)),
        }
    }

    /// Overwrite the count of a manufacturer already present; no-op otherwise.
    pub fn set(&mut self, manufacturer: Manufacturer, amount: u64) {
        if let Some((_, count)) = self.entries.iter_mut().find(|(m, _)| *m == manufacturer) {
            *count = amount;
        }
    }

    pub fn get(&self, manufacturer: Manufacturer) -> Option<u64> {
        self.entries
            .iter()
            .find(|(m, _)| *m == manufacturer)
            .map(|(_, count)| *count)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` in insertion order.
    pub fn entry(&self, index: usize) -> Option<(Manufacturer, u64)> {
        self.entries.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Manufacturer, u64)> + '_ {
        self.entries.iter().copied()
    }
}

/// A generated record, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationRecord {
    Overall(DailyOverallRecord),
    Manufacturer(ManufacturerRecord),
}

impl RegistrationRecord {
    pub fn date(&self) -> NaiveDate {
        match self {
            RegistrationRecord::Overall(r) => r.date,
            RegistrationRecord::Manufacturer(r) => r.date,
        }
    }
}

/// Monthly vehicle-category totals with growth figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleTypeGrowth {
    /// First day of the month.
    pub date: NaiveDate,
    #[serde(rename = "2W")]
    pub two_wheeler: u64,
    #[serde(rename = "3W")]
    pub three_wheeler: u64,
    #[serde(rename = "4W")]
    pub four_wheeler: u64,
    pub total: u64,
    pub yoy_growth: f64,
    pub qoq_growth: f64,
}

/// Monthly registrations for one manufacturer with growth figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManufacturerGrowth {
    /// First day of the month.
    pub date: NaiveDate,
    pub manufacturer: Manufacturer,
    pub registrations: u64,
    pub yoy_growth: f64,
    pub qoq_growth: f64,
}

/// The JSON document emitted by a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReport {
    pub vehicle_type_data: Vec<VehicleTypeGrowth>,
    pub manufacturer_data: Vec<ManufacturerGrowth>,
    pub total_registrations: u64,
    #[serde(rename = "totalYoYGrowth")]
    pub total_yoy_growth: f64,
    #[serde(rename = "totalQoQGrowth")]
    pub total_qoq_growth: f64,
}

/// A run's configuration as understood by the pipeline.
///
/// Derived from CLI flags, the environment and the local clock.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Last generated day (inclusive).
    pub end_date: NaiveDate,
    /// Window length in 365-day years; the first day is `end_date - years * 365`.
    pub years: u32,
    /// Generator seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub pretty: bool,
    pub output: Option<PathBuf>,
}

impl ReportConfig {
    /// Number of years covered by a default run.
    pub const DEFAULT_YEARS: u32 = 3;

    pub fn start_date(&self) -> NaiveDate {
        let days = i64::from(self.years) * 365;
        self.end_date
            .checked_sub_signed(chrono::Duration::days(days))
            .unwrap_or(NaiveDate::MIN)
    }
}
