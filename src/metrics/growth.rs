//! Year-over-year and quarter-over-quarter growth.
//!
//! YoY compares a month with the same month one year earlier. QoQ compares
//! the month's quarter with the preceding quarter present in the overall
//! series, and every month of a quarter reports the same QoQ figure. Both are
//! percentages and fall back to `0.0` when there is no positive baseline.

use tracing::debug;

use crate::domain::{ManufacturerGrowth, RegistrationRecord, RegistrationReport, VehicleTypeGrowth};
use crate::error::{AppError, EXIT_FAILURE};
use crate::metrics::buckets::{MonthKey, PeriodBuckets};

/// Percentage change from `prior` to `current`; `0.0` without a positive baseline.
pub fn growth_pct(current: u64, prior: Option<u64>) -> f64 {
    match prior {
        Some(prior) if prior > 0 => ((current as f64 - prior as f64) / prior as f64) * 100.0,
        _ => 0.0,
    }
}

/// Aggregate daily records into the monthly growth report.
pub fn compute_growth(records: &[RegistrationRecord]) -> Result<RegistrationReport, AppError> {
    let buckets = PeriodBuckets::from_records(records);
    debug!(
        records = records.len(),
        months = buckets.overall_by_month.len(),
        quarters = buckets.overall_by_quarter.len(),
        "bucketed registrations"
    );

    let vehicle_type_data = vehicle_type_series(&buckets)?;
    let manufacturer_data = manufacturer_series(&buckets)?;

    let (total_registrations, total_yoy_growth, total_qoq_growth) = match vehicle_type_data.last() {
        Some(latest) => (latest.total, latest.yoy_growth, latest.qoq_growth),
        None => (0, 0.0, 0.0),
    };

    Ok(RegistrationReport {
        vehicle_type_data,
        manufacturer_data,
        total_registrations,
        total_yoy_growth,
        total_qoq_growth,
    })
}

fn vehicle_type_series(buckets: &PeriodBuckets) -> Result<Vec<VehicleTypeGrowth>, AppError> {
    let mut out = Vec::with_capacity(buckets.overall_by_month.len());

    for (&month, totals) in &buckets.overall_by_month {
        let prior_year = buckets
            .overall_by_month
            .get(&month.previous_year())
            .map(|t| t.total);
        let yoy_growth = growth_pct(totals.total, prior_year);

        let quarter = month.quarter();
        let current_quarter = buckets.overall_by_quarter.get(&quarter).map(|t| t.total);
        let prior_quarter = buckets
            .previous_quarter(quarter)
            .and_then(|prev| buckets.overall_by_quarter.get(&prev))
            .map(|t| t.total);
        let qoq_growth = match current_quarter {
            Some(current) => growth_pct(current, prior_quarter),
            None => 0.0,
        };

        out.push(VehicleTypeGrowth {
            date: month_start(month)?,
            two_wheeler: totals.two_wheeler,
            three_wheeler: totals.three_wheeler,
            four_wheeler: totals.four_wheeler,
            total: totals.total,
            yoy_growth,
            qoq_growth,
        });
    }

    Ok(out)
}

/// One row per (month, manufacturer), months taken from the overall series.
fn manufacturer_series(buckets: &PeriodBuckets) -> Result<Vec<ManufacturerGrowth>, AppError> {
    let mut out = Vec::new();

    for &month in buckets.overall_by_month.keys() {
        let Some(tally) = buckets.manufacturers_by_month.get(&month) else {
            continue;
        };
        let date = month_start(month)?;
        let prior_year = buckets.manufacturers_by_month.get(&month.previous_year());

        let quarter = month.quarter();
        let current_quarter = buckets.manufacturers_by_quarter.get(&quarter);
        let prior_quarter = buckets
            .previous_quarter(quarter)
            .and_then(|prev| buckets.manufacturers_by_quarter.get(&prev));

        for (manufacturer, registrations) in tally.iter() {
            let yoy_growth = growth_pct(
                registrations,
                prior_year.and_then(|t| t.get(manufacturer)),
            );
            let qoq_growth = growth_pct(
                current_quarter
                    .and_then(|t| t.get(manufacturer))
                    .unwrap_or_default(),
                prior_quarter.and_then(|t| t.get(manufacturer)),
            );

            out.push(ManufacturerGrowth {
                date,
                manufacturer,
                registrations,
                yoy_growth,
                qoq_growth,
            });
        }
    }

    Ok(out)
}

fn month_start(month: MonthKey) -> Result<chrono::NaiveDate, AppError> {
    month
        .first_day()
        .ok_or_else(|| AppError::new(EXIT_FAILURE, format!("Invalid month bucket {month}.")))
}
