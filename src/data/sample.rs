//! Synthetic daily registration records.
//!
//! Each day gets one overall record (2W/3W/4W split of a random total) followed
//! by one record per manufacturer that received part of the 4W count.

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use crate::data::random::RandomSource;
use crate::domain::{
    DailyOverallRecord, Manufacturer, ManufacturerRecord, ManufacturerTally, RegistrationRecord,
};

pub const MIN_DAILY_TOTAL: u64 = 1000;
pub const MAX_DAILY_TOTAL: u64 = 5000;

const TWO_WHEELER_SHARE: (f64, f64) = (0.60, 0.75);
const THREE_WHEELER_SHARE: (f64, f64) = (0.05, 0.10);

/// Largest single chunk handed out by the random-fill stage.
pub const FOUR_WHEELER_FILL_MAX: u64 = 200;

/// Generate records for every day in `[start, end]`, in date order.
///
/// An empty range (`start > end`) yields no records.
pub fn generate_registrations<R: RandomSource>(
    start: NaiveDate,
    end: NaiveDate,
    rng: &mut R,
) -> Vec<RegistrationRecord> {
    let mut records = Vec::new();
    let mut date = start;
    while date <= end {
        generate_day(date, rng, &mut records);
        match date.checked_add_days(Days::new(1)) {
            Some(next) => date = next,
            None => break,
        }
    }

    debug!(%start, %end, records = records.len(), "generated synthetic registrations");
    records
}

fn generate_day<R: RandomSource>(date: NaiveDate, rng: &mut R, out: &mut Vec<RegistrationRecord>) {
    let overall = split_categories(date, rng);
    let four_wheeler = overall.four_wheeler;
    out.push(RegistrationRecord::Overall(overall));

    let tally = allocate_four_wheelers(four_wheeler, rng);
    for (manufacturer, registrations) in tally.iter() {
        out.push(RegistrationRecord::Manufacturer(ManufacturerRecord {
            date,
            manufacturer,
            registrations,
        }));
    }
}

/// Draw a daily total and split it into vehicle categories.
///
/// `total` stays the original draw; 4W absorbs the rounding of the other two
/// shares, so the three categories always sum to it.
fn split_categories<R: RandomSource>(date: NaiveDate, rng: &mut R) -> DailyOverallRecord {
    let total = rng.int_inclusive(MIN_DAILY_TOTAL, MAX_DAILY_TOTAL);
    let two_share = rng.real(TWO_WHEELER_SHARE.0, TWO_WHEELER_SHARE.1);
    let three_share = rng.real(THREE_WHEELER_SHARE.0, THREE_WHEELER_SHARE.1);

    // `as` truncates toward zero and saturates at 0 for negative inputs.
    let two_wheeler = (total as f64 * two_share).floor() as u64;
    let three_wheeler = (total as f64 * three_share).floor() as u64;
    let four_wheeler = total.saturating_sub(two_wheeler).saturating_sub(three_wheeler);

    DailyOverallRecord {
        date,
        two_wheeler,
        three_wheeler,
        four_wheeler,
        total,
    }
}

/// Partition a day's 4W count across the manufacturer set.
///
/// Base stage: walk manufacturers in fixed order and hand each up to half of
/// an even share. Fill stage: give random chunks of at most
/// `FOUR_WHEELER_FILL_MAX` to randomly chosen manufacturers until nothing is
/// left. A final reconciliation moves any leftover difference onto one
/// touched manufacturer, clamping at zero.
pub(crate) fn allocate_four_wheelers<R: RandomSource>(
    four_wheeler: u64,
    rng: &mut R,
) -> ManufacturerTally {
    let manufacturers = Manufacturer::ALL;
    let mut tally = ManufacturerTally::new();
    let mut remaining = four_wheeler;

    let base_per_manufacturer = remaining / manufacturers.len() as u64 / 2;
    for manufacturer in manufacturers {
        if remaining == 0 {
            break;
        }
        let amount = rng.int_inclusive(0, base_per_manufacturer.min(remaining));
        tally.add(manufacturer, amount);
        remaining -= amount;
    }

    while remaining > 0 {
        let manufacturer = manufacturers[rng.pick(manufacturers.len())];
        let amount = rng.int_inclusive(1, remaining.min(FOUR_WHEELER_FILL_MAX));
        tally.add(manufacturer, amount);
        remaining -= amount;
    }

    reconcile(&mut tally, four_wheeler, rng);
    tally
}

fn reconcile<R: RandomSource>(tally: &mut ManufacturerTally, four_wheeler: u64, rng: &mut R) {
    let assigned = tally.total();
    if assigned == four_wheeler || tally.is_empty() {
        return;
    }

    let diff = four_wheeler as i128 - assigned as i128;
    let Some((manufacturer, count)) = tally.entry(rng.pick(tally.len())) else {
        return;
    };
    let adjusted = (count as i128 + diff).max(0) as u64;
    tally.set(manufacturer, adjusted);

    if tally.total() != four_wheeler {
        warn!(
            four_wheeler,
            assigned = tally.total(),
            %manufacturer,
            "manufacturer split still off after clamping"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Delegates to a seeded RNG and records every range it is asked for.
    struct RecordingSource {
        inner: StdRng,
        int_ranges: Vec<(u64, u64)>,
        pick_lens: Vec<usize>,
    }

    impl RecordingSource {
        fn new(seed: u64) -> Self {
            Self {
                inner: StdRng::seed_from_u64(seed),
                int_ranges: Vec::new(),
                pick_lens: Vec::new(),
            }
        }
    }

    impl RandomSource for RecordingSource {
        fn int_inclusive(&mut self, low: u64, high: u64) -> u64 {
            self.int_ranges.push((low, high));
            self.inner.int_inclusive(low, high)
        }

        fn real(&mut self, low: f64, high: f64) -> f64 {
            self.inner.real(low, high)
        }

        fn pick(&mut self, len: usize) -> usize {
            self.pick_lens.push(len);
            self.inner.pick(len)
        }
    }

    fn three_years(seed: u64) -> Vec<RegistrationRecord> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_registrations(ymd(2021, 6, 15), ymd(2024, 6, 14), &mut rng)
    }

    #[test]
    fn covers_every_day_in_order_with_overall_first() {
        let start = ymd(2023, 12, 30);
        let end = ymd(2024, 3, 2);
        let mut rng = StdRng::seed_from_u64(11);
        let records = generate_registrations(start, end, &mut rng);

        let overall_dates: Vec<NaiveDate> = records
            .iter()
            .filter_map(|r| match r {
                RegistrationRecord::Overall(o) => Some(o.date),
                RegistrationRecord::Manufacturer(_) => None,
            })
            .collect();
        let expected: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();
        assert_eq!(overall_dates, expected);
        assert!(overall_dates.contains(&ymd(2024, 2, 29)));

        // Each day's block starts with its overall record and never goes back in time.
        assert!(matches!(records.first(), Some(RegistrationRecord::Overall(_))));
        let mut current = start;
        for record in &records {
            match record {
                RegistrationRecord::Overall(o) => {
                    assert!(o.date >= current);
                    current = o.date;
                }
                RegistrationRecord::Manufacturer(m) => assert_eq!(m.date, current),
            }
        }
    }

    #[test]
    fn empty_range_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate_registrations(ymd(2024, 1, 2), ymd(2024, 1, 1), &mut rng).is_empty());
    }

    #[test]
    fn categories_sum_to_total_and_total_in_range() {
        for record in three_years(42) {
            if let RegistrationRecord::Overall(o) = record {
                assert!((MIN_DAILY_TOTAL..=MAX_DAILY_TOTAL).contains(&o.total), "{o:?}");
                assert_eq!(o.two_wheeler + o.three_wheeler + o.four_wheeler, o.total, "{o:?}");
            }
        }
    }

    #[test]
    fn category_shares_follow_draw_bounds() {
        for record in three_years(5) {
            if let RegistrationRecord::Overall(o) = record {
                let total = o.total as f64;
                assert!(o.two_wheeler as f64 >= (total * 0.60).floor());
                assert!(o.two_wheeler as f64 <= total * 0.75);
                assert!(o.three_wheeler as f64 >= (total * 0.05).floor());
                assert!(o.three_wheeler as f64 <= total * 0.10);
            }
        }
    }

    #[test]
    fn manufacturer_split_matches_four_wheeler_count() {
        let records = three_years(2024);
        let mut four_wheeler_by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        let mut split_by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();

        for record in &records {
            match record {
                RegistrationRecord::Overall(o) => {
                    four_wheeler_by_day.insert(o.date, o.four_wheeler);
                }
                RegistrationRecord::Manufacturer(m) => {
                    *split_by_day.entry(m.date).or_insert(0) += m.registrations;
                }
            }
        }

        assert_eq!(four_wheeler_by_day.len(), split_by_day.len());
        for (date, four_wheeler) in four_wheeler_by_day {
            assert_eq!(split_by_day.get(&date), Some(&four_wheeler), "mismatch on {date}");
        }
    }

    #[test]
    fn manufacturers_appear_at_most_once_per_day() {
        let records = three_years(8);
        let mut seen: BTreeMap<(NaiveDate, Manufacturer), usize> = BTreeMap::new();
        for record in &records {
            if let RegistrationRecord::Manufacturer(m) = record {
                *seen.entry((m.date, m.manufacturer)).or_insert(0) += 1;
            }
        }
        assert!(seen.values().all(|&n| n == 1));
    }

    #[test]
    fn allocation_handles_small_and_zero_counts() {
        let mut rng = StdRng::seed_from_u64(17);

        let empty = allocate_four_wheelers(0, &mut rng);
        assert!(empty.is_empty());

        for count in [1, 7, 15, 16, 17, 199, 200, 201, 1_000] {
            let tally = allocate_four_wheelers(count, &mut rng);
            assert_eq!(tally.total(), count);
            assert!(tally.len() <= Manufacturer::ALL.len());
        }
    }

    #[test]
    fn base_stage_touches_manufacturers_in_declared_order() {
        // With 4W >= 16 every manufacturer is visited by the base stage before
        // the fill stage can introduce anyone, so insertion order is fixed.
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..50 {
            let tally = allocate_four_wheelers(800, &mut rng);
            let order: Vec<Manufacturer> = tally.iter().map(|(m, _)| m).collect();
            let prefix = &order[..order.len().min(Manufacturer::ALL.len())];
            assert_eq!(prefix, &Manufacturer::ALL[..prefix.len()]);
        }
    }

    #[test]
    fn reconcile_moves_difference_and_clamps_at_zero() {
        let mut rng = StdRng::seed_from_u64(0);

        let mut short = ManufacturerTally::new();
        short.add(Manufacturer::Honda, 10);
        reconcile(&mut short, 25, &mut rng);
        assert_eq!(short.get(Manufacturer::Honda), Some(25));

        let mut over = ManufacturerTally::new();
        over.add(Manufacturer::Kia, 3);
        reconcile(&mut over, 0, &mut rng);
        assert_eq!(over.get(Manufacturer::Kia), Some(0));

        // Clamping can leave the split off when the picked entry is too small.
        let mut lopsided = ManufacturerTally::new();
        lopsided.add(Manufacturer::Toyota, 1);
        lopsided.add(Manufacturer::MgMotor, 50);
        reconcile(&mut lopsided, 10, &mut rng);
        let total = lopsided.total();
        assert!(total == 10 || total == 50, "unexpected total {total}");
    }

    #[test]
    fn base_draws_capped_at_half_an_even_share() {
        for count in [16, 200, 1_000, 3_000] {
            let mut rng = RecordingSource::new(count);
            let tally = allocate_four_wheelers(count, &mut rng);
            assert_eq!(tally.total(), count);

            // The base stage hands out at most half of `count`, so it never
            // runs dry and visits all eight manufacturers.
            let base = count / Manufacturer::ALL.len() as u64 / 2;
            let (base_draws, _) = rng.int_ranges.split_at(Manufacturer::ALL.len());
            assert!(base_draws.iter().all(|&range| range == (0, base)), "{base_draws:?}");
        }
    }

    #[test]
    fn fill_chunks_capped_and_spread_over_all_manufacturers() {
        let mut rng = RecordingSource::new(4);
        allocate_four_wheelers(3_000, &mut rng);

        let fill_draws = &rng.int_ranges[Manufacturer::ALL.len()..];
        assert!(!fill_draws.is_empty());
        for &(low, high) in fill_draws {
            assert_eq!(low, 1);
            assert!(high <= FOUR_WHEELER_FILL_MAX);
        }
        // One manufacturer pick per fill chunk, over the full set; the exact
        // split never triggers a reconciliation pick.
        assert_eq!(rng.pick_lens.len(), fill_draws.len());
        assert!(rng.pick_lens.iter().all(|&len| len == Manufacturer::ALL.len()));
    }

    #[test]
    fn reconcile_picks_only_touched_manufacturers() {
        let mut rng = RecordingSource::new(9);
        let mut tally = ManufacturerTally::new();
        tally.add(Manufacturer::Honda, 10);
        tally.add(Manufacturer::Kia, 5);

        reconcile(&mut tally, 20, &mut rng);

        assert_eq!(rng.pick_lens, vec![2]);
        assert_eq!(tally.len(), 2);
        assert_eq!(tally.total(), 20);
        let honda = tally.get(Manufacturer::Honda);
        let kia = tally.get(Manufacturer::Kia);
        assert!(honda == Some(15) || kia == Some(10), "honda={honda:?} kia={kia:?}");
    }
}
