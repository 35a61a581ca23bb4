//! Comparison utilities between times: differences, standards, and personal bests.

use std::{cmp::Ordering, collections::BTreeMap};

use chrono::NaiveDate;

use crate::{event::EventCode, time::Time};

/// Returns the signed difference `a - b`, formatted like `+0.45` or `-1:02.10`.
///
/// An exact tie gives `0.00`, without sign.
pub fn time_difference(a: i64, b: i64) -> String {
    let diff = a.saturating_sub(b);
    match diff.cmp(&0) {
        Ordering::Equal => "0.00".to_owned(),
        Ordering::Greater => format!("+{}", Time(diff)),
        Ordering::Less => format!("-{}", Time(diff.saturating_abs())),
    }
}

/// Returns the difference between `a` and the reference time `b`, in percent of `b`.
///
/// A positive value means `a` is slower than `b`. If `b` is zero, this returns `0`.
pub fn time_difference_percent(a: i64, b: i64) -> f64 {
    if b == 0 {
        return 0.;
    }
    (a as f64 - b as f64) / b as f64 * 100.
}

/// Where a time stands against a qualifying standard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardStatus {
    /// The time is at least as fast as the standard.
    Achieved,
    /// The time is slower, but within the "almost" threshold.
    Almost,
    /// The time is too slow, or there is no time.
    NotYet,
}

/// The result of [`compare_to_standard`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StandardComparison {
    /// The status of the time.
    pub status: StandardStatus,
    /// The formatted difference with the standard, see [`time_difference`].
    pub difference: String,
    /// The difference with the standard in percent, see [`time_difference_percent`].
    pub difference_percent: f64,
}

/// Compares a time with a standard time, both in milliseconds.
///
/// `almost_threshold_pct` is the largest percent gap for which the time is considered
/// [`Almost`](StandardStatus::Almost) achieved.
pub fn compare_to_standard(
    time: i64,
    standard: i64,
    almost_threshold_pct: f64,
) -> StandardComparison {
    let difference = time_difference(time, standard);

    if time <= 0 || standard <= 0 {
        return StandardComparison {
            status: StandardStatus::NotYet,
            difference,
            difference_percent: 0.,
        };
    }

    let difference_percent = time_difference_percent(time, standard);
    let status = if time <= standard {
        StandardStatus::Achieved
    } else if difference_percent <= almost_threshold_pct {
        StandardStatus::Almost
    } else {
        StandardStatus::NotYet
    };

    StandardComparison {
        status,
        difference,
        difference_percent,
    }
}

/// A recorded swim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwimRecord {
    /// The swum event.
    pub event: EventCode,
    /// The time of the swim.
    pub time: Time,
    /// The day of the swim.
    pub date: NaiveDate,
    /// The name of the meet where it was swum.
    pub meet: String,
}

/// Returns the fastest record of each event.
///
/// Records without a positive time are ignored. On a tie, the earliest record wins.
pub fn personal_bests<'a, I>(records: I) -> BTreeMap<EventCode, &'a SwimRecord>
where
    I: IntoIterator<Item = &'a SwimRecord>,
{
    let mut out: BTreeMap<EventCode, &SwimRecord> = BTreeMap::new();

    for record in records.into_iter().filter(|r| r.time.is_set()) {
        out.entry(record.event)
            .and_modify(|best| {
                if (record.time, record.date) < (best.time, best.date) {
                    *best = record;
                }
            })
            .or_insert(record);
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn difference() {
        assert_eq!(time_difference(28_450, 28_450), "0.00");
        assert_eq!(time_difference(28_450, 28_000), "+0.45");
        assert_eq!(time_difference(28_000, 28_450), "-0.45");
        assert_eq!(time_difference(125_000, 60_000), "+1:05.00");
        assert_eq!(time_difference(i64::MIN, i64::MAX), format!("-{}", Time(i64::MAX)));
    }

    #[test]
    fn difference_percent() {
        assert_eq!(time_difference_percent(28_000, 0), 0.);
        assert_eq!(time_difference_percent(30_000, 25_000), 20.);
        assert_eq!(time_difference_percent(25_000, 50_000), -50.);
    }

    #[test]
    fn standard_achieved() {
        let cmp = compare_to_standard(28_000, 28_450, 3.);
        assert_eq!(cmp.status, StandardStatus::Achieved);
        assert_eq!(cmp.difference, "-0.45");
        assert!(cmp.difference_percent < 0.);

        let tie = compare_to_standard(28_450, 28_450, 3.);
        assert_eq!(tie.status, StandardStatus::Achieved);
        assert_eq!(tie.difference, "0.00");
    }

    #[test]
    fn standard_almost_and_not_yet() {
        assert_eq!(
            compare_to_standard(30_600, 30_000, 3.).status,
            StandardStatus::Almost
        );
        assert_eq!(
            compare_to_standard(31_000, 30_000, 3.).status,
            StandardStatus::NotYet
        );
    }

    #[test]
    fn standard_without_times() {
        let cmp = compare_to_standard(28_000, 0, 3.);
        assert_eq!(cmp.status, StandardStatus::NotYet);
        assert_eq!(cmp.difference_percent, 0.);
        assert_eq!(
            compare_to_standard(0, 28_000, 3.).status,
            StandardStatus::NotYet
        );
    }

    fn record(event: EventCode, time: i64, day: u32) -> SwimRecord {
        SwimRecord {
            event,
            time: Time(time),
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            meet: format!("Meet {day}"),
        }
    }

    #[test]
    fn bests_per_event() {
        let records = [
            record(EventCode::Free50, 29_200, 10),
            record(EventCode::Free50, 28_850, 15),
            record(EventCode::Free50, 28_850, 12),
            record(EventCode::Back100, 71_000, 12),
            record(EventCode::Back100, 0, 13),
            record(EventCode::Fly50, 0, 14),
        ];

        let bests = personal_bests(&records);
        assert_eq!(bests.len(), 2);
        assert_eq!(bests[&EventCode::Free50].meet, "Meet 12");
        assert_eq!(bests[&EventCode::Back100].time, Time(71_000));
        assert!(!bests.contains_key(&EventCode::Fly50));
    }
}
