//! Derived clock times and summary aggregation.
//!
//! Pure functions over the period list: nothing here mutates a schedule,
//! so the presentation layer can call them freely for previews.

use chrono::{Duration, NaiveTime};
use serde::Serialize;

use super::types::{PeriodDefinition, PeriodKind};

/// One period with its derived wall-clock window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimedPeriod {
    pub period: u32,
    pub name: String,
    pub kind: PeriodKind,
    #[serde(with = "super::types::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "super::types::hhmm")]
    pub end: NaiveTime,
}

/// Walk forward from `day_start`, assigning each period a contiguous
/// start/end window: `end[i] = start[i] + duration[i]` and
/// `start[i+1] = end[i]`, with no gaps or overlaps.
///
/// An empty period list produces an empty result. Times wrap at midnight
/// the way `NaiveTime` arithmetic wraps.
pub fn compute_clock_times(day_start: NaiveTime, periods: &[PeriodDefinition]) -> Vec<TimedPeriod> {
    let mut cursor = day_start;
    periods
        .iter()
        .map(|definition| {
            let start = cursor;
            let end = start + Duration::minutes(i64::from(definition.duration_minutes));
            cursor = end;
            TimedPeriod {
                period: definition.period,
                name: definition.name.clone(),
                kind: definition.kind,
                start,
                end,
            }
        })
        .collect()
}

/// Aggregate counts for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub total: usize,
    pub class_periods: usize,
    pub assembly_periods: usize,
    pub break_periods: usize,
    pub total_duration_minutes: u64,
}

/// Totals and per-kind counts over the period list. Infallible.
pub fn summarize(periods: &[PeriodDefinition]) -> ScheduleSummary {
    let mut summary = ScheduleSummary {
        total: 0,
        class_periods: 0,
        assembly_periods: 0,
        break_periods: 0,
        total_duration_minutes: 0,
    };
    for definition in periods {
        summary.total += 1;
        summary.total_duration_minutes += u64::from(definition.duration_minutes);
        match definition.kind {
            PeriodKind::Class => summary.class_periods += 1,
            PeriodKind::Assembly => summary.assembly_periods += 1,
            PeriodKind::Break => summary.break_periods += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(number: u32, duration_minutes: u32, kind: PeriodKind) -> PeriodDefinition {
        PeriodDefinition {
            period: number,
            duration_minutes,
            name: format!("Period {number}"),
            kind,
        }
    }

    fn time(hours: u32, minutes: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hours, minutes, 0).expect("valid test time")
    }

    #[test]
    fn test_clock_times_are_contiguous() {
        let periods = vec![
            period(1, 60, PeriodKind::Assembly),
            period(2, 45, PeriodKind::Class),
            period(3, 45, PeriodKind::Class),
        ];

        let timed = compute_clock_times(time(8, 0), &periods);

        let windows: Vec<(NaiveTime, NaiveTime)> = timed
            .iter()
            .map(|entry| (entry.start, entry.end))
            .collect();
        assert_eq!(
            windows,
            vec![
                (time(8, 0), time(9, 0)),
                (time(9, 0), time(9, 45)),
                (time(9, 45), time(10, 30)),
            ]
        );

        for pair in timed.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_clock_times_empty_input() {
        assert!(compute_clock_times(time(8, 0), &[]).is_empty());
    }

    #[test]
    fn test_clock_times_wrap_past_midnight() {
        let periods = vec![period(1, 90, PeriodKind::Class)];
        let timed = compute_clock_times(time(23, 0), &periods);
        assert_eq!(timed[0].start, time(23, 0));
        assert_eq!(timed[0].end, time(0, 30));
    }

    #[test]
    fn test_summarize_counts_by_kind() {
        let periods = vec![
            period(1, 60, PeriodKind::Assembly),
            period(2, 45, PeriodKind::Class),
            period(3, 30, PeriodKind::Break),
        ];

        let summary = summarize(&periods);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.class_periods, 1);
        assert_eq!(summary.assembly_periods, 1);
        assert_eq!(summary.break_periods, 1);
        assert_eq!(summary.total_duration_minutes, 135);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.total_duration_minutes, 0);
    }
}
