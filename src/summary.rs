use crate::clock::{local_date, Clock};
use crate::models::{DailySummary, PunchEvent, PunchKind, SummaryResponse};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkState {
    Idle,
    Working,
    Paused,
}

/// Today's events (by the clock's local date), oldest first.
pub fn today(events: &[PunchEvent], clock: &dyn Clock) -> Vec<PunchEvent> {
    events_on(events, clock.today())
}

/// Events whose local calendar date is `date`, oldest first. Ties keep append order.
pub fn events_on(events: &[PunchEvent], date: NaiveDate) -> Vec<PunchEvent> {
    let mut day: Vec<PunchEvent> = events
        .iter()
        .filter(|event| local_date(event.timestamp) == Some(date))
        .cloned()
        .collect();
    day.sort_by_key(|event| event.timestamp);
    day
}

/// Walks a chronological day of punches and sums the closed work and break intervals.
///
/// Time only accrues when an event closes the interval the current state opened:
/// `break_start`/`clock_out` close a working interval, `break_end` closes a break.
/// An interval still open at the end of the list is not counted.
pub fn aggregate(events: &[PunchEvent]) -> DailySummary {
    let mut summary = DailySummary::default();
    let mut state = WorkState::Idle;
    let mut last_time = 0i64;

    for event in events {
        let elapsed = (event.timestamp - last_time).max(0);
        state = match (state, event.kind) {
            (WorkState::Working, PunchKind::BreakStart) => {
                summary.worked_ms += elapsed;
                WorkState::Paused
            }
            (WorkState::Working, PunchKind::ClockOut) => {
                summary.worked_ms += elapsed;
                WorkState::Idle
            }
            (WorkState::Paused, PunchKind::BreakEnd) => {
                summary.break_ms += elapsed;
                WorkState::Working
            }
            (_, PunchKind::ClockIn | PunchKind::BreakEnd) => WorkState::Working,
            (_, PunchKind::BreakStart) => WorkState::Paused,
            (_, PunchKind::ClockOut) => WorkState::Idle,
        };
        last_time = event.timestamp;
    }

    summary.count = events.len();
    summary.last_kind = events.last().map(|event| event.kind);
    summary
}

/// Punches that make sense after `last`, in the order the dashboard offers them.
pub fn next_actions(last: Option<PunchKind>) -> Vec<PunchKind> {
    match last {
        None | Some(PunchKind::ClockOut) => vec![PunchKind::ClockIn],
        Some(PunchKind::ClockIn | PunchKind::BreakEnd) => {
            vec![PunchKind::BreakStart, PunchKind::ClockOut]
        }
        Some(PunchKind::BreakStart) => vec![PunchKind::BreakEnd],
    }
}

/// Renders a duration as `HHh MMm`, e.g. `3_723_000` -> `01h 02m`.
pub fn format_duration(ms: i64) -> String {
    let total_minutes = ms.max(0) / 60_000;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    format!("{hours:02}h {minutes:02}m")
}

pub fn to_response(summary: &DailySummary) -> SummaryResponse {
    SummaryResponse {
        worked_ms: summary.worked_ms,
        break_ms: summary.break_ms,
        worked: format_duration(summary.worked_ms),
        break_time: format_duration(summary.break_ms),
        count: summary.count,
        last_kind: summary.last_kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Local, TimeZone};

    const MINUTE: i64 = 60_000;
    const HOUR: i64 = 60 * MINUTE;

    fn at(day: u32, hour: u32, minute: u32) -> i64 {
        Local
            .with_ymd_and_hms(2026, 1, day, hour, minute, 0)
            .single()
            .unwrap()
            .timestamp_millis()
    }

    fn event(id: &str, timestamp: i64, kind: PunchKind) -> PunchEvent {
        PunchEvent {
            id: id.to_string(),
            timestamp,
            kind,
        }
    }

    #[test]
    fn full_day_with_lunch_break() {
        let events = vec![
            event("1", at(5, 8, 0), PunchKind::ClockIn),
            event("2", at(5, 12, 0), PunchKind::BreakStart),
            event("3", at(5, 13, 5), PunchKind::BreakEnd),
            event("4", at(5, 17, 0), PunchKind::ClockOut),
        ];

        let summary = aggregate(&events);
        assert_eq!(summary.worked_ms, 7 * HOUR + 55 * MINUTE);
        assert_eq!(format_duration(summary.worked_ms), "07h 55m");
        assert_eq!(format_duration(summary.break_ms), "01h 05m");
        assert_eq!(summary.count, 4);
        assert_eq!(summary.last_kind, Some(PunchKind::ClockOut));
    }

    #[test]
    fn empty_day_is_all_zero() {
        let summary = aggregate(&[]);
        assert_eq!(format_duration(summary.worked_ms), "00h 00m");
        assert_eq!(format_duration(summary.break_ms), "00h 00m");
        assert_eq!(summary.count, 0);
        assert_eq!(summary.last_kind, None);
    }

    #[test]
    fn repeated_break_start_counts_once() {
        let events = vec![
            event("1", at(5, 8, 0), PunchKind::ClockIn),
            event("2", at(5, 10, 0), PunchKind::BreakStart),
            event("3", at(5, 10, 30), PunchKind::BreakStart),
            event("4", at(5, 11, 0), PunchKind::BreakEnd),
        ];

        let summary = aggregate(&events);
        assert_eq!(summary.worked_ms, 2 * HOUR);
        // the break is measured from the latest break_start
        assert_eq!(summary.break_ms, 30 * MINUTE);
    }

    #[test]
    fn open_shift_counts_nothing() {
        let events = vec![event("1", at(5, 8, 0), PunchKind::ClockIn)];

        let summary = aggregate(&events);
        assert_eq!(summary.worked_ms, 0);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.last_kind, Some(PunchKind::ClockIn));
    }

    #[test]
    fn stray_events_reset_state_without_accruing() {
        let events = vec![
            event("1", at(5, 7, 0), PunchKind::BreakEnd),
            event("2", at(5, 9, 0), PunchKind::ClockIn),
            event("3", at(5, 10, 0), PunchKind::ClockOut),
            event("4", at(5, 11, 0), PunchKind::ClockOut),
            event("5", at(5, 12, 0), PunchKind::BreakEnd),
        ];

        let summary = aggregate(&events);
        // break_end at 07:00 opens work, clock_in at 09:00 only resets it
        assert_eq!(summary.worked_ms, HOUR);
        assert_eq!(summary.break_ms, 0);
    }

    #[test]
    fn totals_never_negative_for_increasing_timestamps() {
        let kinds = PunchKind::ALL;
        let mut timestamp = at(5, 6, 0);
        let mut events = Vec::new();
        for i in 0..64usize {
            timestamp += ((i * 7919) % 97 + 1) as i64 * MINUTE;
            events.push(event(&i.to_string(), timestamp, kinds[(i * 31 + i / 3) % 4]));
            let summary = aggregate(&events);
            assert!(summary.worked_ms >= 0);
            assert!(summary.break_ms >= 0);
        }
    }

    #[test]
    fn today_filters_and_sorts_stably() {
        let clock = FixedClock::at(2026, 1, 5, 18, 0).unwrap();
        let events = vec![
            event("late", at(5, 17, 0), PunchKind::ClockOut),
            event("yesterday", at(4, 9, 0), PunchKind::ClockIn),
            event("first", at(5, 8, 0), PunchKind::ClockIn),
            event("tie-a", at(5, 12, 0), PunchKind::BreakStart),
            event("tie-b", at(5, 12, 0), PunchKind::BreakEnd),
        ];

        let day = today(&events, &clock);
        let ids: Vec<_> = day.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["first", "tie-a", "tie-b", "late"]);
        assert_eq!(today(&events, &clock), day);
    }

    #[test]
    fn format_pads_and_truncates() {
        assert_eq!(format_duration(0), "00h 00m");
        assert_eq!(format_duration(3_723_000), "01h 02m");
        assert_eq!(format_duration(59_999), "00h 00m");
        assert_eq!(format_duration(101 * HOUR), "101h 00m");
    }

    #[test]
    fn next_actions_follow_last_punch() {
        assert_eq!(next_actions(None), vec![PunchKind::ClockIn]);
        assert_eq!(
            next_actions(Some(PunchKind::ClockIn)),
            vec![PunchKind::BreakStart, PunchKind::ClockOut]
        );
        assert_eq!(next_actions(Some(PunchKind::BreakStart)), vec![PunchKind::BreakEnd]);
        assert_eq!(next_actions(Some(PunchKind::ClockOut)), vec![PunchKind::ClockIn]);
    }
}
