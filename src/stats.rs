use crate::models::{DailyPoint, PunchEvent, StatsResponse, WeeklyPoint};
use crate::summary::{aggregate, events_on, format_duration};
use chrono::{Datelike, Duration, NaiveDate};

pub fn build_stats_at(today: NaiveDate, events: &[PunchEvent]) -> StatsResponse {
    const WEEK_COUNT: usize = 8;

    let mut last_7_days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let summary = aggregate(&events_on(events, date));
        last_7_days.push(DailyPoint {
            date: date.to_string(),
            worked_ms: summary.worked_ms,
            break_ms: summary.break_ms,
            worked: format_duration(summary.worked_ms),
            count: summary.count,
        });
    }

    let current_week_start = week_start(today);
    let mut weekly_totals = Vec::with_capacity(WEEK_COUNT);

    for offset in (0..WEEK_COUNT).rev() {
        let start = current_week_start - Duration::weeks(offset as i64);
        let end = start + Duration::days(6);

        let mut worked_ms = 0i64;
        let mut break_ms = 0i64;
        let mut days_worked = 0u8;
        for day_offset in 0..7 {
            let date = start + Duration::days(day_offset);
            if date > today {
                break;
            }
            let summary = aggregate(&events_on(events, date));
            worked_ms = worked_ms.saturating_add(summary.worked_ms);
            break_ms = break_ms.saturating_add(summary.break_ms);
            if summary.worked_ms > 0 {
                days_worked += 1;
            }
        }

        weekly_totals.push(WeeklyPoint {
            week: week_label(start),
            start_date: start.to_string(),
            end_date: end.to_string(),
            worked_ms,
            break_ms,
            worked: format_duration(worked_ms),
            days_worked,
        });
    }

    StatsResponse {
        last_7_days,
        weekly_totals,
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PunchKind;
    use chrono::{Local, TimeZone};

    fn punch(date: NaiveDate, hour: u32, kind: PunchKind) -> PunchEvent {
        let timestamp = Local
            .from_local_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
            .single()
            .unwrap()
            .timestamp_millis();
        PunchEvent {
            id: format!("{date}-{hour}"),
            timestamp,
            kind,
        }
    }

    #[test]
    fn stats_last_7_days_includes_each_day() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let two_days_ago = today - Duration::days(2);
        let events = vec![
            punch(two_days_ago, 9, PunchKind::ClockIn),
            punch(two_days_ago, 12, PunchKind::ClockOut),
        ];

        let stats = build_stats_at(today, &events);
        assert_eq!(stats.last_7_days.len(), 7);
        let point = stats
            .last_7_days
            .iter()
            .find(|day| day.date == two_days_ago.to_string())
            .expect("missing day");
        assert_eq!(point.worked, "03h 00m");
        assert_eq!(point.count, 2);
    }

    #[test]
    fn stats_weekly_totals_sum_days() {
        // Monday 2026-01-05 and Tuesday 2026-01-06 share ISO week 2
        let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let tuesday = monday + Duration::days(1);
        let events = vec![
            punch(monday, 8, PunchKind::ClockIn),
            punch(monday, 10, PunchKind::ClockOut),
            punch(tuesday, 8, PunchKind::ClockIn),
            punch(tuesday, 9, PunchKind::BreakStart),
            punch(tuesday, 10, PunchKind::BreakEnd),
            punch(tuesday, 13, PunchKind::ClockOut),
        ];

        let stats = build_stats_at(tuesday, &events);
        assert_eq!(stats.weekly_totals.len(), 8);
        let current = stats.weekly_totals.last().unwrap();
        assert_eq!(current.week, "2026-W02");
        assert_eq!(current.worked, "06h 00m");
        assert_eq!(current.break_ms, 3_600_000);
        assert_eq!(current.days_worked, 2);
    }
}
