use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};

use crate::domain::value_objects::busy_times::{
    BusyTimeCell, BusyTimeReport, BusyWindow, StatusEvent,
};

/// Fewer recent events than this and no report is produced.
pub const MINIMUM_EVENTS: usize = 30;
pub const LOOKBACK_DAYS: i64 = 30;

const FIRST_WINDOW_HOUR: u8 = 6;
const LAST_WINDOW_HOUR: u8 = 20;
const WINDOW_HOURS: u8 = 2;
const TOP_WINDOW_COUNT: usize = 3;

/// Builds the weekly heatmap and the busiest two-hour windows from the status
/// history of one range.
///
/// Only events in the `LOOKBACK_DAYS` before `now` count. Buckets use the
/// weekday and hour of each event in `now`'s time zone, with day 0 = Sunday.
/// Windows are averaged over the hourly averages that have data, and ties keep
/// day-then-hour order.
pub fn analyze_busy_times<Tz: TimeZone>(
    events: &[StatusEvent],
    now: DateTime<Tz>,
) -> BusyTimeReport {
    let zone = now.timezone();
    let now = now.with_timezone(&Utc);
    let window_start = now - Duration::days(LOOKBACK_DAYS);

    let recent: Vec<&StatusEvent> = events
        .iter()
        .filter(|event| event.created_at >= window_start && event.created_at <= now)
        .collect();

    if recent.len() < MINIMUM_EVENTS {
        return BusyTimeReport::not_enough_data();
    }

    let mut buckets: BTreeMap<(u8, u8), (u32, u32)> = BTreeMap::new();
    for event in recent {
        let local = event.created_at.with_timezone(&zone);
        let key = (
            local.weekday().num_days_from_sunday() as u8,
            local.hour() as u8,
        );
        let (sum, count) = buckets.entry(key).or_insert((0, 0));
        *sum += u32::from(event.status.intensity());
        *count += 1;
    }

    let averages: BTreeMap<(u8, u8), f64> = buckets
        .into_iter()
        .map(|(key, (sum, count))| (key, f64::from(sum) / f64::from(count)))
        .collect();

    let grid = averages
        .iter()
        .map(|(&(day_of_week, hour), &average_intensity)| BusyTimeCell {
            day_of_week,
            hour,
            average_intensity,
        })
        .collect();

    let mut windows: Vec<(u8, u8, f64)> = Vec::new();
    for day in 0..7u8 {
        for start_hour in FIRST_WINDOW_HOUR..=LAST_WINDOW_HOUR {
            let scores: Vec<f64> = (start_hour..start_hour + WINDOW_HOURS)
                .filter_map(|hour| averages.get(&(day, hour)).copied())
                .collect();

            if scores.is_empty() {
                continue;
            }

            let average = scores.iter().sum::<f64>() / scores.len() as f64;
            windows.push((day, start_hour, average));
        }
    }

    // stable: equal scores stay in day/hour order
    windows.sort_by(|a, b| b.2.total_cmp(&a.2));

    let top_windows = windows
        .into_iter()
        .take(TOP_WINDOW_COUNT)
        .map(|(day, start_hour, average)| BusyWindow::new(day, start_hour, average))
        .collect();

    BusyTimeReport {
        has_enough_data: true,
        grid,
        top_windows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::enums::crowd_levels::CrowdLevel;

    // Wednesday
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 12, 15, 30, 0).unwrap()
    }

    fn at(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, day, hour, minute, 0).unwrap()
    }

    fn repeated(status: CrowdLevel, start: DateTime<Utc>, count: i64) -> Vec<StatusEvent> {
        (0..count)
            .map(|minute| StatusEvent {
                status,
                created_at: start + Duration::minutes(minute),
            })
            .collect()
    }

    #[test]
    fn twenty_nine_events_are_not_enough() {
        let events = repeated(CrowdLevel::Busy, at(6, 10, 10, 0), 29);

        let report = analyze_busy_times(&events, now());

        assert_eq!(report, BusyTimeReport::not_enough_data());
    }

    #[test]
    fn thirty_events_are_enough() {
        let events = repeated(CrowdLevel::Busy, at(6, 10, 10, 0), 30);

        let report = analyze_busy_times(&events, now());

        assert!(report.has_enough_data);
        assert_eq!(report.cell(1, 10), Some(3.0));
    }

    #[test]
    fn events_outside_trailing_window_do_not_count() {
        let mut events = repeated(CrowdLevel::Busy, at(5, 1, 10, 0), 40);
        events.extend(repeated(CrowdLevel::Busy, at(6, 10, 10, 0), 20));
        events.extend(repeated(CrowdLevel::Busy, at(6, 12, 16, 0), 20));

        let report = analyze_busy_times(&events, now());

        assert!(!report.has_enough_data);
        assert!(report.grid.is_empty());
        assert!(report.top_windows.is_empty());
    }

    #[test]
    fn quiet_and_busy_mondays_average_to_moderate() {
        let mondays = [at(5, 20, 10, 0), at(5, 27, 10, 0), at(6, 3, 10, 0), at(6, 10, 10, 0)];
        let mut events = Vec::new();
        for monday in mondays {
            for offset in 0..4 {
                events.push(StatusEvent {
                    status: CrowdLevel::Quiet,
                    created_at: monday + Duration::minutes(offset),
                });
                events.push(StatusEvent {
                    status: CrowdLevel::Busy,
                    created_at: monday + Duration::minutes(30 + offset),
                });
            }
        }

        let report = analyze_busy_times(&events, now());

        assert!(report.has_enough_data);
        assert_eq!(report.grid.len(), 1);
        assert_eq!(report.cell(1, 10), Some(2.0));

        let windows: Vec<(u8, u8)> = report
            .top_windows
            .iter()
            .map(|window| (window.day_of_week, window.start_hour))
            .collect();
        assert_eq!(windows, vec![(1, 9), (1, 10)]);
        assert_eq!(report.top_windows[1].time_range, "10:00–12:00");
        assert_eq!(report.top_windows[1].day_name, "Monday");
    }

    #[test]
    fn ties_keep_day_then_hour_order() {
        let mut events = repeated(CrowdLevel::Busy, at(6, 8, 14, 0), 10);
        events.extend(repeated(CrowdLevel::Busy, at(6, 11, 18, 0), 10));
        events.extend(repeated(CrowdLevel::Quiet, at(6, 10, 7, 0), 10));

        let first = analyze_busy_times(&events, now());
        let second = analyze_busy_times(&events, now());

        let windows: Vec<(u8, u8, f64)> = first
            .top_windows
            .iter()
            .map(|window| (window.day_of_week, window.start_hour, window.average_intensity))
            .collect();
        assert_eq!(windows, vec![(2, 17, 3.0), (2, 18, 3.0), (6, 13, 3.0)]);
        assert_eq!(first, second);
    }

    #[test]
    fn hours_without_reports_are_absent_not_zero() {
        let events = repeated(CrowdLevel::Moderate, at(6, 11, 9, 0), 30);

        let report = analyze_busy_times(&events, now());

        assert_eq!(report.cell(2, 9), Some(2.0));
        assert_eq!(report.cell(2, 10), None);
        assert_eq!(report.cell(0, 9), None);
        assert!(report.top_windows.iter().all(|window| window.average_intensity == 2.0));
    }

    #[test]
    fn late_night_reports_are_gridded_but_not_windowed() {
        let mut events = repeated(CrowdLevel::Busy, at(6, 11, 3, 0), 15);
        events.extend(repeated(CrowdLevel::Busy, at(6, 11, 22, 0), 15));

        let report = analyze_busy_times(&events, now());

        assert!(report.has_enough_data);
        assert_eq!(report.cell(2, 3), Some(3.0));
        assert_eq!(report.cell(2, 22), Some(3.0));
        assert!(report.top_windows.is_empty());
    }

    #[test]
    fn buckets_use_the_local_time_zone_of_now() {
        // 23:30 UTC on Monday is 00:30 on Tuesday in British Summer Time
        let events = repeated(CrowdLevel::Busy, at(6, 10, 23, 30), 30);
        let local_now = now().with_timezone(&chrono_tz::Europe::London);

        let report = analyze_busy_times(&events, local_now);

        assert_eq!(report.cell(2, 0), Some(3.0));
        assert_eq!(report.cell(1, 23), None);
    }

    #[test]
    fn events_after_now_are_ignored() {
        let mut events = repeated(CrowdLevel::Busy, at(6, 10, 10, 0), 29);
        events.extend(repeated(CrowdLevel::Busy, at(6, 12, 18, 0), 5));

        let report = analyze_busy_times(&events, now());

        assert!(!report.has_enough_data);
    }
}
