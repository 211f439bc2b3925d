//! Day and week buckets derived from an injected `now`.
//!
//! The calendar (midnight, weekday) is the calendar of `now`'s time zone.
//! A day window is `[local midnight, local midnight + 24h)`; a week window
//! starts at the most recent Monday midnight and spans 7 x 24h.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone};

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;
pub const WEEK_MS: i64 = 7 * DAY_MS;

/// Half-open instant interval `[start_ms, end_ms)` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimeWindow {
    /// Whether `instant_ms` lies in `[start_ms, end_ms)`.
    pub fn contains(&self, instant_ms: i64) -> bool {
        self.start_ms <= instant_ms && instant_ms < self.end_ms
    }
}

/// Epoch milliseconds of the wall-clock time `naive` in `tz`.
///
/// Ambiguous times resolve to the earliest instant. Times inside a DST gap
/// use the offset in force at that naive time.
pub fn local_datetime_ms<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> i64 {
    match tz.from_local_datetime(&naive).earliest() {
        Some(local) => local.timestamp_millis(),
        None => {
            let offset_secs = tz.offset_from_utc_datetime(&naive).fix().local_minus_utc();
            naive.and_utc().timestamp_millis() - i64::from(offset_secs) * 1000
        }
    }
}

/// Epoch milliseconds of local midnight starting `date` in `tz`.
pub fn local_midnight_ms<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> i64 {
    local_datetime_ms(tz, date.and_time(NaiveTime::MIN))
}

/// The day `days_back` days before the day containing `now`, or `None`
/// when that date is before the calendar's first representable day.
pub fn checked_day_window<Tz: TimeZone>(
    now: &DateTime<Tz>,
    days_back: u64,
) -> Option<TimeWindow> {
    let date = now.date_naive().checked_sub_days(Days::new(days_back))?;
    let start_ms = local_midnight_ms(&now.timezone(), date);
    Some(TimeWindow {
        start_ms,
        end_ms: start_ms + DAY_MS,
    })
}

/// The day `days_back` days before the day containing `now`, saturating at
/// the calendar's first representable day.
pub fn day_window<Tz: TimeZone>(now: &DateTime<Tz>, days_back: u64) -> TimeWindow {
    checked_day_window(now, days_back).unwrap_or_else(|| {
        let start_ms = local_midnight_ms(&now.timezone(), NaiveDate::MIN);
        TimeWindow {
            start_ms,
            end_ms: start_ms + DAY_MS,
        }
    })
}

/// The day containing `now`.
pub fn today_window<Tz: TimeZone>(now: &DateTime<Tz>) -> TimeWindow {
    day_window(now, 0)
}

/// Local midnight starting the day that contains `now`.
pub fn start_of_today_ms<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    today_window(now).start_ms
}

/// End of today's window, which is where upcoming tasks begin.
pub fn start_of_tomorrow_ms<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    today_window(now).end_ms
}

/// The Monday-anchored week containing `now`.
pub fn week_window<Tz: TimeZone>(now: &DateTime<Tz>) -> TimeWindow {
    let since_monday = u64::from(now.weekday().num_days_from_monday());
    let start_ms = day_window(now, since_monday).start_ms;
    TimeWindow {
        start_ms,
        end_ms: start_ms + WEEK_MS,
    }
}
