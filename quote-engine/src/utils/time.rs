//! Time helpers — business-timezone calendar math
//!
//! All calendar bucketing (year, month, week, day) happens in the
//! configured business timezone so reports do not drift with the host's
//! locale. Week labels use the `MM.dd-MM.dd` wire format the report pages
//! expect.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use chrono_tz::Tz;

/// Parse a lead's ISO 8601 submission timestamp into the business timezone.
///
/// Accepts RFC 3339 (offset-carrying) timestamps and falls back to naive
/// `YYYY-MM-DDTHH:MM:SS` strings interpreted in the business timezone.
/// Malformed timestamps log a warning and return `None`; reporting skips
/// the record instead of failing the page.
pub fn parse_submission(timestamp: &str, tz: Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(&tz));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        if let Some(dt) = naive.and_local_timezone(tz).latest() {
            return Some(dt);
        }
    }

    tracing::warn!("skipping lead with malformed submission timestamp '{}'", timestamp);
    None
}

/// Monday-start week containing the date, as (monday, sunday)
pub fn week_span(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}

/// Format a week span as the `MM.dd-MM.dd` label used by the report filter
pub fn week_label(start: NaiveDate, end: NaiveDate) -> String {
    format!("{}-{}", start.format("%m.%d"), end.format("%m.%d"))
}

/// Parse a `MM.dd-MM.dd` week label against a year.
///
/// A label whose end month precedes its start month spans a year boundary
/// ("12.29-01.04"). Such a week is listed under whichever year a lead's
/// submission fell in, so the label may name the December side (start in
/// `year`) or the January side (start in `year − 1`). Weeks are
/// Monday-start, which disambiguates: at most one anchoring puts the start
/// on a Monday, and that is the week the label was generated from.
pub fn parse_week_label(label: &str, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let (start_part, end_part) = label.split_once('-')?;
    let (start_month, start_day) = parse_month_day(start_part)?;
    let (end_month, end_day) = parse_month_day(end_part)?;

    if end_month >= start_month {
        let start = NaiveDate::from_ymd_opt(year, start_month, start_day)?;
        let end = NaiveDate::from_ymd_opt(year, end_month, end_day)?;
        return (start <= end).then_some((start, end));
    }

    for (start_year, end_year) in [(year, year + 1), (year - 1, year)] {
        let Some(start) = NaiveDate::from_ymd_opt(start_year, start_month, start_day) else {
            continue;
        };
        let Some(end) = NaiveDate::from_ymd_opt(end_year, end_month, end_day) else {
            continue;
        };
        if start <= end && start.weekday() == Weekday::Mon {
            return Some((start, end));
        }
    }

    // No Monday-anchored candidate: not a label we generated, but keep the
    // forward reading so a hand-typed range still filters something.
    let start = NaiveDate::from_ymd_opt(year, start_month, start_day)?;
    let end = NaiveDate::from_ymd_opt(year + 1, end_month, end_day)?;
    (start <= end).then_some((start, end))
}

fn parse_month_day(part: &str) -> Option<(u32, u32)> {
    let (month, day) = part.split_once('.')?;
    Some((month.parse().ok()?, day.parse().ok()?))
}
