//! Period selection
//!
//! Selectable years/weeks for the report filter controls and the
//! year/month/week lead filter itself. The report pages pass the filter
//! values as strings straight from the UI; an unparseable year or month
//! keeps the page usable by showing all leads, tagged with a warning so
//! the caller can surface it.

use chrono::Datelike;
use chrono_tz::Tz;
use shared::models::Lead;
use std::collections::{BTreeMap, BTreeSet};

use crate::utils::time::{parse_submission, parse_week_label, week_label, week_span};

/// Result of a period filter
#[derive(Debug, Clone)]
pub struct FilteredLeads<'a> {
    pub leads: Vec<&'a Lead>,
    /// Set when the selection was invalid and the full set is returned
    pub warning: Option<&'static str>,
}

const INVALID_PERIOD_WARNING: &str = "invalid period selection, showing all leads";

/// Distinct submission years, descending
pub fn available_years(leads: &[Lead], tz: Tz) -> Vec<i32> {
    let years: BTreeSet<i32> = leads
        .iter()
        .filter_map(|lead| parse_submission(&lead.submission_date_time, tz))
        .map(|dt| dt.year())
        .collect();

    years.into_iter().rev().collect()
}

/// `MM.dd-MM.dd` labels of the Monday-start weeks containing the year's
/// submissions, deduplicated, ascending by week start
pub fn available_weeks(leads: &[Lead], year: i32, tz: Tz) -> Vec<String> {
    let mut weeks = BTreeMap::new();

    for lead in leads {
        let Some(dt) = parse_submission(&lead.submission_date_time, tz) else {
            continue;
        };
        if dt.year() != year {
            continue;
        }
        let (start, end) = week_span(dt.date_naive());
        weeks.entry(start).or_insert_with(|| week_label(start, end));
    }

    weeks.into_values().collect()
}

/// Filter leads to a week or calendar month.
///
/// A supplied week label that parses against the year wins over the month;
/// an invalid week label falls back to the month filter. If `year` or
/// `month` fail to parse as integers the full input is returned with a
/// warning — the report page always renders something usable.
pub fn filter_by_period<'a>(
    leads: &'a [Lead],
    year: &str,
    month: &str,
    week: Option<&str>,
    tz: Tz,
) -> FilteredLeads<'a> {
    let (Ok(year), Ok(month)) = (year.trim().parse::<i32>(), month.trim().parse::<u32>()) else {
        tracing::warn!("unparseable report period (year/month), returning all leads");
        return FilteredLeads {
            leads: leads.iter().collect(),
            warning: Some(INVALID_PERIOD_WARNING),
        };
    };

    let week_range = week.and_then(|label| parse_week_label(label, year));

    let filtered = leads
        .iter()
        .filter(|lead| {
            let Some(dt) = parse_submission(&lead.submission_date_time, tz) else {
                return false;
            };
            match week_range {
                Some((start, end)) => {
                    let date = dt.date_naive();
                    start <= date && date <= end
                }
                None => dt.year() == year && dt.month() == month,
            }
        })
        .collect();

    FilteredLeads {
        leads: filtered,
        warning: None,
    }
}
