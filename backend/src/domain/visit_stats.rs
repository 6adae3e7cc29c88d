//! Aggregations over the visitor log for the stats panel.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Visitor;

/// Number of daily buckets kept for the chart.
pub const CHART_DAYS: usize = 7;
/// Number of visitors listed as "recent".
pub const RECENT_VISITORS: usize = 5;
/// Width of the "this week" counter window, in days.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Visit count for one calendar day in the display timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyVisits {
    pub date: NaiveDate,
    pub visits: usize,
}

/// Summary shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorStats {
    pub total: usize,
    pub last_seven_days: usize,
    pub daily: Vec<DailyVisits>,
    pub recent: Vec<Visitor>,
}

/// Group visits by local calendar date and keep the `limit` most recent
/// days, oldest first.
///
/// # Examples
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use folio::domain::{daily_visits, Visitor, VisitorId};
///
/// let visit = |id, hour| Visitor {
///     id: VisitorId::new(id),
///     name: "Ada".into(),
///     relation: "Friend".into(),
///     visit_time: Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap(),
/// };
/// let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
/// // 20:00 UTC is already the next day in India.
/// let buckets = daily_visits(&[visit(1, 10), visit(2, 20)], ist, 7);
/// assert_eq!(buckets.len(), 2);
/// assert_eq!(buckets[0].visits, 1);
/// ```
#[must_use]
pub fn daily_visits(visitors: &[Visitor], offset: FixedOffset, limit: usize) -> Vec<DailyVisits> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for visitor in visitors {
        let date = visitor.visit_time.with_timezone(&offset).date_naive();
        *counts.entry(date).or_default() += 1;
    }
    let skip = counts.len().saturating_sub(limit);
    counts
        .into_iter()
        .skip(skip)
        .map(|(date, visits)| DailyVisits { date, visits })
        .collect()
}

/// Count visits within [`RECENT_WINDOW_DAYS`] of `now`, in either direction.
#[must_use]
pub fn visits_within_week(visitors: &[Visitor], now: DateTime<Utc>) -> usize {
    let window = TimeDelta::days(RECENT_WINDOW_DAYS);
    visitors
        .iter()
        .filter(|visitor| (now - visitor.visit_time).abs() <= window)
        .count()
}

/// Build the full summary. `visitors` must be newest first, as returned by
/// the visitor log.
#[must_use]
pub fn summarise_visits(visitors: Vec<Visitor>, offset: FixedOffset, now: DateTime<Utc>) -> VisitorStats {
    let daily = daily_visits(&visitors, offset, CHART_DAYS);
    let last_seven_days = visits_within_week(&visitors, now);
    let total = visitors.len();
    let mut recent = visitors;
    recent.truncate(RECENT_VISITORS);
    VisitorStats {
        total,
        last_seven_days,
        daily,
        recent,
    }
}
