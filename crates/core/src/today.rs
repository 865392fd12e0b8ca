use chrono::{DateTime, Utc};

use crate::domain::event::CalendarEvent;
use crate::time::utc_day;

/// Banner state for the current UTC day.
#[derive(Debug, Clone, PartialEq)]
pub enum TodayStatus<'a> {
    Recommendation(&'a CalendarEvent),
    /// No record for today and it is a Saturday/Sunday; takes precedence
    /// over `Pending`.
    Weekend,
    /// No record for today (yet).
    Pending,
}

/// First event in array order whose normalized day equals the UTC day of
/// `now`. Duplicate days resolve deterministically to array order; an event
/// without a day anchor never matches.
pub fn resolve_today(events: &[CalendarEvent], now: DateTime<Utc>) -> Option<&CalendarEvent> {
    let today = now.date_naive();
    events.iter().find(|event| event.day == Some(today))
}

pub fn today_status(events: &[CalendarEvent], now: DateTime<Utc>) -> TodayStatus<'_> {
    if let Some(event) = resolve_today(events, now) {
        return TodayStatus::Recommendation(event);
    }

    if utc_day::is_weekend(now.date_naive()) {
        TodayStatus::Weekend
    } else {
        TodayStatus::Pending
    }
}
