use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::event::CalendarEvent;
use crate::time::utc_day;

/// Everything the calendar widget needs for one render: the projected
/// window plus the time-grid upper bound. Month view ignores `max`; the
/// time-grid views use it to stop short of the empty trailing hour.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarModel {
    pub events: Vec<CalendarEvent>,
    pub max: DateTime<Utc>,
}

/// Time-grid bound: one hour before the all-day anchor at UTC day end.
pub fn time_grid_max(day: NaiveDate) -> DateTime<Utc> {
    utc_day::end_of_utc_day(day) - Duration::hours(1)
}

pub fn build_calendar_model(events: Vec<CalendarEvent>, now: DateTime<Utc>) -> CalendarModel {
    CalendarModel {
        max: time_grid_max(now.date_naive()),
        events,
    }
}
