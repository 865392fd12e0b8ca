use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::classify::{ColorPair, Tier};

/// One all-day calendar entry projected from a raw daily record.
///
/// `start` and `end` are always the same UTC day-end instant; an entry never
/// spans a time-of-day range. Both are `None` when the source date could not
/// be parsed, which keeps the record renderable but never "today".
/// Ids are dense, zero-based, and follow the raw array order of one fetch
/// cycle; the whole collection is rebuilt on the next fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEvent {
    pub id: usize,
    pub score: f64,
    pub tier: Tier,
    pub colors: ColorPair,
    pub title: String,
    pub day: Option<NaiveDate>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub summary: Option<String>,
    pub regime: Option<String>,
    pub supporting_factors: Vec<String>,
    pub contradictory_factors: Vec<String>,
    pub signal_accuracy_recent: Option<f64>,
    pub econ_events: Vec<EconEventChip>,
    pub num_high_impact_events: Option<u32>,
}

/// Display chip for one scheduled economic release.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconEventChip {
    pub impact: Option<String>,
    pub colors: ColorPair,
    pub formatted_time: String,
    pub description: Option<String>,
}
