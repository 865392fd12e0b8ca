use crate::chips;
use crate::classify::TierPolicy;
use crate::domain::event::CalendarEvent;
use crate::domain::recommendation::RawRecommendation;
use crate::time::utc_day;

/// Project one raw daily record into a calendar entry.
///
/// Pure over (record, index, policy): the wall clock is never consulted, so
/// repeated calls yield identical entries. A record with an unparsable date
/// is still projected without a day anchor, so one bad record never drops
/// the batch.
pub fn project(raw: &RawRecommendation, index: usize, policy: &TierPolicy) -> CalendarEvent {
    let score = raw.score.unwrap_or(0.0);
    let tier = policy.classify(score);
    let title = format!("{} ({})", tier.short_label(), score);

    let day = match utc_day::parse_utc_day(&raw.date) {
        Ok(day) => Some(day),
        Err(err) => {
            tracing::warn!(index, date = %raw.date, error = %err, "record date not usable for today matching");
            None
        }
    };
    let anchor = day.map(utc_day::end_of_utc_day);

    CalendarEvent {
        id: index,
        score,
        tier,
        colors: tier.colors(),
        title,
        day,
        start: anchor,
        end: anchor,
        summary: none_if_blank(raw.summary.clone()),
        regime: none_if_blank(raw.regime.clone()),
        supporting_factors: raw.supporting_factors.clone(),
        contradictory_factors: raw.contradictory_factors.clone(),
        signal_accuracy_recent: raw.signal_accuracy_recent,
        econ_events: raw.events.iter().map(chips::build_chip).collect(),
        num_high_impact_events: raw.num_high_impact_events,
    }
}

/// Project a whole fetch window in array order, assigning dense ids.
pub fn project_all(raws: &[RawRecommendation], policy: &TierPolicy) -> Vec<CalendarEvent> {
    raws.iter()
        .enumerate()
        .map(|(index, raw)| project(raw, index, policy))
        .collect()
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
