use chrono::{DateTime, NaiveDate, Utc};

use gonogo_core::detail::{CloseSignal, DetailOverlay, DetailSection, DetailView};
use gonogo_core::domain::event::CalendarEvent;
use gonogo_core::time::utc_day;
use gonogo_core::today::{self, TodayStatus};

pub fn render_window(events: &[CalendarEvent]) -> String {
    if events.is_empty() {
        return "no recommendations in the window\n".to_string();
    }

    let mut out = String::new();
    for event in events {
        let day = event
            .day
            .map(utc_day::day_key)
            .unwrap_or_else(|| "(no date)".to_string());
        out.push_str(&format!("{day}  {}\n", event.title));
    }
    out
}

pub fn render_today_banner(events: &[CalendarEvent], now: DateTime<Utc>) -> String {
    match today::today_status(events, now) {
        TodayStatus::Recommendation(event) => {
            let mut out = format!("today: {} - {}", event.title, event.tier.label());
            if let Some(detail) = drill_down(event) {
                out.push('\n');
                out.push_str(&detail);
            }
            out
        }
        TodayStatus::Weekend => "today: weekend - markets closed".to_string(),
        TodayStatus::Pending => "today: no recommendation yet".to_string(),
    }
}

pub fn render_selected_day(events: &[CalendarEvent], day: NaiveDate) -> String {
    let Some(event) = events.iter().find(|e| e.day == Some(day)) else {
        return format!("{}: no recommendation", utc_day::day_key(day));
    };

    let mut out = format!(
        "{}: {} - {}",
        utc_day::day_key(day),
        event.title,
        event.tier.label()
    );
    if let Some(detail) = drill_down(event) {
        out.push('\n');
        out.push_str(&detail);
    }
    out
}

/// The today banner and a selected day share one overlay path; the overlay
/// opens only for events that actually have drill-down content.
fn drill_down(event: &CalendarEvent) -> Option<String> {
    let mut overlay = DetailOverlay::new();
    if !overlay.open_for(event) {
        return None;
    }
    let rendered = overlay.view().map(render_detail_view);
    overlay.close(CloseSignal::CloseButton);
    rendered
}

fn render_detail_view(view: &DetailView) -> String {
    let mut out = String::new();
    for section in &view.sections {
        match section {
            DetailSection::Summary { text } => {
                out.push_str(&format!("  summary: {text}\n"));
            }
            DetailSection::Regime { text } => {
                out.push_str(&format!("  regime: {text}\n"));
            }
            DetailSection::SupportingFactors { items } => {
                out.push_str("  supporting factors:\n");
                for item in items {
                    out.push_str(&format!("    + {item}\n"));
                }
            }
            DetailSection::ContradictoryFactors { items } => {
                out.push_str("  contradictory factors:\n");
                for item in items {
                    out.push_str(&format!("    - {item}\n"));
                }
            }
            DetailSection::SignalAccuracy { percent } => {
                out.push_str(&format!("  recent signal accuracy: {percent}%\n"));
            }
            DetailSection::HighImpactEvents { count } => {
                out.push_str(&format!("  high-impact events: {count}\n"));
            }
            DetailSection::EconEvents { chips } => {
                out.push_str("  scheduled events:\n");
                for chip in chips {
                    let mut line = format!("    [{}]", chip.impact.as_deref().unwrap_or("n/a"));
                    if !chip.formatted_time.is_empty() {
                        line.push(' ');
                        line.push_str(&chip.formatted_time);
                    }
                    if let Some(desc) = &chip.description {
                        line.push(' ');
                        line.push_str(desc);
                    }
                    out.push_str(&line);
                    out.push('\n');
                }
            }
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gonogo_core::classify::TierPolicy;
    use gonogo_core::domain::recommendation::RawRecommendation;
    use gonogo_core::project::project_all;
    use chrono::TimeZone;
    use serde_json::json;

    fn window(v: serde_json::Value) -> Vec<CalendarEvent> {
        let raws: Vec<RawRecommendation> = serde_json::from_value(v).unwrap();
        project_all(&raws, &TierPolicy::default())
    }

    #[test]
    fn window_lists_one_line_per_day() {
        let events = window(json!([
            {"date": "2024-09-26", "score": 72},
            {"date": "2024-09-27", "score": 85}
        ]));
        let text = render_window(&events);
        assert!(text.contains("2024-09-26  Cautious yes (72)"));
        assert!(text.contains("2024-09-27  Yes (85)"));
    }

    #[test]
    fn empty_window_renders_placeholder() {
        assert_eq!(render_window(&[]), "no recommendations in the window\n");
    }

    #[test]
    fn banner_shows_full_label_and_detail() {
        let events = window(json!([
            {"date": "2024-09-27", "score": 85, "summary": "strong breadth"}
        ]));
        let now = Utc.with_ymd_and_hms(2024, 9, 27, 12, 0, 0).unwrap();
        let text = render_today_banner(&events, now);
        assert!(text.starts_with("today: Yes (85) - go for it"));
        assert!(text.contains("summary: strong breadth"));
    }

    #[test]
    fn banner_without_detail_stays_on_one_line() {
        let events = window(json!([{"date": "2024-09-27", "score": 85}]));
        let now = Utc.with_ymd_and_hms(2024, 9, 27, 12, 0, 0).unwrap();
        assert_eq!(render_today_banner(&events, now), "today: Yes (85) - go for it");
    }

    #[test]
    fn weekend_banner_takes_precedence_over_pending() {
        // 2024-09-28 is Saturday.
        let now = Utc.with_ymd_and_hms(2024, 9, 28, 12, 0, 0).unwrap();
        assert_eq!(
            render_today_banner(&[], now),
            "today: weekend - markets closed"
        );
    }

    #[test]
    fn selected_day_uses_the_same_drill_down() {
        let events = window(json!([
            {"date": "2024-09-27", "score": 72, "regime": "trending",
             "events": [{"impact": "high", "time_eastern": "08:30", "description": "CPI"}]}
        ]));
        let day = NaiveDate::from_ymd_opt(2024, 9, 27).unwrap();
        let text = render_selected_day(&events, day);
        assert!(text.contains("regime: trending"));
        assert!(text.contains("[high] 8:30 AM CPI"));
    }

    #[test]
    fn selected_day_without_a_record() {
        let day = NaiveDate::from_ymd_opt(2024, 9, 27).unwrap();
        assert_eq!(
            render_selected_day(&[], day),
            "2024-09-27: no recommendation"
        );
    }
}
