use chrono::NaiveTime;

use crate::classify::ColorPair;
use crate::domain::event::EconEventChip;
use crate::domain::recommendation::RawEconEvent;

/// 24-hour "HH:MM" to "h:mm AM/PM". Missing or malformed input yields an
/// empty label; the chip still renders with its impact color.
pub fn format_time_12h(time: Option<&str>) -> String {
    let Some(raw) = time else {
        return String::new();
    };
    match NaiveTime::parse_from_str(raw.trim(), "%H:%M") {
        Ok(t) => t.format("%-I:%M %p").to_string(),
        Err(_) => String::new(),
    }
}

pub fn impact_colors(impact: Option<&str>) -> ColorPair {
    match impact.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("low") => ColorPair {
            background: "yellow",
            foreground: "black",
        },
        Some("medium") => ColorPair {
            background: "orange",
            foreground: "white",
        },
        Some("high") => ColorPair {
            background: "red",
            foreground: "white",
        },
        _ => ColorPair {
            background: "gray",
            foreground: "white",
        },
    }
}

pub fn build_chip(raw: &RawEconEvent) -> EconEventChip {
    EconEventChip {
        impact: raw.impact.clone(),
        colors: impact_colors(raw.impact.as_deref()),
        formatted_time: format_time_12h(raw.time_eastern.as_deref()),
        description: raw.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_afternoon_time() {
        assert_eq!(format_time_12h(Some("14:05")), "2:05 PM");
    }

    #[test]
    fn formats_midnight() {
        assert_eq!(format_time_12h(Some("00:00")), "12:00 AM");
        assert_eq!(format_time_12h(Some("12:00")), "12:00 PM");
    }

    #[test]
    fn malformed_or_absent_time_yields_empty_label() {
        assert_eq!(format_time_12h(None), "");
        assert_eq!(format_time_12h(Some("")), "");
        assert_eq!(format_time_12h(Some("25:00")), "");
        assert_eq!(format_time_12h(Some("soon")), "");
    }

    #[test]
    fn impact_colors_cover_the_known_levels() {
        assert_eq!(impact_colors(Some("low")).background, "yellow");
        assert_eq!(impact_colors(Some("low")).foreground, "black");
        assert_eq!(impact_colors(Some("medium")).background, "orange");
        assert_eq!(impact_colors(Some("high")).background, "red");
    }

    #[test]
    fn unknown_or_absent_impact_is_neutral_gray() {
        assert_eq!(impact_colors(None).background, "gray");
        assert_eq!(impact_colors(Some("severe")).background, "gray");
        assert_eq!(impact_colors(Some("")).background, "gray");
    }

    #[test]
    fn chip_without_time_still_carries_impact_color() {
        let raw = RawEconEvent {
            impact: Some("high".to_string()),
            time_eastern: Some("junk".to_string()),
            description: Some("FOMC".to_string()),
        };
        let chip = build_chip(&raw);
        assert_eq!(chip.formatted_time, "");
        assert_eq!(chip.colors.background, "red");
        assert_eq!(chip.description.as_deref(), Some("FOMC"));
    }
}
