use anyhow::Context;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

/// Parse a backend-supplied date string into a UTC calendar day.
///
/// Backend dates are date-only (`YYYY-MM-DD`); a full RFC 3339 timestamp is
/// accepted as a fallback and collapsed to its UTC day. Comparisons stay
/// stable regardless of the viewer's offset because nothing here touches
/// local time.
pub fn parse_utc_day(input: &str) -> anyhow::Result<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(day);
    }

    let dt = DateTime::parse_from_rfc3339(trimmed)
        .with_context(|| format!("invalid date: {input:?}"))?;
    Ok(dt.with_timezone(&Utc).date_naive())
}

/// Canonical `YYYY-MM-DD` key for a UTC calendar day.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

pub fn day_key_of(instant: DateTime<Utc>) -> String {
    day_key(instant.date_naive())
}

/// Last instant (23:59:59.999) of the given UTC calendar day, the canonical
/// anchor for an all-day event.
pub fn end_of_utc_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc() + Duration::milliseconds(86_400_000 - 1)
}

pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn parses_date_only_input() {
        let day = parse_utc_day("2024-09-27").unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 9, 27).unwrap());
    }

    #[test]
    fn collapses_rfc3339_input_to_its_utc_day() {
        // 23:30 at -05:00 is already the 28th in UTC.
        let day = parse_utc_day("2024-09-27T23:30:00-05:00").unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 9, 28).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_utc_day("").is_err());
        assert!(parse_utc_day("not a date").is_err());
        assert!(parse_utc_day("2024-13-40").is_err());
    }

    #[test]
    fn end_of_day_is_last_millisecond() {
        let day = NaiveDate::from_ymd_opt(2024, 9, 27).unwrap();
        let end = end_of_utc_day(day);
        let expected = Utc.with_ymd_and_hms(2024, 9, 27, 23, 59, 59).unwrap()
            + Duration::milliseconds(999);
        assert_eq!(end, expected);
        assert_eq!(end.hour(), 23);
        assert_eq!(end.date_naive(), day);
    }

    #[test]
    fn day_key_is_idempotent_over_the_day_end_anchor() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(day_key_of(end_of_utc_day(day)), day_key(day));
        assert_eq!(day_key(day), "2024-02-29");
    }

    #[test]
    fn weekend_detection() {
        // 2026-01-03 is Saturday, 2026-01-04 Sunday, 2026-01-05 Monday.
        assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 1, 4).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()));
    }
}
