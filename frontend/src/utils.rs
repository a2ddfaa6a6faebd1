use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Label rendered for timestamps that fail to parse.
pub const UNKNOWN_TIME: &str = "Unknown time";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
// Calendar-free buckets: a month is 30 days, a year is 12 such months.
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;

/// Relative-age label for a server timestamp, measured against the browser
/// clock: "Just now", "5 min ago", "2 hours ago", and so on.
pub fn relative_time(input: &str) -> String {
    relative_time_at(js_sys::Date::now() as i64, input)
}

/// Pure core of [`relative_time`]: `now_ms` is milliseconds since the Unix
/// epoch. Accepts RFC 3339 timestamps, ISO timestamps without a zone
/// (treated as UTC), and plain `YYYY-MM-DD` dates. Unparsable input never
/// panics; it renders [`UNKNOWN_TIME`].
pub fn relative_time_at(now_ms: i64, input: &str) -> String {
    let Some(then_ms) = parse_timestamp_ms(input) else {
        return UNKNOWN_TIME.to_string();
    };

    let elapsed = (now_ms - then_ms) / 1000;

    if elapsed < MINUTE {
        return "Just now".to_string();
    }
    if elapsed < HOUR {
        return format!("{} min ago", elapsed / MINUTE);
    }
    if elapsed < DAY {
        return plural(elapsed / HOUR, "hour");
    }
    if elapsed < MONTH {
        return plural(elapsed / DAY, "day");
    }
    if elapsed < YEAR {
        return plural(elapsed / MONTH, "month");
    }
    plural(elapsed / YEAR, "year")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Parse the timestamp shapes the backend emits into epoch milliseconds.
pub fn parse_timestamp_ms(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // Full ISO-8601 with zone offset or trailing Z.
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.timestamp_millis());
    }

    // ISO without a zone; the backend writes these in UTC.
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    // Plain date, midnight UTC.
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(midnight.and_utc().timestamp_millis());
    }

    None
}

/// Set the document title, prefixed with the site name.
pub fn set_document_title(page: &str) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        doc.set_title(&format!("{page} · {}", crate::config::SITE_LABEL));
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    // Fixed reference instant: 2024-06-01T12:00:00Z.
    const NOW_MS: i64 = 1_717_243_200_000;

    fn at(seconds_ago: i64) -> String {
        relative_time_at(NOW_MS, &iso_at(seconds_ago))
    }

    fn iso_at(seconds_ago: i64) -> String {
        let then = DateTime::<Utc>::from_timestamp_millis(NOW_MS - seconds_ago * 1000)
            .expect("in range");
        then.to_rfc3339()
    }

    #[test]
    fn minute_boundary() {
        assert_eq!(at(0), "Just now");
        assert_eq!(at(59), "Just now");
        assert_eq!(at(60), "1 min ago");
    }

    #[test]
    fn hour_boundary() {
        assert_eq!(at(3_599), "59 min ago");
        assert_eq!(at(3_600), "1 hour ago");
        assert_eq!(at(2 * 3_600), "2 hours ago");
    }

    #[test]
    fn day_month_year_buckets() {
        assert_eq!(at(24 * 3_600), "1 day ago");
        assert_eq!(at(29 * 24 * 3_600), "29 days ago");
        assert_eq!(at(30 * 24 * 3_600), "1 month ago");
        assert_eq!(at(11 * 30 * 24 * 3_600), "11 months ago");
        assert_eq!(at(360 * 24 * 3_600), "1 year ago");
        assert_eq!(at(2 * 360 * 24 * 3_600), "2 years ago");
    }

    #[test]
    fn accepts_zoneless_and_plain_date_inputs() {
        assert_eq!(relative_time_at(NOW_MS, "2024-06-01T11:59:30"), "Just now");
        assert_eq!(relative_time_at(NOW_MS, "2024-05-30"), "2 days ago");
    }

    #[test]
    fn unparsable_input_is_reported_not_thrown() {
        assert_eq!(relative_time_at(NOW_MS, "not a date"), UNKNOWN_TIME);
        assert_eq!(relative_time_at(NOW_MS, ""), UNKNOWN_TIME);
        assert_eq!(relative_time_at(NOW_MS, "2024-13-45"), UNKNOWN_TIME);
    }

    #[test]
    fn same_bucket_is_stable_within_the_minute() {
        let input = iso_at(90);
        assert_eq!(relative_time_at(NOW_MS, &input), relative_time_at(NOW_MS + 10_000, &input));
    }
}
