//! Date helper functions

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use super::locale::locale_tag;

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Parse a content date string.
///
/// Date-only values are midnight UTC; date-times without an offset are read
/// as UTC as well, so results do not depend on the machine's timezone.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// Check if an artist was revealed within the last `window_days` days.
pub fn is_newly_revealed(reveal_date: &str, window_days: u32) -> bool {
    is_newly_revealed_at(reveal_date, window_days, Utc::now())
}

/// [`is_newly_revealed`] against an explicit clock.
///
/// False for unparseable or future dates. The window is inclusive: a reveal
/// exactly `window_days` days ago still counts as new.
pub fn is_newly_revealed_at(reveal_date: &str, window_days: u32, now: DateTime<Utc>) -> bool {
    let Some(reveal) = parse_date(reveal_date) else {
        return false;
    };

    if reveal > now {
        return false;
    }

    let elapsed_days = (now - reveal).num_milliseconds() as f64 / MILLIS_PER_DAY;
    elapsed_days <= f64::from(window_days)
}

/// Format a date in long form for a site locale
///
/// # Examples
/// ```ignore
/// format_date("2026-08-15", "it") // -> "15 agosto 2026"
/// format_date("2026-08-15", "en") // -> "August 15, 2026"
/// ```
pub fn format_date(date_string: &str, locale: &str) -> String {
    let Some(date) = parse_date(date_string) else {
        return date_string.to_string();
    };

    let (chrono_locale, pattern) = long_date_style(locale_tag(locale));
    date.format_localized(pattern, chrono_locale).to_string()
}

/// Month-name locale and field order for a BCP 47 tag
fn long_date_style(tag: &str) -> (Locale, &'static str) {
    match tag {
        "it-IT" => (Locale::it_IT, "%-d %B %Y"),
        "fr-FR" | "fr" => (Locale::fr_FR, "%-d %B %Y"),
        "de-DE" | "de" => (Locale::de_DE, "%-d. %B %Y"),
        "es-ES" | "es" => (Locale::es_ES, "%-d de %B de %Y"),
        _ => (Locale::en_US, "%B %-d, %Y"),
    }
}

/// Time remaining until the festival opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Countdown from `now` to `target`; `None` once the target has passed
pub fn time_left(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<TimeLeft> {
    let diff = target - now;
    if diff.num_milliseconds() <= 0 {
        return None;
    }

    let total_seconds = diff.num_seconds();
    Some(TimeLeft {
        days: total_seconds / 86_400,
        hours: (total_seconds / 3_600) % 24,
        minutes: (total_seconds / 60) % 60,
        seconds: total_seconds % 60,
    })
}
