//! Moment-style date pattern rendering
//!
//! Patterns are token strings such as `YYYY-MM-DD HH:mm` or
//! `dddd, MMMM Do [at] h:mm A`. Text inside `[...]` is copied verbatim and
//! anything that is not a token (including unknown letters) is kept as a
//! literal, so a malformed pattern never fails.
//!
//! Locale-dependent tokens (`L`, `LT`, `w`, `gggg`, ...) render with the
//! English locale: weeks start on Sunday and week 1 contains January 1st.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeDelta, Timelike};

use crate::consts::EMPTY_PATTERN_FALLBACK;
use crate::error::AppError;
use crate::utils::Timezone;

/// Recognized tokens, longest first so `YYYY` wins over `YY` and `Y`.
const TOKENS: &[&str] = &[
    "LLLL", "llll", "YYYY", "GGGG", "gggg", "MMMM", "dddd", "DDDD", "DDDo", "LLL", "lll", "LTS",
    "MMM", "ddd", "DDD", "SSS", "LL", "ll", "LT", "YY", "GG", "gg", "MM", "Mo", "DD", "Do", "do",
    "dd", "Qo", "WW", "Wo", "ww", "wo", "HH", "hh", "kk", "mm", "ss", "SS", "ZZ", "L", "l", "Y",
    "Q", "M", "D", "d", "E", "W", "w", "H", "h", "k", "m", "s", "S", "A", "a", "Z", "X", "x",
];

/// English locale shortcuts, expanded into ordinary tokens.
fn locale_format(token: &str) -> Option<&'static str> {
    let expanded = match token {
        "LT" => "h:mm A",
        "LTS" => "h:mm:ss A",
        "L" => "MM/DD/YYYY",
        "LL" => "MMMM D, YYYY",
        "LLL" => "MMMM D, YYYY h:mm A",
        "LLLL" => "dddd, MMMM D, YYYY h:mm A",
        "l" => "M/D/YYYY",
        "ll" => "MMM D, YYYY",
        "lll" => "MMM D, YYYY h:mm A",
        "llll" => "ddd, MMM D, YYYY h:mm A",
        _ => return None,
    };
    Some(expanded)
}

/// Render an epoch-millisecond timestamp with a moment-style pattern.
///
/// Only an unrepresentable timestamp is an error; an empty pattern falls
/// back to an ISO-8601 rendering.
pub(crate) fn format_creation_time(
    timestamp_ms: i64,
    pattern: &str,
    timezone: Timezone,
) -> Result<String, AppError> {
    let dt = timezone.localize_millis(timestamp_ms)?;
    let pattern = if pattern.is_empty() {
        EMPTY_PATTERN_FALLBACK
    } else {
        pattern
    };
    Ok(render(&dt, pattern))
}

fn render(dt: &DateTime<FixedOffset>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == '['
            && let Some(end) = rest.find(']')
        {
            out.push_str(&rest[1..end]);
            rest = &rest[end + 1..];
            continue;
        }

        if let Some(token) = TOKENS.iter().find(|t| rest.starts_with(**t)) {
            match locale_format(token) {
                Some(expanded) => out.push_str(&render(dt, expanded)),
                None => out.push_str(&render_token(dt, token)),
            }
            rest = &rest[token.len()..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn render_token(dt: &DateTime<FixedOffset>, token: &str) -> String {
    let year = dt.year();
    let hour = dt.hour();
    let millis = dt.timestamp_subsec_millis().min(999);
    let (week_year, week) = locale_week(dt.date_naive());

    match token {
        "YYYY" => format!("{year:04}"),
        "YY" => format!("{:02}", year.rem_euclid(100)),
        "Y" => year.to_string(),
        "Q" => ((dt.month0() / 3) + 1).to_string(),
        "Qo" => ordinal((dt.month0() / 3) + 1),
        "M" => dt.month().to_string(),
        "MM" => format!("{:02}", dt.month()),
        "MMM" => dt.format("%b").to_string(),
        "MMMM" => dt.format("%B").to_string(),
        "Mo" => ordinal(dt.month()),
        "D" => dt.day().to_string(),
        "DD" => format!("{:02}", dt.day()),
        "Do" => ordinal(dt.day()),
        "DDD" => dt.ordinal().to_string(),
        "DDDD" => format!("{:03}", dt.ordinal()),
        "DDDo" => ordinal(dt.ordinal()),
        "d" => dt.weekday().num_days_from_sunday().to_string(),
        "do" => ordinal(dt.weekday().num_days_from_sunday()),
        "dd" => dt.format("%a").to_string().chars().take(2).collect(),
        "ddd" => dt.format("%a").to_string(),
        "dddd" => dt.format("%A").to_string(),
        "E" => dt.weekday().number_from_monday().to_string(),
        "W" => dt.iso_week().week().to_string(),
        "WW" => format!("{:02}", dt.iso_week().week()),
        "Wo" => ordinal(dt.iso_week().week()),
        "GGGG" => format!("{:04}", dt.iso_week().year()),
        "GG" => format!("{:02}", dt.iso_week().year().rem_euclid(100)),
        "w" => week.to_string(),
        "ww" => format!("{week:02}"),
        "wo" => ordinal(week),
        "gggg" => format!("{week_year:04}"),
        "gg" => format!("{:02}", week_year.rem_euclid(100)),
        "H" => hour.to_string(),
        "HH" => format!("{hour:02}"),
        "h" => hour12(hour).to_string(),
        "hh" => format!("{:02}", hour12(hour)),
        "k" => hour24(hour).to_string(),
        "kk" => format!("{:02}", hour24(hour)),
        "m" => dt.minute().to_string(),
        "mm" => format!("{:02}", dt.minute()),
        "s" => dt.second().to_string(),
        "ss" => format!("{:02}", dt.second()),
        "S" => (millis / 100).to_string(),
        "SS" => format!("{:02}", millis / 10),
        "SSS" => format!("{millis:03}"),
        "A" => (if hour < 12 { "AM" } else { "PM" }).to_string(),
        "a" => (if hour < 12 { "am" } else { "pm" }).to_string(),
        "Z" => dt.format("%:z").to_string(),
        "ZZ" => dt.format("%z").to_string(),
        "X" => dt.timestamp().to_string(),
        "x" => dt.timestamp_millis().to_string(),
        other => other.to_string(),
    }
}

/// Sunday-based week-year and week number.
///
/// A week belongs to the year its Saturday falls in, which puts January 1st
/// in week 1.
fn locale_week(date: NaiveDate) -> (i32, u32) {
    let days_to_saturday = 6 - i64::from(date.weekday().num_days_from_sunday());
    let saturday = date
        .checked_add_signed(TimeDelta::days(days_to_saturday))
        .unwrap_or(date);
    (saturday.year(), (saturday.ordinal() - 1) / 7 + 1)
}

fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn hour24(hour: u32) -> u32 {
    if hour == 0 { 24 } else { hour }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
