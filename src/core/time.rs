use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static TIME_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(0?[1-9]|1[0-2]):([0-5][0-9])[\s\x{FEFF}]?(AM|PM)$").expect("time pattern")
});

// 沒有 AM/PM 的 24 小時制輸入
static BARE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("bare time pattern"));

const MINUTES_PER_DAY: i64 = 24 * 60;

// str::trim plus U+FEFF, which pasted text often starts with.
fn trim_blank(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Checks a 12-hour clock string such as `2:30 PM` or `02:30pm`.
///
/// Unset or blank input is valid, since time fields are optional.
pub fn validate_time_format<'a>(time_str: impl Into<Option<&'a str>>) -> bool {
    match time_str.into() {
        None => true,
        Some(s) if trim_blank(s).is_empty() => true,
        Some(s) => TIME_FORMAT.is_match(trim_blank(s)),
    }
}

/// Normalizes a time field when it loses focus.
///
/// Bare `H:MM`/`HH:MM` values are read as 24-hour time and converted. Values
/// that already validate come back trimmed and upper-cased. Anything else is
/// returned untouched so the validator can flag it.
pub fn format_time_input<'a>(time_str: impl Into<Option<&'a str>>) -> String {
    let Some(raw) = time_str.into() else {
        return String::new();
    };
    if trim_blank(raw).is_empty() {
        return String::new();
    }

    let cleaned = trim_blank(raw).to_uppercase();

    if let Some(caps) = BARE_TIME.captures(&cleaned) {
        let minutes = &caps[2];
        if let Ok(hour) = caps[1].parse::<u32>() {
            match hour {
                0 => return format!("12:{} AM", minutes),
                1..=11 => return format!("{}:{} AM", hour, minutes),
                12 => return format!("12:{} PM", minutes),
                13..=23 => return format!("{}:{} PM", hour - 12, minutes),
                _ => {}
            }
        }
    }

    if validate_time_format(cleaned.as_str()) {
        return cleaned;
    }

    raw.to_string()
}

pub fn time_string_to_display<'a>(time_str: impl Into<Option<&'a str>>) -> String {
    time_str.into().unwrap_or_default().to_string()
}

pub fn display_time_to_api_format<'a>(time_str: impl Into<Option<&'a str>>) -> String {
    match time_str.into() {
        Some(s) if !trim_blank(s).is_empty() => format_time_input(s),
        _ => String::new(),
    }
}

/// Reads a valid 12-hour string into a clock time. `12:xx AM` is just after
/// midnight and `12:xx PM` just after noon.
pub fn parse_display_time(time_str: &str) -> Option<NaiveTime> {
    let caps = TIME_FORMAT.captures(trim_blank(time_str))?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let is_pm = caps[3].eq_ignore_ascii_case("PM");

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Minutes from `start` to `event`, both 12-hour strings.
///
/// An event earlier on the clock than the start is taken to be on the
/// following day, so the result is always in `0..1440`.
pub fn time_offset_minutes(start: &str, event: &str) -> Option<i64> {
    let start = parse_display_time(start)?;
    let event = parse_display_time(event)?;
    let minutes = event.signed_duration_since(start).num_minutes();
    Some(minutes.rem_euclid(MINUTES_PER_DAY))
}
