use regex::Regex;
use std::sync::LazyLock;

static PHONE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("phone pattern"));

const MAX_DIGITS: usize = 10;

/// `NNN-NNN-NNNN`, nothing else. Empty input is invalid.
pub fn validate_phone(phone: &str) -> bool {
    PHONE_FORMAT.is_match(phone)
}

/// Like [`validate_phone`], but a blank value passes.
pub fn validate_optional_phone(phone: &str) -> bool {
    phone.trim().is_empty() || validate_phone(phone)
}

/// Groups digits into `DDD-DDD-DDDD` as they are typed.
///
/// Anything that is not an ASCII digit is dropped, and digits past the
/// tenth are ignored.
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}
