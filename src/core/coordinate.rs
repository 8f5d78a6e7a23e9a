use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::LazyLock;

// Rust's \d is Unicode-aware, so digits are spelled out as ASCII.
static COORDINATE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+\.?[0-9]{0,4}$").expect("coordinate pattern"));

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateAxis {
    #[serde(alias = "lat")]
    Latitude,
    #[serde(alias = "lng")]
    Longitude,
}

impl CoordinateAxis {
    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            CoordinateAxis::Latitude => LATITUDE_RANGE,
            CoordinateAxis::Longitude => LONGITUDE_RANGE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateAxis::Latitude => "lat",
            CoordinateAxis::Longitude => "lng",
        }
    }
}

impl FromStr for CoordinateAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lat" | "latitude" => Ok(CoordinateAxis::Latitude),
            "lng" | "lon" | "longitude" => Ok(CoordinateAxis::Longitude),
            other => Err(format!("unknown coordinate axis: {}", other)),
        }
    }
}

/// A coordinate as it reaches a form handler: typed text, a number from a
/// saved record, or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateInput<'a> {
    Empty,
    Text(&'a str),
    Number(f64),
}

impl<'a> CoordinateInput<'a> {
    /// Text the format rule runs against, or `None` when the field is unset.
    ///
    /// A zero number counts as unset, same as a cleared numeric input. NaN is
    /// rendered as `"NaN"` and fails the format rule.
    pub fn as_text(&self) -> Option<Cow<'a, str>> {
        match *self {
            CoordinateInput::Empty => None,
            CoordinateInput::Text("") => None,
            CoordinateInput::Text(s) => Some(Cow::Borrowed(s)),
            CoordinateInput::Number(n) if n == 0.0 => None,
            CoordinateInput::Number(n) => Some(Cow::Owned(n.to_string())),
        }
    }
}

impl<'a> From<&'a str> for CoordinateInput<'a> {
    fn from(value: &'a str) -> Self {
        CoordinateInput::Text(value)
    }
}

impl<'a> From<&'a String> for CoordinateInput<'a> {
    fn from(value: &'a String) -> Self {
        CoordinateInput::Text(value.as_str())
    }
}

impl From<f64> for CoordinateInput<'_> {
    fn from(value: f64) -> Self {
        CoordinateInput::Number(value)
    }
}

impl<'a> From<Option<&'a str>> for CoordinateInput<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(CoordinateInput::Empty, CoordinateInput::Text)
    }
}

impl From<Option<f64>> for CoordinateInput<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(CoordinateInput::Empty, CoordinateInput::Number)
    }
}

pub fn validate_latitude<'a>(value: impl Into<CoordinateInput<'a>>) -> bool {
    validate_coordinate(value.into(), CoordinateAxis::Latitude)
}

pub fn validate_longitude<'a>(value: impl Into<CoordinateInput<'a>>) -> bool {
    validate_coordinate(value.into(), CoordinateAxis::Longitude)
}

pub fn validate_coordinate(input: CoordinateInput<'_>, axis: CoordinateAxis) -> bool {
    let Some(text) = input.as_text() else {
        return true;
    };

    if !COORDINATE_FORMAT.is_match(&text) {
        return false;
    }

    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => axis.range().contains(&value),
        _ => false,
    }
}

/// Cleans coordinate text while it is being typed.
///
/// The result may be partial (`"-"`, `"12."`) and is not range checked;
/// that is left to [`validate_coordinate`]. Both axes clean the same way.
pub fn format_coordinate(input: &str, _axis: CoordinateAxis) -> String {
    let mut cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if let Some(first_dot) = cleaned.find('.') {
        let (head, tail) = cleaned.split_at(first_dot + 1);
        cleaned = format!("{}{}", head, tail.replace('.', ""));
    }

    let minus_count = cleaned.matches('-').count();
    let misplaced_minus = minus_count == 1 && !cleaned.starts_with('-');
    if minus_count > 1 || misplaced_minus {
        cleaned.retain(|c| c != '-');
        // Only the raw input decides the sign, an interior '-' is dropped.
        if input.starts_with('-') {
            cleaned.insert(0, '-');
        }
    }

    cleaned
}
