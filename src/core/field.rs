use crate::core::coordinate::{format_coordinate, validate_coordinate, CoordinateAxis, CoordinateInput};
use crate::core::email::validate_email;
use crate::core::phone::{format_phone, validate_phone};
use crate::core::time::{format_time_input, validate_time_format};
use crate::domain::model::FieldKind;
use std::fmt;
use std::str::FromStr;

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Latitude,
        FieldKind::Longitude,
        FieldKind::Phone,
        FieldKind::Email,
        FieldKind::Time,
    ];

    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldKind::Latitude => {
                validate_coordinate(CoordinateInput::Text(value), CoordinateAxis::Latitude)
            }
            FieldKind::Longitude => {
                validate_coordinate(CoordinateInput::Text(value), CoordinateAxis::Longitude)
            }
            FieldKind::Phone => validate_phone(value),
            FieldKind::Email => validate_email(value),
            FieldKind::Time => validate_time_format(value),
        }
    }

    pub fn format(&self, value: &str) -> String {
        match self {
            FieldKind::Latitude => format_coordinate(value, CoordinateAxis::Latitude),
            FieldKind::Longitude => format_coordinate(value, CoordinateAxis::Longitude),
            FieldKind::Phone => format_phone(value),
            FieldKind::Email => value.trim().to_string(),
            FieldKind::Time => format_time_input(value),
        }
    }

    /// Whether the bare validator already accepts an empty value.
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            FieldKind::Latitude | FieldKind::Longitude | FieldKind::Time
        )
    }

    pub fn rule_message(&self) -> &'static str {
        match self {
            FieldKind::Latitude => {
                "Latitude must be between -90 and 90 with up to 4 decimal places"
            }
            FieldKind::Longitude => {
                "Longitude must be between -180 and 180 with up to 4 decimal places"
            }
            FieldKind::Phone => "Phone must be in format XXX-XXX-XXXX",
            FieldKind::Email => "Please enter a valid email address",
            FieldKind::Time => "Time must be in format H:MM AM/PM",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Latitude => "latitude",
            FieldKind::Longitude => "longitude",
            FieldKind::Phone => "phone",
            FieldKind::Email => "email",
            FieldKind::Time => "time",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lat" | "latitude" => Ok(FieldKind::Latitude),
            "lng" | "lon" | "longitude" => Ok(FieldKind::Longitude),
            "phone" => Ok(FieldKind::Phone),
            "email" => Ok(FieldKind::Email),
            "time" => Ok(FieldKind::Time),
            other => Err(format!(
                "unknown field kind '{}' (expected lat, lng, phone, email or time)",
                other
            )),
        }
    }
}
