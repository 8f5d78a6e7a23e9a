pub mod checker;
pub mod coordinate;
pub mod email;
pub mod field;
pub mod phone;
pub mod time;

pub use crate::domain::model::{CheckReport, FieldIssue, FieldKind, RowIssue};
pub use crate::utils::error::Result;
pub use coordinate::{
    format_coordinate, validate_coordinate, validate_latitude, validate_longitude,
    CoordinateAxis, CoordinateInput,
};
pub use email::{validate_email, validate_optional_email};
pub use phone::{format_phone, validate_optional_phone, validate_phone};
pub use time::{
    display_time_to_api_format, format_time_input, parse_display_time, time_offset_minutes,
    time_string_to_display, validate_time_format,
};
