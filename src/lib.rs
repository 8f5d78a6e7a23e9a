pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::CheckConfig;
pub use crate::core::checker::BatchChecker;
pub use crate::core::{
    display_time_to_api_format, format_coordinate, format_phone, format_time_input,
    time_string_to_display, validate_email, validate_latitude, validate_longitude,
    validate_phone, validate_time_format, CoordinateAxis, CoordinateInput,
};
pub use domain::forms::{
    ExerciseForm, HiraEntryForm, MapMarkerForm, MselEventForm, ParticipantForm,
};
pub use domain::model::{CheckReport, FieldIssue, FieldKind, RowIssue};
pub use utils::error::{FieldsError, Result};
