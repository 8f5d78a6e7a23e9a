//! Exercise-planning forms and the checks run on them before submit.
//!
//! Field names follow the backend records (participants, HIRA entries, MSEL
//! events, exercises, map objects). Text inputs stay `String` so a half-typed
//! value can be held and reported back as-is.

use crate::core::coordinate::{format_coordinate, CoordinateAxis};
use crate::core::phone::format_phone;
use crate::core::time::{format_time_input, time_offset_minutes};
use crate::domain::model::{FieldIssue, FieldKind};
use crate::utils::error::Result;
use crate::utils::validation::{first_issue, IssueCollector, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub home_phone: String,
    #[serde(default)]
    pub cell_phone: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub role: String,
}

impl ParticipantForm {
    pub fn issues(&self) -> Vec<FieldIssue> {
        let mut issues = IssueCollector::new();
        issues.require_text("firstName", &self.first_name);
        issues.require_text("lastName", &self.last_name);
        issues.check_field("email", FieldKind::Email, &self.email, true);
        issues.check_field("phone", FieldKind::Phone, &self.phone, true);
        issues.check_field("homePhone", FieldKind::Phone, &self.home_phone, false);
        issues.check_field("cellPhone", FieldKind::Phone, &self.cell_phone, false);
        issues.finish()
    }

    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            phone: format_phone(&self.phone),
            home_phone: format_phone(&self.home_phone),
            cell_phone: format_phone(&self.cell_phone),
            ..self.clone()
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

impl Validate for ParticipantForm {
    fn validate(&self) -> Result<()> {
        first_issue(self.issues())
    }
}

/// Hazard Identification and Risk Assessment entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HiraEntryForm {
    pub name: String,
    pub description: String,
    pub disaster_type: String,
    #[serde(default, deserialize_with = "coordinate_text")]
    pub latitude: String,
    #[serde(default, deserialize_with = "coordinate_text")]
    pub longitude: String,
    pub frequency: u8,
    pub fatalities: u8,
    pub injuries: u8,
    pub evacuation: u8,
    pub property_damage: u8,
    pub critical_infrastructure: u8,
    pub environmental_damage: u8,
    pub business_financial_impact: u8,
    pub psychosocial_impact: u8,
    #[serde(default)]
    pub change_in_frequency: [bool; 4],
    #[serde(default)]
    pub change_in_vulnerability: [bool; 3],
}

/// Saved records carry coordinates as numbers, with `0.0` meaning unset.
fn coordinate_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Unset,
        Number(f64),
        Text(String),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Unset => String::new(),
        TextOrNumber::Number(n) if n == 0.0 => String::new(),
        TextOrNumber::Number(n) => n.to_string(),
        TextOrNumber::Text(s) => s,
    })
}

impl Default for HiraEntryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            disaster_type: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            frequency: 1,
            fatalities: 0,
            injuries: 0,
            evacuation: 0,
            property_damage: 0,
            critical_infrastructure: 0,
            environmental_damage: 0,
            business_financial_impact: 0,
            psychosocial_impact: 0,
            change_in_frequency: [false; 4],
            change_in_vulnerability: [false; 3],
        }
    }
}

impl HiraEntryForm {
    pub fn issues(&self) -> Vec<FieldIssue> {
        let mut issues = IssueCollector::new();
        issues.require_text("name", &self.name);
        issues.require_text("disaster_type", &self.disaster_type);
        issues.check_field("latitude", FieldKind::Latitude, &self.latitude, false);
        issues.check_field("longitude", FieldKind::Longitude, &self.longitude, false);

        issues.check_range("frequency", self.frequency, 1..=6);
        issues.check_range("fatalities", self.fatalities, 0..=4);
        issues.check_range("injuries", self.injuries, 0..=3);
        issues.check_range("evacuation", self.evacuation, 0..=3);
        issues.check_range("property_damage", self.property_damage, 0..=3);
        issues.check_range("critical_infrastructure", self.critical_infrastructure, 0..=3);
        issues.check_range("environmental_damage", self.environmental_damage, 0..=3);
        issues.check_range("business_financial_impact", self.business_financial_impact, 0..=2);
        issues.check_range("psychosocial_impact", self.psychosocial_impact, 0..=2);
        issues.finish()
    }

    /// Sum of the consequence categories (frequency excluded).
    pub fn risk_total(&self) -> u32 {
        [
            self.fatalities,
            self.injuries,
            self.evacuation,
            self.property_damage,
            self.critical_infrastructure,
            self.environmental_damage,
            self.business_financial_impact,
            self.psychosocial_impact,
        ]
        .iter()
        .map(|&score| u32::from(score))
        .sum()
    }

    pub fn normalized(&self) -> Self {
        Self {
            latitude: format_coordinate(&self.latitude, CoordinateAxis::Latitude),
            longitude: format_coordinate(&self.longitude, CoordinateAxis::Longitude),
            ..self.clone()
        }
    }
}

impl Validate for HiraEntryForm {
    fn validate(&self) -> Result<()> {
        first_issue(self.issues())
    }
}

/// Master Sequence of Events List entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MselEventForm {
    pub event_number: u32,
    pub event_description: String,
    #[serde(default)]
    pub scheduled_time: String,
    #[serde(default)]
    pub expected_actions: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl MselEventForm {
    pub fn issues(&self) -> Vec<FieldIssue> {
        let mut issues = IssueCollector::new();
        issues.check(
            "event_number",
            &self.event_number.to_string(),
            self.event_number >= 1,
            "Event number must be at least 1",
        );
        issues.require_text("event_description", &self.event_description);
        issues.check_field("scheduled_time", FieldKind::Time, &self.scheduled_time, false);
        issues.finish()
    }

    /// Minutes between the exercise start and this event, if both times are set.
    pub fn time_offset_from(&self, exercise_start: &str) -> Option<i64> {
        time_offset_minutes(exercise_start, &self.scheduled_time)
    }

    pub fn normalized(&self) -> Self {
        Self {
            scheduled_time: format_time_input(self.scheduled_time.as_str()),
            ..self.clone()
        }
    }
}

impl Validate for MselEventForm {
    fn validate(&self) -> Result<()> {
        first_issue(self.issues())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExerciseForm {
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub location_latitude: String,
    #[serde(default)]
    pub location_longitude: String,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
}

impl ExerciseForm {
    pub fn issues(&self) -> Vec<FieldIssue> {
        let mut issues = IssueCollector::new();
        issues.require_text("name", &self.name);
        issues.check(
            "end_date",
            &self.end_date.to_rfc3339(),
            self.end_date >= self.start_date,
            "End date cannot be before start date",
        );
        issues.check_field("location_latitude", FieldKind::Latitude, &self.location_latitude, false);
        issues.check_field(
            "location_longitude",
            FieldKind::Longitude,
            &self.location_longitude,
            false,
        );
        for (index, goal) in self.goals.iter().enumerate() {
            issues.require_text(&format!("goals[{}]", index), goal);
        }
        for (index, objective) in self.objectives.iter().enumerate() {
            issues.require_text(&format!("objectives[{}]", index), objective);
        }
        issues.finish()
    }
}

impl Validate for ExerciseForm {
    fn validate(&self) -> Result<()> {
        first_issue(self.issues())
    }
}

/// An object placed on the exercise map. Unlike form coordinates, a marker
/// must have a position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MapMarkerForm {
    pub label: String,
    pub latitude: String,
    pub longitude: String,
    #[serde(default)]
    pub notes: String,
}

impl MapMarkerForm {
    /// Marker at a clicked map position.
    pub fn at(label: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            label: label.into(),
            latitude: format!("{:.4}", latitude),
            longitude: format!("{:.4}", longitude),
            notes: String::new(),
        }
    }

    pub fn issues(&self) -> Vec<FieldIssue> {
        let mut issues = IssueCollector::new();
        issues.require_text("label", &self.label);
        issues.check_field("latitude", FieldKind::Latitude, &self.latitude, true);
        issues.check_field("longitude", FieldKind::Longitude, &self.longitude, true);
        issues.finish()
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        if !self.issues().is_empty() {
            return None;
        }
        Some((self.latitude.parse().ok()?, self.longitude.parse().ok()?))
    }
}

impl Validate for MapMarkerForm {
    fn validate(&self) -> Result<()> {
        let issues = self.issues();
        if !issues.is_empty() {
            tracing::debug!("Map marker '{}' rejected: {} issue(s)", self.label, issues.len());
        }
        first_issue(issues)
    }
}
