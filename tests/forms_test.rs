use chrono::{TimeZone, Utc};
use exrsim_fields::utils::validation::Validate;
use exrsim_fields::{
    ExerciseForm, FieldsError, HiraEntryForm, MapMarkerForm, MselEventForm, ParticipantForm,
};

#[test]
fn test_participant_reports_every_problem() {
    let form = ParticipantForm {
        first_name: "".to_string(),
        last_name: "Okafor".to_string(),
        email: "not-an-email".to_string(),
        phone: "705555".to_string(),
        cell_phone: "705-555-0199".to_string(),
        ..Default::default()
    };

    let fields: Vec<String> = form.issues().into_iter().map(|i| i.field).collect();
    assert_eq!(fields, vec!["firstName", "email", "phone"]);

    match form.validate() {
        Err(FieldsError::InvalidFieldError { field, reason, .. }) => {
            assert_eq!(field, "firstName");
            assert_eq!(reason, "firstName is required");
        }
        other => panic!("expected InvalidFieldError, got {:?}", other),
    }
}

#[test]
fn test_participant_from_backend_json() {
    let json = serde_json::json!({
        "firstName": "Sam",
        "lastName": "Lee",
        "email": "sam.lee@example.org",
        "phone": "7055550100",
        "homePhone": "",
        "role": "safety_officer"
    });
    let form: ParticipantForm = serde_json::from_value(json).unwrap();

    assert_eq!(form.issues().len(), 1);
    let form = form.normalized();
    assert_eq!(form.phone, "705-555-0100");
    assert!(form.validate().is_ok());
}

#[test]
fn test_hira_coordinates_are_optional_but_checked() {
    let mut entry = HiraEntryForm {
        name: "Wildfire".to_string(),
        disaster_type: "wildfire".to_string(),
        ..Default::default()
    };
    assert!(entry.validate().is_ok());

    entry.latitude = "46.49.17".to_string();
    assert_eq!(entry.issues()[0].field, "latitude");

    let entry = entry.normalized();
    assert_eq!(entry.latitude, "46.4917");
    assert!(entry.validate().is_ok());
}

#[test]
fn test_hira_from_backend_json() {
    let record = |latitude: serde_json::Value, longitude: serde_json::Value| {
        serde_json::json!({
            "id": "3f6c2a9e-0000-4000-8000-000000000001",
            "name": "Spring flood",
            "description": "Snowmelt flooding along the river",
            "notes": "",
            "disaster_type": "flood",
            "latitude": latitude,
            "longitude": longitude,
            "frequency": 4,
            "fatalities": 1,
            "injuries": 2,
            "evacuation": 3,
            "property_damage": 2,
            "critical_infrastructure": 1,
            "environmental_damage": 1,
            "business_financial_impact": 1,
            "psychosocial_impact": 1,
            "change_in_frequency": [false, true, false, false],
            "change_in_vulnerability": [false, false, true],
            "created_at": "2026-03-01T12:00:00Z"
        })
    };

    let entry: HiraEntryForm =
        serde_json::from_value(record(serde_json::json!(46.4917), serde_json::json!(-80.993)))
            .unwrap();
    assert_eq!(entry.latitude, "46.4917");
    assert_eq!(entry.longitude, "-80.993");
    assert_eq!(entry.change_in_frequency, [false, true, false, false]);
    assert_eq!(entry.risk_total(), 12);
    assert!(entry.validate().is_ok());

    let unplaced: HiraEntryForm =
        serde_json::from_value(record(serde_json::json!(0.0), serde_json::json!(0.0))).unwrap();
    assert_eq!(unplaced.latitude, "");
    assert_eq!(unplaced.longitude, "");
    assert!(unplaced.validate().is_ok());

    let typed: HiraEntryForm =
        serde_json::from_value(record(serde_json::json!("46.49.17"), serde_json::Value::Null))
            .unwrap();
    assert_eq!(typed.latitude, "46.49.17");
    assert_eq!(typed.longitude, "");
    assert_eq!(typed.issues()[0].field, "latitude");
}

#[test]
fn test_hira_score_bounds() {
    let entry = HiraEntryForm {
        name: "Ice storm".to_string(),
        disaster_type: "severe_weather".to_string(),
        frequency: 6,
        fatalities: 4,
        injuries: 3,
        evacuation: 3,
        property_damage: 3,
        critical_infrastructure: 3,
        environmental_damage: 3,
        business_financial_impact: 2,
        psychosocial_impact: 2,
        ..Default::default()
    };
    assert!(entry.issues().is_empty());
    assert_eq!(entry.risk_total(), 23);

    let over = HiraEntryForm {
        fatalities: 5,
        ..entry
    };
    let issues = over.issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Value must be between 0 and 4");
}

#[test]
fn test_msel_event_number_and_time() {
    let event = MselEventForm {
        event_number: 0,
        event_description: "Evacuation order issued".to_string(),
        scheduled_time: "25:00".to_string(),
        ..Default::default()
    };
    let fields: Vec<String> = event.issues().into_iter().map(|i| i.field).collect();
    assert_eq!(fields, vec!["event_number", "scheduled_time"]);
    assert_eq!(event.normalized().scheduled_time, "25:00");
    assert_eq!(event.time_offset_from("9:00 AM"), None);
}

#[test]
fn test_exercise_dates_and_location() {
    let start = Utc.with_ymd_and_hms(2026, 5, 12, 13, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 5, 12, 17, 0, 0).unwrap();
    let exercise = ExerciseForm {
        name: "Operation Claybelt".to_string(),
        description: "Regional flood tabletop".to_string(),
        start_date: start,
        end_date: end,
        location_latitude: "49.2827".to_string(),
        location_longitude: "-123.1207".to_string(),
        goals: vec!["Test EOC activation".to_string()],
        objectives: vec![],
    };
    assert!(exercise.validate().is_ok());

    let reversed = ExerciseForm {
        start_date: end,
        end_date: start,
        goals: vec!["".to_string()],
        ..exercise
    };
    let fields: Vec<String> = reversed.issues().into_iter().map(|i| i.field).collect();
    assert_eq!(fields, vec!["end_date", "goals[0]"]);
}

#[test]
fn test_map_marker_validation() {
    let marker = MapMarkerForm::at("Reception centre", 46.5, -81.0);
    assert!(marker.validate().is_ok());
    assert_eq!(marker.position(), Some((46.5, -81.0)));

    let off_map = MapMarkerForm::at("Nowhere", 95.0, 0.0);
    let err = off_map.validate().unwrap_err();
    assert!(matches!(err, FieldsError::InvalidFieldError { ref field, .. } if field == "latitude"));
}
