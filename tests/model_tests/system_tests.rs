//! Tests for the data model
//!
//! These tests verify:
//! - Building a System from a parsed JSON document
//! - Round-tripping the document through the model
//! - Station index construction
//! - Direction index validation
//! - Update envelope parsing

use serde_json::json;
use transitboard::model::{direction_slot, StationIndex, System, Update};
use transitboard::{ErrorKind, TransitError};

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_document() -> serde_json::Value {
    json!({
        "name": "Teecom Transit",
        "tagline": "Arrivals at a glance",
        "timeMax": 60,
        "stops": [
            {
                "name": "Tee Street",
                "id": "tee",
                "coord": {"lat": 37.8044, "lon": -122.2712},
                "directions": ["Northbound", "Southbound"],
                "lines": [
                    {"sh": {"name": "Shoreline", "id": "sh", "times": [], "color": "#1f77b4"}},
                    {"ex": {"name": "Express", "id": "ex", "times": [5, 20], "color": "#d62728"}}
                ]
            },
            {
                "name": "Harbor Plaza",
                "id": "harbor",
                "coord": {"lat": 37.7955, "lon": -122.2766},
                "directions": ["Eastbound", "Westbound"],
                "lines": [{}, {}]
            }
        ]
    })
}

// =============================================================================
// Document Construction Tests
// =============================================================================

#[test]
fn test_from_document_reads_all_fields() {
    let system = System::from_document(sample_document()).unwrap();

    assert_eq!(system.name, "Teecom Transit");
    assert_eq!(system.tagline, "Arrivals at a glance");
    assert_eq!(system.time_max, 60);
    assert_eq!(system.stops.len(), 2);

    let tee = &system.stops[0];
    assert_eq!(tee.id, "tee");
    assert_eq!(tee.directions, ["Northbound".to_string(), "Southbound".to_string()]);
    assert_eq!(tee.coord.lat, 37.8044);
    assert_eq!(tee.coord.lon, -122.2712);
    assert_eq!(tee.line_count(), 2);

    let express = tee.line(1, "ex").unwrap();
    assert_eq!(express.name, "Express");
    assert_eq!(express.times, vec![5, 20]);
    assert_eq!(express.color, "#d62728");
}

#[test]
fn test_round_trip_document() {
    let document = sample_document();
    let system = System::from_document(document.clone()).unwrap();

    assert_eq!(system.to_document().unwrap(), document);
}

#[test]
fn test_missing_times_default_to_empty() {
    let mut document = sample_document();
    document["stops"][0]["lines"][0]["sh"]
        .as_object_mut()
        .unwrap()
        .remove("times");

    let system = System::from_document(document).unwrap();
    assert!(system.stops[0].line(0, "sh").unwrap().times.is_empty());
}

#[test]
fn test_malformed_document_is_fatal() {
    let err = System::from_document(json!({"name": "No tagline"})).unwrap_err();

    assert!(matches!(err, TransitError::Config(_)));
    assert_eq!(err.kind(), ErrorKind::FatalStartup);
}

#[test]
fn test_three_directions_rejected() {
    let mut document = sample_document();
    document["stops"][0]["directions"] = json!(["North", "South", "Up"]);

    assert!(System::from_document(document).is_err());
}

#[test]
fn test_line_lookup_out_of_range_direction() {
    let system = System::from_document(sample_document()).unwrap();
    let tee = &system.stops[0];

    assert!(tee.line(2, "sh").is_none());
    assert!(tee.line(0, "ex").is_none());
    assert!(tee.line(0, "sh").is_some());
}

// =============================================================================
// Station Index Tests
// =============================================================================

#[test]
fn test_index_positions() {
    let system = System::from_document(sample_document()).unwrap();
    let index = StationIndex::build(&system.stops).unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index.position("tee"), Some(0));
    assert_eq!(index.position("harbor"), Some(1));
    assert_eq!(index.position("nowhere"), None);
    assert!(index.contains("tee"));
}

#[test]
fn test_index_rejects_duplicate_ids() {
    let mut system = System::from_document(sample_document()).unwrap();
    system.stops[1].id = "tee".to_string();

    let err = StationIndex::build(&system.stops).unwrap_err();
    assert!(matches!(err, TransitError::DuplicateStation(ref id) if id == "tee"));
    assert_eq!(err.kind(), ErrorKind::FatalStartup);
}

#[test]
fn test_index_empty_system() {
    let index = StationIndex::build(&[]).unwrap();
    assert!(index.is_empty());
}

// =============================================================================
// Direction Validation Tests
// =============================================================================

#[test]
fn test_direction_slot_valid() {
    assert_eq!(direction_slot(0).unwrap(), 0);
    assert_eq!(direction_slot(1).unwrap(), 1);
}

#[test]
fn test_direction_slot_upper_bound() {
    for index in [2, 5, i64::MAX] {
        let err = direction_slot(index).unwrap_err();
        assert!(matches!(err, TransitError::IndexOutOfBounds));
        assert_eq!(err.kind(), ErrorKind::ValidationFailure);
    }
}

#[test]
fn test_direction_slot_negative() {
    for index in [-1, i64::MIN] {
        assert!(matches!(
            direction_slot(index),
            Err(TransitError::IndexOutOfBounds)
        ));
    }
}

// =============================================================================
// Update Envelope Tests
// =============================================================================

#[test]
fn test_update_parse() {
    let body = br#"{"stops": [{"stationID": "tee",
        "lines": [{"lineID": "sh", "index": 0, "times": [3, 12, 27]},
                  {"lineID": "ex", "index": 1, "times": []}]}]}"#;

    let update = Update::from_slice(body).unwrap();

    assert_eq!(update.stops.len(), 1);
    assert_eq!(update.stops[0].station_id, "tee");
    assert_eq!(update.line_update_count(), 2);
    assert_eq!(update.stops[0].lines[0].line_id, "sh");
    assert_eq!(update.stops[0].lines[0].index, 0);
    assert_eq!(update.stops[0].lines[0].times, vec![3, 12, 27]);
}

#[test]
fn test_update_parse_negative_index() {
    let body = br#"{"stops": [{"stationID": "tee",
        "lines": [{"lineID": "sh", "index": -1, "times": [1]}]}]}"#;

    let update = Update::from_slice(body).unwrap();
    assert_eq!(update.stops[0].lines[0].index, -1);
}

#[test]
fn test_update_parse_garbage() {
    let err = Update::from_slice(b"{not json").unwrap_err();

    assert!(matches!(err, TransitError::MalformedUpdate(_)));
    assert_eq!(err.kind(), ErrorKind::BadRequest);
}

#[test]
fn test_update_parse_wrong_types() {
    let body = br#"{"stops": [{"stationID": "tee",
        "lines": [{"lineID": "sh", "index": "zero", "times": [1]}]}]}"#;

    assert!(Update::from_slice(body).is_err());
}

#[test]
fn test_empty_update_envelope() {
    let update = Update::from_slice(b"{}").unwrap();
    assert!(update.stops.is_empty());
    assert_eq!(update.line_update_count(), 0);
}
