//! Tests for the API response envelope and payload tolerance
//!
//! Every endpoint wraps its payload in {success, data?, error?,
//! message?}. The client must surface the most specific failure text
//! available and tolerate the payload quirks the backend has shipped:
//! numeric weights, short activity keys, string-keyed floor maps.

use parktui::api::{
    ActivityEntry, Envelope, ParkingStatus, RecognitionResult, SystemStats, VehicleRecord,
};
use parktui::logic::{format, slots};

#[test]
fn success_envelope_yields_its_payload() {
    let envelope: Envelope<Vec<String>> =
        serde_json::from_str(r#"{"success": true, "data": ["a", "b"]}"#).unwrap();
    assert_eq!(envelope.into_data().unwrap(), vec!["a", "b"]);
}

#[test]
fn failure_text_prefers_error_then_message_then_generic() {
    let with_both: Envelope<()> = serde_json::from_str(
        r#"{"success": false, "error": "No license plate detected", "message": "failed"}"#,
    )
    .unwrap();
    assert_eq!(
        with_both.into_data().unwrap_err().to_string(),
        "No license plate detected"
    );

    let message_only: Envelope<()> =
        serde_json::from_str(r#"{"success": false, "message": "Parking lot is full"}"#).unwrap();
    assert_eq!(
        message_only.into_data().unwrap_err().to_string(),
        "Parking lot is full"
    );

    let bare: Envelope<()> = serde_json::from_str(r#"{"success": false}"#).unwrap();
    assert_eq!(bare.into_data().unwrap_err().to_string(), "Request failed");
}

#[test]
fn missing_payload_on_success_is_an_error_not_a_panic() {
    let envelope: Envelope<Vec<String>> =
        serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(envelope.into_data().is_err());
}

#[test]
fn acknowledgement_endpoints_return_the_server_message() {
    let envelope: Envelope<serde_json::Value> = serde_json::from_str(
        r#"{"success": true, "message": "Vehicle ABC123 exited successfully"}"#,
    )
    .unwrap();
    assert_eq!(
        envelope.into_message().unwrap(),
        "Vehicle ABC123 exited successfully"
    );
}

#[test]
fn process_response_with_numeric_weight_renders_correctly() {
    // Response shape observed from the recognition endpoint: weight as
    // a bare number, floor as a number, slot pre-coded
    let result: RecognitionResult = serde_json::from_str(
        r#"{
            "detection": {"brand_after": "Toyota", "model_after": "Corolla", "yolo_confidence": 0.91},
            "vehicle": {"license_plate": "ABC123", "weight": 1200},
            "parking": {"floor": 2, "slot": "II.C"}
        }"#,
    )
    .unwrap();

    assert_eq!(result.vehicle.license_plate.as_deref(), Some("ABC123"));
    assert_eq!(result.vehicle.weight.as_deref(), Some("1200"));
    assert_eq!(format::display_floor(result.parking.floor), "Floor 2");
    assert_eq!(result.parking.slot.as_deref(), Some("II.C"));
    assert_eq!(
        format::display_weight_kg(result.vehicle.weight.as_deref()),
        "1200 kg"
    );
}

#[test]
fn activity_entries_accept_both_key_generations() {
    let long: ActivityEntry = serde_json::from_str(
        r#"{"brand_corrected": "Honda", "model_corrected": "Civic", "assigned_slot": "I.D"}"#,
    )
    .unwrap();
    let short: ActivityEntry =
        serde_json::from_str(r#"{"brand": "Honda", "model": "Civic", "slot": "I.D"}"#).unwrap();

    assert_eq!(long.brand_corrected, short.brand_corrected);
    assert_eq!(long.model_corrected, short.model_corrected);
    assert_eq!(long.assigned_slot, short.assigned_slot);
}

#[test]
fn status_floor_keys_arrive_as_json_strings() {
    let status: ParkingStatus = serde_json::from_str(
        r#"{
            "1": {"occupied": 2, "available": 18, "total": 20,
                  "occupied_slots": [{"slot_code": "I.A", "license_plate": "AAA111"},
                                     {"slot_code": "I.B"}]},
            "2": {"occupied": 0, "available": 20, "total": 20, "occupied_slots": []},
            "3": {"occupied": 1, "available": 19, "total": 20,
                  "occupied_slots": [{"slot_code": "III.T", "license_plate": "ZZZ999"}]}
        }"#,
    )
    .unwrap();

    assert_eq!(slots::total_parked(&status), 3);
    assert_eq!(slots::floor_percent(status.get(&1).unwrap()), 10);

    // A plate-less occupant still counts as occupied
    let grid = slots::build_slot_grid(1, &status.get(&1).unwrap().occupied_slots);
    let cell = grid.iter().find(|c| c.code == "I.B").unwrap();
    assert!(cell.occupied);
    assert!(cell.occupant.is_none());
}

#[test]
fn stats_default_available_to_full_capacity() {
    let empty: SystemStats = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.available_slots, 60);
    assert_eq!(empty.current_parked, 0);
}

#[test]
fn vehicle_records_tolerate_sparse_rows() {
    let record: VehicleRecord =
        serde_json::from_str(r#"{"id": 7, "license_plate": "ABC123"}"#).unwrap();
    assert_eq!(record.id, 7);
    assert!(record.brand_corrected.is_none());
    assert_eq!(format::dash(record.assigned_slot.as_deref()), "-");
}
