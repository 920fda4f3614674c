// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot-allocation handler tests: boundary parsing, defaults, and the
//! no-slot-available sentinel.

use crate::{AllocateSlotRequest, AllocateSlotResponse, ApiError, SlotRecord, allocate_slot};

use super::helpers::create_test_slot;

fn request_with(slots: Vec<SlotRecord>) -> AllocateSlotRequest {
    AllocateSlotRequest {
        slots,
        vehicle_type: String::from("car"),
        duration_hours: 1.0,
    }
}

#[test]
fn test_empty_slot_list_allocates_nothing() {
    let response: AllocateSlotResponse =
        allocate_slot(&request_with(Vec::new())).expect("valid request");

    assert!(response.allocated.is_none());
    assert_eq!(response.compatible_count, 0);
}

#[test]
fn test_occupied_slots_allocate_nothing() {
    let slots = vec![
        create_test_slot("s1", "car", "occupied", 0, 5.0),
        create_test_slot("s2", "suv", "occupied", 0, 8.0),
    ];

    let response: AllocateSlotResponse =
        allocate_slot(&request_with(slots)).expect("valid request");

    assert!(response.allocated.is_none());
}

#[test]
fn test_perfect_fit_wins_over_oversized() {
    let slots = vec![
        create_test_slot("suv-slot", "suv", "available", 0, 0.0),
        create_test_slot("car-slot", "car", "available", 0, 0.0),
    ];

    let response: AllocateSlotResponse =
        allocate_slot(&request_with(slots)).expect("valid request");

    let allocated = response.allocated.expect("a slot is available");
    assert_eq!(allocated.slot_id, "car-slot");
    assert!(allocated.score.abs() < f64::EPSILON);
    assert!(allocated.size_compatibility.abs() < f64::EPSILON);
}

#[test]
fn test_compatible_count_excludes_undersized_slots() {
    let slots = vec![
        create_test_slot("bike-slot", "bike", "available", 0, 1.0),
        create_test_slot("car-slot", "car", "available", 0, 2.0),
        create_test_slot("suv-slot", "suv", "available", 0, 3.0),
        create_test_slot("taken", "suv", "occupied", 0, 4.0),
    ];

    let response: AllocateSlotResponse =
        allocate_slot(&request_with(slots)).expect("valid request");

    // bike slot is scored (last resort) but not counted as compatible
    assert_eq!(response.compatible_count, 2);
    assert_eq!(
        response.allocated.expect("a slot is available").slot_id,
        "car-slot"
    );
}

#[test]
fn test_absent_floor_and_distance_default_to_zero() {
    let slots = vec![SlotRecord {
        id: String::from("bare"),
        parking_id: String::from("lot-1"),
        size: String::from("car"),
        status: String::from("available"),
        floor: None,
        distance_from_entrance: None,
    }];

    let response: AllocateSlotResponse =
        allocate_slot(&request_with(slots)).expect("valid request");

    let allocated = response.allocated.expect("a slot is available");
    assert_eq!(allocated.floor, 0);
    assert!(allocated.distance_from_entrance.abs() < f64::EPSILON);
    assert!(allocated.score.abs() < f64::EPSILON);
}

#[test]
fn test_unknown_vehicle_type_is_rejected() {
    let request = AllocateSlotRequest {
        slots: vec![create_test_slot("s1", "car", "available", 0, 5.0)],
        vehicle_type: String::from("truck"),
        duration_hours: 1.0,
    };

    assert!(matches!(
        allocate_slot(&request),
        Err(ApiError::InvalidInput { ref field, .. }) if field == "size_class"
    ));
}

#[test]
fn test_unknown_slot_status_is_rejected() {
    let slots = vec![create_test_slot("s1", "car", "reserved", 0, 5.0)];

    assert!(matches!(
        allocate_slot(&request_with(slots)),
        Err(ApiError::InvalidInput { ref field, .. }) if field == "status"
    ));
}

#[test]
fn test_negative_entrance_distance_is_rejected() {
    let slots = vec![create_test_slot("s1", "car", "available", 0, -4.0)];

    assert!(matches!(
        allocate_slot(&request_with(slots)),
        Err(ApiError::DomainRuleViolation { ref rule, .. })
            if rule == "non_negative_entrance_distance"
    ));
}

#[test]
fn test_score_breakdown_is_reported() {
    // suv slot for a car at the only distance: 0.3*0.5 + 1.0*0.3 + 0 = 0.45
    let slots = vec![create_test_slot("suv-slot", "suv", "available", 0, 10.0)];

    let response: AllocateSlotResponse =
        allocate_slot(&request_with(slots)).expect("valid request");

    let allocated = response.allocated.expect("a slot is available");
    assert!((allocated.size_compatibility - 0.3).abs() < f64::EPSILON);
    assert!((allocated.distance_factor - 1.0).abs() < f64::EPSILON);
    assert!(allocated.duration_suitability.abs() < f64::EPSILON);
    assert!((allocated.score - 0.45).abs() < f64::EPSILON);
}
