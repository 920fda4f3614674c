// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duration-estimation and holiday look-ahead handler tests.

use crate::{
    ApiError, EstimateDurationRequest, EstimateDurationResponse, UpcomingHolidaysRequest,
    UpcomingHolidaysResponse, estimate_duration, upcoming_holidays,
};

use super::helpers::{create_test_booking, create_test_holiday};

#[test]
fn test_no_history_falls_back_to_default() {
    let request = EstimateDurationRequest {
        user_bookings: Vec::new(),
        parking_bookings: Vec::new(),
        parking_id: None,
    };

    let response: EstimateDurationResponse = estimate_duration(&request);

    assert_eq!(response.estimated_minutes, 60);
    assert_eq!(response.confidence, "none");
    assert_eq!(response.formatted_duration, "1h");
    assert_eq!(response.message, "No history available. Estimated 1 hour.");
}

#[test]
fn test_history_at_lot_yields_high_confidence() {
    let request = EstimateDurationRequest {
        user_bookings: vec![
            create_test_booking("lot-1", 120.0),
            create_test_booking("lot-1", 60.0),
            create_test_booking("lot-2", 30.0),
        ],
        parking_bookings: vec![
            create_test_booking("lot-1", 45.0),
            create_test_booking("lot-1", 55.0),
        ],
        parking_id: Some(String::from("lot-1")),
    };

    let response: EstimateDurationResponse = estimate_duration(&request);

    // 0.6 * 90 + 0.3 * 70 + 0.1 * 50 = 80
    assert_eq!(response.estimated_minutes, 80);
    assert_eq!(response.confidence, "high");
    assert_eq!(response.formatted_duration, "1h 20m");
    assert!((response.estimated_hours - 1.3).abs() < f64::EPSILON);
}

#[test]
fn test_lot_only_history_yields_low_confidence() {
    let request = EstimateDurationRequest {
        user_bookings: Vec::new(),
        parking_bookings: vec![create_test_booking("lot-1", 50.0)],
        parking_id: Some(String::from("lot-1")),
    };

    let response: EstimateDurationResponse = estimate_duration(&request);

    assert_eq!(response.estimated_minutes, 50);
    assert_eq!(response.confidence, "low");
    assert_eq!(response.message, "Most people park for 50m here.");
}

#[test]
fn test_upcoming_holidays_defaults_to_seven_days() {
    let request = UpcomingHolidaysRequest {
        holidays: vec![
            create_test_holiday("2026-03-02", "Today", None),
            create_test_holiday("2026-03-09", "Horizon Edge", None),
            create_test_holiday("2026-03-10", "Past Horizon", None),
        ],
        today: String::from("2026-03-02"),
        horizon_days: None,
    };

    let response: UpcomingHolidaysResponse =
        upcoming_holidays(&request).expect("valid request");

    let names: Vec<&str> = response.holidays.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Today", "Horizon Edge"]);
}

#[test]
fn test_upcoming_holidays_honors_explicit_horizon() {
    let request = UpcomingHolidaysRequest {
        holidays: vec![
            create_test_holiday("2026-03-04", "Soon", None),
            create_test_holiday("2026-03-09", "Later", None),
        ],
        today: String::from("2026-03-02"),
        horizon_days: Some(3),
    };

    let response: UpcomingHolidaysResponse =
        upcoming_holidays(&request).expect("valid request");

    assert_eq!(response.holidays.len(), 1);
    assert_eq!(response.holidays[0].name, "Soon");
}

#[test]
fn test_upcoming_holidays_rejects_malformed_today() {
    let request = UpcomingHolidaysRequest {
        holidays: Vec::new(),
        today: String::from("yesterday"),
        horizon_days: None,
    };

    assert!(matches!(
        upcoming_holidays(&request),
        Err(ApiError::InvalidInput { ref field, .. }) if field == "today"
    ));
}
