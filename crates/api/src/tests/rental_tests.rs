// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Peer-to-peer rental handler tests: pricing modes and vehicle
//! compatibility.

use crate::{
    ApiError, PriceRentalRequest, PriceRentalResponse, RentalListingRecord, price_rental,
};

fn hourly_listing() -> RentalListingRecord {
    RentalListingRecord {
        vehicle_type: Some(String::from("car")),
        hourly_price: Some(40.0),
        rental_duration_mode: Some(String::from("hourly")),
        rental_units: Some(3.0),
        ..RentalListingRecord::default()
    }
}

#[test]
fn test_hourly_listing_bills_units() {
    let request = PriceRentalRequest {
        listing: hourly_listing(),
        renter_vehicle_type: None,
    };

    let response: PriceRentalResponse = price_rental(&request).expect("valid request");

    assert!((response.amount - 120.0).abs() < f64::EPSILON);
    assert!(response.compatible);
}

#[test]
fn test_stored_total_takes_precedence() {
    let request = PriceRentalRequest {
        listing: RentalListingRecord {
            rental_total_price: Some(900.0),
            ..hourly_listing()
        },
        renter_vehicle_type: None,
    };

    let response: PriceRentalResponse = price_rental(&request).expect("valid request");

    assert!((response.amount - 900.0).abs() < f64::EPSILON);
}

#[test]
fn test_window_derived_daily_billing() {
    // 2 days and 1 hour round up to 3 billable days
    let request = PriceRentalRequest {
        listing: RentalListingRecord {
            daily_price: Some(150.0),
            rental_start_time: Some(String::from("2026-03-02T10:00:00Z")),
            rental_end_time: Some(String::from("2026-03-04T11:00:00Z")),
            ..RentalListingRecord::default()
        },
        renter_vehicle_type: None,
    };

    let response: PriceRentalResponse = price_rental(&request).expect("valid request");

    assert!((response.amount - 450.0).abs() < f64::EPSILON);
}

#[test]
fn test_bike_fits_in_car_listing() {
    let request = PriceRentalRequest {
        listing: hourly_listing(),
        renter_vehicle_type: Some(String::from("bike")),
    };

    let response: PriceRentalResponse = price_rental(&request).expect("valid request");

    assert!(response.compatible);
}

#[test]
fn test_suv_does_not_fit_in_car_listing() {
    let request = PriceRentalRequest {
        listing: hourly_listing(),
        renter_vehicle_type: Some(String::from("suv")),
    };

    let response: PriceRentalResponse = price_rental(&request).expect("valid request");

    assert!(!response.compatible);
    // Incompatibility does not zero the amount; callers decide what to show
    assert!((response.amount - 120.0).abs() < f64::EPSILON);
}

#[test]
fn test_unlabeled_listing_is_treated_as_car_sized() {
    let request = PriceRentalRequest {
        listing: RentalListingRecord {
            vehicle_type: None,
            ..hourly_listing()
        },
        renter_vehicle_type: Some(String::from("car")),
    };

    let response: PriceRentalResponse = price_rental(&request).expect("valid request");

    assert!(response.compatible);
}

#[test]
fn test_unknown_rental_mode_is_rejected() {
    let request = PriceRentalRequest {
        listing: RentalListingRecord {
            rental_duration_mode: Some(String::from("weekly")),
            ..hourly_listing()
        },
        renter_vehicle_type: None,
    };

    assert!(matches!(
        price_rental(&request),
        Err(ApiError::InvalidInput { ref field, .. }) if field == "rental_duration_mode"
    ));
}

#[test]
fn test_unknown_vehicle_type_is_rejected() {
    let request = PriceRentalRequest {
        listing: hourly_listing(),
        renter_vehicle_type: Some(String::from("lorry")),
    };

    assert!(matches!(
        price_rental(&request),
        Err(ApiError::InvalidInput { ref field, .. }) if field == "size_class"
    ));
}
