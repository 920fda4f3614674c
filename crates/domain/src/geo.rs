// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Great-circle distance and radius filtering for parking lots.
//!
//! Distances use the haversine formula with a spherical Earth of radius
//! 6371 km, rounded to 2 decimal places. Coordinates are not validated
//! here; non-finite inputs produce non-finite distances, which the radius
//! filter naturally excludes.

use crate::normalize::round2;
use crate::types::ParkingLot;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A parking lot annotated with its distance from a search center.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyLot {
    /// The underlying lot record.
    pub lot: ParkingLot,
    /// Great-circle distance from the search center in kilometers.
    pub distance_km: f64,
}

/// Computes the great-circle distance between two coordinates.
///
/// # Arguments
///
/// * `lat1`, `lng1` - First point in degrees
/// * `lat2`, `lng2` - Second point in degrees
///
/// # Returns
///
/// Distance in kilometers, rounded to 2 decimal places.
#[must_use]
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat: f64 = (lat2 - lat1).to_radians();
    let d_lng: f64 = (lng2 - lng1).to_radians();

    let sin_lat: f64 = (d_lat / 2.0).sin();
    let sin_lng: f64 = (d_lng / 2.0).sin();

    let a: f64 = sin_lat.mul_add(
        sin_lat,
        lat1.to_radians().cos() * lat2.to_radians().cos() * sin_lng * sin_lng,
    );
    let c: f64 = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round2(EARTH_RADIUS_KM * c)
}

/// Filters lots to those within `radius_km` of a center point.
///
/// Every lot is annotated with its distance from the center; lots farther
/// than the radius are dropped and the remainder is sorted by ascending
/// distance.
///
/// # Arguments
///
/// * `lots` - Candidate lots
/// * `center_lat`, `center_lng` - Search center in degrees
/// * `radius_km` - Maximum distance in kilometers (inclusive)
#[must_use]
pub fn filter_by_radius(
    lots: &[ParkingLot],
    center_lat: f64,
    center_lng: f64,
    radius_km: f64,
) -> Vec<NearbyLot> {
    let mut nearby: Vec<NearbyLot> = lots
        .iter()
        .map(|lot| NearbyLot {
            distance_km: distance_km(center_lat, center_lng, lot.lat, lot.lng),
            lot: lot.clone(),
        })
        .filter(|nearby_lot| nearby_lot.distance_km <= radius_km)
        .collect();

    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby
}
