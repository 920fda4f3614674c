// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Holiday, ParkingLot, Slot};
use chrono::NaiveDate;

/// Validates a parking lot record at the boundary.
///
/// # Arguments
///
/// * `lot` - The lot to validate
///
/// # Returns
///
/// * `Ok(())` if the lot is well-formed
/// * `Err(DomainError)` describing the first violated rule
///
/// # Errors
///
/// Returns an error if:
/// - The lot id is empty
/// - Either coordinate is not a finite number
/// - The base price is not finite and greater than zero
/// - The occupied slot count exceeds the total slot count
pub fn validate_parking_lot(lot: &ParkingLot) -> Result<(), DomainError> {
    if lot.id.is_empty() {
        return Err(DomainError::EmptyIdentifier { field: "id" });
    }

    if !lot.lat.is_finite() {
        return Err(DomainError::InvalidCoordinate {
            axis: "lat",
            value: lot.lat,
        });
    }

    if !lot.lng.is_finite() {
        return Err(DomainError::InvalidCoordinate {
            axis: "lng",
            value: lot.lng,
        });
    }

    if !lot.base_price.is_finite() || lot.base_price <= 0.0 {
        return Err(DomainError::InvalidBasePrice {
            value: lot.base_price,
        });
    }

    // Rule: occupied slots can never exceed capacity
    if lot.occupied_slots > lot.total_slots {
        return Err(DomainError::OccupancyExceedsCapacity {
            occupied: lot.occupied_slots,
            total: lot.total_slots,
        });
    }

    Ok(())
}

/// Validates a slot record at the boundary.
///
/// # Errors
///
/// Returns an error if:
/// - The slot id or parent lot id is empty
/// - The distance from the entrance is not finite and non-negative
pub fn validate_slot(slot: &Slot) -> Result<(), DomainError> {
    if slot.id.is_empty() {
        return Err(DomainError::EmptyIdentifier { field: "id" });
    }

    if slot.parking_id.is_empty() {
        return Err(DomainError::EmptyIdentifier { field: "parking_id" });
    }

    if !slot.distance_from_entrance.is_finite() || slot.distance_from_entrance < 0.0 {
        return Err(DomainError::InvalidEntranceDistance {
            value: slot.distance_from_entrance,
        });
    }

    Ok(())
}

/// Validates a holiday record at the boundary.
///
/// The multiplier is deliberately not validated: malformed multipliers
/// silently default at resolution time, and that behavior is part of the
/// contract.
///
/// # Errors
///
/// Returns an error if the date string does not parse as a `YYYY-MM-DD`
/// calendar date.
pub fn validate_holiday(holiday: &Holiday) -> Result<(), DomainError> {
    if NaiveDate::parse_from_str(&holiday.date, "%Y-%m-%d").is_err() {
        return Err(DomainError::InvalidHolidayDate {
            date_string: holiday.date.clone(),
        });
    }

    Ok(())
}

/// Validates a booking duration in hours.
///
/// # Errors
///
/// Returns an error if the duration is not finite and greater than zero.
pub fn validate_duration_hours(duration_hours: f64) -> Result<(), DomainError> {
    if !duration_hours.is_finite() || duration_hours <= 0.0 {
        return Err(DomainError::InvalidDurationHours {
            value: duration_hours,
        });
    }

    Ok(())
}
