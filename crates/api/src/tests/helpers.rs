// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{BookingRecord, HolidayRecord, ParkingLotRecord, SlotRecord};

pub fn create_test_lot(
    id: &str,
    lat: f64,
    lng: f64,
    base_price: f64,
    total_slots: u32,
    occupied_slots: u32,
) -> ParkingLotRecord {
    ParkingLotRecord {
        id: id.to_string(),
        name: format!("Lot {id}"),
        address: String::from("1 Plaza Road"),
        lat,
        lng,
        base_price,
        total_slots,
        occupied_slots,
    }
}

pub fn create_test_slot(
    id: &str,
    size: &str,
    status: &str,
    floor: u32,
    distance: f64,
) -> SlotRecord {
    SlotRecord {
        id: id.to_string(),
        parking_id: String::from("lot-1"),
        size: size.to_string(),
        status: status.to_string(),
        floor: Some(floor),
        distance_from_entrance: Some(distance),
    }
}

pub fn create_test_holiday(date: &str, name: &str, multiplier: Option<&str>) -> HolidayRecord {
    HolidayRecord {
        date: date.to_string(),
        name: name.to_string(),
        multiplier: multiplier.map(str::to_string),
        is_active: None,
    }
}

pub fn create_test_booking(parking_id: &str, minutes: f64) -> BookingRecord {
    BookingRecord {
        parking_id: parking_id.to_string(),
        duration_minutes: Some(minutes),
    }
}
