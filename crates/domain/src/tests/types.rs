// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, Holiday, ParkingLot, RentalListing, RentalMode, SizeClass, Slot, SlotStatus,
};
use std::str::FromStr;

fn test_lot() -> ParkingLot {
    ParkingLot {
        id: String::from("lot-1"),
        name: String::from("Central Plaza"),
        address: String::from("1 Plaza Road"),
        lat: 28.6139,
        lng: 77.2090,
        base_price: 20.0,
        total_slots: 10,
        occupied_slots: 4,
    }
}

#[test]
fn test_size_class_ordering_is_meaningful() {
    assert!(SizeClass::Bike < SizeClass::Car);
    assert!(SizeClass::Car < SizeClass::Suv);
    assert_eq!(SizeClass::Bike.rank(), 1);
    assert_eq!(SizeClass::Car.rank(), 2);
    assert_eq!(SizeClass::Suv.rank(), 3);
}

#[test]
fn test_size_class_fits() {
    // A slot fits a vehicle of the same class or smaller
    assert!(SizeClass::Suv.fits(SizeClass::Bike));
    assert!(SizeClass::Suv.fits(SizeClass::Suv));
    assert!(SizeClass::Car.fits(SizeClass::Bike));
    assert!(!SizeClass::Bike.fits(SizeClass::Car));
    assert!(!SizeClass::Car.fits(SizeClass::Suv));
}

#[test]
fn test_size_class_round_trips_through_strings() {
    for class in [SizeClass::Bike, SizeClass::Car, SizeClass::Suv] {
        assert_eq!(SizeClass::from_str(class.as_str()).unwrap(), class);
    }
}

#[test]
fn test_size_class_rejects_unknown_values() {
    let result = SizeClass::from_str("truck");
    assert!(matches!(result, Err(DomainError::InvalidSizeClass(_))));
}

#[test]
fn test_slot_status_round_trips_through_strings() {
    assert_eq!(
        SlotStatus::from_str("available").unwrap(),
        SlotStatus::Available
    );
    assert_eq!(
        SlotStatus::from_str("occupied").unwrap(),
        SlotStatus::Occupied
    );
    assert!(matches!(
        SlotStatus::from_str("reserved"),
        Err(DomainError::InvalidSlotStatus(_))
    ));
}

#[test]
fn test_rental_mode_round_trips_through_strings() {
    for mode in [
        RentalMode::Hourly,
        RentalMode::Daily,
        RentalMode::Monthly,
        RentalMode::Range,
    ] {
        assert_eq!(RentalMode::from_str(mode.as_str()).unwrap(), mode);
    }
    assert!(matches!(
        RentalMode::from_str("weekly"),
        Err(DomainError::InvalidRentalMode(_))
    ));
}

#[test]
fn test_available_slots_saturates_at_zero() {
    let mut lot: ParkingLot = test_lot();
    assert_eq!(lot.available_slots(), 6);

    lot.occupied_slots = 15;
    assert_eq!(lot.available_slots(), 0);
}

#[test]
fn test_slot_availability_helper() {
    let slot = Slot {
        id: String::from("s-1"),
        parking_id: String::from("lot-1"),
        size: SizeClass::Car,
        status: SlotStatus::Available,
        floor: 0,
        distance_from_entrance: 12.0,
    };

    assert!(slot.is_available());

    let taken = Slot {
        status: SlotStatus::Occupied,
        ..slot
    };
    assert!(!taken.is_available());
}

#[test]
fn test_holiday_active_flag_semantics() {
    let mut holiday = Holiday {
        date: String::from("2026-08-15"),
        name: String::from("Independence Day"),
        multiplier: None,
        is_active: None,
    };

    assert!(holiday.is_in_effect());

    holiday.is_active = Some(true);
    assert!(holiday.is_in_effect());

    holiday.is_active = Some(false);
    assert!(!holiday.is_in_effect());
}

#[test]
fn test_rental_listing_default_is_empty() {
    let listing: RentalListing = RentalListing::default();
    assert!(listing.hourly_price.is_none());
    assert!(listing.rental_duration_mode.is_none());
    assert!(listing.rental_start_time.is_none());
}
