// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ordinal size classification shared by slots and vehicles.
///
/// The ordering is meaningful: `Bike < Car < Suv`. A slot can physically
/// host a vehicle when the slot's class is greater than or equal to the
/// vehicle's class.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// Two-wheeler.
    Bike,
    /// Standard car. The default classification for unlabeled records.
    #[default]
    Car,
    /// Oversized vehicle.
    Suv,
}

impl FromStr for SizeClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bike" => Ok(Self::Bike),
            "car" => Ok(Self::Car),
            "suv" => Ok(Self::Suv),
            _ => Err(DomainError::InvalidSizeClass(s.to_string())),
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SizeClass {
    /// Converts this size class to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bike => "bike",
            Self::Car => "car",
            Self::Suv => "suv",
        }
    }

    /// Returns the compatibility rank: bike = 1, car = 2, suv = 3.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Bike => 1,
            Self::Car => 2,
            Self::Suv => 3,
        }
    }

    /// Returns whether a slot of this class can host a vehicle of `vehicle`'s
    /// class (same size or bigger).
    #[must_use]
    pub const fn fits(&self, vehicle: Self) -> bool {
        self.rank() >= vehicle.rank()
    }
}

/// Availability state of a parking slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    /// The slot is free and can be allocated.
    Available,
    /// The slot is currently taken.
    Occupied,
}

impl FromStr for SlotStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            _ => Err(DomainError::InvalidSlotStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SlotStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
        }
    }
}

/// A parking lot as supplied by the caller.
///
/// Derived fields (distance, dynamic price, score, tags) are never stored
/// here; the calculation modules return separate result records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingLot {
    /// The lot's identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Base price per hour. Must be greater than zero.
    pub base_price: f64,
    /// Total number of slots.
    pub total_slots: u32,
    /// Number of currently occupied slots.
    pub occupied_slots: u32,
}

impl ParkingLot {
    /// Returns the number of free slots, saturating at zero.
    #[must_use]
    pub const fn available_slots(&self) -> u32 {
        self.total_slots.saturating_sub(self.occupied_slots)
    }
}

/// A single parking slot within a lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// The slot's identifier.
    pub id: String,
    /// The identifier of the parent lot.
    pub parking_id: String,
    /// Size classification of the slot.
    pub size: SizeClass,
    /// Availability state.
    pub status: SlotStatus,
    /// Floor number; 0 is the ground floor.
    pub floor: u32,
    /// Walking distance from the entrance in meters.
    pub distance_from_entrance: f64,
}

impl Slot {
    /// Returns whether the slot can currently be allocated.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.status, SlotStatus::Available)
    }
}

/// A holiday record as supplied by the caller.
///
/// The record is JSON-shaped: the date is a `YYYY-MM-DD` string and the
/// multiplier arrives as an optional string that is parsed at resolution
/// time (see [`crate::resolve_holiday`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Calendar date key in `YYYY-MM-DD` form.
    pub date: String,
    /// Display name of the holiday.
    pub name: String,
    /// Surge multiplier as a raw string. Absent or unparsable values
    /// default to 1.5 at resolution time.
    #[serde(default)]
    pub multiplier: Option<String>,
    /// Whether the holiday is in effect. Only an explicit `false`
    /// deactivates the record; an absent value counts as active.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl Holiday {
    /// Returns whether this holiday record is in effect.
    #[must_use]
    pub const fn is_in_effect(&self) -> bool {
        !matches!(self.is_active, Some(false))
    }
}

/// A historical booking duration used in aggregate by the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDurationSample {
    /// The identifier of the lot the booking was made at.
    pub parking_id: String,
    /// Duration of the booking in minutes. Only finite values greater
    /// than zero are counted; absent values are ignored.
    #[serde(default)]
    pub duration_minutes: Option<f64>,
}

/// Billing mode of a peer-to-peer rental listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalMode {
    /// Billed per hour.
    Hourly,
    /// Billed per day.
    Daily,
    /// Billed per month.
    Monthly,
    /// Billed per day over an explicit date range.
    Range,
}

impl FromStr for RentalMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            "range" => Ok(Self::Range),
            _ => Err(DomainError::InvalidRentalMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for RentalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RentalMode {
    /// Converts this mode to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Range => "range",
        }
    }
}

/// A peer-to-peer parking listing as supplied by the caller.
///
/// All fields are optional; the rental calculator normalizes absent and
/// non-finite numbers to zero before pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RentalListing {
    /// Price per hour.
    #[serde(default)]
    pub hourly_price: Option<f64>,
    /// Price per day.
    #[serde(default)]
    pub daily_price: Option<f64>,
    /// Price per month.
    #[serde(default)]
    pub monthly_price: Option<f64>,
    /// A pre-agreed total. When present and positive it takes precedence
    /// over derived pricing.
    #[serde(default)]
    pub rental_total_price: Option<f64>,
    /// Number of billable units agreed for the listing's mode.
    #[serde(default)]
    pub rental_units: Option<f64>,
    /// Billing mode. Absent means the mode is derived from the rental
    /// window length.
    #[serde(default)]
    pub rental_duration_mode: Option<RentalMode>,
    /// Rental window start as an RFC 3339 timestamp.
    #[serde(default)]
    pub rental_start_time: Option<String>,
    /// Rental window end as an RFC 3339 timestamp.
    #[serde(default)]
    pub rental_end_time: Option<String>,
}
