// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A size class string is not one of bike, car, suv.
    InvalidSizeClass(String),
    /// A slot status string is not one of available, occupied.
    InvalidSlotStatus(String),
    /// A rental duration mode string is not one of hourly, daily, monthly, range.
    InvalidRentalMode(String),
    /// A required identifier field is empty.
    EmptyIdentifier {
        /// The name of the empty field.
        field: &'static str,
    },
    /// Base price must be finite and greater than zero.
    InvalidBasePrice {
        /// The invalid price value.
        value: f64,
    },
    /// Occupied slot count exceeds the total slot count.
    OccupancyExceedsCapacity {
        /// The occupied slot count.
        occupied: u32,
        /// The total slot count.
        total: u32,
    },
    /// A geographic coordinate is not a finite number.
    InvalidCoordinate {
        /// The coordinate axis ("lat" or "lng").
        axis: &'static str,
        /// The invalid coordinate value.
        value: f64,
    },
    /// Distance from the entrance must be finite and non-negative.
    InvalidEntranceDistance {
        /// The invalid distance value.
        value: f64,
    },
    /// A holiday date string does not parse as a YYYY-MM-DD calendar date.
    InvalidHolidayDate {
        /// The invalid date string.
        date_string: String,
    },
    /// Booking duration must be finite and greater than zero.
    InvalidDurationHours {
        /// The invalid duration value.
        value: f64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSizeClass(value) => {
                write!(f, "Invalid size class '{value}'. Must be bike, car, or suv")
            }
            Self::InvalidSlotStatus(value) => {
                write!(
                    f,
                    "Invalid slot status '{value}'. Must be available or occupied"
                )
            }
            Self::InvalidRentalMode(value) => {
                write!(
                    f,
                    "Invalid rental mode '{value}'. Must be hourly, daily, monthly, or range"
                )
            }
            Self::EmptyIdentifier { field } => {
                write!(f, "Field '{field}' cannot be empty")
            }
            Self::InvalidBasePrice { value } => {
                write!(f, "Base price must be greater than 0, got {value}")
            }
            Self::OccupancyExceedsCapacity { occupied, total } => {
                write!(
                    f,
                    "Occupied slot count {occupied} exceeds total slot count {total}"
                )
            }
            Self::InvalidCoordinate { axis, value } => {
                write!(f, "Coordinate '{axis}' must be a finite number, got {value}")
            }
            Self::InvalidEntranceDistance { value } => {
                write!(
                    f,
                    "Distance from entrance must be finite and non-negative, got {value}"
                )
            }
            Self::InvalidHolidayDate { date_string } => {
                write!(
                    f,
                    "Holiday date '{date_string}' is not a valid YYYY-MM-DD calendar date"
                )
            }
            Self::InvalidDurationHours { value } => {
                write!(
                    f,
                    "Booking duration must be greater than 0 hours, got {value}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
