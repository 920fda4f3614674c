// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocation;
mod duration;
mod error;
mod geo;
mod holiday;
mod normalize;
mod pricing;
mod ranking;
mod rental;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use allocation::{ScoredSlot, SlotScoreBreakdown, allocate_best_slot, compatible_slots};
pub use duration::{
    Confidence, DurationEstimate, average_duration, estimate_duration, format_duration,
};
pub use geo::{NearbyLot, distance_km, filter_by_radius};
pub use holiday::{HolidayResolution, is_weekend_day, resolve_holiday, upcoming_holidays};
pub use pricing::{PriceBreakdown, PriceQuote, compute_price};
pub use ranking::{RankedParking, RankingCandidate, Tag, best_alternative, score_parkings};
pub use rental::calculate_rental_amount;

// Re-export public types
pub use error::DomainError;
pub use normalize::{finite_or, finite_or_zero, round1, round2, round3};
pub use types::{
    BookingDurationSample, Holiday, ParkingLot, RentalListing, RentalMode, SizeClass, Slot,
    SlotStatus,
};
pub use validation::{
    validate_duration_hours, validate_holiday, validate_parking_lot, validate_slot,
};
