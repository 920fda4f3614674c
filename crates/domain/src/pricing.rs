// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dynamic price computation for parking bookings.
//!
//! The model is multiplicative: every demand signal contributes an
//! independent factor, and the breakdown record carries each factor so the
//! final price is fully explainable (and each multiplier independently
//! testable).
//!
//! ## Factors
//!
//! 1. Holiday multiplier, resolved by the holiday calendar (1.0 on regular days)
//! 2. Weekend surge of 1.2 on Saturdays and Sundays
//! 3. Occupancy: 1.2 above 80% occupancy, 0.9 below 30%, 1.0 in between
//! 4. Long-stay discount of 0.95 for bookings over 3 hours
//!
//! ## Invariants
//!
//! - Every factor is greater than zero
//! - `final_price = price_per_hour * duration_hours`, rounded to 2 decimals
//! - A lot with zero total slots is treated as 0% occupied

use crate::normalize::round2;
use serde::{Deserialize, Serialize};

/// Weekend surge factor applied on Saturdays and Sundays.
const WEEKEND_SURGE: f64 = 1.2;

/// Surge factor when occupancy exceeds [`HIGH_OCCUPANCY_THRESHOLD`].
const HIGH_OCCUPANCY_SURGE: f64 = 1.2;

/// Discount factor when occupancy is below [`LOW_OCCUPANCY_THRESHOLD`].
const LOW_OCCUPANCY_DISCOUNT: f64 = 0.9;

/// Occupancy rate above which the high-demand surge applies.
const HIGH_OCCUPANCY_THRESHOLD: f64 = 0.8;

/// Occupancy rate below which the low-demand discount applies.
const LOW_OCCUPANCY_THRESHOLD: f64 = 0.3;

/// Discount factor for bookings longer than [`LONG_STAY_HOURS`].
const LONG_STAY_DISCOUNT: f64 = 0.95;

/// Duration in hours beyond which the long-stay discount applies.
const LONG_STAY_HOURS: f64 = 3.0;

/// Per-factor breakdown of a computed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Base price per hour before any factor.
    pub base_price: f64,
    /// Holiday multiplier (1.0 when the date is not a holiday).
    pub holiday_factor: f64,
    /// Weekend factor (1.2 on weekends, otherwise 1.0).
    pub weekend_factor: f64,
    /// Occupancy factor (1.2 high demand, 0.9 low demand, otherwise 1.0).
    pub occupancy_factor: f64,
    /// Occupancy rate as a rounded integer percentage, for display.
    pub occupancy_rate_percent: u32,
    /// Long-stay discount factor (0.95 over 3 hours, otherwise 1.0).
    pub duration_discount_factor: f64,
    /// Booking duration in hours.
    pub duration_hours: f64,
}

/// A computed price with its explanatory breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Total price for the full duration, rounded to 2 decimals.
    pub final_price: f64,
    /// Effective price per hour after all factors, rounded to 2 decimals.
    pub price_per_hour: f64,
    /// Per-factor breakdown.
    pub breakdown: PriceBreakdown,
}

/// Computes the dynamic price for a booking.
///
/// This is a pure, deterministic calculation; identical inputs always
/// produce an identical quote.
///
/// # Arguments
///
/// * `base_price` - Lot base price per hour
/// * `duration_hours` - Booking duration in hours
/// * `holiday_multiplier` - Resolved holiday multiplier (1.0 on regular days)
/// * `is_weekend` - Whether the booking date is a Saturday or Sunday
/// * `occupied_slots` - Currently occupied slots at the lot
/// * `total_slots` - Total slots at the lot
///
/// # Returns
///
/// A [`PriceQuote`] with the final price, effective hourly price, and the
/// full factor breakdown.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_price(
    base_price: f64,
    duration_hours: f64,
    holiday_multiplier: f64,
    is_weekend: bool,
    occupied_slots: u32,
    total_slots: u32,
) -> PriceQuote {
    // 1. Holiday factor is the resolved multiplier, passed through
    let holiday_factor: f64 = holiday_multiplier;

    // 2. Weekend factor
    let weekend_factor: f64 = if is_weekend { WEEKEND_SURGE } else { 1.0 };

    // 3. Occupancy factor, with an empty lot treated as 0% occupied
    let occupancy_rate: f64 = if total_slots > 0 {
        f64::from(occupied_slots) / f64::from(total_slots)
    } else {
        0.0
    };
    let occupancy_factor: f64 = if occupancy_rate > HIGH_OCCUPANCY_THRESHOLD {
        HIGH_OCCUPANCY_SURGE
    } else if occupancy_rate < LOW_OCCUPANCY_THRESHOLD {
        LOW_OCCUPANCY_DISCOUNT
    } else {
        // Deliberate dead zone: no surge or discount between the thresholds
        1.0
    };

    // 4. Long-stay discount
    let duration_discount_factor: f64 = if duration_hours > LONG_STAY_HOURS {
        LONG_STAY_DISCOUNT
    } else {
        1.0
    };

    let price_per_hour: f64 = round2(
        base_price * holiday_factor * weekend_factor * occupancy_factor * duration_discount_factor,
    );
    let final_price: f64 = round2(price_per_hour * duration_hours);

    PriceQuote {
        final_price,
        price_per_hour,
        breakdown: PriceBreakdown {
            base_price,
            holiday_factor,
            weekend_factor,
            occupancy_factor,
            occupancy_rate_percent: (occupancy_rate * 100.0).round() as u32,
            duration_discount_factor,
            duration_hours,
        },
    }
}
