// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Peer-to-peer rental amount calculation.
//!
//! Listings are priced from whichever information they carry, in order of
//! preference:
//!
//! 1. A stored positive total, used as-is
//! 2. An explicit billing mode times the agreed unit count
//! 3. A mode derived from the rental window length: over 30 days bills
//!    monthly, over 1 day bills daily, anything shorter bills hourly
//!
//! Billable counts are ceilings (a started hour/day/month is owed in
//! full) and never drop below one unit. A month is 30 days. Missing or
//! unparsable timestamps yield a zero-length window, so a mode-less
//! listing without a window bills a single hourly unit.

use crate::normalize::{finite_or_zero, round2};
use crate::types::{RentalListing, RentalMode};
use chrono::{DateTime, NaiveDateTime};

/// Seconds in one billable hour.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds in one billable day.
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one billable month.
const DAYS_PER_MONTH: f64 = 30.0;

/// Computes the total amount owed for a rental listing.
///
/// # Arguments
///
/// * `listing` - The listing record; absent and non-finite numeric fields
///   are normalized to zero before pricing
///
/// # Returns
///
/// The amount rounded to 2 decimal places. A listing with no usable
/// price fields yields 0.0 rather than an error.
#[must_use]
pub fn calculate_rental_amount(listing: &RentalListing) -> f64 {
    let stored_total: f64 = finite_or_zero(listing.rental_total_price.unwrap_or(0.0));
    if stored_total > 0.0 {
        return round2(stored_total);
    }

    let window_seconds: f64 = rental_window_seconds(listing);
    let hours: f64 = (window_seconds / SECONDS_PER_HOUR).ceil().max(1.0);
    let days: f64 = (window_seconds / SECONDS_PER_DAY).ceil().max(1.0);
    let months: f64 = (days / DAYS_PER_MONTH).ceil().max(1.0);
    let units: f64 = finite_or_zero(listing.rental_units.unwrap_or(0.0))
        .round()
        .max(1.0);

    let hourly_price: f64 = finite_or_zero(listing.hourly_price.unwrap_or(0.0));
    let daily_price: f64 = finite_or_zero(listing.daily_price.unwrap_or(0.0));
    let monthly_price: f64 = finite_or_zero(listing.monthly_price.unwrap_or(0.0));

    match listing.rental_duration_mode {
        Some(RentalMode::Hourly) => round2(hourly_price * units),
        Some(RentalMode::Monthly) => round2(monthly_price * units),
        Some(RentalMode::Daily | RentalMode::Range) => round2(daily_price * units),
        None => {
            // No explicit mode: derive billing granularity from the window
            if window_seconds > DAYS_PER_MONTH * SECONDS_PER_DAY {
                round2(monthly_price * months)
            } else if window_seconds > SECONDS_PER_DAY {
                round2(daily_price * days)
            } else {
                round2(hourly_price * hours)
            }
        }
    }
}

/// Length of the rental window in seconds, clamped at zero.
///
/// Missing or unparsable timestamps yield a zero-length window.
#[allow(clippy::cast_precision_loss)]
fn rental_window_seconds(listing: &RentalListing) -> f64 {
    let start: Option<NaiveDateTime> = listing.rental_start_time.as_deref().and_then(parse_timestamp);
    let end: Option<NaiveDateTime> = listing.rental_end_time.as_deref().and_then(parse_timestamp);

    match (start, end) {
        (Some(start), Some(end)) => (end - start).num_seconds().max(0) as f64,
        _ => 0.0,
    }
}

/// Parses an RFC 3339 timestamp, tolerating a missing offset.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .map(|datetime| datetime.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}
