// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking-duration estimation from historical averages.
//!
//! The estimator blends the user's history at the specific lot, the
//! user's overall history, and the lot's overall history. The richer the
//! available history, the higher the reported confidence. Samples with a
//! missing or non-positive duration are ignored throughout.
//!
//! ## Confidence tiers (evaluated in priority order)
//!
//! 1. `high` - the user has parked at this lot before:
//!    `0.6 * user_at_lot + 0.3 * user_overall + 0.1 * lot_overall`
//! 2. `medium` - the user has any history:
//!    `0.7 * user_overall + 0.3 * lot_overall`
//! 3. `low` - only lot-level history exists: the lot average
//! 4. `none` - no history at all: a fixed 60 minute default

use crate::normalize::round1;
use crate::types::BookingDurationSample;
use serde::{Deserialize, Serialize};

/// Fallback estimate when no history exists.
const DEFAULT_ESTIMATE_MINUTES: u32 = 60;

/// Confidence level of a duration estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// The user has history at this specific lot.
    High,
    /// The user has general parking history.
    Medium,
    /// Only lot-level history is available.
    Low,
    /// No usable history; the default estimate applies.
    None,
}

impl Confidence {
    /// Converts this confidence level to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A predicted booking duration with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationEstimate {
    /// Predicted duration, rounded to the nearest minute.
    pub estimated_minutes: u32,
    /// Predicted duration in hours, rounded to 1 decimal.
    pub estimated_hours: f64,
    /// Human-readable rendering, e.g. `"1h 30m"`.
    pub formatted_duration: String,
    /// How much history backs the estimate.
    pub confidence: Confidence,
    /// Display message describing the estimate.
    pub message: String,
}

/// Mean duration over the qualifying samples.
///
/// Samples with an absent, non-finite, or non-positive duration are
/// ignored. Returns 0.0 when nothing qualifies.
#[must_use]
pub fn average_duration(samples: &[BookingDurationSample]) -> f64 {
    let durations: Vec<f64> = samples
        .iter()
        .filter_map(|sample| sample.duration_minutes)
        .filter(|minutes| minutes.is_finite() && *minutes > 0.0)
        .collect();

    if durations.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let count: f64 = durations.len() as f64;
    durations.iter().sum::<f64>() / count
}

/// Estimates how long a booking will last.
///
/// # Arguments
///
/// * `user_bookings` - The user's past bookings, across all lots
/// * `parking_bookings` - All past bookings at the lot being considered
/// * `parking_id` - The lot being considered; used to pick the user's
///   history at that specific lot out of `user_bookings`
///
/// # Returns
///
/// A [`DurationEstimate`]. With no usable history the estimate is a fixed
/// 60 minutes at confidence `none` - never an error.
#[must_use]
pub fn estimate_duration(
    user_bookings: &[BookingDurationSample],
    parking_bookings: &[BookingDurationSample],
    parking_id: Option<&str>,
) -> DurationEstimate {
    let user_at_parking: Vec<BookingDurationSample> = parking_id.map_or_else(Vec::new, |id| {
        user_bookings
            .iter()
            .filter(|sample| sample.parking_id == id)
            .cloned()
            .collect()
    });

    let user_avg: f64 = average_duration(user_bookings);
    let user_at_parking_avg: f64 = average_duration(&user_at_parking);
    let parking_avg: f64 = average_duration(parking_bookings);

    let (estimated_minutes, confidence): (u32, Confidence) = if user_at_parking_avg > 0.0 {
        let blended: f64 =
            user_at_parking_avg.mul_add(0.6, user_avg.mul_add(0.3, parking_avg * 0.1));
        (to_whole_minutes(blended), Confidence::High)
    } else if user_avg > 0.0 {
        let blended: f64 = user_avg.mul_add(0.7, parking_avg * 0.3);
        (to_whole_minutes(blended), Confidence::Medium)
    } else if parking_avg > 0.0 {
        (to_whole_minutes(parking_avg), Confidence::Low)
    } else {
        (DEFAULT_ESTIMATE_MINUTES, Confidence::None)
    };

    let formatted_duration: String = format_duration(estimated_minutes);
    let message: String = match confidence {
        Confidence::High => format!("You usually park for {formatted_duration} here."),
        Confidence::Medium => format!("You usually park for {formatted_duration}."),
        Confidence::Low => format!("Most people park for {formatted_duration} here."),
        Confidence::None => String::from("No history available. Estimated 1 hour."),
    };

    DurationEstimate {
        estimated_minutes,
        estimated_hours: round1(f64::from(estimated_minutes) / 60.0),
        formatted_duration,
        confidence,
        message,
    }
}

/// Renders whole minutes as `"Xh Ym"`, `"Xh"`, `"Ym"`, or `"0m"`.
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    if minutes == 0 {
        return String::from("0m");
    }

    let hours: u32 = minutes / 60;
    let remainder: u32 = minutes % 60;

    if hours == 0 {
        format!("{remainder}m")
    } else if remainder == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {remainder}m")
    }
}

/// Rounds a fractional minute count to a whole non-negative minute value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_whole_minutes(minutes: f64) -> u32 {
    minutes.max(0.0).round() as u32
}
