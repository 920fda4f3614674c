// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Best-slot allocation for a vehicle and expected stay.
//!
//! Each available slot is scored on three weighted criteria; the lowest
//! score wins. Scores are dimensionless and only meaningful relative to
//! the other slots in the same candidate set.
//!
//! ## Scoring
//!
//! `score = size_compatibility * 0.5 + distance_factor * 0.3 + duration_suitability * 0.2`
//!
//! - Size compatibility: 0 for a perfect fit, 0.3 for an oversized slot,
//!   1.0 for an undersized slot. Undersized slots are penalized, not
//!   filtered, so they remain available as a last resort.
//! - Distance factor: entrance distance normalized against the maximum in
//!   the available set (the denominator is clamped to at least 1).
//! - Duration suitability: higher floors are penalized more for shorter
//!   stays (`floor * 0.5` up to 1 hour, `floor * 0.3` up to 3 hours,
//!   `floor * 0.1` beyond).
//!
//! ## Invariants
//!
//! - Only slots with status `available` are ever returned
//! - An empty available set yields `None`, the sole failure signal
//! - Ties keep the first slot in input order; slot order may carry
//!   meaning (for example slot-number sequence), so selection is stable

use crate::normalize::{finite_or_zero, round3};
use crate::types::{SizeClass, Slot};
use serde::{Deserialize, Serialize};

/// Weight of the size-compatibility criterion.
const SIZE_WEIGHT: f64 = 0.5;

/// Weight of the entrance-distance criterion.
const DISTANCE_WEIGHT: f64 = 0.3;

/// Weight of the duration-suitability criterion.
const DURATION_WEIGHT: f64 = 0.2;

/// Penalty for a slot one or more classes bigger than the vehicle.
const OVERSIZED_PENALTY: f64 = 0.3;

/// Penalty for a slot too small for the vehicle.
const UNDERSIZED_PENALTY: f64 = 1.0;

/// Per-criterion breakdown of a slot score, kept for transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotScoreBreakdown {
    /// Size-compatibility component before weighting.
    pub size_compatibility: f64,
    /// Normalized entrance-distance component before weighting.
    pub distance_factor: f64,
    /// Floor/duration component before weighting.
    pub duration_suitability: f64,
}

/// A slot annotated with its allocation score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSlot {
    /// The underlying slot record.
    pub slot: Slot,
    /// Weighted score, rounded to 3 decimals. Lower is better.
    pub score: f64,
    /// Per-criterion inputs that produced the score.
    pub breakdown: SlotScoreBreakdown,
}

/// Picks the best available slot for a vehicle and expected duration.
///
/// # Arguments
///
/// * `slots` - Candidate slots in caller-determined order
/// * `vehicle` - Size class of the vehicle to park
/// * `duration_hours` - Expected stay length in hours
///
/// # Returns
///
/// The minimum-score available slot, or `None` when no slot is available.
/// Callers must treat `None` as "no compatible slot", not as an error.
#[must_use]
pub fn allocate_best_slot(
    slots: &[Slot],
    vehicle: SizeClass,
    duration_hours: f64,
) -> Option<ScoredSlot> {
    let available: Vec<&Slot> = slots.iter().filter(|slot| slot.is_available()).collect();
    if available.is_empty() {
        return None;
    }

    // Clamp the normalization denominator to at least 1
    let max_distance: f64 = available
        .iter()
        .map(|slot| finite_or_zero(slot.distance_from_entrance))
        .fold(1.0, f64::max);

    let mut best: Option<ScoredSlot> = None;

    for slot in available {
        let size_compatibility: f64 = size_compatibility(slot.size, vehicle);
        let distance_factor: f64 = finite_or_zero(slot.distance_from_entrance) / max_distance;
        let duration_suitability: f64 = duration_suitability(slot.floor, duration_hours);

        let score: f64 = round3(size_compatibility.mul_add(
            SIZE_WEIGHT,
            distance_factor.mul_add(DISTANCE_WEIGHT, duration_suitability * DURATION_WEIGHT),
        ));

        // Strict comparison keeps the first slot in input order on ties
        if best.as_ref().is_none_or(|current| score < current.score) {
            best = Some(ScoredSlot {
                slot: slot.clone(),
                score,
                breakdown: SlotScoreBreakdown {
                    size_compatibility,
                    distance_factor,
                    duration_suitability,
                },
            });
        }
    }

    best
}

/// Returns the available slots that can physically host the vehicle.
///
/// A slot is compatible when its size class is the same as or bigger than
/// the vehicle's. Used for display counts alongside allocation.
#[must_use]
pub fn compatible_slots(slots: &[Slot], vehicle: SizeClass) -> Vec<Slot> {
    slots
        .iter()
        .filter(|slot| slot.is_available() && slot.size.fits(vehicle))
        .cloned()
        .collect()
}

/// Scores how well a slot's size class matches the vehicle.
///
/// Perfect match scores 0, an oversized slot 0.3, an undersized slot 1.0.
fn size_compatibility(slot_size: SizeClass, vehicle: SizeClass) -> f64 {
    match slot_size.rank().cmp(&vehicle.rank()) {
        std::cmp::Ordering::Equal => 0.0,
        std::cmp::Ordering::Greater => OVERSIZED_PENALTY,
        std::cmp::Ordering::Less => UNDERSIZED_PENALTY,
    }
}

/// Scores how suitable a slot's floor is for the expected stay.
///
/// Short stays prioritize convenience, so higher floors are penalized
/// more the shorter the booking.
fn duration_suitability(floor: u32, duration_hours: f64) -> f64 {
    let floor: f64 = f64::from(floor);

    if duration_hours <= 1.0 {
        floor * 0.5
    } else if duration_hours <= 3.0 {
        floor * 0.3
    } else {
        floor * 0.1
    }
}
