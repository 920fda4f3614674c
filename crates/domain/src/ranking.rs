// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parking-lot ranking, tagging, and alternative suggestions.
//!
//! Candidates arrive with their derived distance and dynamic price (from
//! the geo and pricing modules); this module attaches a relative score,
//! display tags, and, when a lot is already selected, a human-readable
//! explanation of why each alternative might be preferable.
//!
//! ## Scoring
//!
//! `score = normalized_distance * 0.4 + normalized_price * 0.3 - normalized_availability * 0.3`
//!
//! Availability is subtracted: more free slots lower the score, keeping
//! the crate-wide "lower is better" convention. Each quantity is
//! normalized against its maximum across the candidate set, with the
//! denominator clamped to at least 1.
//!
//! ## Invariants
//!
//! - A non-empty input always produces exactly one `Best Overall` tag
//! - `Cheapest` and `Closest` go to the first minimum in score order;
//!   one lot may carry several tags
//! - Equal scores keep input order (stable sort)

use crate::normalize::{finite_or_zero, round3};
use crate::types::ParkingLot;
use serde::{Deserialize, Serialize};

/// Weight of the normalized distance component.
const DISTANCE_WEIGHT: f64 = 0.4;

/// Weight of the normalized price component.
const PRICE_WEIGHT: f64 = 0.3;

/// Weight of the normalized availability component (subtracted).
const AVAILABILITY_WEIGHT: f64 = 0.3;

/// Fallback explanation when an alternative improves on nothing.
const GENERIC_EXPLANATION: &str = "A good alternative nearby.";

/// A lot with the derived inputs the ranker consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingCandidate {
    /// The underlying lot record.
    pub lot: ParkingLot,
    /// Distance from the search center in kilometers.
    pub distance_km: f64,
    /// Dynamic price per hour for the booking being considered.
    pub dynamic_price_per_hour: f64,
}

/// Display tag attached to notable lots in a ranked set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// The minimum-score lot.
    #[serde(rename = "Best Overall")]
    BestOverall,
    /// The lot with the lowest dynamic price.
    Cheapest,
    /// The lot with the smallest distance.
    Closest,
}

impl Tag {
    /// Converts this tag to its display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BestOverall => "Best Overall",
            Self::Cheapest => "Cheapest",
            Self::Closest => "Closest",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A lot with its ranking score, tags, and optional explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedParking {
    /// The underlying lot record.
    pub lot: ParkingLot,
    /// Distance from the search center in kilometers.
    pub distance_km: f64,
    /// Dynamic price per hour.
    pub dynamic_price_per_hour: f64,
    /// Free slot count, saturating at zero.
    pub available_slots: u32,
    /// Weighted score, rounded to 3 decimals. Lower is better.
    pub score: f64,
    /// Display tags (`Best Overall`, `Cheapest`, `Closest`).
    pub tags: Vec<Tag>,
    /// Comparison text against the selected lot, for alternatives.
    pub explanation: Option<String>,
}

/// Scores and ranks a candidate set of parking lots.
///
/// # Arguments
///
/// * `candidates` - Lots with derived distance and dynamic price
/// * `selected` - The currently selected lot, if any; every *other* lot
///   then receives an explanation comparing it to the selection
///
/// # Returns
///
/// Lots sorted ascending by score, tagged, and annotated. Empty input
/// yields an empty vector.
#[must_use]
pub fn score_parkings(
    candidates: &[RankingCandidate],
    selected: Option<&RankingCandidate>,
) -> Vec<RankedParking> {
    if candidates.is_empty() {
        return Vec::new();
    }

    // Normalization maxima, each clamped to at least 1
    let max_distance: f64 = candidates
        .iter()
        .map(|candidate| finite_or_zero(candidate.distance_km))
        .fold(1.0, f64::max);
    let max_price: f64 = candidates
        .iter()
        .map(|candidate| finite_or_zero(candidate.dynamic_price_per_hour))
        .fold(1.0, f64::max);
    let max_available: f64 = candidates
        .iter()
        .map(|candidate| f64::from(candidate.lot.available_slots()))
        .fold(1.0, f64::max);

    let mut ranked: Vec<RankedParking> = candidates
        .iter()
        .map(|candidate| {
            let available_slots: u32 = candidate.lot.available_slots();

            let normalized_distance: f64 = finite_or_zero(candidate.distance_km) / max_distance;
            let normalized_price: f64 =
                finite_or_zero(candidate.dynamic_price_per_hour) / max_price;
            let normalized_availability: f64 = f64::from(available_slots) / max_available;

            let score: f64 = round3(normalized_availability.mul_add(
                -AVAILABILITY_WEIGHT,
                normalized_distance.mul_add(DISTANCE_WEIGHT, normalized_price * PRICE_WEIGHT),
            ));

            RankedParking {
                lot: candidate.lot.clone(),
                distance_km: candidate.distance_km,
                dynamic_price_per_hour: candidate.dynamic_price_per_hour,
                available_slots,
                score,
                tags: Vec::new(),
                explanation: None,
            }
        })
        .collect();

    // Stable sort: equal scores keep input order
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));

    ranked[0].tags.push(Tag::BestOverall);

    if let Some(index) = index_of_min(&ranked, |entry| {
        finite_or_zero(entry.dynamic_price_per_hour)
    }) {
        ranked[index].tags.push(Tag::Cheapest);
    }

    if let Some(index) = index_of_min(&ranked, |entry| finite_or_zero(entry.distance_km)) {
        ranked[index].tags.push(Tag::Closest);
    }

    if let Some(selected) = selected {
        for entry in &mut ranked {
            if entry.lot.id != selected.lot.id {
                entry.explanation = Some(build_explanation(entry, selected));
            }
        }
    }

    ranked
}

/// Returns the first lot in score order with a different id and at least
/// one free slot, or `None` when every other lot is full.
#[must_use]
pub fn best_alternative<'a>(
    ranked: &'a [RankedParking],
    exclude_id: &str,
) -> Option<&'a RankedParking> {
    ranked
        .iter()
        .find(|entry| entry.lot.id != exclude_id && entry.available_slots > 0)
}

/// Index of the first strict minimum of `key`, in slice order.
fn index_of_min<F>(entries: &[RankedParking], key: F) -> Option<usize>
where
    F: Fn(&RankedParking) -> f64,
{
    let mut best: Option<(usize, f64)> = None;

    for (index, entry) in entries.iter().enumerate() {
        let value: f64 = key(entry);
        if best.is_none_or(|(_, best_value)| value < best_value) {
            best = Some((index, value));
        }
    }

    best.map(|(index, _)| index)
}

/// Builds the comparison sentence for an alternative lot.
///
/// Lists the ways the alternative improves on the selection (cheaper,
/// closer, more free slots); falls back to a generic line when nothing
/// improves.
#[allow(clippy::cast_possible_truncation)]
fn build_explanation(alternative: &RankedParking, selected: &RankingCandidate) -> String {
    let mut parts: Vec<String> = Vec::new();

    let price_diff: f64 = finite_or_zero(selected.dynamic_price_per_hour)
        - finite_or_zero(alternative.dynamic_price_per_hour);
    if price_diff > 0.0 {
        parts.push(format!("₹{} cheaper", price_diff.round() as i64));
    }

    let distance_diff: f64 =
        finite_or_zero(selected.distance_km) - finite_or_zero(alternative.distance_km);
    if distance_diff > 0.0 {
        parts.push(format!("{distance_diff:.1}km closer"));
    }

    if alternative.available_slots > selected.lot.available_slots() {
        parts.push(format!("{} slots available", alternative.available_slots));
    }

    if parts.is_empty() {
        return String::from(GENERIC_EXPLANATION);
    }

    format!("{} is {}.", alternative.lot.name, parts.join(" and "))
}
