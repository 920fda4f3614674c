// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract: dates, size classes, statuses, and billing modes travel as
//! strings and are parsed at the boundary.

use serde::{Deserialize, Serialize};

/// A parking lot as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingLotRecord {
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
    /// Base price per hour.
    pub base_price: f64,
    /// Total number of slots.
    pub total_slots: u32,
    /// Number of currently occupied slots.
    pub occupied_slots: u32,
}

/// A parking slot as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// The slot's identifier.
    pub id: String,
    /// The identifier of the parent lot.
    pub parking_id: String,
    /// Size class as a string (bike, car, suv).
    pub size: String,
    /// Status as a string (available, occupied).
    pub status: String,
    /// Floor number; absent means the ground floor.
    #[serde(default)]
    pub floor: Option<u32>,
    /// Walking distance from the entrance in meters; absent means zero.
    #[serde(default)]
    pub distance_from_entrance: Option<f64>,
}

/// A holiday record as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// Calendar date key in `YYYY-MM-DD` form.
    pub date: String,
    /// Display name of the holiday.
    pub name: String,
    /// Surge multiplier as a raw string.
    #[serde(default)]
    pub multiplier: Option<String>,
    /// Whether the holiday is in effect; absent counts as active.
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// A historical booking duration sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// The identifier of the lot the booking was made at.
    pub parking_id: String,
    /// Duration of the booking in minutes.
    #[serde(default)]
    pub duration_minutes: Option<f64>,
}

/// A peer-to-peer rental listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RentalListingRecord {
    /// Size class the listed slot can host (bike, car, suv). Absent
    /// records are treated as car-sized.
    #[serde(default)]
    pub vehicle_type: Option<String>,
    /// Price per hour.
    #[serde(default)]
    pub hourly_price: Option<f64>,
    /// Price per day.
    #[serde(default)]
    pub daily_price: Option<f64>,
    /// Price per month.
    #[serde(default)]
    pub monthly_price: Option<f64>,
    /// A pre-agreed total that takes precedence over derived pricing.
    #[serde(default)]
    pub rental_total_price: Option<f64>,
    /// Number of billable units agreed for the listing's mode.
    #[serde(default)]
    pub rental_units: Option<f64>,
    /// Billing mode as a string (hourly, daily, monthly, range).
    #[serde(default)]
    pub rental_duration_mode: Option<String>,
    /// Rental window start as an RFC 3339 timestamp.
    #[serde(default)]
    pub rental_start_time: Option<String>,
    /// Rental window end as an RFC 3339 timestamp.
    #[serde(default)]
    pub rental_end_time: Option<String>,
}

/// API request to find lots within a radius of a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchNearbyRequest {
    /// Candidate lots.
    pub lots: Vec<ParkingLotRecord>,
    /// Search center latitude in degrees.
    pub center_lat: f64,
    /// Search center longitude in degrees.
    pub center_lng: f64,
    /// Maximum distance in kilometers (inclusive).
    pub radius_km: f64,
}

/// A lot within the search radius, annotated with its distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyLotInfo {
    /// The lot record.
    pub lot: ParkingLotRecord,
    /// Distance from the search center in kilometers.
    pub distance_km: f64,
}

/// API response for a nearby search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchNearbyResponse {
    /// Lots within the radius, sorted by ascending distance.
    pub lots: Vec<NearbyLotInfo>,
}

/// API request to price a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotePriceRequest {
    /// Lot base price per hour.
    pub base_price: f64,
    /// Booking duration in hours.
    pub duration_hours: f64,
    /// Booking date as a `YYYY-MM-DD` local calendar date.
    pub booking_date: String,
    /// Holiday calendar to resolve the booking date against.
    pub holidays: Vec<HolidayRecord>,
    /// Currently occupied slots at the lot.
    pub occupied_slots: u32,
    /// Total slots at the lot.
    pub total_slots: u32,
}

/// Per-factor price breakdown, mirrored from the domain for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdownInfo {
    /// Base price per hour before any factor.
    pub base_price: f64,
    /// Holiday multiplier.
    pub holiday_factor: f64,
    /// Weekend factor.
    pub weekend_factor: f64,
    /// Occupancy factor.
    pub occupancy_factor: f64,
    /// Occupancy rate as a rounded integer percentage.
    pub occupancy_rate_percent: u32,
    /// Long-stay discount factor.
    pub duration_discount_factor: f64,
    /// Booking duration in hours.
    pub duration_hours: f64,
}

/// API response for a price quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotePriceResponse {
    /// Total price for the full duration.
    pub final_price: f64,
    /// Effective price per hour after all factors.
    pub price_per_hour: f64,
    /// Whether the booking date matched an active holiday.
    pub is_holiday: bool,
    /// The matched holiday's name, if any.
    pub holiday_name: Option<String>,
    /// Whether the booking date is a Saturday or Sunday.
    pub is_weekend: bool,
    /// Per-factor breakdown.
    pub breakdown: PriceBreakdownInfo,
}

/// API request to allocate the best slot for a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocateSlotRequest {
    /// Candidate slots in caller-determined order.
    pub slots: Vec<SlotRecord>,
    /// Vehicle size class as a string (bike, car, suv).
    pub vehicle_type: String,
    /// Expected stay length in hours.
    pub duration_hours: f64,
}

/// The allocated slot with its score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocatedSlotInfo {
    /// The slot's identifier.
    pub slot_id: String,
    /// The identifier of the parent lot.
    pub parking_id: String,
    /// Size class of the slot.
    pub size: String,
    /// Floor number.
    pub floor: u32,
    /// Walking distance from the entrance in meters.
    pub distance_from_entrance: f64,
    /// Weighted score; lower is better.
    pub score: f64,
    /// Size-compatibility component before weighting.
    pub size_compatibility: f64,
    /// Normalized entrance-distance component before weighting.
    pub distance_factor: f64,
    /// Floor/duration component before weighting.
    pub duration_suitability: f64,
}

/// API response for a slot allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocateSlotResponse {
    /// The best available slot, or `None` when no slot is available.
    pub allocated: Option<AllocatedSlotInfo>,
    /// How many available slots can physically host the vehicle.
    pub compatible_count: usize,
}

/// API request for the full discovery pipeline: radius filter, per-lot
/// dynamic pricing, scoring, tagging, and alternative suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankParkingsRequest {
    /// Candidate lots.
    pub lots: Vec<ParkingLotRecord>,
    /// Search center latitude in degrees.
    pub center_lat: f64,
    /// Search center longitude in degrees.
    pub center_lng: f64,
    /// Maximum distance in kilometers (inclusive).
    pub radius_km: f64,
    /// Booking date as a `YYYY-MM-DD` local calendar date.
    pub booking_date: String,
    /// Booking duration in hours.
    pub duration_hours: f64,
    /// Holiday calendar to resolve the booking date against.
    pub holidays: Vec<HolidayRecord>,
    /// The currently selected lot; other lots then receive explanations.
    #[serde(default)]
    pub selected_id: Option<String>,
}

/// A ranked lot with its derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedParkingInfo {
    /// The lot's identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Distance from the search center in kilometers.
    pub distance_km: f64,
    /// Dynamic price per hour for the requested booking.
    pub dynamic_price_per_hour: f64,
    /// Free slot count.
    pub available_slots: u32,
    /// Weighted score; lower is better.
    pub score: f64,
    /// Display tags ("Best Overall", "Cheapest", "Closest").
    pub tags: Vec<String>,
    /// Comparison text against the selected lot, for alternatives.
    pub explanation: Option<String>,
}

/// API response for the discovery pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankParkingsResponse {
    /// Lots within the radius, sorted ascending by score.
    pub parkings: Vec<RankedParkingInfo>,
    /// The best open alternative to the selected lot, if any.
    pub best_alternative_id: Option<String>,
}

/// API request to estimate a booking duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateDurationRequest {
    /// The user's past bookings, across all lots.
    pub user_bookings: Vec<BookingRecord>,
    /// All past bookings at the lot being considered.
    pub parking_bookings: Vec<BookingRecord>,
    /// The lot being considered.
    #[serde(default)]
    pub parking_id: Option<String>,
}

/// API response for a duration estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateDurationResponse {
    /// Predicted duration, rounded to the nearest minute.
    pub estimated_minutes: u32,
    /// Predicted duration in hours, rounded to 1 decimal.
    pub estimated_hours: f64,
    /// Human-readable rendering, e.g. `"1h 30m"`.
    pub formatted_duration: String,
    /// Confidence level (high, medium, low, none).
    pub confidence: String,
    /// Display message describing the estimate.
    pub message: String,
}

/// API request for holidays within a look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingHolidaysRequest {
    /// Holiday records to filter.
    pub holidays: Vec<HolidayRecord>,
    /// The current local calendar date as `YYYY-MM-DD`.
    pub today: String,
    /// Number of days to look ahead. Defaults to 7.
    #[serde(default)]
    pub horizon_days: Option<u32>,
}

/// API response listing upcoming holidays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingHolidaysResponse {
    /// Active holidays within the window, in input order.
    pub holidays: Vec<HolidayRecord>,
}

/// API request to price a peer-to-peer rental listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRentalRequest {
    /// The listing to price.
    pub listing: RentalListingRecord,
    /// The renter's vehicle size class, for the compatibility check.
    #[serde(default)]
    pub renter_vehicle_type: Option<String>,
}

/// API response for a rental quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRentalResponse {
    /// Total amount owed, rounded to 2 decimals.
    pub amount: f64,
    /// Whether the listed slot can host the renter's vehicle.
    pub compatible: bool,
}
