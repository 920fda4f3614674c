// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the scoring and pricing operations.
//!
//! Each handler logs the request, parses and validates the JSON-shaped
//! records into domain types, invokes the corresponding calculation, and
//! assembles the response DTO. Handlers never mutate anything; every
//! operation is a pure request/response call.

use chrono::NaiveDate;
use spotwise_domain::{
    BookingDurationSample, DomainError, DurationEstimate, Holiday, HolidayResolution, NearbyLot,
    ParkingLot, PriceQuote, RankedParking, RankingCandidate, RentalListing, RentalMode,
    ScoredSlot, SizeClass, Slot, SlotStatus, allocate_best_slot, best_alternative,
    calculate_rental_amount, compatible_slots, compute_price, filter_by_radius, is_weekend_day,
    resolve_holiday, score_parkings, validate_duration_hours, validate_parking_lot, validate_slot,
};
use std::str::FromStr;
use tracing::info;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AllocateSlotRequest, AllocateSlotResponse, AllocatedSlotInfo, BookingRecord,
    EstimateDurationRequest, EstimateDurationResponse, HolidayRecord, NearbyLotInfo,
    ParkingLotRecord, PriceBreakdownInfo, PriceRentalRequest, PriceRentalResponse,
    QuotePriceRequest, QuotePriceResponse, RankParkingsRequest, RankParkingsResponse,
    RankedParkingInfo, SearchNearbyRequest, SearchNearbyResponse, SlotRecord,
    UpcomingHolidaysRequest, UpcomingHolidaysResponse,
};

/// Default look-ahead window for upcoming holidays, in days.
const DEFAULT_HOLIDAY_HORIZON_DAYS: u32 = 7;

/// Finds the lots within a search radius.
///
/// # Arguments
///
/// * `request` - Candidate lots plus the search center and radius
///
/// # Returns
///
/// The lots within the radius, annotated with their distance and sorted
/// ascending by distance.
///
/// # Errors
///
/// Returns an error if:
/// - The radius is not a finite number greater than zero
/// - Any lot record fails validation
pub fn search_nearby(request: &SearchNearbyRequest) -> Result<SearchNearbyResponse, ApiError> {
    info!(
        lots = request.lots.len(),
        radius_km = request.radius_km,
        "Handling search_nearby request"
    );

    validate_radius(request.radius_km)?;
    let lots: Vec<ParkingLot> = parse_lots(&request.lots)?;

    let nearby: Vec<NearbyLot> = filter_by_radius(
        &lots,
        request.center_lat,
        request.center_lng,
        request.radius_km,
    );

    Ok(SearchNearbyResponse {
        lots: nearby
            .into_iter()
            .map(|entry| NearbyLotInfo {
                lot: to_lot_record(&entry.lot),
                distance_km: entry.distance_km,
            })
            .collect(),
    })
}

/// Prices a booking for a given date, duration, and lot occupancy.
///
/// The booking date is resolved against the holiday calendar and checked
/// for a weekend before the multiplicative price model runs.
///
/// # Errors
///
/// Returns an error if:
/// - The base price is not finite and greater than zero
/// - The duration is not finite and greater than zero
/// - The occupied slot count exceeds the total slot count
/// - The booking date does not parse as a `YYYY-MM-DD` calendar date
pub fn quote_price(request: &QuotePriceRequest) -> Result<QuotePriceResponse, ApiError> {
    info!(
        booking_date = %request.booking_date,
        duration_hours = request.duration_hours,
        "Handling quote_price request"
    );

    if !request.base_price.is_finite() || request.base_price <= 0.0 {
        return Err(translate_domain_error(DomainError::InvalidBasePrice {
            value: request.base_price,
        }));
    }

    validate_duration_hours(request.duration_hours).map_err(translate_domain_error)?;

    if request.occupied_slots > request.total_slots {
        return Err(translate_domain_error(
            DomainError::OccupancyExceedsCapacity {
                occupied: request.occupied_slots,
                total: request.total_slots,
            },
        ));
    }

    let booking_date: NaiveDate = parse_calendar_date(&request.booking_date, "booking_date")?;
    let holidays: Vec<Holiday> = to_domain_holidays(&request.holidays);

    let resolution: HolidayResolution = resolve_holiday(booking_date, &holidays);
    let is_weekend: bool = is_weekend_day(booking_date);

    let quote: PriceQuote = compute_price(
        request.base_price,
        request.duration_hours,
        resolution.multiplier,
        is_weekend,
        request.occupied_slots,
        request.total_slots,
    );

    Ok(QuotePriceResponse {
        final_price: quote.final_price,
        price_per_hour: quote.price_per_hour,
        is_holiday: resolution.is_holiday,
        holiday_name: resolution.holiday_name,
        is_weekend,
        breakdown: PriceBreakdownInfo {
            base_price: quote.breakdown.base_price,
            holiday_factor: quote.breakdown.holiday_factor,
            weekend_factor: quote.breakdown.weekend_factor,
            occupancy_factor: quote.breakdown.occupancy_factor,
            occupancy_rate_percent: quote.breakdown.occupancy_rate_percent,
            duration_discount_factor: quote.breakdown.duration_discount_factor,
            duration_hours: quote.breakdown.duration_hours,
        },
    })
}

/// Allocates the best available slot for a vehicle and expected stay.
///
/// A response with `allocated: None` means no slot is available; callers
/// must branch on it rather than expect an error.
///
/// # Errors
///
/// Returns an error if:
/// - The vehicle type is not a known size class
/// - The duration is not finite and greater than zero
/// - Any slot record fails parsing or validation
pub fn allocate_slot(request: &AllocateSlotRequest) -> Result<AllocateSlotResponse, ApiError> {
    info!(
        slots = request.slots.len(),
        vehicle_type = %request.vehicle_type,
        duration_hours = request.duration_hours,
        "Handling allocate_slot request"
    );

    let vehicle: SizeClass = parse_size_class(&request.vehicle_type)?;
    validate_duration_hours(request.duration_hours).map_err(translate_domain_error)?;

    let slots: Vec<Slot> = request
        .slots
        .iter()
        .map(to_domain_slot)
        .collect::<Result<Vec<Slot>, ApiError>>()?;

    let allocated: Option<ScoredSlot> = allocate_best_slot(&slots, vehicle, request.duration_hours);
    let compatible_count: usize = compatible_slots(&slots, vehicle).len();

    Ok(AllocateSlotResponse {
        allocated: allocated.map(|scored| AllocatedSlotInfo {
            slot_id: scored.slot.id,
            parking_id: scored.slot.parking_id,
            size: scored.slot.size.to_string(),
            floor: scored.slot.floor,
            distance_from_entrance: scored.slot.distance_from_entrance,
            score: scored.score,
            size_compatibility: scored.breakdown.size_compatibility,
            distance_factor: scored.breakdown.distance_factor,
            duration_suitability: scored.breakdown.duration_suitability,
        }),
        compatible_count,
    })
}

/// Runs the full discovery pipeline over a candidate set of lots.
///
/// Lots are filtered by radius, priced for the booking date and duration,
/// scored and tagged, and - when a lot is selected - annotated with
/// explanations plus the best open alternative.
///
/// # Errors
///
/// Returns an error if:
/// - The radius is not a finite number greater than zero
/// - The duration is not finite and greater than zero
/// - The booking date does not parse as a `YYYY-MM-DD` calendar date
/// - Any lot record fails validation
pub fn rank_parkings(request: &RankParkingsRequest) -> Result<RankParkingsResponse, ApiError> {
    info!(
        lots = request.lots.len(),
        radius_km = request.radius_km,
        booking_date = %request.booking_date,
        selected_id = ?request.selected_id,
        "Handling rank_parkings request"
    );

    validate_radius(request.radius_km)?;
    validate_duration_hours(request.duration_hours).map_err(translate_domain_error)?;
    let booking_date: NaiveDate = parse_calendar_date(&request.booking_date, "booking_date")?;

    let lots: Vec<ParkingLot> = parse_lots(&request.lots)?;
    let holidays: Vec<Holiday> = to_domain_holidays(&request.holidays);

    let resolution: HolidayResolution = resolve_holiday(booking_date, &holidays);
    let is_weekend: bool = is_weekend_day(booking_date);

    let nearby: Vec<NearbyLot> = filter_by_radius(
        &lots,
        request.center_lat,
        request.center_lng,
        request.radius_km,
    );

    let candidates: Vec<RankingCandidate> = nearby
        .into_iter()
        .map(|entry| {
            let quote: PriceQuote = compute_price(
                entry.lot.base_price,
                request.duration_hours,
                resolution.multiplier,
                is_weekend,
                entry.lot.occupied_slots,
                entry.lot.total_slots,
            );

            RankingCandidate {
                distance_km: entry.distance_km,
                dynamic_price_per_hour: quote.price_per_hour,
                lot: entry.lot,
            }
        })
        .collect();

    let selected: Option<RankingCandidate> = request.selected_id.as_deref().and_then(|id| {
        candidates
            .iter()
            .find(|candidate| candidate.lot.id == id)
            .cloned()
    });

    let ranked: Vec<RankedParking> = score_parkings(&candidates, selected.as_ref());

    let best_alternative_id: Option<String> = request
        .selected_id
        .as_deref()
        .and_then(|id| best_alternative(&ranked, id))
        .map(|entry| entry.lot.id.clone());

    Ok(RankParkingsResponse {
        parkings: ranked
            .into_iter()
            .map(|entry| RankedParkingInfo {
                id: entry.lot.id,
                name: entry.lot.name,
                address: entry.lot.address,
                distance_km: entry.distance_km,
                dynamic_price_per_hour: entry.dynamic_price_per_hour,
                available_slots: entry.available_slots,
                score: entry.score,
                tags: entry.tags.iter().map(ToString::to_string).collect(),
                explanation: entry.explanation,
            })
            .collect(),
        best_alternative_id,
    })
}

/// Estimates how long a booking will last from historical samples.
///
/// This operation has no failure modes: with no usable history the
/// estimate is a fixed 60 minutes at confidence `none`.
#[must_use]
pub fn estimate_duration(request: &EstimateDurationRequest) -> EstimateDurationResponse {
    info!(
        user_bookings = request.user_bookings.len(),
        parking_bookings = request.parking_bookings.len(),
        parking_id = ?request.parking_id,
        "Handling estimate_duration request"
    );

    let user_bookings: Vec<BookingDurationSample> = to_domain_samples(&request.user_bookings);
    let parking_bookings: Vec<BookingDurationSample> = to_domain_samples(&request.parking_bookings);

    let estimate: DurationEstimate = spotwise_domain::estimate_duration(
        &user_bookings,
        &parking_bookings,
        request.parking_id.as_deref(),
    );

    EstimateDurationResponse {
        estimated_minutes: estimate.estimated_minutes,
        estimated_hours: estimate.estimated_hours,
        formatted_duration: estimate.formatted_duration,
        confidence: estimate.confidence.to_string(),
        message: estimate.message,
    }
}

/// Lists the active holidays within a look-ahead window from `today`.
///
/// The horizon defaults to 7 days when the request does not set one.
///
/// # Errors
///
/// Returns an error if `today` does not parse as a `YYYY-MM-DD` calendar
/// date.
pub fn upcoming_holidays(
    request: &UpcomingHolidaysRequest,
) -> Result<UpcomingHolidaysResponse, ApiError> {
    info!(
        holidays = request.holidays.len(),
        today = %request.today,
        horizon_days = ?request.horizon_days,
        "Handling upcoming_holidays request"
    );

    let today: NaiveDate = parse_calendar_date(&request.today, "today")?;
    let horizon_days: u32 = request.horizon_days.unwrap_or(DEFAULT_HOLIDAY_HORIZON_DAYS);

    let holidays: Vec<Holiday> = to_domain_holidays(&request.holidays);
    let upcoming: Vec<Holiday> = spotwise_domain::upcoming_holidays(&holidays, today, horizon_days);

    Ok(UpcomingHolidaysResponse {
        holidays: upcoming
            .into_iter()
            .map(|holiday| HolidayRecord {
                date: holiday.date,
                name: holiday.name,
                multiplier: holiday.multiplier,
                is_active: holiday.is_active,
            })
            .collect(),
    })
}

/// Prices a peer-to-peer rental listing and checks vehicle compatibility.
///
/// A listing without a size class is treated as car-sized; a request
/// without a renter vehicle skips the compatibility check and reports
/// `compatible: true`.
///
/// # Errors
///
/// Returns an error if:
/// - The listing's billing mode is not a known rental mode
/// - Either size class string is not a known size class
pub fn price_rental(request: &PriceRentalRequest) -> Result<PriceRentalResponse, ApiError> {
    info!(
        mode = ?request.listing.rental_duration_mode,
        renter_vehicle_type = ?request.renter_vehicle_type,
        "Handling price_rental request"
    );

    let rental_duration_mode: Option<RentalMode> = request
        .listing
        .rental_duration_mode
        .as_deref()
        .map(RentalMode::from_str)
        .transpose()
        .map_err(translate_domain_error)?;

    let listing_class: SizeClass = request
        .listing
        .vehicle_type
        .as_deref()
        .map(parse_size_class)
        .transpose()?
        .unwrap_or_default();

    let renter_class: Option<SizeClass> = request
        .renter_vehicle_type
        .as_deref()
        .map(parse_size_class)
        .transpose()?;

    let listing = RentalListing {
        hourly_price: request.listing.hourly_price,
        daily_price: request.listing.daily_price,
        monthly_price: request.listing.monthly_price,
        rental_total_price: request.listing.rental_total_price,
        rental_units: request.listing.rental_units,
        rental_duration_mode,
        rental_start_time: request.listing.rental_start_time.clone(),
        rental_end_time: request.listing.rental_end_time.clone(),
    };

    Ok(PriceRentalResponse {
        amount: calculate_rental_amount(&listing),
        compatible: renter_class.is_none_or(|vehicle| listing_class.fits(vehicle)),
    })
}

/// Validates a search radius.
fn validate_radius(radius_km: f64) -> Result<(), ApiError> {
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(ApiError::InvalidInput {
            field: String::from("radius_km"),
            message: format!("Radius must be a finite number greater than 0, got {radius_km}"),
        });
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` calendar date out of a request field.
fn parse_calendar_date(raw: &str, field: &'static str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("'{raw}' is not a valid YYYY-MM-DD calendar date"),
    })
}

/// Parses a size class string, translating the domain error.
fn parse_size_class(raw: &str) -> Result<SizeClass, ApiError> {
    SizeClass::from_str(raw).map_err(translate_domain_error)
}

/// Converts and validates the lot records of a request.
fn parse_lots(records: &[ParkingLotRecord]) -> Result<Vec<ParkingLot>, ApiError> {
    records
        .iter()
        .map(|record| {
            let lot: ParkingLot = ParkingLot {
                id: record.id.clone(),
                name: record.name.clone(),
                address: record.address.clone(),
                lat: record.lat,
                lng: record.lng,
                base_price: record.base_price,
                total_slots: record.total_slots,
                occupied_slots: record.occupied_slots,
            };
            validate_parking_lot(&lot).map_err(translate_domain_error)?;
            Ok(lot)
        })
        .collect()
}

/// Converts a domain lot back into its wire record.
fn to_lot_record(lot: &ParkingLot) -> ParkingLotRecord {
    ParkingLotRecord {
        id: lot.id.clone(),
        name: lot.name.clone(),
        address: lot.address.clone(),
        lat: lot.lat,
        lng: lot.lng,
        base_price: lot.base_price,
        total_slots: lot.total_slots,
        occupied_slots: lot.occupied_slots,
    }
}

/// Converts and validates a slot record. Absent floors mean the ground
/// floor; absent entrance distances mean zero.
fn to_domain_slot(record: &SlotRecord) -> Result<Slot, ApiError> {
    let size: SizeClass = parse_size_class(&record.size)?;
    let status: SlotStatus = SlotStatus::from_str(&record.status).map_err(translate_domain_error)?;

    let slot: Slot = Slot {
        id: record.id.clone(),
        parking_id: record.parking_id.clone(),
        size,
        status,
        floor: record.floor.unwrap_or(0),
        distance_from_entrance: record.distance_from_entrance.unwrap_or(0.0),
    };
    validate_slot(&slot).map_err(translate_domain_error)?;

    Ok(slot)
}

/// Converts holiday records into domain holidays, without validation:
/// records with unparsable dates simply never match a booking date.
fn to_domain_holidays(records: &[HolidayRecord]) -> Vec<Holiday> {
    records
        .iter()
        .map(|record| Holiday {
            date: record.date.clone(),
            name: record.name.clone(),
            multiplier: record.multiplier.clone(),
            is_active: record.is_active,
        })
        .collect()
}

/// Converts booking records into domain duration samples.
fn to_domain_samples(records: &[BookingRecord]) -> Vec<BookingDurationSample> {
    records
        .iter()
        .map(|record| BookingDurationSample {
            parking_id: record.parking_id.clone(),
            duration_minutes: record.duration_minutes,
        })
        .collect()
}
