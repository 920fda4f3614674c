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
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use handlers::{
    allocate_slot, estimate_duration, price_rental, quote_price, rank_parkings, search_nearby,
    upcoming_holidays,
};
pub use request_response::{
    AllocateSlotRequest, AllocateSlotResponse, AllocatedSlotInfo, BookingRecord,
    EstimateDurationRequest, EstimateDurationResponse, HolidayRecord, NearbyLotInfo,
    ParkingLotRecord, PriceBreakdownInfo, PriceRentalRequest, PriceRentalResponse,
    QuotePriceRequest, QuotePriceResponse, RankParkingsRequest, RankParkingsResponse,
    RankedParkingInfo, RentalListingRecord, SearchNearbyRequest, SearchNearbyResponse, SlotRecord,
    UpcomingHolidaysRequest, UpcomingHolidaysResponse,
};
