// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use spotwise_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract:
/// malformed requests surface as `InvalidInput`, violated domain rules as
/// `DomainRuleViolation`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule '{rule}' violated: {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// Parse-style failures become `InvalidInput` with the offending field;
/// constraint violations become `DomainRuleViolation` with a stable rule
/// name.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidSizeClass(_) => ApiError::InvalidInput {
            field: String::from("size_class"),
            message: err.to_string(),
        },
        DomainError::InvalidSlotStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message: err.to_string(),
        },
        DomainError::InvalidRentalMode(_) => ApiError::InvalidInput {
            field: String::from("rental_duration_mode"),
            message: err.to_string(),
        },
        DomainError::EmptyIdentifier { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: err.to_string(),
        },
        DomainError::InvalidHolidayDate { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message: err.to_string(),
        },
        DomainError::InvalidBasePrice { .. } => ApiError::DomainRuleViolation {
            rule: String::from("positive_base_price"),
            message: err.to_string(),
        },
        DomainError::OccupancyExceedsCapacity { .. } => ApiError::DomainRuleViolation {
            rule: String::from("occupancy_within_capacity"),
            message: err.to_string(),
        },
        DomainError::InvalidCoordinate { .. } => ApiError::DomainRuleViolation {
            rule: String::from("finite_coordinates"),
            message: err.to_string(),
        },
        DomainError::InvalidEntranceDistance { .. } => ApiError::DomainRuleViolation {
            rule: String::from("non_negative_entrance_distance"),
            message: err.to_string(),
        },
        DomainError::InvalidDurationHours { .. } => ApiError::DomainRuleViolation {
            rule: String::from("positive_duration"),
            message: err.to_string(),
        },
    }
}
