// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Holiday resolution and weekend detection for surge pricing.
//!
//! Holiday records arrive JSON-shaped with string dates and string
//! multipliers. Resolution matches on the `YYYY-MM-DD` calendar key of the
//! booking date in local time; no timezone adjustment is applied.
//!
//! ## Invariants
//!
//! - A resolved multiplier is always greater than zero
//! - An absent, unparsable, non-finite, or non-positive multiplier on a
//!   matched holiday falls back to the default surge of 1.5
//! - A date with no matching active holiday resolves to multiplier 1.0
//! - The first record in input order wins when several share a date
//!
//! The first-match rule mirrors the upstream data feed, where duplicate
//! dates are not expected; it is pinned by tests rather than left implicit.

use crate::types::Holiday;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Default surge multiplier applied when a matched holiday carries no
/// usable multiplier of its own.
const DEFAULT_SURGE_MULTIPLIER: f64 = 1.5;

/// Multiplier for dates that are not holidays.
const NO_HOLIDAY_MULTIPLIER: f64 = 1.0;

/// The outcome of resolving a date against the holiday calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayResolution {
    /// Whether the date matched an active holiday.
    pub is_holiday: bool,
    /// The matched holiday's name, if any.
    pub holiday_name: Option<String>,
    /// The surge multiplier to feed into pricing. Always greater than zero.
    pub multiplier: f64,
}

/// Resolves a calendar date against a list of holiday records.
///
/// # Arguments
///
/// * `date` - The booking date (local calendar date)
/// * `holidays` - Holiday records in caller-determined order
///
/// # Returns
///
/// A [`HolidayResolution`]. When no active holiday matches, `is_holiday`
/// is false and the multiplier is 1.0.
#[must_use]
pub fn resolve_holiday(date: NaiveDate, holidays: &[Holiday]) -> HolidayResolution {
    let date_key: String = date.format("%Y-%m-%d").to_string();

    let matched: Option<&Holiday> = holidays
        .iter()
        .find(|holiday| holiday.is_in_effect() && holiday.date == date_key);

    matched.map_or(
        HolidayResolution {
            is_holiday: false,
            holiday_name: None,
            multiplier: NO_HOLIDAY_MULTIPLIER,
        },
        |holiday| HolidayResolution {
            is_holiday: true,
            holiday_name: Some(holiday.name.clone()),
            multiplier: parse_multiplier(holiday.multiplier.as_deref()),
        },
    )
}

/// Returns whether the date falls on a Saturday or Sunday.
#[must_use]
pub fn is_weekend_day(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the active holidays within `[today, today + horizon_days]`.
///
/// Comparison happens at day granularity. Records whose date string does
/// not parse are excluded rather than treated as errors.
///
/// # Arguments
///
/// * `holidays` - Holiday records to filter
/// * `today` - The current local calendar date, supplied by the caller
/// * `horizon_days` - Number of days to look ahead (both bounds inclusive)
#[must_use]
pub fn upcoming_holidays(holidays: &[Holiday], today: NaiveDate, horizon_days: u32) -> Vec<Holiday> {
    let horizon_end: NaiveDate = today
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .unwrap_or(NaiveDate::MAX);

    holidays
        .iter()
        .filter(|holiday| {
            if !holiday.is_in_effect() {
                return false;
            }
            NaiveDate::parse_from_str(&holiday.date, "%Y-%m-%d")
                .is_ok_and(|date| date >= today && date <= horizon_end)
        })
        .cloned()
        .collect()
}

/// Parses a raw multiplier string, falling back to the default surge.
///
/// Mirrors the upstream feed's loose numeric coercion: anything that does
/// not yield a finite positive float becomes 1.5.
fn parse_multiplier(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|multiplier| multiplier.is_finite() && *multiplier > 0.0)
        .unwrap_or(DEFAULT_SURGE_MULTIPLIER)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn holiday(date: &str, name: &str, multiplier: Option<&str>, is_active: Option<bool>) -> Holiday {
        Holiday {
            date: date.to_string(),
            name: name.to_string(),
            multiplier: multiplier.map(str::to_string),
            is_active,
        }
    }

    #[test]
    fn test_resolves_matching_holiday() {
        let holidays = vec![holiday("2026-08-15", "Independence Day", Some("2.0"), None)];
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();

        let resolution: HolidayResolution = resolve_holiday(date, &holidays);

        assert!(resolution.is_holiday);
        assert_eq!(resolution.holiday_name.as_deref(), Some("Independence Day"));
        assert!((resolution.multiplier - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_holiday_resolves_to_neutral_multiplier() {
        let holidays = vec![holiday("2026-08-15", "Independence Day", Some("2.0"), None)];
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 8, 16).unwrap();

        let resolution: HolidayResolution = resolve_holiday(date, &holidays);

        assert!(!resolution.is_holiday);
        assert!(resolution.holiday_name.is_none());
        assert!((resolution.multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_calendar_resolves_to_neutral_multiplier() {
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        let resolution: HolidayResolution = resolve_holiday(date, &[]);
        assert!(!resolution.is_holiday);
        assert!((resolution.multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inactive_holiday_is_ignored() {
        let holidays = vec![holiday("2026-08-15", "Suspended", Some("2.0"), Some(false))];
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();

        let resolution: HolidayResolution = resolve_holiday(date, &holidays);

        assert!(!resolution.is_holiday);
    }

    #[test]
    fn test_absent_active_flag_counts_as_active() {
        let holidays = vec![holiday("2026-08-15", "Implicitly Active", None, None)];
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();

        assert!(resolve_holiday(date, &holidays).is_holiday);
    }

    #[test]
    fn test_malformed_multiplier_defaults_to_surge() {
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();

        for raw in [None, Some("not-a-number"), Some(""), Some("0"), Some("-2")] {
            let holidays = vec![holiday("2026-08-15", "Odd Data", raw, None)];
            let resolution: HolidayResolution = resolve_holiday(date, &holidays);
            assert!(resolution.is_holiday);
            assert!(
                (resolution.multiplier - 1.5).abs() < f64::EPSILON,
                "raw multiplier {raw:?} should default to 1.5"
            );
        }
    }

    #[test]
    fn test_first_match_wins_on_duplicate_dates() {
        let holidays = vec![
            holiday("2026-08-15", "First", Some("1.8"), None),
            holiday("2026-08-15", "Second", Some("3.0"), None),
        ];
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();

        let resolution: HolidayResolution = resolve_holiday(date, &holidays);

        assert_eq!(resolution.holiday_name.as_deref(), Some("First"));
        assert!((resolution.multiplier - 1.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inactive_first_record_falls_through_to_second() {
        let holidays = vec![
            holiday("2026-08-15", "Suspended", Some("9.0"), Some(false)),
            holiday("2026-08-15", "Active", Some("1.7"), None),
        ];
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();

        let resolution: HolidayResolution = resolve_holiday(date, &holidays);

        assert_eq!(resolution.holiday_name.as_deref(), Some("Active"));
        assert!((resolution.multiplier - 1.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weekend_detection() {
        // 2026-08-08 is a Saturday, 2026-08-09 a Sunday, 2026-08-10 a Monday
        assert!(is_weekend_day(NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()));
        assert!(is_weekend_day(NaiveDate::from_ymd_opt(2026, 8, 9).unwrap()));
        assert!(!is_weekend_day(NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()));
    }

    #[test]
    fn test_upcoming_holidays_includes_both_bounds() {
        let holidays = vec![
            holiday("2026-08-06", "Today", None, None),
            holiday("2026-08-13", "Horizon Edge", None, None),
            holiday("2026-08-14", "Past Horizon", None, None),
            holiday("2026-08-05", "Yesterday", None, None),
        ];
        let today: NaiveDate = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        let upcoming: Vec<Holiday> = upcoming_holidays(&holidays, today, 7);

        let names: Vec<&str> = upcoming.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Today", "Horizon Edge"]);
    }

    #[test]
    fn test_upcoming_holidays_skips_inactive_and_unparsable() {
        let holidays = vec![
            holiday("2026-08-07", "Suspended", None, Some(false)),
            holiday("not-a-date", "Broken", None, None),
            holiday("2026-08-08", "Kept", None, None),
        ];
        let today: NaiveDate = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        let upcoming: Vec<Holiday> = upcoming_holidays(&holidays, today, 7);

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Kept");
    }
}
