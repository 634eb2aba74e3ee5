//! # Constants and type definitions for tletime
//!
//! This module centralizes the **reference epochs**, **conversion factors**, and **common type
//! definitions** used throughout the `tletime` library.
//!
//! ## Overview
//!
//! - Time unit conversions (days ↔ seconds)
//! - The SGP4 and GMST reference instants
//! - The two-digit-year pivot used by TLE epoch strings
//! - Core type aliases used across the crate

use std::sync::LazyLock;

use hifitime::{Epoch, TimeScale};

// -------------------------------------------------------------------------------------------------
// Time constants
// -------------------------------------------------------------------------------------------------

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Pivot for the two-digit year of a TLE epoch string: years below this value
/// belong to the 2000s, years at or above it to the 1900s.
pub const CENTURY_PIVOT: i32 = 50;

/// Reference instant of the SGP4 epoch numbering convention (1949-12-31 00:00:00 UTC).
///
/// SGP4 epochs count fractional days elapsed since this instant.
pub static SGP4_REFERENCE_EPOCH: LazyLock<Epoch> =
    LazyLock::new(|| Epoch::from_gregorian(1949, 12, 31, 0, 0, 0, 0, TimeScale::UTC));

/// Reference instant for Greenwich Mean Sidereal Time computations
/// (J2000.0, 2000-01-01 12:00:00 UTC).
pub static GMST_EPOCH: LazyLock<Epoch> =
    LazyLock::new(|| Epoch::from_gregorian(2000, 1, 1, 12, 0, 0, 0, TimeScale::UTC));

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Fractional days elapsed since [`SGP4_REFERENCE_EPOCH`]
pub type Sgp4Epoch = f64;

#[cfg(test)]
mod constants_test {
    use super::*;

    #[test]
    fn test_reference_epochs() {
        let (year, month, day, hour, _, _, _) = SGP4_REFERENCE_EPOCH.to_gregorian_utc();
        assert_eq!((year, month, day, hour), (1949, 12, 31, 0));

        let (year, month, day, hour, _, _, _) = GMST_EPOCH.to_gregorian_utc();
        assert_eq!((year, month, day, hour), (2000, 1, 1, 12));
    }
}
