//! Conversions between TLE fractional epoch strings, calendar datetimes
//! ([`hifitime::Epoch`] in the UTC time scale), and SGP4 propagator epochs.
//!
//! The TLE epoch wire format is `YYDDD.FFFFFFFF`: a 2-digit year, a 3-digit
//! zero-padded day-of-year, and a variable-length fractional-day suffix. The
//! two-digit year is disambiguated by the pivot [`CENTURY_PIVOT`] and the
//! day-of-year field is 1-based (day 1.0 is January 1st, 00:00).

use std::borrow::Cow;

use hifitime::{Epoch, TimeScale, Unit};

use crate::constants::{Sgp4Epoch, CENTURY_PIVOT, SECONDS_PER_DAY, SGP4_REFERENCE_EPOCH};
use crate::tletime_errors::TleTimeError;

/// A TLE epoch field, either its text form or a raw numeric literal.
///
/// TLE catalogs carry the epoch as text, but callers holding the field as a
/// number (e.g. out of a numeric column) can pass it directly; the numeric
/// form is converted to its decimal text rendering before parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum EpochField<'a> {
    Text(&'a str),
    Numeric(f64),
}

impl<'a> From<&'a str> for EpochField<'a> {
    fn from(s: &'a str) -> Self {
        EpochField::Text(s)
    }
}

impl<'a> From<&'a String> for EpochField<'a> {
    fn from(s: &'a String) -> Self {
        EpochField::Text(s)
    }
}

impl From<f64> for EpochField<'_> {
    fn from(value: f64) -> Self {
        EpochField::Numeric(value)
    }
}

impl EpochField<'_> {
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            EpochField::Text(s) => Cow::Borrowed(*s),
            // {:?} keeps the ".0" of whole-valued floats, matching the text
            // form found in TLE lines more closely than {}
            EpochField::Numeric(value) => Cow::Owned(format!("{value:?}")),
        }
    }
}

/// Convert a TLE fractional epoch to a UTC datetime.
///
/// The first two characters are the two-digit year (pivot at [`CENTURY_PIVOT`]:
/// below 50 → 2000s, 50 and above → 1900s), the remainder is a fractional
/// day-of-year. Day-of-year is 1-based while the calendar arithmetic is
/// 0-based, hence the explicit one-day correction: day 1.0 maps to Jan 1 00:00.
///
/// Argument
/// --------
/// * `epoch`: a TLE epoch field, text (`"21001.50000000"`) or numeric
///
/// Return
/// ------
/// * the equivalent [`Epoch`] in the UTC time scale, or
///   [`TleTimeError::InvalidEpochFormat`] if the string is shorter than three
///   characters or a segment is not numeric
pub fn epoch_to_datetime<'a>(epoch: impl Into<EpochField<'a>>) -> Result<Epoch, TleTimeError> {
    let epoch = epoch.into();
    let epoch_str = epoch.as_text();

    let invalid = || TleTimeError::InvalidEpochFormat(epoch_str.to_string());

    let year_str = epoch_str.get(..2).ok_or_else(invalid)?;
    let doy_str = epoch_str.get(2..).filter(|s| !s.is_empty()).ok_or_else(invalid)?;

    let mut year: i32 = year_str.parse().map_err(|_| invalid())?;
    if year < CENTURY_PIVOT {
        year += 2000;
    } else {
        year += 1900;
    }

    let fractional_day_of_year: f64 = doy_str.parse().map_err(|_| invalid())?;

    let year_start = Epoch::from_gregorian(year, 1, 1, 0, 0, 0, 0, TimeScale::UTC);
    Ok(year_start + Unit::Day * (fractional_day_of_year - 1.0))
}

/// Check if TLE epoch A is strictly earlier than TLE epoch B.
///
/// Equal epochs compare false.
pub fn epoch_earlier_than<'a, 'b>(
    epoch_a: impl Into<EpochField<'a>>,
    epoch_b: impl Into<EpochField<'b>>,
) -> Result<bool, TleTimeError> {
    let datetime_a = epoch_to_datetime(epoch_a)?;
    let datetime_b = epoch_to_datetime(epoch_b)?;
    Ok(datetime_a < datetime_b)
}

/// Check if TLE epoch A is strictly later than TLE epoch B.
///
/// Equal epochs compare false.
pub fn epoch_later_than<'a, 'b>(
    epoch_a: impl Into<EpochField<'a>>,
    epoch_b: impl Into<EpochField<'b>>,
) -> Result<bool, TleTimeError> {
    let datetime_a = epoch_to_datetime(epoch_a)?;
    let datetime_b = epoch_to_datetime(epoch_b)?;
    Ok(datetime_a > datetime_b)
}

/// Convert a UTC datetime to a TLE epoch string.
///
/// The result is the last two digits of the year, the zero-padded 3-digit
/// day-of-year, and the day fraction formatted as decimal text with its
/// leading `0` stripped, so the fraction begins at the decimal point
/// (`2021-01-01T12:00:00 UTC` → `"21001.5"`). Lossy on the leading zero of
/// the fraction by construction.
///
/// Argument
/// --------
/// * `date`: the datetime to encode
///
/// Return
/// ------
/// * the TLE epoch string, or [`TleTimeError::NonCanonicalDayFraction`] if the
///   formatted fraction does not start with a single `0` before the decimal
///   point (the strip would otherwise corrupt the field)
pub fn datetime_to_tle_epoch(date: Epoch) -> Result<String, TleTimeError> {
    let (year, month, day, _, _, _, _) = date.to_gregorian_utc();

    let year_start = Epoch::from_gregorian(year, 1, 1, 0, 0, 0, 0, TimeScale::UTC);
    let day_start = Epoch::from_gregorian(year, month, day, 0, 0, 0, 0, TimeScale::UTC);

    let day_of_year = (day_start - year_start).to_unit(Unit::Day).round() as u16 + 1;
    let day_fraction = (date - day_start).to_seconds() / SECONDS_PER_DAY;

    // {:?} always renders a decimal point ("0.0", never "0"), so the strip
    // below leaves ".0" for midnight
    let fraction_repr = format!("{day_fraction:?}");
    let fraction_str = fraction_repr
        .strip_prefix('0')
        .filter(|s| s.starts_with('.'))
        .ok_or(TleTimeError::NonCanonicalDayFraction(fraction_repr.clone()))?;

    Ok(format!(
        "{:02}{:03}{}",
        year.rem_euclid(100),
        day_of_year,
        fraction_str
    ))
}

/// Convert a UTC datetime to an SGP4 epoch.
///
/// Argument
/// --------
/// * `date`: the datetime to encode
///
/// Return
/// ------
/// * fractional days elapsed since [`SGP4_REFERENCE_EPOCH`]
///   (1949-12-31 00:00:00 UTC), computed as whole days plus the partial-day
///   seconds divided by [`SECONDS_PER_DAY`]
pub fn datetime_to_sgp4_epoch(date: Epoch) -> Sgp4Epoch {
    let delta_seconds = (date - *SGP4_REFERENCE_EPOCH).to_seconds();
    let whole_days = delta_seconds.div_euclid(SECONDS_PER_DAY);
    whole_days + delta_seconds.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_DAY
}

#[cfg(test)]
mod epoch_test {
    use super::*;

    #[test]
    fn test_epoch_to_datetime() {
        let datetime = epoch_to_datetime("21001.00000000").unwrap();
        assert_eq!(
            datetime,
            Epoch::from_gregorian(2021, 1, 1, 0, 0, 0, 0, TimeScale::UTC)
        );

        let datetime = epoch_to_datetime("21001.50000000").unwrap();
        assert_eq!(
            datetime,
            Epoch::from_gregorian(2021, 1, 1, 12, 0, 0, 0, TimeScale::UTC)
        );

        // day 32 is February 1st
        let datetime = epoch_to_datetime("21032.25000000").unwrap();
        assert_eq!(
            datetime,
            Epoch::from_gregorian(2021, 2, 1, 6, 0, 0, 0, TimeScale::UTC)
        );
    }

    #[test]
    fn test_epoch_to_datetime_is_deterministic() {
        let first = epoch_to_datetime("24123.62539682").unwrap();
        let second = epoch_to_datetime("24123.62539682").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_century_pivot() {
        let datetime = epoch_to_datetime("49001.00000000").unwrap();
        assert_eq!(datetime.to_gregorian_utc().0, 2049);

        let datetime = epoch_to_datetime("50001.00000000").unwrap();
        assert_eq!(datetime.to_gregorian_utc().0, 1950);
    }

    #[test]
    fn test_epoch_to_datetime_numeric_input() {
        let from_text = epoch_to_datetime("21001.5").unwrap();
        let from_value = epoch_to_datetime(21001.5).unwrap();
        assert_eq!(from_text, from_value);

        // whole-valued float still carries its day-of-year digits
        let datetime = epoch_to_datetime(21032.0).unwrap();
        assert_eq!(
            datetime,
            Epoch::from_gregorian(2021, 2, 1, 0, 0, 0, 0, TimeScale::UTC)
        );
    }

    #[test]
    fn test_epoch_to_datetime_invalid() {
        assert_eq!(
            epoch_to_datetime("21"),
            Err(TleTimeError::InvalidEpochFormat("21".to_string()))
        );
        assert_eq!(
            epoch_to_datetime("xx001.5"),
            Err(TleTimeError::InvalidEpochFormat("xx001.5".to_string()))
        );
        assert_eq!(
            epoch_to_datetime("21abc"),
            Err(TleTimeError::InvalidEpochFormat("21abc".to_string()))
        );
    }

    #[test]
    fn test_epoch_ordering() {
        assert!(epoch_earlier_than("21001.50000000", "21002.00000000").unwrap());
        assert!(!epoch_later_than("21001.50000000", "21002.00000000").unwrap());

        // equal epochs are neither earlier nor later
        assert!(!epoch_earlier_than("21001.50000000", "21001.50000000").unwrap());
        assert!(!epoch_later_than("21001.50000000", "21001.50000000").unwrap());
    }

    #[test]
    fn test_datetime_to_tle_epoch() {
        let date = Epoch::from_gregorian(2021, 1, 1, 12, 0, 0, 0, TimeScale::UTC);
        assert_eq!(datetime_to_tle_epoch(date).unwrap(), "21001.5");

        let date = Epoch::from_gregorian(2021, 1, 1, 0, 0, 0, 0, TimeScale::UTC);
        assert_eq!(datetime_to_tle_epoch(date).unwrap(), "21001.0");

        let date = Epoch::from_gregorian(2005, 2, 1, 6, 0, 0, 0, TimeScale::UTC);
        assert_eq!(datetime_to_tle_epoch(date).unwrap(), "05032.25");
    }

    #[test]
    fn test_tle_epoch_round_trip() {
        let datetime = epoch_to_datetime("21032.25").unwrap();
        assert_eq!(datetime_to_tle_epoch(datetime).unwrap(), "21032.25");
    }

    #[test]
    fn test_datetime_to_sgp4_epoch() {
        let reference = Epoch::from_gregorian(1949, 12, 31, 0, 0, 0, 0, TimeScale::UTC);
        assert_eq!(datetime_to_sgp4_epoch(reference), 0.0);

        let one_day_later = Epoch::from_gregorian(1950, 1, 1, 0, 0, 0, 0, TimeScale::UTC);
        assert_eq!(datetime_to_sgp4_epoch(one_day_later), 1.0);

        let noon_next_day = Epoch::from_gregorian(1950, 1, 1, 12, 0, 0, 0, TimeScale::UTC);
        assert_eq!(datetime_to_sgp4_epoch(noon_next_day), 1.5);
    }
}
