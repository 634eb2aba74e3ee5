//! Nearest-neighbor matching between two sorted datetime sequences.

use hifitime::Epoch;
use itertools::Itertools;

use crate::tletime_errors::TleTimeError;

/// Find, for each datetime in `test_epochs`, the index of the closest datetime
/// in `source_epochs`.
///
/// Both sequences must be sorted ascending; this is the caller's
/// responsibility and is not validated. Each sequence is converted to seconds
/// once up front, then every test entry is scanned against the full source
/// array, O(M·N). Ties resolve to the lowest source index.
///
/// Arguments
/// ---------
/// * `test_epochs`: the datetimes to look up
/// * `source_epochs`: the datetimes to compare against
///
/// Return
/// ------
/// * one index into `source_epochs` per entry of `test_epochs`, or
///   [`TleTimeError::EmptyEpochArray`] if `source_epochs` is empty
pub fn find_closest_indices(
    test_epochs: &[Epoch],
    source_epochs: &[Epoch],
) -> Result<Vec<usize>, TleTimeError> {
    if source_epochs.is_empty() {
        return Err(TleTimeError::EmptyEpochArray);
    }

    let test_seconds: Vec<f64> = test_epochs.iter().map(Epoch::to_tai_seconds).collect();
    let source_seconds: Vec<f64> = source_epochs.iter().map(Epoch::to_tai_seconds).collect();

    Ok(test_seconds
        .iter()
        .map(|test| {
            source_seconds
                .iter()
                .map(|source| (source - test).abs())
                .position_min_by(|a, b| a.total_cmp(b))
                .unwrap_or(0)
        })
        .collect())
}
