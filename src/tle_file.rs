//! # Flat TLE file accessors
//!
//! Utilities to read the flat three-line-element text files produced by the
//! TLE archiver and pull epochs or whole records out of them.
//!
//! ## File layout
//! -----------------
//! Records are stored back-to-back with no separators: record `k` occupies
//! file-line indices `3k` (name line), `3k + 1` (line 1), and `3k + 2`
//! (line 2), so the line 1s sit at indices 1, 4, 7, … The epoch token is
//! field position 3 of a split line 1.
//!
//! ## Error Handling
//! -----------------
//! A missing file is the expected cold-start condition and is reported as
//! `Ok(None)` rather than as an error. A file that exists but is malformed
//! (short, truncated record, unparseable epoch) surfaces a [`TleTimeError`];
//! no partial results are returned. Each call opens and reads the file on its
//! own, nothing is cached across calls.

use camino::Utf8Path;
use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::elements::{split_tle_line, TleLineFields, EPOCH_FIELD_INDEX};
use crate::epoch::epoch_to_datetime;
use crate::tletime_errors::TleTimeError;

/// Number of file lines per stored TLE record
const LINES_PER_RECORD: usize = 3;

/// File-line index of the first record's line 1
const FIRST_LINE1_INDEX: usize = 1;

/// One stored TLE record with each of its three lines split into fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TleRecordFields {
    /// Name line of the record
    pub line0: TleLineFields,
    /// Line 1 (epoch and metadata)
    pub line1: TleLineFields,
    /// Line 2 (orbital elements)
    pub line2: TleLineFields,
}

/// Return the first and last stored epoch for `tle_path`.
///
/// The pair is in file order: nothing guarantees the file is chronological,
/// so the first epoch is not necessarily the earlier one.
///
/// Arguments
/// ---------
/// * `tle_path`: the TLE file
///
/// Return
/// ------
/// * `Ok(None)` if the file does not exist, otherwise the epochs of the first
///   and last record's line 1
pub fn get_stored_epoch_range(
    tle_path: &Utf8Path,
) -> Result<Option<(Epoch, Epoch)>, TleTimeError> {
    let Some(lines) = read_lines(tle_path)? else {
        return Ok(None);
    };

    let first_epoch = epoch_from_line1(line_at(&lines, FIRST_LINE1_INDEX)?)?;
    // line_at above guarantees at least two lines, so the second-to-last
    // index cannot underflow
    let last_epoch = epoch_from_line1(line_at(&lines, lines.len() - 2)?)?;

    Ok(Some((first_epoch, last_epoch)))
}

/// Return every stored epoch for `tle_path`, in file order.
///
/// Arguments
/// ---------
/// * `tle_path`: the TLE file
///
/// Return
/// ------
/// * `Ok(None)` if the file does not exist, otherwise one datetime per record
pub fn get_all_stored_epochs(tle_path: &Utf8Path) -> Result<Option<Vec<Epoch>>, TleTimeError> {
    let Some(lines) = read_lines(tle_path)? else {
        return Ok(None);
    };

    let mut epochs = Vec::new();
    for index in (FIRST_LINE1_INDEX..lines.len()).step_by(LINES_PER_RECORD) {
        epochs.push(epoch_from_line1(&lines[index])?);
    }

    Ok(Some(epochs))
}

/// Return the raw text of the records at `record_indices` within `tle_path`.
///
/// Each returned string is the three lines of the record concatenated
/// verbatim, line terminators included, with no added separators. Results are
/// in request order, one per requested index.
///
/// Arguments
/// ---------
/// * `tle_path`: the TLE file
/// * `record_indices`: 0-based record indices within the file
///
/// Return
/// ------
/// * `Ok(None)` if the file does not exist;
///   [`TleTimeError::LineOutOfRange`] if an index addresses lines beyond the
///   end of the file
pub fn get_stored_records_by_index(
    tle_path: &Utf8Path,
    record_indices: &[usize],
) -> Result<Option<Vec<String>>, TleTimeError> {
    let Some(lines) = read_lines(tle_path)? else {
        return Ok(None);
    };

    let mut records = Vec::with_capacity(record_indices.len());
    for &record_index in record_indices {
        let [line0, line1, line2] = record_lines(&lines, record_index)?;
        records.push(format!("{line0}{line1}{line2}"));
    }

    Ok(Some(records))
}

/// Return the records at `record_indices` within `tle_path`, each line split
/// into its fields.
///
/// Field-structured counterpart of [`get_stored_records_by_index`], with the
/// same ordering and failure behavior.
pub fn get_stored_record_fields_by_index(
    tle_path: &Utf8Path,
    record_indices: &[usize],
) -> Result<Option<Vec<TleRecordFields>>, TleTimeError> {
    let Some(lines) = read_lines(tle_path)? else {
        return Ok(None);
    };

    let mut records = Vec::with_capacity(record_indices.len());
    for &record_index in record_indices {
        let [line0, line1, line2] = record_lines(&lines, record_index)?;
        records.push(TleRecordFields {
            line0: split_tle_line(line0),
            line1: split_tle_line(line1),
            line2: split_tle_line(line2),
        });
    }

    Ok(Some(records))
}

/// Read the whole file as lines with their terminators kept, or `None` if it
/// does not exist.
fn read_lines(tle_path: &Utf8Path) -> Result<Option<Vec<String>>, TleTimeError> {
    if !tle_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(tle_path)?;
    Ok(Some(
        content.split_inclusive('\n').map(str::to_string).collect(),
    ))
}

fn line_at<'a>(lines: &'a [String], index: usize) -> Result<&'a str, TleTimeError> {
    lines
        .get(index)
        .map(String::as_str)
        .ok_or(TleTimeError::LineOutOfRange {
            index,
            line_count: lines.len(),
        })
}

fn record_lines<'a>(
    lines: &'a [String],
    record_index: usize,
) -> Result<[&'a str; 3], TleTimeError> {
    let base = record_index * LINES_PER_RECORD;
    Ok([
        line_at(lines, base)?,
        line_at(lines, base + 1)?,
        line_at(lines, base + 2)?,
    ])
}

fn epoch_from_line1(line: &str) -> Result<Epoch, TleTimeError> {
    let split = split_tle_line(line);
    let epoch_field = split
        .fields
        .get(EPOCH_FIELD_INDEX)
        .ok_or_else(|| TleTimeError::MissingEpochField(split.line_str.trim_end().to_string()))?;

    epoch_to_datetime(epoch_field)
}
