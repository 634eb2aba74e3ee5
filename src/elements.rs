//! Splitting of individual TLE lines into whitespace-delimited fields.
//!
//! A three-line-element record is made of a name line (line 0) followed by the
//! two standard element lines (line 1 and line 2). For a line 1, the epoch
//! token sits at field position [`EPOCH_FIELD_INDEX`].

use serde::{Deserialize, Serialize};

/// Field position of the epoch token within a split TLE line 1
pub const EPOCH_FIELD_INDEX: usize = 3;

/// A single TLE line split into its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TleLineFields {
    /// Whitespace-delimited tokens of the line, in order
    pub fields: Vec<String>,
    /// The original line text, line terminator included, suitable for
    /// verbatim concatenation back into a record
    pub line_str: String,
}

/// Split one TLE line (any of line 0, 1, or 2) into its fields.
pub fn split_tle_line(line: &str) -> TleLineFields {
    TleLineFields {
        fields: line.split_whitespace().map(str::to_string).collect(),
        line_str: line.to_string(),
    }
}

#[cfg(test)]
mod elements_test {
    use super::*;

    #[test]
    fn test_split_tle_line() {
        let line = "1 25544U 98067A   21001.50000000  .00001764  00000-0  40967-4 0  9990\n";
        let split = split_tle_line(line);

        assert_eq!(split.fields[0], "1");
        assert_eq!(split.fields[1], "25544U");
        assert_eq!(split.fields[EPOCH_FIELD_INDEX], "21001.50000000");
        assert_eq!(split.line_str, line);
    }

    #[test]
    fn test_split_keeps_terminator() {
        let split = split_tle_line("ISS (ZARYA)\n");
        assert_eq!(split.fields, vec!["ISS", "(ZARYA)"]);
        assert!(split.line_str.ends_with('\n'));
    }
}
