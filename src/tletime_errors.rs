use thiserror::Error;

#[derive(Error, Debug)]
pub enum TleTimeError {
    #[error("Invalid TLE epoch string: {0}")]
    InvalidEpochFormat(String),

    #[error("TLE line-1 has no epoch field: {0}")]
    MissingEpochField(String),

    #[error("Day fraction did not format with a single leading zero: {0}")]
    NonCanonicalDayFraction(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Line index {index} out of range for TLE file with {line_count} lines")]
    LineOutOfRange { index: usize, line_count: usize },

    #[error("Cannot match against an empty epoch array")]
    EmptyEpochArray,
}

impl PartialEq for TleTimeError {
    fn eq(&self, other: &Self) -> bool {
        use TleTimeError::*;
        match (self, other) {
            (InvalidEpochFormat(a), InvalidEpochFormat(b)) => a == b,
            (MissingEpochField(a), MissingEpochField(b)) => a == b,
            (NonCanonicalDayFraction(a), NonCanonicalDayFraction(b)) => a == b,

            // IO errors are not comparable: equal if same variant
            (IoError(_), IoError(_)) => true,

            (
                LineOutOfRange {
                    index: a,
                    line_count: b,
                },
                LineOutOfRange {
                    index: c,
                    line_count: d,
                },
            ) => a == c && b == d,

            (EmptyEpochArray, EmptyEpochArray) => true,

            _ => false,
        }
    }
}
