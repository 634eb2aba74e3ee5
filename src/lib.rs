pub mod constants;
pub mod elements;
pub mod epoch;
pub mod matching;
pub mod tle_file;
pub mod tletime_errors;

pub use tletime_errors::TleTimeError;
