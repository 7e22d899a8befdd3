//! Holds the crate's error enum and the `Result` alias that goes with it.

use crate::validate::Issue;
use thiserror::Error;

/// The errors that can come out of building, loading, or checking a travel
/// table. The table itself never errors: malformed entries only surface when
/// someone asks the linter.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A model builder was missing a required field
    #[error("error building object {0}")]
    BuilderFailed(String),
    /// Reading or writing a data file failed
    #[error("io error: {0}")]
    Io(String),
    /// The table has at least one error-level lint issue
    #[error("table failed validation with {} issue(s)", .0.len())]
    InvalidTable(Vec<Issue>),
    /// The data file isn't JSON or isn't shaped like a travel table
    #[error("parse error: {0}")]
    Parse(String),
    /// Text that doesn't name any of our regions
    #[error("unknown region: {0}")]
    UnknownRegion(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else {
            Error::Parse(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
