use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum WdayError {
    /// User-supplied date token matched none of the accepted shapes.
    InvalidDateInput(String),
    /// A dataset record is malformed; the dataset is build-time content,
    /// so this indicates a packaging defect, not a runtime condition.
    DataIntegrity(String),
    Io(io::Error),
    Sqlite(rusqlite::Error),
    /// Bundled dataset missing or unreadable for the requested locale.
    ResourceRead(String),
    Config(String),
}

impl fmt::Display for WdayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WdayError::InvalidDateInput(token) => {
                write!(f, "invalid date input: '{token}' (expected YYYY-MM-DD, MM-DD, or DD)")
            }
            WdayError::DataIntegrity(msg) => write!(f, "dataset integrity error: {msg}"),
            WdayError::Io(err) => write!(f, "io error: {err}"),
            WdayError::Sqlite(err) => write!(f, "cache store error: {err}"),
            WdayError::ResourceRead(locale) => {
                write!(f, "no bundled dataset for locale '{locale}'")
            }
            WdayError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for WdayError {}

impl From<io::Error> for WdayError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for WdayError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<SerdeJsonError> for WdayError {
    fn from(value: SerdeJsonError) -> Self {
        Self::DataIntegrity(format!("dataset parse error: {value}"))
    }
}

pub type WdayResult<T> = Result<T, WdayError>;
