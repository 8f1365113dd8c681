use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Width of a measurement date such as `26/03/19`.
pub const DATE_LEN: usize = 8;

/// Fixed-width date text. Copies are plain byte copies; the calendar is never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordDate([u8; DATE_LEN]);

impl RecordDate {
    pub fn as_str(&self) -> &str {
        // constructed only from an 8-byte &str, so the bytes are valid UTF-8
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl TryFrom<&str> for RecordDate {
    type Error = Error;

    fn try_from(date: &str) -> Result<Self> {
        let bytes: [u8; DATE_LEN] = date.as_bytes().try_into().map_err(|_| Error::InvalidDate {
            date: date.to_string(),
            len: date.len(),
        })?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for RecordDate {
    type Error = Error;

    fn try_from(date: String) -> Result<Self> {
        Self::try_from(date.as_str())
    }
}

impl From<RecordDate> for String {
    fn from(date: RecordDate) -> Self {
        date.as_str().to_string()
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single temperature measurement taken at a location on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    location: String,
    date: RecordDate,
    value: f64,
}

impl Record {
    pub fn new(location: impl Into<String>, date: &str, value: f64) -> Result<Self> {
        Ok(Self {
            location: location.into(),
            date: RecordDate::try_from(date)?,
            value,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date(&self) -> &str {
        self.date.as_str()
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Default for Record {
    fn default() -> Self {
        Self {
            location: "Sofia".to_string(),
            date: RecordDate(*b"01/01/99"),
            value: 12.0,
        }
    }
}
