//! Report domain model.
//!
//! A report is an immutable HTML document keyed by its run date. The same
//! date may exist both as a local file and as a remote row; the two copies
//! are the same logical report.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::domain::errors::ReportError;

// ASCII digits only; `\d` would also accept other Unicode digits.
static DATE_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date key pattern is valid")
});

/// A `YYYY-MM-DD` report key.
///
/// Only the lexical shape is checked; `2024-13-45` is accepted. Because the
/// shape is fixed-width, lexical order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReportDate(String);

impl ReportDate {
    /// Validate a raw date key.
    pub fn parse(raw: &str) -> Result<Self, ReportError> {
        if DATE_KEY_PATTERN.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ReportError::InvalidDateFormat(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this report inside the local store.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.0)
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ReportDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|_| {
            serde::de::Error::custom(format!("invalid report date key: {raw:?}"))
        })
    }
}

/// Where a report was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    Local,
    Remote,
}

impl ReportSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved report body.
///
/// The body is kept as raw bytes so local files are served exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub date: ReportDate,
    pub body: Vec<u8>,
    pub source: ReportSource,
}

/// One row of the report listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub date: ReportDate,
    pub source: ReportSource,
}

impl ReportEntry {
    pub const fn new(date: ReportDate, source: ReportSource) -> Self {
        Self { date, source }
    }
}
