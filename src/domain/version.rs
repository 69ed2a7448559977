//! Version record for an ISIS installation
//!
//! ISIS version files are free-form text; a record only ever carries what the
//! file actually declared. The release level and date are optional and stay
//! `None` when the file does not mention them.

use crate::error::{IsisVersionError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Maturity tag for an ISIS release
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReleaseLevel {
    /// Alpha release
    Alpha,
    /// Beta release
    Beta,
    /// Stable release
    Stable,
}

impl ReleaseLevel {
    /// Parse a release level from a string
    ///
    /// Accepts the literal tokens "alpha", "beta", or "stable".
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for ReleaseLevel {
    type Err = IsisVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(ReleaseLevel::Alpha),
            "beta" => Ok(ReleaseLevel::Beta),
            "stable" => Ok(ReleaseLevel::Stable),
            other => Err(IsisVersionError::malformed(format!(
                "Unknown release level: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ReleaseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseLevel::Alpha => write!(f, "alpha"),
            ReleaseLevel::Beta => write!(f, "beta"),
            ReleaseLevel::Stable => write!(f, "stable"),
        }
    }
}

/// Version information extracted from an ISIS version file
///
/// The major/minor/patch triple is always present. Release level and release
/// date are independently optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub release_level: Option<ReleaseLevel>,
    pub release_date: Option<NaiveDate>,
}

impl VersionRecord {
    /// Create a record with the bare version triple and no optional fields
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        VersionRecord {
            major,
            minor,
            patch,
            release_level: None,
            release_date: None,
        }
    }

    /// Attach a release level to the record
    pub fn with_level(mut self, level: ReleaseLevel) -> Self {
        self.release_level = Some(level);
        self
    }

    /// Attach a release date to the record
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
