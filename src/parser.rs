//! Extraction of version records from ISIS version text
//!
//! ISIS installations ship a free-form `version` file under the installation
//! root. The parser locates a major.minor.patch triple anywhere in the text,
//! plus an optional release date (year-first or year-last shape) and an
//! optional release-level keyword. It handles version files as far back as
//! ISIS 3.5.2.0.

use crate::domain::{ReleaseLevel, VersionRecord};
use crate::error::{IsisVersionError, Result};
use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Environment key naming the ISIS installation root
pub const ISIS_ROOT_KEY: &str = "ISISROOT";

/// Relative filename of the version file under the installation root
pub const VERSION_FILE_NAME: &str = "version";

/// Parser for ISIS version text
///
/// Holds the compiled patterns; construct once and reuse across calls.
pub struct VersionParser {
    version_re: Regex,
    date_re: Regex,
    date_yearlast_re: Regex,
    level_re: Regex,
}

impl VersionParser {
    /// Create a parser with the version, date, and release-level patterns compiled
    pub fn new() -> Self {
        VersionParser {
            version_re: Regex::new(r"(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)").unwrap(),
            date_re: Regex::new(r"(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})").unwrap(),
            // Year-last reuses the group names above, so it must stay a
            // separate pattern tried after the year-first one.
            date_yearlast_re: Regex::new(r"(?P<month>\d{1,2})-(?P<day>\d{1,2})-(?P<year>\d{4})")
                .unwrap(),
            // Only recognized at the very start of the text.
            level_re: Regex::new(r"^(?:alpha|beta|stable)").unwrap(),
        }
    }

    /// Parse version text into a [`VersionRecord`]
    ///
    /// The first `<digits>.<digits>.<digits>` substring supplies the version
    /// triple; without one this fails with
    /// [`IsisVersionError::Malformed`]. The release date and release level
    /// are optional and stay `None` when the text does not carry them. A date
    /// that matches one of the two shapes but is not a valid calendar date
    /// (month 13, February 30) is an error, not an absent date.
    pub fn parse(&self, text: &str) -> Result<VersionRecord> {
        let caps = self.version_re.captures(text).ok_or_else(|| {
            IsisVersionError::malformed(format!(
                "'{}' did not match version pattern '{}'",
                text.trim(),
                self.version_re.as_str()
            ))
        })?;

        let major = capture_u32(&caps, "major")?;
        let minor = capture_u32(&caps, "minor")?;
        let patch = capture_u32(&caps, "patch")?;

        let mut record = VersionRecord::new(major, minor, patch);

        if let Some(date) = self.extract_date(text)? {
            record = record.with_date(date);
        }

        if let Some(level) = self.extract_level(text) {
            record = record.with_level(level);
        }

        Ok(record)
    }

    /// Read a version file and parse its contents
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<VersionRecord> {
        let text = fs::read_to_string(path.as_ref())?;
        self.parse(&text)
    }

    /// Parse the version file of the installation named by `environment`
    ///
    /// Resolves the installation root from the `ISISROOT` entry of the
    /// provided mapping and reads the `version` file beneath it. The mapping
    /// is passed in explicitly; use [`process_environment`] to capture the
    /// ambient process environment at the call site.
    pub fn current_version(&self, environment: &HashMap<String, String>) -> Result<VersionRecord> {
        let root = installation_root(environment)?;
        self.parse_file(Path::new(root).join(VERSION_FILE_NAME))
    }

    /// Find the release date, trying the year-first shape before year-last
    fn extract_date(&self, text: &str) -> Result<Option<NaiveDate>> {
        let caps = match self.date_re.captures(text) {
            Some(caps) => caps,
            None => match self.date_yearlast_re.captures(text) {
                Some(caps) => caps,
                None => return Ok(None),
            },
        };

        let year = caps["year"].parse::<i32>().map_err(|_| {
            IsisVersionError::malformed(format!("Year out of range: '{}'", &caps["year"]))
        })?;
        let month = capture_u32(&caps, "month")?;
        let day = capture_u32(&caps, "day")?;

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            IsisVersionError::malformed(format!(
                "{}-{}-{} is not a valid calendar date",
                year, month, day
            ))
        })?;
        Ok(Some(date))
    }

    /// Find the release-level keyword at the start of the text
    fn extract_level(&self, text: &str) -> Option<ReleaseLevel> {
        self.level_re
            .find(text)
            .and_then(|m| m.as_str().parse().ok())
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        VersionParser::new()
    }
}

/// Resolve the installation root from an environment mapping
pub fn installation_root(environment: &HashMap<String, String>) -> Result<&str> {
    environment
        .get(ISIS_ROOT_KEY)
        .map(String::as_str)
        .ok_or_else(|| {
            IsisVersionError::missing_configuration(format!(
                "environment does not define {}",
                ISIS_ROOT_KEY
            ))
        })
}

/// Snapshot the process environment into the mapping shape the parser takes
pub fn process_environment() -> HashMap<String, String> {
    std::env::vars().collect()
}

fn capture_u32(caps: &Captures<'_>, name: &str) -> Result<u32> {
    caps[name].parse::<u32>().map_err(|_| {
        IsisVersionError::malformed(format!("Component out of range: '{}'", &caps[name]))
    })
}
