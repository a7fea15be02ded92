use chrono::{Local, NaiveDate};

use crate::error::{ChangelogError, Result};

/// Date layout used in version headings
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated version name and date for `release`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTarget {
    pub name: String,
    pub date: String,
}

impl ReleaseTarget {
    /// Validate a release argument pair.
    ///
    /// `date` defaults to today (local time) when absent.
    pub fn new(version: &str, date: Option<&str>) -> Result<Self> {
        let name = normalize_version(version)?;
        let date = match date {
            Some(date) => normalize_date(date)?,
            None => Local::now().date_naive().format(DATE_FORMAT).to_string(),
        };
        Ok(ReleaseTarget { name, date })
    }
}

/// Parse a release version and return it in `MAJOR.MINOR.PATCH` form.
///
/// A leading `v` or `V` is accepted and dropped. Pre-release and build
/// metadata are rejected since version headings only carry three numbers.
pub fn normalize_version(input: &str) -> Result<String> {
    let clean = input
        .trim()
        .trim_start_matches('v')
        .trim_start_matches('V');
    let version = semver::Version::parse(clean)
        .map_err(|e| ChangelogError::version(format!("invalid version {:?}: {}", input, e)))?;

    if !version.pre.is_empty() || !version.build.is_empty() {
        return Err(ChangelogError::version(format!(
            "invalid version {:?}: only MAJOR.MINOR.PATCH is supported",
            input
        )));
    }

    Ok(version.to_string())
}

/// Check a `YYYY-MM-DD` date and return it zero-padded
pub fn normalize_date(input: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|e| {
        ChangelogError::date(format!("invalid date {:?}, expected YYYY-MM-DD: {}", input, e))
    })?;
    Ok(date.format(DATE_FORMAT).to_string())
}
