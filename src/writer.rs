//! Changelog writer
//!
//! Renders a [`Changelog`] in the canonical Keep a Changelog layout. Output
//! is a faithful rendering of the model: nothing is trimmed, sorted or
//! deduplicated.

use std::io::Write;

use tracing::{debug, instrument};

use crate::domain::Changelog;
use crate::error::WriteError;

/// Write `changelog` to `w`.
///
/// A version with an empty name aborts the write with
/// [`WriteError::EmptyVersionName`]; whatever was written before it stays
/// written.
#[instrument(skip_all, fields(versions = changelog.versions.len()))]
pub fn write<W: Write>(changelog: &Changelog, w: &mut W) -> Result<(), WriteError> {
    write!(w, "# {}\n\n", changelog.title)?;
    write!(w, "{}\n\n", changelog.preamble)?;

    for version in &changelog.versions {
        if version.name.is_empty() {
            return Err(WriteError::EmptyVersionName);
        }

        write!(w, "## [{}]", version.name)?;
        if !version.date.is_empty() {
            write!(w, " - {}", version.date)?;
        }
        writeln!(w)?;

        if version.changes.is_empty() {
            writeln!(w)?;
            continue;
        }

        for collection in &version.changes {
            writeln!(w, "### {}", collection.kind)?;
            for item in &collection.items {
                writeln!(w, "- {}", item)?;
            }
            writeln!(w)?;
        }
    }

    debug!("changelog written");
    Ok(())
}

/// Render `changelog` into a string
pub fn to_string(changelog: &Changelog) -> Result<String, WriteError> {
    let mut buf = Vec::new();
    write(changelog, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
