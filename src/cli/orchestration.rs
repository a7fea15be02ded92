//! Command workflows
//!
//! Everything a subcommand does once its arguments are known: validate the
//! request, read and parse the changelog, apply the mutation and render the
//! result. Kept free of clap so it can be driven from tests with in-memory
//! readers.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{ChangeKind, Changelog};
use crate::error::{ChangelogError, Result};
use crate::parser;
use crate::release::ReleaseTarget;
use crate::writer;

/// A mutation requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Add `message` under `kind` in `[Unreleased]`
    Add { kind: ChangeKind, message: String },

    /// Turn `[Unreleased]` into `version`
    Release {
        version: String,
        /// `YYYY-MM-DD`; today when absent
        date: Option<String>,
    },
}

/// The changelog `init` writes
pub fn init(config: &Config) -> Changelog {
    Changelog::template(config.init.title.clone(), config.init.preamble.clone())
}

/// Parse the changelog from `reader` and apply `edit` to it.
///
/// Arguments are validated before anything is read.
pub fn edit<R: Read>(reader: R, edit: &Edit, config: &Config) -> Result<Changelog> {
    match edit {
        Edit::Add { kind, message } => {
            if message.trim().is_empty() {
                return Err(ChangelogError::message("change message must not be empty"));
            }

            let mut changelog = parser::parse_with(reader, &config.parse.options())?;
            changelog.add_item_with(*kind, message.clone(), config.behavior.placement());
            info!(%kind, "item added");
            Ok(changelog)
        }
        Edit::Release { version, date } => {
            let target = ReleaseTarget::new(version, date.as_deref())?;

            let mut changelog = parser::parse_with(reader, &config.parse.options())?;
            changelog.release(target.name.clone(), target.date.clone())?;
            info!(version = %target.name, date = %target.date, "released");
            Ok(changelog)
        }
    }
}

/// Render the changelog fully in memory, so a failure never leaves a
/// half-written output file behind
pub fn render(changelog: &Changelog) -> Result<String> {
    Ok(writer::to_string(changelog)?)
}

/// Input stream: the file at `path`, or stdin
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "reading changelog");
            Ok(Box::new(File::open(path)?))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Write `content` to the file at `path` (created or truncated), or stdout
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), bytes = content.len(), "writing changelog");
            fs::write(path, content)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// One-line description of what `edit` did, for status output
pub fn describe(edit: Option<&Edit>) -> String {
    match edit {
        None => "Initialized changelog".to_string(),
        Some(Edit::Add { kind, .. }) => format!("Added item under {:?} change", kind.as_str()),
        Some(Edit::Release { version, .. }) => format!("Released Unreleased as {}", version),
    }
}
