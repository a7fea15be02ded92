//! Parse context - the state carried while walking a changelog document.
//!
//! The markdown walker reports structural events (headings, list starts, list
//! items, the preamble paragraph) and [`ParseContext`] turns them into the
//! [`Changelog`] model. Keeping the transitions here means they can be driven
//! and tested without any markdown at all.

use tracing::debug;

use crate::domain::{ChangeCollection, ChangeKind, Changelog, Version};
use crate::error::ParseError;
use crate::parser::heading::parse_version_heading;
use crate::parser::ParseOptions;

/// Explicit state machine behind the parser
#[derive(Debug)]
pub struct ParseContext {
    changelog: Changelog,
    options: ParseOptions,
    /// Index of the version the next list belongs to
    version: Option<usize>,
    /// Kind set by the latest level-3 heading
    kind: Option<ChangeKind>,
    /// Index of the collection receiving items, within the current version
    category: Option<usize>,
}

impl ParseContext {
    pub fn new(options: ParseOptions) -> Self {
        ParseContext {
            changelog: Changelog::new(),
            options,
            version: None,
            kind: None,
            category: None,
        }
    }

    /// Level-1 heading
    pub fn title(&mut self, text: impl Into<String>) {
        self.changelog.title = text.into();
    }

    /// Paragraph directly following the title
    pub fn preamble(&mut self, text: impl Into<String>) {
        self.changelog.preamble = text.into();
    }

    /// Level-2 heading: starts a new version
    pub fn version_heading(&mut self, text: &str) -> Result<(), ParseError> {
        let version = match parse_version_heading(text) {
            Some(heading) => Version {
                name: heading.name,
                date: heading.date,
                changes: Vec::new(),
            },
            None if self.options.lenient_version_headings => {
                debug!(heading = text, "unrecognized version heading kept with empty name");
                Version::default()
            }
            None => return Err(ParseError::MalformedVersionHeading(text.to_string())),
        };

        debug!(name = %version.name, date = %version.date, "version");
        self.changelog.versions.push(version);
        self.version = Some(self.changelog.versions.len() - 1);
        self.kind = None;
        self.category = None;
        Ok(())
    }

    /// Level-3 heading: sets the kind for the lists that follow
    pub fn category_heading(&mut self, text: &str) -> Result<(), ParseError> {
        let kind =
            ChangeKind::classify(text).ok_or_else(|| ParseError::UnknownCategory(text.to_string()))?;
        self.kind = Some(kind);
        self.category = None;
        Ok(())
    }

    /// Start of a list: opens a new collection in the current version
    pub fn begin_list(&mut self) -> Result<(), ParseError> {
        let index = self.version.ok_or(ParseError::ListOutsideVersion)?;
        let version = &mut self.changelog.versions[index];
        let kind = self
            .kind
            .ok_or_else(|| ParseError::ListWithoutCategory(version.name.clone()))?;

        version.changes.push(ChangeCollection::new(kind));
        self.category = Some(version.changes.len() - 1);
        Ok(())
    }

    /// One list item of the current list
    pub fn item(&mut self, text: impl Into<String>) {
        if let (Some(version), Some(category)) = (self.version, self.category) {
            self.changelog.versions[version].changes[category]
                .items
                .push(text.into());
        }
    }

    pub fn finish(self) -> Changelog {
        self.changelog
    }
}
