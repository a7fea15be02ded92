//! Changelog parser
//!
//! Reads a Keep a Changelog markdown document into a [`Changelog`].
//!
//! The document is walked once, in order, over the pulldown-cmark event
//! stream. The walker only tracks markdown nesting (block depth, list depth,
//! the text of the heading or item being read) and reports what it finds to
//! a [`ParseContext`], which owns every changelog-level decision.
//!
//! ```rust
//! # use changelog::parser::parse_str;
//! # use changelog::parser::ParseOptions;
//! let source = "# Changelog\n\nNotes here.\n\n## [Unreleased]\n\n### Added\n- First commit.\n";
//! let changelog = parse_str(source, &ParseOptions::default()).unwrap();
//! assert_eq!(changelog.title, "Changelog");
//! assert_eq!(changelog.versions[0].changes[0].items, vec!["First commit."]);
//! ```
//!
//! Paragraphs other than the one right after the title are not part of the
//! model and are dropped.

pub mod context;
pub mod heading;

pub use context::ParseContext;

use std::io::Read;
use std::ops::Range;

use pulldown_cmark::{Event, HeadingLevel, LinkType, Options, Parser, Tag, TagEnd};
use tracing::{debug, instrument};

use crate::domain::Changelog;
use crate::error::ParseError;

/// Knobs for how strictly a document is read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keep version headings that don't match `[X.Y.Z]`/`[Unreleased]`,
    /// with an empty name and date, instead of failing
    pub lenient_version_headings: bool,
}

/// Parse a changelog from a reader using default options
pub fn parse<R: Read>(reader: R) -> Result<Changelog, ParseError> {
    parse_with(reader, &ParseOptions::default())
}

/// Parse a changelog from a reader.
///
/// The whole stream is read first; a read failure aborts before any parsing.
pub fn parse_with<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Changelog, ParseError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse_str(&source, options)
}

/// Parse a changelog held in memory
#[instrument(skip_all, fields(bytes = source.len()))]
pub fn parse_str(source: &str, options: &ParseOptions) -> Result<Changelog, ParseError> {
    let mut walker = Walker::new(source, ParseContext::new(options.clone()));
    for (event, range) in Parser::new_ext(source, Options::empty()).into_offset_iter() {
        walker.visit(event, range)?;
    }

    let changelog = walker.ctx.finish();
    debug!(versions = changelog.versions.len(), "parsed changelog");
    Ok(changelog)
}

/// Kind of the last top-level block that was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TopLevelBlock {
    Title,
    Other,
}

struct Walker<'s> {
    source: &'s str,
    ctx: ParseContext,
    depth: usize,
    list_depth: usize,
    previous: Option<TopLevelBlock>,
    heading: Option<String>,
    item: Option<String>,
    /// One entry per open link; `true` when its brackets must be restored
    links: Vec<bool>,
}

impl<'s> Walker<'s> {
    fn new(source: &'s str, ctx: ParseContext) -> Self {
        Walker {
            source,
            ctx,
            depth: 0,
            list_depth: 0,
            previous: None,
            heading: None,
            item: None,
            links: Vec::new(),
        }
    }

    fn visit(&mut self, event: Event<'_>, range: Range<usize>) -> Result<(), ParseError> {
        match event {
            Event::Start(tag) => {
                self.start(tag, range)?;
                self.depth += 1;
            }
            Event::End(tag) => {
                let is_title = matches!(tag, TagEnd::Heading(HeadingLevel::H1));
                self.depth = self.depth.saturating_sub(1);
                self.end(tag)?;
                if self.depth == 0 {
                    self.previous = Some(if is_title {
                        TopLevelBlock::Title
                    } else {
                        TopLevelBlock::Other
                    });
                }
            }
            Event::Text(text) | Event::Code(text) => self.push_text(&text),
            Event::SoftBreak | Event::HardBreak => self.push_text(" "),
            Event::Rule if self.depth == 0 => self.previous = Some(TopLevelBlock::Other),
            _ => {}
        }
        Ok(())
    }

    fn start(&mut self, tag: Tag<'_>, range: Range<usize>) -> Result<(), ParseError> {
        match tag {
            // only top-level headings carry document structure
            Tag::Heading { .. } if self.depth == 0 => self.heading = Some(String::new()),
            Tag::Heading { level, .. } => {
                // `- # foo` is an item whose text starts with the marker
                self.push_text(" ");
                self.push_text(&format!("{} ", "#".repeat(heading_level_number(level))));
            }
            Tag::Link { link_type, .. } => {
                // `## [1.0.0]` becomes a link when a `[1.0.0]: url` definition exists
                let restore = self.heading.is_some() && link_type == LinkType::Shortcut;
                if restore {
                    self.push_text("[");
                }
                self.links.push(restore);
            }
            Tag::List(_) => {
                self.list_depth += 1;
                if self.list_depth == 1 {
                    self.ctx.begin_list()?;
                }
            }
            Tag::Item if self.list_depth == 1 => self.item = Some(String::new()),
            Tag::CodeBlock(_) => self.push_text(" "),
            Tag::Paragraph
                if self.depth == 0 && self.previous == Some(TopLevelBlock::Title) =>
            {
                self.ctx.preamble(self.source[range].trim());
            }
            _ => {}
        }
        Ok(())
    }

    fn end(&mut self, tag: TagEnd) -> Result<(), ParseError> {
        match tag {
            TagEnd::Heading(level) => match self.heading.take() {
                Some(text) => {
                    let text = text.trim();
                    match level {
                        HeadingLevel::H1 => self.ctx.title(text),
                        HeadingLevel::H2 => self.ctx.version_heading(text)?,
                        HeadingLevel::H3 => self.ctx.category_heading(text)?,
                        _ => {}
                    }
                }
                None => self.push_text(" "),
            },
            TagEnd::Paragraph | TagEnd::CodeBlock => self.push_text(" "),
            TagEnd::Link => {
                if self.links.pop() == Some(true) {
                    self.push_text("]");
                }
            }
            TagEnd::List(_) => self.list_depth = self.list_depth.saturating_sub(1),
            TagEnd::Item if self.list_depth == 1 => {
                if let Some(text) = self.item.take() {
                    self.ctx.item(collapse_whitespace(&text));
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn push_text(&mut self, text: &str) {
        if let Some(heading) = self.heading.as_mut() {
            heading.push_str(text);
        } else if self.list_depth == 1 {
            if let Some(item) = self.item.as_mut() {
                item.push_str(text);
            }
        }
    }
}

/// Item text is one line: every whitespace run becomes a single space
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn heading_level_number(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
