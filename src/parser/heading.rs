use regex::Regex;
use std::sync::LazyLock;

static VERSION_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(Unreleased|\d+\.\d+\.\d+)\](?: - (\d{4}-\d{2}-\d{2}))?")
        .expect("Invalid regex")
});

/// Name and date read from a version heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionHeading {
    pub name: String,
    pub date: String,
}

/// Match a level-2 heading such as `[1.2.0] - 2024-01-15` or `[Unreleased]`.
///
/// Returns `None` when the text carries no recognizable version token.
/// The date is empty when the heading has none.
pub fn parse_version_heading(text: &str) -> Option<VersionHeading> {
    let captures = VERSION_HEADING_REGEX.captures(text)?;
    let name = captures.get(1)?.as_str().to_string();
    let date = captures
        .get(2)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    Some(VersionHeading { name, date })
}
