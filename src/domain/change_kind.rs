use std::fmt;

/// Type of changes a changelog section groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Changed,
    Deprecated,
    Removed,
    Fixed,
    Security,
}

impl ChangeKind {
    /// All kinds, in the order Keep a Changelog lists them
    pub const ALL: [ChangeKind; 6] = [
        ChangeKind::Added,
        ChangeKind::Changed,
        ChangeKind::Deprecated,
        ChangeKind::Removed,
        ChangeKind::Fixed,
        ChangeKind::Security,
    ];

    /// Classify a section heading.
    ///
    /// Matching is exact and case-sensitive. `None` is the "unknown" answer:
    /// anything other than the six canonical names lands there.
    pub fn classify(text: &str) -> Option<Self> {
        match text {
            "Added" => Some(ChangeKind::Added),
            "Changed" => Some(ChangeKind::Changed),
            "Deprecated" => Some(ChangeKind::Deprecated),
            "Removed" => Some(ChangeKind::Removed),
            "Fixed" => Some(ChangeKind::Fixed),
            "Security" => Some(ChangeKind::Security),
            _ => None,
        }
    }

    /// Canonical heading name
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "Added",
            ChangeKind::Changed => "Changed",
            ChangeKind::Deprecated => "Deprecated",
            ChangeKind::Removed => "Removed",
            ChangeKind::Fixed => "Fixed",
            ChangeKind::Security => "Security",
        }
    }

    /// Lower-case name used for the CLI subcommand
    pub fn command_name(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Changed => "changed",
            ChangeKind::Deprecated => "deprecated",
            ChangeKind::Removed => "removed",
            ChangeKind::Fixed => "fixed",
            ChangeKind::Security => "security",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_canonical_names() {
        for kind in ChangeKind::ALL {
            assert_eq!(ChangeKind::classify(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(ChangeKind::classify("added"), None);
        assert_eq!(ChangeKind::classify("ADDED"), None);
        assert_eq!(ChangeKind::classify("fixed"), None);
    }

    #[test]
    fn test_classify_rejects_everything_else() {
        let inputs = [
            "",
            " ",
            "Broken",
            "Unknown",
            "Add",
            "Added ",
            " Added",
            "Fix",
            "Securities",
            "Ajouté",
            "Added\n",
            "🚀",
        ];

        for input in inputs {
            assert_eq!(ChangeKind::classify(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn test_classify_long_input() {
        let long = "Added".repeat(1000);
        assert_eq!(ChangeKind::classify(&long), None);
    }

    #[test]
    fn test_display_matches_heading_name() {
        assert_eq!(ChangeKind::Deprecated.to_string(), "Deprecated");
        assert_eq!(ChangeKind::Security.command_name(), "security");
    }
}
