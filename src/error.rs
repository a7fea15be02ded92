use thiserror::Error;

/// Failures while reading a changelog document into the model
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("parse error: {0}")]
    Read(#[from] std::io::Error),

    #[error("unknown type of changes: {0:?}")]
    UnknownCategory(String),

    #[error("malformed version heading: {0:?} - expected [Unreleased] or [X.Y.Z] with an optional ' - YYYY-MM-DD'")]
    MalformedVersionHeading(String),

    #[error("list found before any version heading")]
    ListOutsideVersion,

    #[error("list under version {0:?} has no type of changes heading")]
    ListWithoutCategory(String),
}

/// Failures while rendering the model back to text
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("version is empty")]
    EmptyVersionName,

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

/// Unified error type for changelog operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("no [Unreleased] section to release")]
    NoUnreleased,

    #[error("Version error: {0}")]
    Version(String),

    #[error("Date error: {0}")]
    Date(String),

    #[error("Message error: {0}")]
    Message(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ChangelogError::Version(msg.into())
    }

    /// Create a date error with context
    pub fn date(msg: impl Into<String>) -> Self {
        ChangelogError::Date(msg.into())
    }

    /// Create a message error with context
    pub fn message(msg: impl Into<String>) -> Self {
        ChangelogError::Message(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }
}
