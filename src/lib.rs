pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod release;
pub mod ui;
pub mod writer;

pub use domain::{ChangeCollection, ChangeKind, Changelog, Version};
pub use error::{ChangelogError, ParseError, Result, WriteError};
pub use parser::{parse, parse_str, parse_with, ParseOptions};
pub use writer::write;
