//! User interface module - status output on stderr.

pub mod formatter;

pub use formatter::{display_error, display_success};
