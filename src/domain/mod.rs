//! Domain logic - the changelog model and its mutations, independent of any text format

pub mod change_kind;
pub mod changelog;

pub use change_kind::ChangeKind;
pub use changelog::{ChangeCollection, Changelog, UnreleasedPlacement, Version, UNRELEASED};
