//! Command-line interface definitions

pub mod orchestration;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::ChangeKind;
use orchestration::Edit;

#[derive(Parser, Debug)]
#[command(
    name = "changelog",
    version,
    about = "changelog CLI",
    long_about = "Manipulate and validate a Markdown changelog file from the command line."
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Changelog file or stdin")]
    pub filename: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Output file or stdout")]
    pub output: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Log debug details to stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initializes a new changelog
    ///
    /// Outputs an empty changelog, with preamble and Unreleased version.
    /// You can specify a filename using the --output/-o flag.
    Init,
    /// Add item under "Added" change
    Added(ItemArgs),
    /// Add item under "Changed" change
    Changed(ItemArgs),
    /// Add item under "Deprecated" change
    Deprecated(ItemArgs),
    /// Add item under "Removed" change
    Removed(ItemArgs),
    /// Add item under "Fixed" change
    Fixed(ItemArgs),
    /// Add item under "Security" change
    Security(ItemArgs),
    /// Change Unreleased to [version]
    ///
    /// Renames the Unreleased section to [version] with a release date and
    /// starts a new, empty Unreleased section above it.
    Release(ReleaseArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ItemArgs {
    #[arg(short, long, help = "Change message")]
    pub message: String,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReleaseArgs {
    /// Version to release, as MAJOR.MINOR.PATCH
    pub version: String,

    #[arg(short, long, help = "Release date (YYYY-MM-DD), today by default")]
    pub date: Option<String>,
}

impl Command {
    /// The edit this command performs; `None` for `init`
    pub fn edit(&self) -> Option<Edit> {
        let (kind, args) = match self {
            Command::Init => return None,
            Command::Release(args) => {
                return Some(Edit::Release {
                    version: args.version.clone(),
                    date: args.date.clone(),
                })
            }
            Command::Added(args) => (ChangeKind::Added, args),
            Command::Changed(args) => (ChangeKind::Changed, args),
            Command::Deprecated(args) => (ChangeKind::Deprecated, args),
            Command::Removed(args) => (ChangeKind::Removed, args),
            Command::Fixed(args) => (ChangeKind::Fixed, args),
            Command::Security(args) => (ChangeKind::Security, args),
        };

        Some(Edit::Add {
            kind,
            message: args.message.clone(),
        })
    }
}
