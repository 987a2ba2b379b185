//! Command line interface configuration.

use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[clap(author, about, version)]
pub(crate) struct CliOpts {
    #[clap(help = "JSON file with a list of operations.")]
    input: PathBuf,

    #[clap(
        short = 'c',
        long = "cfg",
        help = "Configuration file with processing defaults.",
        long_help = "Configuration file with processing defaults.\n\
                     [default: $XDG_CONFIG_HOME/bankops/config.toml]"
    )]
    config: Option<PathBuf>,

    #[clap(short, long, help = "Only keep operations with this status.")]
    state: Option<String>,

    #[clap(long, conflicts_with = "descending", help = "Oldest operations first.")]
    ascending: bool,

    #[clap(long, help = "Newest operations first.")]
    descending: bool,

    #[clap(long, help = "Keep operations of every status.")]
    skip_filter: bool,

    #[clap(long, help = "Keep operations in their original order.")]
    skip_sort: bool,

    #[clap(long, help = "Print the operations on a single line.")]
    compact: bool,
}

impl CliOpts {
    /// Retrieve the operations file path
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Retrieve the config file path, if one was given
    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    /// Retrieve the status to filter by, if one was given
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Retrieve the requested sort direction, if one was given
    pub fn reverse(&self) -> Option<bool> {
        match (self.ascending, self.descending) {
            (true, _) => Some(false),
            (_, true) => Some(true),
            _ => None,
        }
    }

    pub fn skip_filter(&self) -> bool {
        self.skip_filter
    }

    pub fn skip_sort(&self) -> bool {
        self.skip_sort
    }

    pub fn compact(&self) -> bool {
        self.compact
    }
}
