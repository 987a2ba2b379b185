//! Global processing configuration.

use crate::cfg::utils::{parse_config_str, DEFAULT_CFG_PATH};
use crate::cli::CliOpts;
use anyhow::{bail, Context};
use bankops_operation::ProcessingOptions;
use bankops_utils::{expand_tilde, read_file};
use log::{debug, info};
use std::convert::TryFrom;
use std::path::{Path, PathBuf};

/// Where to find the operations and how to process them
#[derive(Debug)]
pub struct Config {
    /// Config file the options were read from, if any
    path: Option<PathBuf>,

    /// JSON file holding the operations
    input: PathBuf,

    /// Filtering and sorting settings, after command line overrides
    options: ProcessingOptions,

    /// Print output on a single line
    compact: bool,
}

impl Config {
    /// Get the path of the config file that was read
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the path of the operations file
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Get the processing options
    pub fn options(&self) -> &ProcessingOptions {
        &self.options
    }

    /// Check if the output is printed on a single line
    pub fn compact(&self) -> bool {
        self.compact
    }

    /// Read processing options from a config file.
    /// A missing file is only an error when it was explicitly requested.
    fn read_options(path: &Path, explicit: bool) -> anyhow::Result<Option<ProcessingOptions>> {
        if !path.exists() {
            if explicit {
                bail!("Configuration file `{}` does not exist.", path.display());
            }
            debug!(
                "No configuration file at `{}`, using default options.",
                path.display()
            );
            return Ok(None);
        }

        let config_str = read_file(path).with_context(|| {
            format!(
                "Error reading contents of configuration file `{}`.\n\
                 Please check the configuration and try again.",
                path.display()
            )
        })?;

        parse_config_str(&config_str, path).map(Some)
    }

    /// Let command line flags take precedence over the config file
    fn apply_overrides(mut options: ProcessingOptions, value: &CliOpts) -> ProcessingOptions {
        if let Some(state) = value.state() {
            options = options.with_state(state);
        }
        if let Some(reverse) = value.reverse() {
            options = options.with_reverse(reverse);
        }
        if value.skip_filter() {
            options = options.with_filter(false);
        }
        if value.skip_sort() {
            options = options.with_sort(false);
        }

        options
    }
}

impl TryFrom<CliOpts> for Config {
    type Error = anyhow::Error;

    fn try_from(value: CliOpts) -> anyhow::Result<Self, Self::Error> {
        let (cfg_path, explicit) = match value.config() {
            Some(p) => (expand_tilde(p).unwrap_or_else(|| p.to_path_buf()), true),
            None => ((*DEFAULT_CFG_PATH).clone(), false),
        };

        let input = match expand_tilde(value.input()) {
            Some(p) => p,
            None => bail!(
                "Could not expand the home directory in `{}`.",
                value.input().display()
            ),
        };

        let (path, options) = match Self::read_options(&cfg_path, explicit)? {
            Some(opts) => {
                info!("Read configuration from `{}`.", cfg_path.display());
                (Some(cfg_path), opts)
            }
            None => (None, ProcessingOptions::default()),
        };

        Ok(Self {
            path,
            input,
            options: Self::apply_overrides(options, &value),
            compact: value.compact(),
        })
    }
}
