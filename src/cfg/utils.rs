//! Utilities to locate and parse the configuration.

use anyhow::Context;
use bankops_operation::ProcessingOptions;
use clap::crate_name;
use dirs_next::{config_dir, home_dir};
use lazy_static::lazy_static;
use serde::Deserialize;
use std::path::{Path, PathBuf};

lazy_static! {
    pub(crate) static ref DEFAULT_CFG_PATH: PathBuf = get_config_path();
}

/// Layout of the configuration file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(rename = "Processing", default)]
    processing: ProcessingOptions,
}

pub(crate) fn get_config_dir() -> Option<PathBuf> {
    // get config from within $XDG_CONFIG_HOME
    match config_dir() {
        Some(mut dir) => {
            dir.push(crate_name!().to_lowercase());

            Some(dir)
        }
        // if not set, make it the default $HOME/.config
        None => home_dir().map(|mut dir| {
            dir.push(".config");
            dir.push(crate_name!().to_lowercase());

            dir
        }),
    }
}

/// Check multiple locations for a configuration file and return the highest priority one
pub fn get_config_path() -> PathBuf {
    match get_config_dir().map(|dir| dir.join("config.toml")) {
        Some(cfg_path) if cfg_path.exists() => cfg_path,
        _ => PathBuf::from("config.toml"),
    }
}

/// Parse the contents of a configuration file into processing options.
pub(crate) fn parse_config_str(config_str: &str, path: &Path) -> anyhow::Result<ProcessingOptions> {
    let file: ConfigFile = toml::from_str(config_str).with_context(|| {
        format!(
            "Error parsing configuration file `{}`.\nPlease check the configuration and try again.",
            path.display()
        )
    })?;

    Ok(file.processing)
}
