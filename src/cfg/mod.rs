//! Program configuration, from the config file and the command line.

mod config;
pub(crate) mod utils;

pub use config::Config;
