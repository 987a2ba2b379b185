//! Filter and sort your bank operations by status and date.

use clap::Parser;
use cli::CliOpts;
use log::debug;

mod cfg;
mod cli;
mod report;

use crate::cfg::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // parse and validate the CLI arguments
    let opts = CliOpts::parse();

    let conf = Config::try_from(opts)?;
    match conf.path() {
        Some(path) => debug!("Using options from `{}`.", path.display()),
        None => debug!("Using default options."),
    }

    // process the operations and print them
    let rendered = report::run(&conf)?;
    println!("{}", rendered);

    Ok(())
}
