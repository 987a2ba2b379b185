//! Load operations, process them, and render the result.

use crate::cfg::Config;
use anyhow::Context;
use bankops_operation::{operations_from_str, Operation, ProcessingOptions};
use bankops_utils::read_file;
use log::info;
use std::path::Path;

/// Read the list of operations stored in a JSON file.
pub fn load_operations(path: &Path) -> anyhow::Result<Vec<Operation>> {
    let json_str = read_file(path).with_context(|| {
        format!("Error reading operations file `{}`.", path.display())
    })?;

    operations_from_str(&json_str).with_context(|| {
        format!(
            "Error parsing operations file `{}`.\nIt must contain a JSON array of objects.",
            path.display()
        )
    })
}

/// Process operations and render them as a JSON array.
pub fn render(
    operations: &[Operation],
    options: &ProcessingOptions,
    compact: bool,
) -> anyhow::Result<String> {
    let processed = options
        .apply(operations)
        .context("Error processing operations.")?;
    info!(
        "Kept {} of {} operations.",
        processed.len(),
        operations.len()
    );

    let rendered = match compact {
        true => serde_json::to_string(&processed)?,
        false => serde_json::to_string_pretty(&processed)?,
    };

    Ok(rendered)
}

/// Load, process, and render the operations described by the configuration.
pub fn run(conf: &Config) -> anyhow::Result<String> {
    let operations = load_operations(conf.input())?;
    info!(
        "Loaded {} operations from `{}`.",
        operations.len(),
        conf.input().display()
    );

    render(&operations, conf.options(), conf.compact())
}
