//! Select operations by their status.

use crate::Operation;

/// Status that most callers are interested in
pub const DEFAULT_STATE: &str = "EXECUTED";

/// Keep only the operations whose `state` is exactly `state`.
/// Operations without a `state` never match.
/// The relative order of the input is preserved.
pub fn filter_by_state<'a, I>(operations: I, state: &str) -> Vec<&'a Operation>
where
    I: IntoIterator<Item = &'a Operation>,
{
    operations
        .into_iter()
        .filter(|op| op.state() == Some(state))
        .collect()
}

/// Keep only the operations that were executed.
pub fn filter_executed<'a, I>(operations: I) -> Vec<&'a Operation>
where
    I: IntoIterator<Item = &'a Operation>,
{
    filter_by_state(operations, DEFAULT_STATE)
}
