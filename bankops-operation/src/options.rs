//! Settings that control how a list of operations is processed.

use crate::{
    filter_by_state, sort_by_date, Operation, OperationError, DEFAULT_REVERSE, DEFAULT_STATE,
};
use serde::Deserialize;

/// Which operations to keep and in what order to return them.
/// Any field left out when deserializing takes its default value.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProcessingOptions {
    /// Status an operation must have to be kept
    state: String,

    /// Newest first when set, oldest first otherwise
    reverse: bool,

    /// Whether to filter by `state` at all
    filter: bool,

    /// Whether to sort by date at all
    sort: bool,
}

impl ProcessingOptions {
    /// Construct the default options
    pub fn new() -> Self {
        ProcessingOptions::default()
    }

    /// Access the status to filter by
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Access the sort direction
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Check if the filtering step runs
    pub fn filters(&self) -> bool {
        self.filter
    }

    /// Check if the sorting step runs
    pub fn sorts(&self) -> bool {
        self.sort
    }

    /// Set the status to filter by
    pub fn with_state(mut self, state: &str) -> Self {
        self.state = state.to_string();
        self
    }

    /// Set the sort direction
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Turn the filtering step on or off
    pub fn with_filter(mut self, filter: bool) -> Self {
        self.filter = filter;
        self
    }

    /// Turn the sorting step on or off
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Filter, then sort, the given operations.
    pub fn apply<'a, I>(&self, operations: I) -> Result<Vec<&'a Operation>, OperationError>
    where
        I: IntoIterator<Item = &'a Operation>,
    {
        let kept = match self.filter {
            true => filter_by_state(operations, &self.state),
            false => operations.into_iter().collect(),
        };

        match self.sort {
            true => sort_by_date(kept, self.reverse),
            false => Ok(kept),
        }
    }
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        ProcessingOptions {
            state: DEFAULT_STATE.to_string(),
            reverse: DEFAULT_REVERSE,
            filter: true,
            sort: true,
        }
    }
}
