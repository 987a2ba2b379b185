//! Operations for narrowing down and ordering lists of `Operation`s.

pub mod filter;
pub mod sort;

pub use filter::{filter_by_state, filter_executed, DEFAULT_STATE};
pub use sort::{sort_by_date, sort_newest_first, DEFAULT_REVERSE};
