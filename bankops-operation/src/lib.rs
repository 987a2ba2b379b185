//! Filter and sort bank operations by their status and date.

mod error;
mod operation_struct;
mod ops;
mod options;
mod timestamp;

pub use error::{OperationError, TimestampError};
pub use operation_struct::{operations_from_str, Operation};
pub use ops::{
    filter_by_state, filter_executed, sort_by_date, sort_newest_first, DEFAULT_REVERSE,
    DEFAULT_STATE,
};
pub use options::ProcessingOptions;
pub use timestamp::{parse_timestamp, TIMESTAMP_FORMAT};
