use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the status of an operation
pub(crate) const STATE_KEY: &str = "state";

/// Key holding the timestamp of an operation
pub(crate) const DATE_KEY: &str = "date";

/// A single bank operation.
///
/// All fields are kept in their original order and with their original JSON
/// values, so a record is written back out exactly as it was read. Only
/// `state` and `date` are interpreted, through the accessors below.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Operation {
    fields: Map<String, Value>,
}

impl Operation {
    /// Construct an empty Operation
    pub fn new() -> Operation {
        Operation::default()
    }

    /// Set the status of the operation
    pub fn with_state(self, state: impl Into<String>) -> Operation {
        self.with_field(STATE_KEY, state.into())
    }

    /// Set the raw timestamp of the operation
    pub fn with_date(self, date: impl Into<String>) -> Operation {
        self.with_field(DATE_KEY, date.into())
    }

    /// Set any field, replacing its previous value
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Operation {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Access the status. Only a string counts as a status.
    pub fn state(&self) -> Option<&str> {
        self.get(STATE_KEY).and_then(Value::as_str)
    }

    /// Access the unparsed timestamp, if it is a string
    pub fn date(&self) -> Option<&str> {
        self.get(DATE_KEY).and_then(Value::as_str)
    }

    /// Access the numeric identifier, if there is one
    pub fn id(&self) -> Option<u64> {
        self.get("id").and_then(Value::as_u64)
    }

    /// Access the raw value of any field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Access all fields, in their original order
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Read a JSON array of operations.
pub fn operations_from_str(s: &str) -> Result<Vec<Operation>, serde_json::Error> {
    serde_json::from_str(s)
}
