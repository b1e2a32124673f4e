//! Classification of raw, dynamically typed field values.
//!
//! Records arrive as JSON, so a field may be absent, `null`, a string, or any
//! other JSON type. The `*_value` validators classify first and only hand
//! strings to the typed rules.

use serde_json::Value;

/// Shape of a raw field value as seen by a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawInput<'a> {
    /// Key missing from the record, or explicitly `null`.
    Absent,
    /// JSON string.
    Text(&'a str),
    /// Any other JSON type.
    Other,
}

impl<'a> RawInput<'a> {
    pub(crate) fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(text)) => Self::Text(text.as_str()),
            Some(_) => Self::Other,
        }
    }
}
