/* src/templates/rust/src/errors.rs */

use std::fmt;

#[derive(Debug)]
pub enum Error {
  /// A value could not be encoded as JSON.
  Json(serde_json::Error),
  /// An attribute configuration serialized to something other than a mapping.
  NotAnObject { found: &'static str },
}

pub(crate) fn kind_name(value: &serde_json::Value) -> &'static str {
  match value {
    serde_json::Value::Null => "null",
    serde_json::Value::Bool(_) => "boolean",
    serde_json::Value::Number(_) => "number",
    serde_json::Value::String(_) => "string",
    serde_json::Value::Array(_) => "array",
    serde_json::Value::Object(_) => "object",
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::Json(e) => write!(f, "JSON encoding failed: {e}"),
      Error::NotAnObject { found } => {
        write!(f, "attribute configuration must be a mapping, got {found}")
      }
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Json(e) => Some(e),
      Error::NotAnObject { .. } => None,
    }
  }
}

impl From<serde_json::Error> for Error {
  fn from(e: serde_json::Error) -> Self {
    Error::Json(e)
  }
}
