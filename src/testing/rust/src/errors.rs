/* src/testing/rust/src/errors.rs */

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// The input is none of the shapes the visualizer understands.
  UnsupportedInput { found: &'static str },
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::UnsupportedInput { found } => {
        write!(f, "cannot visualize {found}; expected null, markup text or {{\"html\": ...}}")
      }
    }
  }
}

impl std::error::Error for Error {}
