/* src/templates/rust/src/markup.rs */

use std::fmt;

use serde::{Deserialize, Serialize};

/// Markup that is already safe to embed. Placeholders holding a `Markup` are
/// inserted verbatim; everything else gets escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Markup {
  html: String,
}

impl Markup {
  /// Trust `html` as-is. The caller vouches that it contains no
  /// attacker-controlled markup.
  pub fn raw(html: impl Into<String>) -> Self {
    Self { html: html.into() }
  }

  pub fn as_str(&self) -> &str {
    &self.html
  }

  pub fn into_string(self) -> String {
    self.html
  }

  pub fn is_empty(&self) -> bool {
    self.html.is_empty()
  }
}

/// Generates markup without escaping HTML special characters.
pub fn raw_html(html: impl Into<String>) -> Markup {
  Markup::raw(html)
}

impl fmt::Display for Markup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.html)
  }
}

impl AsRef<str> for Markup {
  fn as_ref(&self) -> &str {
    &self.html
  }
}

impl From<Markup> for String {
  fn from(markup: Markup) -> Self {
    markup.html
  }
}
