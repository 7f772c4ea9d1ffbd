/* src/testing/rust/src/lib.rs */

//! Plain-text visualization of rendered HTML for test assertions.
//!
//! ```
//! use html_testing::visualize;
//!
//! assert_eq!(visualize("<p>one</p><p>two</p>"), "one two");
//! assert_eq!(visualize(r#"x<span data-test-content="">y</span>z"#), "xz");
//! ```

pub mod dom;
pub mod errors;
pub mod tags;
pub mod visualize;

mod entities;
mod tokenizer;

pub use dom::{Element, Node, parse_fragment};
pub use errors::Error;
pub use tags::{HIDDEN_TAGS, INLINE_TAGS, TagCategory, classify};
pub use visualize::{
  RenderToMarkup, Source, TEST_CONTENT_ATTR, TEST_ICON_ATTR, normalize_whitespace, visualize,
  visualize_json,
};

#[cfg(test)]
mod tests;
