/* src/templates/rust/src/lib.rs */

//! Injection-safe HTML templates.
//!
//! ```
//! use html_templates::{attrs, html};
//!
//! let input = "<script>alert(1)</script>";
//! assert_eq!(html!("<p>Hello {input}</p>").as_str(), "<p>Hello &lt;script&gt;alert(1)&lt;/script&gt;</p>");
//!
//! let checked = true;
//! let markup = html!(r#"<input type="radio" {}>"#, attrs!({"name": "fruits", "checked": checked}));
//! assert_eq!(markup.as_str(), r#"<input type="radio" name="fruits" checked>"#);
//! ```

// Lets `html!` expansions refer to `::html_templates` from inside this crate.
extern crate self as html_templates;

pub mod attrs;
pub mod compose;
pub mod errors;
pub mod escape;
pub mod markup;
pub mod placeholder;

pub use attrs::{attrs, attrs_from};
pub use compose::compose;
pub use errors::Error;
pub use escape::escape_html;
#[cfg(feature = "macros")]
pub use html_templates_macros::html;
pub use markup::{Markup, raw_html};
pub use placeholder::{Placeholder, ToPlaceholder};

#[doc(hidden)]
pub use attrs::__object;

#[doc(hidden)]
pub mod __private {
  pub use serde_json;
}

#[cfg(test)]
mod tests;
