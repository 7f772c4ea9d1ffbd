/* src/templates/rust/src/compose.rs */

use std::borrow::Cow;

use crate::markup::Markup;
use crate::placeholder::Placeholder;

/// Generates markup from literal fragments and the placeholders between them.
/// Placeholders are escaped unless they hold [`Markup`].
///
/// `fragments` is expected to be one longer than `placeholders`. Missing
/// placeholders resolve to nothing and surplus ones are ignored.
pub fn compose(fragments: &[&str], placeholders: &[Placeholder]) -> Markup {
  let fragments = strip_indent(fragments);
  let mut html = String::new();
  for (i, fragment) in fragments.iter().enumerate() {
    if i > 0 {
      if let Some(placeholder) = placeholders.get(i - 1) {
        placeholder.resolve_into(&mut html);
      }
    }
    html.push_str(fragment);
  }
  Markup::raw(html)
}

/// Remove the template's base indentation when the markup starts on a new
/// line. The indent is the whole leading whitespace run of the first
/// fragment, newline included; every occurrence of it in every fragment
/// becomes a single newline.
pub(crate) fn strip_indent<'a>(fragments: &[&'a str]) -> Vec<Cow<'a, str>> {
  let Some(first) = fragments.first() else {
    return Vec::new();
  };
  if !first.starts_with('\n') {
    return fragments.iter().map(|f| Cow::Borrowed(*f)).collect();
  }
  let indent_len = first.len() - first.trim_start().len();
  let indent = &first[..indent_len];

  let mut stripped: Vec<Cow<'a, str>> = fragments
    .iter()
    .map(|f| if f.contains(indent) { Cow::Owned(f.replace(indent, "\n")) } else { Cow::Borrowed(*f) })
    .collect();
  if let Some(head) = stripped.first_mut() {
    *head = Cow::Owned(head.trim_start().to_owned());
  }
  if let Some(tail) = stripped.last_mut() {
    *tail = Cow::Owned(tail.trim_end().to_owned());
  }
  log::trace!(target: "html_templates", "stripped template indent of {} bytes", indent_len - 1);
  stripped
}
