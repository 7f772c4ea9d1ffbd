/* src/templates/rust/src/attrs.rs */

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{Error, kind_name};
use crate::escape::{push_escaped, stringify};
use crate::markup::Markup;

/// Generates an HTML attribute list, in the map's insertion order.
///
/// - `false` and `null` values omit the attribute entirely.
/// - `true` emits a bare boolean attribute.
/// - Arrays are space-joined (class lists), skipping `false`/`null` entries.
/// - An object under `style` becomes an inline style, skipping `false`/`null`
///   properties. Objects under any other key are JSON-encoded.
/// - Anything else is emitted as its string form.
pub fn attrs(config: &Map<String, Value>) -> Markup {
  let mut html = String::new();
  for (key, value) in config {
    if !is_visible(value) {
      continue;
    }
    if !html.is_empty() {
      html.push(' ');
    }
    push_escaped(&mut html, key);
    if matches!(value, Value::Bool(true)) {
      continue;
    }
    html.push_str("=\"");
    match value {
      Value::Array(items) => push_class_list(&mut html, items),
      Value::Object(properties) if key == "style" => push_inline_style(&mut html, properties),
      Value::Object(_) => push_escaped(&mut html, &value.to_string()),
      scalar => push_escaped(&mut html, &stringify(scalar)),
    }
    html.push('"');
  }
  Markup::raw(html)
}

/// Like [`attrs`], for any value that serializes to a mapping (structs keep
/// their field order).
pub fn attrs_from<T: Serialize + ?Sized>(config: &T) -> Result<Markup, Error> {
  match serde_json::to_value(config)? {
    Value::Object(map) => Ok(attrs(&map)),
    other => Err(Error::NotAnObject { found: kind_name(&other) }),
  }
}

fn is_visible(value: &Value) -> bool {
  !matches!(value, Value::Null | Value::Bool(false))
}

fn push_class_list(html: &mut String, items: &[Value]) {
  for (i, item) in items.iter().filter(|v| is_visible(v)).enumerate() {
    if i > 0 {
      html.push(' ');
    }
    push_escaped(html, &stringify(item));
  }
}

fn push_inline_style(html: &mut String, properties: &Map<String, Value>) {
  for (i, (property, value)) in properties.iter().filter(|(_, v)| is_visible(v)).enumerate() {
    if i > 0 {
      html.push_str("; ");
    }
    push_escaped(html, property);
    html.push_str(": ");
    push_escaped(html, &stringify(value));
  }
}

/// Unwraps the object built by [`attrs!`], which only accepts `{ ... }`
/// literals.
#[doc(hidden)]
pub fn __object(value: Value) -> Map<String, Value> {
  match value {
    Value::Object(map) => map,
    other => unreachable!("attrs! expands only object literals, got {}", kind_name(&other)),
  }
}

/// Attribute list from a `serde_json::json!` object literal:
/// `attrs!({ "name": name, "checked": true })`.
///
/// Only `{ ... }` literals are accepted; build other values with
/// [`attrs_from`], which reports non-mappings as an error.
///
/// ```compile_fail
/// let classes = serde_json::json!(["a", "b"]);
/// html_templates::attrs!(classes);
/// ```
#[macro_export]
macro_rules! attrs {
  ({ $($body:tt)* }) => {
    $crate::attrs(&$crate::__object($crate::__private::serde_json::json!({ $($body)* })))
  };
}
