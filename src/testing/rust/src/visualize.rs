/* src/testing/rust/src/visualize.rs */

use html_templates::Markup;
use serde_json::Value;

use crate::dom::{Element, Node, parse_fragment};
use crate::entities::decode_entities;
use crate::errors::Error;
use crate::tags::{TagCategory, classify};

/// Shown with spacing before the element, in addition to its content.
pub const TEST_ICON_ATTR: &str = "data-test-icon";
/// Shown instead of the element's content.
pub const TEST_CONTENT_ATTR: &str = "data-test-content";

/// Turns a component value from some other rendering library into markup.
pub trait RenderToMarkup {
  fn render_to_markup(&self) -> String;
}

impl<F: Fn() -> String> RenderToMarkup for F {
  fn render_to_markup(&self) -> String {
    self()
  }
}

/// Anything the visualizer accepts.
#[derive(Clone, Copy)]
pub enum Source<'a> {
  Empty,
  Html(&'a str),
  Markup(&'a Markup),
  Nodes(&'a [Node]),
  Component(&'a dyn RenderToMarkup),
}

impl<'a> Source<'a> {
  pub fn component(component: &'a dyn RenderToMarkup) -> Self {
    Source::Component(component)
  }
}

impl<'a> From<&'a str> for Source<'a> {
  fn from(html: &'a str) -> Self {
    Source::Html(html)
  }
}

impl<'a> From<&'a String> for Source<'a> {
  fn from(html: &'a String) -> Self {
    Source::Html(html)
  }
}

impl<'a> From<&'a Markup> for Source<'a> {
  fn from(markup: &'a Markup) -> Self {
    Source::Markup(markup)
  }
}

impl<'a> From<&'a Node> for Source<'a> {
  fn from(node: &'a Node) -> Self {
    Source::Nodes(std::slice::from_ref(node))
  }
}

impl<'a> From<&'a [Node]> for Source<'a> {
  fn from(nodes: &'a [Node]) -> Self {
    Source::Nodes(nodes)
  }
}

impl<'a> From<&'a Vec<Node>> for Source<'a> {
  fn from(nodes: &'a Vec<Node>) -> Self {
    Source::Nodes(nodes)
  }
}

impl<'a, T: Into<Source<'a>>> From<Option<T>> for Source<'a> {
  fn from(source: Option<T>) -> Self {
    source.map_or(Source::Empty, Into::into)
  }
}

/// Reduce rendered markup to the plain text a reader would see, for
/// comparing against expected text in tests.
///
/// Tags become spacing (none for inline elements), `style`, `script` and
/// `noscript` are dropped, `data-test-icon` and `data-test-content` override
/// what an element shows, a few character references are decoded and
/// whitespace is collapsed.
pub fn visualize<'a>(source: impl Into<Source<'a>>) -> String {
  match source.into() {
    Source::Empty => String::new(),
    Source::Html(html) => visualize_html(html),
    Source::Markup(markup) => visualize_html(markup.as_str()),
    Source::Nodes(nodes) => visualize_nodes(nodes),
    Source::Component(component) => visualize_html(&component.render_to_markup()),
  }
}

/// Visualize a dynamically typed value: `null`, a markup string, or a
/// serialized [`Markup`] (`{"html": "..."}`).
pub fn visualize_json(value: &Value) -> Result<String, Error> {
  match value {
    Value::Null => Ok(String::new()),
    Value::String(html) => Ok(visualize_html(html)),
    Value::Object(map) => match map.get("html") {
      Some(Value::String(html)) => Ok(visualize_html(html)),
      _ => Err(Error::UnsupportedInput { found: "object without an \"html\" string" }),
    },
    Value::Bool(_) => Err(Error::UnsupportedInput { found: "boolean" }),
    Value::Number(_) => Err(Error::UnsupportedInput { found: "number" }),
    Value::Array(_) => Err(Error::UnsupportedInput { found: "array" }),
  }
}

fn visualize_html(html: &str) -> String {
  visualize_nodes(&parse_fragment(html))
}

fn visualize_nodes(nodes: &[Node]) -> String {
  let mut text = String::new();
  for node in nodes {
    visit(node, &mut text);
  }
  normalize_whitespace(&decode_entities(&text))
}

fn visit(node: &Node, out: &mut String) {
  match node {
    Node::Text(text) => out.push_str(text),
    Node::Comment(_) => {}
    Node::Element(element) => visit_element(element, out),
  }
}

fn visit_element(element: &Element, out: &mut String) {
  let category = classify(&element.name);
  if category == TagCategory::Hidden {
    log::trace!(target: "html_testing", "skipping hidden <{}>", element.name);
    return;
  }

  if let Some(icon) = element.attribute(TEST_ICON_ATTR).filter(|icon| !icon.is_empty()) {
    out.push(' ');
    out.push_str(icon);
    out.push(' ');
  }

  let is_block = category == TagCategory::Block;
  if is_block {
    out.push(' ');
  }
  match element.attribute(TEST_CONTENT_ATTR) {
    Some(content) => {
      log::trace!(target: "html_testing", "<{}> content replaced by {TEST_CONTENT_ATTR}", element.name);
      out.push_str(content);
    }
    None => {
      for child in &element.children {
        visit(child, out);
      }
    }
  }
  if is_block {
    out.push(' ');
  }
}

/// Collapse every run of ASCII whitespace to one space and trim both ends.
pub fn normalize_whitespace(s: &str) -> String {
  s.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}
