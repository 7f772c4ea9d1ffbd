/* src/testing/rust/src/dom.rs */

use crate::tags::implied_ends;
use crate::tokenizer::{Token, tokenize};

/// A node of a parsed markup fragment. Text and attribute values are kept as
/// written, character references included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Element(Element),
  Text(String),
  Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
  /// Lowercase tag name.
  pub name: String,
  /// Lowercase attribute names in source order; `None` for valueless attributes.
  pub attributes: Vec<(String, Option<String>)>,
  pub children: Vec<Node>,
}

impl Element {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), attributes: Vec::new(), children: Vec::new() }
  }

  pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.attributes.push((name.into(), Some(value.into())));
    self
  }

  pub fn with_child(mut self, child: Node) -> Self {
    self.children.push(child);
    self
  }

  /// Value of the first attribute called `name`. A valueless attribute reads
  /// as the empty string.
  pub fn attribute(&self, name: &str) -> Option<&str> {
    self.attributes.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_deref().unwrap_or(""))
  }
}

/// Parse a markup fragment into a fresh tree.
///
/// Void and self-closed elements get no children, an end tag closes the
/// nearest open element with that name, stray end tags are dropped and
/// anything still open at the end is closed. Optional end tags are implied
/// the way browsers imply them: `<li>` ends an open `li`, a block start tag
/// ends an open `p`, and so on for `dt`/`dd`, `option` and table rows and cells.
pub fn parse_fragment(html: &str) -> Vec<Node> {
  let mut roots: Vec<Node> = Vec::new();
  let mut open: Vec<Element> = Vec::new();

  for token in tokenize(html) {
    match token {
      Token::Doctype(_) => {}
      Token::Comment(text) => append(&mut roots, &mut open, Node::Comment(text)),
      Token::Text(text) => append(&mut roots, &mut open, Node::Text(text)),
      Token::StartTag { name, attributes, self_closing } => {
        close_implied(&mut roots, &mut open, &name);
        let element = Element { name, attributes, children: Vec::new() };
        if self_closing {
          append(&mut roots, &mut open, Node::Element(element));
        } else {
          open.push(element);
        }
      }
      Token::EndTag(name) => match open.iter().rposition(|e| e.name == name) {
        Some(depth) => {
          while open.len() > depth {
            close_innermost(&mut roots, &mut open);
          }
        }
        None => log::debug!(target: "html_testing", "dropping stray </{name}>"),
      },
    }
  }
  while !open.is_empty() {
    close_innermost(&mut roots, &mut open);
  }

  roots
}

fn append(roots: &mut Vec<Node>, open: &mut [Element], node: Node) {
  match open.last_mut() {
    Some(parent) => parent.children.push(node),
    None => roots.push(node),
  }
}

fn close_implied(roots: &mut Vec<Node>, open: &mut Vec<Element>, name: &str) {
  for rule in implied_ends(name) {
    let mut target = None;
    for (depth, element) in open.iter().enumerate().rev() {
      let open_name = element.name.as_str();
      if rule.closes.iter().any(|&n| n == open_name) {
        target = Some(depth);
      } else if rule.stops_at.iter().any(|&n| n == open_name) {
        break;
      }
    }
    if let Some(depth) = target {
      log::trace!(target: "html_testing", "<{name}> implies </{}>", open[depth].name);
      while open.len() > depth {
        close_innermost(roots, open);
      }
    }
  }
}

fn close_innermost(roots: &mut Vec<Node>, open: &mut Vec<Element>) {
  if let Some(element) = open.pop() {
    append(roots, open, Node::Element(element));
  }
}
