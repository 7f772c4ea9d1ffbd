/* src/testing/rust/src/tests/sources.rs */

use html_templates::{Markup, raw_html};
use serde_json::json;

use crate::{Element, Error, Node, RenderToMarkup, Source, parse_fragment, visualize, visualize_json};

#[test]
fn accepts_owned_strings_and_markup() {
  let html = String::from("<p>one</p><p>two</p>");
  assert_eq!(visualize(&html), "one two");
  assert_eq!(visualize(&raw_html(html.clone())), "one two");
  assert_eq!(visualize(Some(&html)), "one two");
}

#[test]
fn accepts_templates() {
  let name = "<b>";
  let markup = html_templates::html!("<p>Hello {name}</p>");
  assert_eq!(visualize(&markup), "Hello <b>");
}

#[test]
fn accepts_parsed_nodes_without_mutating_them() {
  let nodes = parse_fragment(r#"x<div data-test-icon="A" data-test-content="B">y</div>z"#);
  let before = nodes.clone();
  assert_eq!(visualize(&nodes), "x A B z");
  assert_eq!(visualize(&nodes), "x A B z");
  assert_eq!(nodes, before);
}

#[test]
fn accepts_a_single_node() {
  let node = Node::Element(
    Element::new("ul")
      .with_child(Node::Element(Element::new("li").with_child(Node::Text("a".into()))))
      .with_child(Node::Element(Element::new("li").with_child(Node::Text("b&amp;c".into())))),
  );
  let before = node.clone();
  assert_eq!(visualize(&node), "a b&c");
  assert_eq!(node, before);
}

#[test]
fn accepts_closures_as_components() {
  let render = || String::from("<h1>Title</h1><p>Body</p>");
  assert_eq!(visualize(Source::component(&render)), "Title Body");
}

struct Greeting {
  name: &'static str,
}

impl RenderToMarkup for Greeting {
  fn render_to_markup(&self) -> String {
    html_templates::html!("<p>Hello, <em>{}</em>!</p>", self.name).into_string()
  }
}

#[test]
fn accepts_components_from_other_renderers() {
  let greeting = Greeting { name: "World" };
  assert_eq!(visualize(Source::component(&greeting)), "Hello, World!");
}

#[test]
fn empty_sources() {
  assert_eq!(visualize(Source::Empty), "");
  assert_eq!(visualize(None::<&Markup>), "");
  assert_eq!(visualize(&Markup::default()), "");
  assert_eq!(visualize(&Vec::<Node>::new()), "");
}

#[test]
fn json_values() {
  assert_eq!(visualize_json(&json!(null)).unwrap(), "");
  assert_eq!(visualize_json(&json!("<p>one</p><p>two</p>")).unwrap(), "one two");
  assert_eq!(visualize_json(&json!({ "html": "<div>x</div>" })).unwrap(), "x");
}

#[test]
fn serialized_markup_round_trips_through_json() {
  let markup = raw_html("<p>a &amp; b</p>");
  let value = serde_json::to_value(&markup).unwrap();
  assert_eq!(visualize_json(&value).unwrap(), "a & b");
}

#[test]
fn unsupported_json_values() {
  let cases = [
    (json!(42), "number"),
    (json!(true), "boolean"),
    (json!(["<p>x</p>"]), "array"),
    (json!({ "text": "x" }), "object without an \"html\" string"),
    (json!({ "html": 1 }), "object without an \"html\" string"),
  ];
  for (value, expected) in cases {
    match visualize_json(&value) {
      Err(Error::UnsupportedInput { found }) => assert_eq!(found, expected, "{value}"),
      other => panic!("expected UnsupportedInput for {value}, got {other:?}"),
    }
  }
}
