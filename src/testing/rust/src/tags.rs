/* src/testing/rust/src/tags.rs */

/// Elements rendered inline: no spacing is added around their content.
pub const INLINE_TAGS: &[&str] =
  &["a", "abbr", "b", "big", "cite", "code", "em", "i", "small", "span", "strong", "tt"];

/// Elements whose whole subtree is left out of the visualization.
pub const HIDDEN_TAGS: &[&str] = &["style", "script", "noscript"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
  Inline,
  Block,
  Hidden,
}

/// Classify a tag name, case-insensitively.
pub fn classify(tag: &str) -> TagCategory {
  if HIDDEN_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
    TagCategory::Hidden
  } else if INLINE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
    TagCategory::Inline
  } else {
    TagCategory::Block
  }
}

/// Void elements never have children.
pub(crate) fn is_void_element(name: &str) -> bool {
  matches!(
    name,
    "area"
      | "base"
      | "br"
      | "col"
      | "embed"
      | "hr"
      | "img"
      | "input"
      | "link"
      | "meta"
      | "param"
      | "source"
      | "track"
      | "wbr"
  )
}

/// Elements whose content is raw text up to the matching close tag.
pub(crate) fn is_raw_text_element(name: &str) -> bool {
  matches!(name, "script" | "style" | "noscript" | "textarea" | "title")
}

/// Open elements a start tag closes implicitly: the search runs from the
/// innermost open element outwards, stops at the first `stops_at` element and
/// closes everything down to the outermost `closes` match it passed.
pub(crate) struct ImpliedEnd {
  pub closes: &'static [&'static str],
  pub stops_at: &'static [&'static str],
}

const CLOSE_PARAGRAPH: ImpliedEnd =
  ImpliedEnd { closes: &["p"], stops_at: &["button", "caption", "object", "table", "td", "template", "th"] };

const LIST_ITEM: &[ImpliedEnd] = &[
  ImpliedEnd { closes: &["li"], stops_at: &["ol", "ul", "menu", "table", "td", "th"] },
  CLOSE_PARAGRAPH,
];
const DEFINITION: &[ImpliedEnd] = &[
  ImpliedEnd { closes: &["dd", "dt"], stops_at: &["dl", "table", "td", "th"] },
  CLOSE_PARAGRAPH,
];
const OPTION: &[ImpliedEnd] =
  &[ImpliedEnd { closes: &["option"], stops_at: &["select", "datalist", "optgroup"] }];
const OPTGROUP: &[ImpliedEnd] = &[ImpliedEnd { closes: &["option", "optgroup"], stops_at: &["select"] }];
const TABLE_ROW: &[ImpliedEnd] =
  &[ImpliedEnd { closes: &["tr", "td", "th"], stops_at: &["table", "thead", "tbody", "tfoot"] }];
const TABLE_CELL: &[ImpliedEnd] = &[ImpliedEnd { closes: &["td", "th"], stops_at: &["tr", "table"] }];
const TABLE_SECTION: &[ImpliedEnd] = &[ImpliedEnd {
  closes: &["thead", "tbody", "tfoot", "tr", "td", "th"],
  stops_at: &["table"],
}];
const PARAGRAPH_ONLY: &[ImpliedEnd] = &[CLOSE_PARAGRAPH];

/// Start tags that end an open `p`.
fn closes_paragraph(name: &str) -> bool {
  matches!(
    name,
    "address"
      | "article"
      | "aside"
      | "blockquote"
      | "center"
      | "details"
      | "dialog"
      | "dir"
      | "div"
      | "dl"
      | "fieldset"
      | "figcaption"
      | "figure"
      | "footer"
      | "form"
      | "h1"
      | "h2"
      | "h3"
      | "h4"
      | "h5"
      | "h6"
      | "header"
      | "hgroup"
      | "hr"
      | "main"
      | "menu"
      | "nav"
      | "ol"
      | "p"
      | "pre"
      | "section"
      | "summary"
      | "table"
      | "ul"
  )
}

/// Implicit end-tag rules triggered by a start tag, in application order.
pub(crate) fn implied_ends(name: &str) -> &'static [ImpliedEnd] {
  match name {
    "li" => LIST_ITEM,
    "dd" | "dt" => DEFINITION,
    "option" => OPTION,
    "optgroup" => OPTGROUP,
    "tr" => TABLE_ROW,
    "td" | "th" => TABLE_CELL,
    "thead" | "tbody" | "tfoot" => TABLE_SECTION,
    other if closes_paragraph(other) => PARAGRAPH_ONLY,
    _ => &[],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inline_tags() {
    for tag in INLINE_TAGS {
      assert_eq!(classify(tag), TagCategory::Inline, "{tag}");
    }
  }

  #[test]
  fn hidden_tags() {
    assert_eq!(classify("style"), TagCategory::Hidden);
    assert_eq!(classify("script"), TagCategory::Hidden);
    assert_eq!(classify("noscript"), TagCategory::Hidden);
  }

  #[test]
  fn everything_else_is_block() {
    for tag in ["p", "div", "input", "textarea", "li", "html", "custom-element"] {
      assert_eq!(classify(tag), TagCategory::Block, "{tag}");
    }
  }

  #[test]
  fn classification_ignores_case() {
    assert_eq!(classify("SPAN"), TagCategory::Inline);
    assert_eq!(classify("Script"), TagCategory::Hidden);
  }

  #[test]
  fn void_elements() {
    assert!(is_void_element("input"));
    assert!(is_void_element("br"));
    assert!(!is_void_element("div"));
  }

  #[test]
  fn implied_end_rules() {
    assert!(implied_ends("li")[0].closes.contains(&"li"));
    assert!(implied_ends("div").iter().any(|rule| rule.closes == ["p"]));
    assert!(implied_ends("span").is_empty());
    assert!(implied_ends("td")[0].stops_at.contains(&"tr"));
  }
}
