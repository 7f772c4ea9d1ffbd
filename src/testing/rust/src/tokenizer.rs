/* src/testing/rust/src/tokenizer.rs */

//! Permissive HTML tokenizer for hand-written markup and test fixtures.
//!
//! Text and attribute values are kept exactly as written; character
//! references are decoded later, once, over the whole visualization.
//!
//! Known limitations (intentional):
//! - No HTML5 parse-error recovery beyond what the visualizer needs.
//! - Raw-text close tags only accept ASCII whitespace before `>`.

use crate::tags::{is_raw_text_element, is_void_element};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
  Doctype(String),
  StartTag { name: String, attributes: Vec<(String, Option<String>)>, self_closing: bool },
  EndTag(String),
  Comment(String),
  Text(String),
}

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

fn starts_with_ignore_ascii_case_at(haystack: &[u8], start: usize, needle: &[u8]) -> bool {
  haystack.len() >= start + needle.len()
    && haystack[start..start + needle.len()].eq_ignore_ascii_case(needle)
}

/// Find `</name` followed by optional ASCII whitespace and `>`.
/// Returns the byte range of the whole close tag.
fn find_raw_text_close_tag(haystack: &str, name: &str) -> Option<(usize, usize)> {
  let bytes = haystack.as_bytes();
  let len = bytes.len();
  let mut i = 0;
  while let Some(rel) = haystack[i..].find("</") {
    let start = i + rel;
    let name_end = start + 2 + name.len();
    if starts_with_ignore_ascii_case_at(bytes, start + 2, name.as_bytes()) {
      let mut k = name_end;
      while k < len && bytes[k].is_ascii_whitespace() {
        k += 1;
      }
      if k < len && bytes[k] == b'>' {
        return Some((start, k + 1));
      }
    }
    i = start + 2;
  }
  None
}

fn is_tag_name_end(b: u8) -> bool {
  b.is_ascii_whitespace() || b == b'/' || b == b'>'
}

fn is_attribute_name_end(b: u8) -> bool {
  is_tag_name_end(b) || b == b'='
}

pub(crate) fn tokenize(input: &str) -> Vec<Token> {
  let bytes = input.as_bytes();
  let len = bytes.len();
  let mut out = Vec::new();
  // Invariant: every slice boundary sits on an ASCII structural byte or at the
  // end of input, so slices stay on UTF-8 char boundaries.
  let mut text_start = 0;
  let mut i = 0;

  let flush_text = |out: &mut Vec<Token>, from: usize, to: usize| {
    if from < to {
      out.push(Token::Text(input[from..to].to_string()));
    }
  };

  while let Some(rel) = input[i..].find('<') {
    let pos = i + rel;
    let next = bytes.get(pos + 1).copied();

    if input[pos..].starts_with(COMMENT_START) {
      flush_text(&mut out, text_start, pos);
      let body_start = pos + COMMENT_START.len();
      // `<!-->` and `<!--->` are complete, empty comments
      let abrupt = [">", "->"].into_iter().find(|close| input[body_start..].starts_with(close));
      if let Some(close) = abrupt {
        out.push(Token::Comment(String::new()));
        i = body_start + close.len();
      } else if let Some(end) = input[body_start..].find(COMMENT_END) {
        out.push(Token::Comment(input[body_start..body_start + end].to_string()));
        i = body_start + end + COMMENT_END.len();
      } else {
        log::debug!(target: "html_testing", "unterminated comment at byte {pos}");
        out.push(Token::Comment(input[body_start..].to_string()));
        i = len;
      }
      text_start = i;
      continue;
    }

    if matches!(next, Some(b'!' | b'?')) {
      // doctype, CDATA or processing instruction: opaque up to the next `>`
      flush_text(&mut out, text_start, pos);
      let end = input[pos..].find('>').map_or(len, |e| pos + e);
      let body = input[pos + 2..end].to_string();
      if starts_with_ignore_ascii_case_at(bytes, pos, b"<!doctype") {
        out.push(Token::Doctype(body));
      } else {
        out.push(Token::Comment(body));
      }
      i = (end + 1).min(len);
      text_start = i;
      continue;
    }

    if next == Some(b'/') {
      flush_text(&mut out, text_start, pos);
      let name_start = pos + 2;
      let mut j = name_start;
      while j < len && !is_tag_name_end(bytes[j]) {
        j += 1;
      }
      let name = input[name_start..j].to_ascii_lowercase();
      let end = input[j..].find('>').map_or(len, |e| j + e);
      if name.is_empty() {
        log::debug!(target: "html_testing", "ignoring nameless end tag at byte {pos}");
      } else {
        out.push(Token::EndTag(name));
      }
      i = (end + 1).min(len);
      text_start = i;
      continue;
    }

    if !next.is_some_and(|b| b.is_ascii_alphabetic()) {
      // a lone `<` is text
      i = pos + 1;
      continue;
    }

    flush_text(&mut out, text_start, pos);
    let name_start = pos + 1;
    let mut k = name_start;
    while k < len && !is_tag_name_end(bytes[k]) {
      k += 1;
    }
    let name = input[name_start..k].to_ascii_lowercase();
    let mut attributes: Vec<(String, Option<String>)> = Vec::new();
    let mut self_closing = false;

    let skip_whitespace = |k: &mut usize| {
      while *k < len && bytes[*k].is_ascii_whitespace() {
        *k += 1;
      }
    };

    loop {
      skip_whitespace(&mut k);
      if k >= len {
        break;
      }
      if bytes[k] == b'>' {
        k += 1;
        break;
      }
      if bytes[k] == b'/' {
        if k + 1 < len && bytes[k + 1] == b'>' {
          self_closing = true;
          k += 2;
          break;
        }
        k += 1;
        continue;
      }
      let attr_start = k;
      // a leading `=` belongs to the name
      k += 1;
      while k < len && !is_attribute_name_end(bytes[k]) {
        k += 1;
      }
      let attr_name = input[attr_start..k].to_ascii_lowercase();

      skip_whitespace(&mut k);
      let value = if k < len && bytes[k] == b'=' {
        k += 1;
        skip_whitespace(&mut k);
        if k < len && (bytes[k] == b'"' || bytes[k] == b'\'') {
          let quote = bytes[k];
          k += 1;
          let value_start = k;
          while k < len && bytes[k] != quote {
            k += 1;
          }
          let raw = &input[value_start..k];
          if k < len {
            k += 1;
          }
          Some(raw.to_string())
        } else {
          let value_start = k;
          while k < len && !bytes[k].is_ascii_whitespace() && bytes[k] != b'>' {
            k += 1;
          }
          Some(input[value_start..k].to_string())
        }
      } else {
        None
      };
      attributes.push((attr_name, value));
    }

    if is_void_element(&name) {
      self_closing = true;
    }
    let raw_text = !self_closing && is_raw_text_element(&name);
    out.push(Token::StartTag { name: name.clone(), attributes, self_closing });
    i = k;
    text_start = k;

    if raw_text {
      if let Some((close_start, close_end)) = find_raw_text_close_tag(&input[k..], &name) {
        flush_text(&mut out, k, k + close_start);
        i = k + close_end;
      } else {
        log::debug!(target: "html_testing", "<{name}> has no close tag, treating the rest as its content");
        flush_text(&mut out, k, len);
        i = len;
      }
      out.push(Token::EndTag(name));
      text_start = i;
    }
  }
  flush_text(&mut out, text_start, len);

  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn start(name: &str, attributes: &[(&str, Option<&str>)]) -> Token {
    Token::StartTag {
      name: name.to_string(),
      attributes: attributes
        .iter()
        .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
        .collect(),
      self_closing: false,
    }
  }

  fn text(s: &str) -> Token {
    Token::Text(s.to_string())
  }

  fn end(name: &str) -> Token {
    Token::EndTag(name.to_string())
  }

  #[test]
  fn text_and_tags() {
    assert_eq!(tokenize("<p>one</p>two"), vec![start("p", &[]), text("one"), end("p"), text("two")]);
  }

  #[test]
  fn keeps_character_references_raw() {
    assert_eq!(tokenize("&lt;b&gt;"), vec![text("&lt;b&gt;")]);
  }

  #[test]
  fn preserves_utf8_text() {
    assert_eq!(tokenize("<b>caf\u{e9}</b> \u{1f7e2}")[1], text("caf\u{e9}"));
  }

  #[test]
  fn lowercases_names() {
    assert_eq!(tokenize("<DIV CLASS=x></Div>"), vec![start("div", &[("class", Some("x"))]), end("div")]);
  }

  #[test]
  fn attribute_forms() {
    let tokens = tokenize(r#"<input type="checkbox" checked value='a b' data-x=1 data-test-icon="☑️">"#);
    assert_eq!(
      tokens,
      vec![Token::StartTag {
        name: "input".into(),
        attributes: vec![
          ("type".into(), Some("checkbox".into())),
          ("checked".into(), None),
          ("value".into(), Some("a b".into())),
          ("data-x".into(), Some("1".into())),
          ("data-test-icon".into(), Some("☑️".into())),
        ],
        self_closing: true,
      }]
    );
  }

  #[test]
  fn attributes_across_newlines() {
    assert_eq!(
      tokenize("<div\ndata-test-icon=\"x\"\n></div>"),
      vec![start("div", &[("data-test-icon", Some("x"))]), end("div")]
    );
  }

  #[test]
  fn attribute_values_stay_raw() {
    assert_eq!(tokenize(r#"<p title="&amp;">"#), vec![start("p", &[("title", Some("&amp;"))])]);
  }

  #[test]
  fn explicit_self_closing() {
    assert!(matches!(&tokenize("<div/>")[..], [Token::StartTag { self_closing: true, .. }]));
  }

  #[test]
  fn comments_end_at_comment_terminator() {
    assert_eq!(tokenize("a<!-- > -->b"), vec![text("a"), Token::Comment(" > ".into()), text("b")]);
    assert_eq!(tokenize("<!--\n>\n-->"), vec![Token::Comment("\n>\n".into())]);
  }

  #[test]
  fn abruptly_closed_empty_comments() {
    assert_eq!(tokenize("<!-->x"), vec![Token::Comment(String::new()), text("x")]);
    assert_eq!(tokenize("<!--->x"), vec![Token::Comment(String::new()), text("x")]);
    assert_eq!(tokenize("<!---->x"), vec![Token::Comment(String::new()), text("x")]);
  }

  #[test]
  fn unterminated_comment_swallows_the_rest() {
    assert_eq!(tokenize("a<!-- b"), vec![text("a"), Token::Comment(" b".into())]);
  }

  #[test]
  fn doctype() {
    assert_eq!(tokenize("<!DOCTYPE html>x"), vec![Token::Doctype("DOCTYPE html".into()), text("x")]);
  }

  #[test]
  fn lone_less_than_is_text() {
    assert_eq!(tokenize("a < b <3"), vec![text("a < b <3")]);
  }

  #[test]
  fn raw_text_elements_do_not_parse_tags() {
    assert_eq!(
      tokenize("<script>if (a<b) x('</p>')</SCRIPT >after"),
      vec![start("script", &[]), text("if (a<b) x('</p>')"), end("script"), text("after")]
    );
  }

  #[test]
  fn raw_text_without_close_tag() {
    assert_eq!(tokenize("<style>p{}"), vec![start("style", &[]), text("p{}"), end("style")]);
  }

  #[test]
  fn empty_raw_text() {
    assert_eq!(tokenize("<textarea></textarea>"), vec![start("textarea", &[]), end("textarea")]);
  }
}
