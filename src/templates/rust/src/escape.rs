/* src/templates/rust/src/escape.rs */

use std::fmt::{Display, LowerExp};

use serde_json::Value;

/// Escape the five HTML special characters so the result can be embedded in
/// element content or a double-quoted attribute value.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  push_escaped(&mut out, s);
  out
}

pub(crate) fn push_escaped(out: &mut String, s: &str) {
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
}

/// Canonical string form of a float: integral values without a fraction,
/// `NaN`/`Infinity`/`-Infinity` spelled out, and exponent notation (`1e+21`,
/// `1.5e-7`) below `1e-6` or from `1e21` on in magnitude.
pub(crate) fn canonical_float<F: Copy + Display + LowerExp + Into<f64>>(value: F) -> String {
  let x: f64 = value.into();
  if x.is_nan() {
    return "NaN".to_string();
  }
  if x.is_infinite() {
    return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
  }
  if x == 0.0 {
    return "0".to_string();
  }
  if x.abs() >= 1e21 || x.abs() < 1e-6 {
    let exp = format!("{value:e}");
    return match exp.split_once('e') {
      Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
      _ => exp,
    };
  }
  value.to_string()
}

/// Canonical string form of a JSON value: strings unquoted, other scalars via
/// their JSON text, containers as compact JSON.
pub(crate) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => match n.as_f64() {
      Some(f) if n.is_f64() => canonical_float(f),
      _ => n.to_string(),
    },
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn escape_html_special_chars() {
    assert_eq!(escape_html("<>&'\""), "&lt;&gt;&amp;&#39;&quot;");
  }

  #[test]
  fn escape_html_does_not_double_escape_its_output() {
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
  }

  #[test]
  fn escape_html_safe_string() {
    assert_eq!(escape_html("hello world"), "hello world");
  }

  #[test]
  fn escape_html_empty() {
    assert_eq!(escape_html(""), "");
  }

  #[test]
  fn escape_html_keeps_non_ascii() {
    assert_eq!(escape_html("caf\u{e9} \u{2611}\u{fe0f}"), "caf\u{e9} \u{2611}\u{fe0f}");
  }

  #[test]
  fn stringify_scalars() {
    assert_eq!(stringify(&json!(null)), "");
    assert_eq!(stringify(&json!(true)), "true");
    assert_eq!(stringify(&json!(42)), "42");
    assert_eq!(stringify(&json!(1.5)), "1.5");
    assert_eq!(stringify(&json!("hello")), "hello");
  }

  #[test]
  fn stringify_containers_as_json() {
    assert_eq!(stringify(&json!([1, 2])), "[1,2]");
    assert_eq!(stringify(&json!({"a": 1})), r#"{"a":1}"#);
  }

  #[test]
  fn canonical_float_forms() {
    assert_eq!(canonical_float(1.0f64), "1");
    assert_eq!(canonical_float(1.23f64), "1.23");
    assert_eq!(canonical_float(-0.0f64), "0");
    assert_eq!(canonical_float(1e21f64), "1e+21");
    assert_eq!(canonical_float(1.5e-7f64), "1.5e-7");
    assert_eq!(canonical_float(f64::INFINITY), "Infinity");
    assert_eq!(canonical_float(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(canonical_float(f64::NAN), "NaN");
    assert_eq!(canonical_float(1.1f32), "1.1");
  }

  #[test]
  fn stringify_integral_json_floats_without_fraction() {
    assert_eq!(stringify(&json!(1.0)), "1");
    assert_eq!(stringify(&json!(1e21)), "1e+21");
  }
}
