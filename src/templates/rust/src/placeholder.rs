/* src/templates/rust/src/placeholder.rs */

use serde::Serialize;
use serde_json::Value;

use crate::errors::Error;
use crate::escape::{canonical_float, push_escaped, stringify};
use crate::markup::Markup;

/// A value interpolated into a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Placeholder {
  /// Resolves to nothing.
  Absent,
  /// Trusted markup, inserted unescaped.
  Markup(Markup),
  /// Each element resolved in order and concatenated without a separator.
  Sequence(Vec<Placeholder>),
  /// Structured data, JSON-encoded and then escaped.
  Json(Value),
  /// Canonical string form of a scalar, escaped.
  Text(String),
}

impl Placeholder {
  /// Encode any serializable value as JSON text inside the template.
  pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
    Ok(Placeholder::Json(serde_json::to_value(value)?))
  }

  /// Resolve to the markup text this placeholder contributes.
  pub fn resolve(&self) -> String {
    let mut out = String::new();
    self.resolve_into(&mut out);
    out
  }

  pub(crate) fn resolve_into(&self, out: &mut String) {
    match self {
      Placeholder::Absent => {}
      Placeholder::Markup(markup) => out.push_str(markup.as_str()),
      Placeholder::Sequence(items) => {
        for item in items {
          item.resolve_into(out);
        }
      }
      Placeholder::Json(value) => push_escaped(out, &value.to_string()),
      Placeholder::Text(text) => push_escaped(out, text),
    }
  }
}

/// Conversion of borrowed values into placeholders. The `html!` macro calls
/// this on a reference to every interpolated argument.
///
/// Integers, `bool` and `char` use their `Display` form. Floats use a
/// canonical form: `1.0` renders as `1`, `f64::INFINITY` as `Infinity` and
/// magnitudes from `1e21` on or below `1e-6` in exponent notation (`1e+21`).
pub trait ToPlaceholder {
  fn to_placeholder(&self) -> Placeholder;
}

impl<T: ToPlaceholder + ?Sized> ToPlaceholder for &T {
  fn to_placeholder(&self) -> Placeholder {
    (**self).to_placeholder()
  }
}

impl ToPlaceholder for Placeholder {
  fn to_placeholder(&self) -> Placeholder {
    self.clone()
  }
}

impl ToPlaceholder for Markup {
  fn to_placeholder(&self) -> Placeholder {
    Placeholder::Markup(self.clone())
  }
}

impl ToPlaceholder for str {
  fn to_placeholder(&self) -> Placeholder {
    Placeholder::Text(self.to_owned())
  }
}

impl ToPlaceholder for String {
  fn to_placeholder(&self) -> Placeholder {
    Placeholder::Text(self.clone())
  }
}

// -- Scalar impls --

macro_rules! impl_to_placeholder_display {
  ($($ty:ty),* $(,)?) => {
    $(
      impl ToPlaceholder for $ty {
        fn to_placeholder(&self) -> Placeholder {
          Placeholder::Text(self.to_string())
        }
      }
    )*
  };
}

impl_to_placeholder_display!(
  bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl ToPlaceholder for f32 {
  fn to_placeholder(&self) -> Placeholder {
    Placeholder::Text(canonical_float(*self))
  }
}

impl ToPlaceholder for f64 {
  fn to_placeholder(&self) -> Placeholder {
    Placeholder::Text(canonical_float(*self))
  }
}

impl<T: ToPlaceholder> ToPlaceholder for Option<T> {
  fn to_placeholder(&self) -> Placeholder {
    match self {
      Some(value) => value.to_placeholder(),
      None => Placeholder::Absent,
    }
  }
}

impl<T: ToPlaceholder> ToPlaceholder for [T] {
  fn to_placeholder(&self) -> Placeholder {
    Placeholder::Sequence(self.iter().map(ToPlaceholder::to_placeholder).collect())
  }
}

impl<T: ToPlaceholder, const N: usize> ToPlaceholder for [T; N] {
  fn to_placeholder(&self) -> Placeholder {
    self.as_slice().to_placeholder()
  }
}

impl<T: ToPlaceholder> ToPlaceholder for Vec<T> {
  fn to_placeholder(&self) -> Placeholder {
    self.as_slice().to_placeholder()
  }
}

impl ToPlaceholder for Value {
  fn to_placeholder(&self) -> Placeholder {
    match self {
      Value::Null => Placeholder::Absent,
      Value::Array(items) => items.to_placeholder(),
      Value::Object(_) => Placeholder::Json(self.clone()),
      scalar => Placeholder::Text(stringify(scalar)),
    }
  }
}
