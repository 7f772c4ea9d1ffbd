/* src/testing/rust/src/entities.rs */

/// Character references decoded by the visualizer, in application order.
/// `&amp;` goes last so that `&amp;lt;` decodes to `&lt;` rather than `<`.
const ENTITIES: &[(&str, &str)] = &[
  ("&lt;", "<"),
  ("&gt;", ">"),
  ("&quot;", "\""),
  ("&apos;", "'"),
  ("&#39;", "'"),
  ("&nbsp;", " "),
  ("&amp;", "&"),
];

/// Decode the fixed set of character references. Anything else, including
/// other numeric references, is left as written.
pub(crate) fn decode_entities(s: &str) -> String {
  let mut out = s.to_owned();
  for &(entity, replacement) in ENTITIES {
    if out.contains(entity) {
      out = out.replace(entity, replacement);
    }
  }
  out
}
