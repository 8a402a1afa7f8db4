use indexmap::IndexMap;

use crate::reserved::{camelize, capitalize, normalize};

/// A named text transformation the template engine applies to rendered
/// fragments. Pure: output depends only on the input fragment.
pub type TransformFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Wraps a documentation fragment in a Scaladoc block, one comment marker
/// per physical line.
pub fn javadoc_block(fragment: &str) -> String {
  let mut block = String::from("  /**\n");
  for line in fragment.lines() {
    block.push_str("   * ");
    block.push_str(line);
    block.push('\n');
  }
  block.push_str("   */\n");
  block
}

/// Formats a fragment as an enumerated-constant name.
pub fn enum_entry_name(fragment: &str) -> String {
  normalize(fragment, true).rendered()
}

/// Neutralizes comment delimiters so schema-supplied text cannot terminate
/// a generated comment block early.
pub fn escape_unsafe_characters(input: &str) -> String {
  input.replace("*/", "*_/").replace("/*", "/_*")
}

/// Strips double quotes from schema-supplied text embedded in string
/// literals.
pub fn escape_quotation_mark(input: &str) -> String {
  input.replace('"', "")
}

/// Builds the name-to-callable registry handed to the template engine.
///
/// The javadoc renderer is only registered when doc-comment rendering is
/// enabled; templates treat a missing entry as "emit nothing".
pub fn transform_registry(render_javadoc: bool) -> IndexMap<&'static str, TransformFn> {
  let mut registry: IndexMap<&'static str, TransformFn> = IndexMap::new();

  registry.insert("fnCapitalize", Box::new(capitalize));
  registry.insert("fnCamelize", Box::new(|fragment: &str| camelize(fragment, false)));
  registry.insert("fnEnumEntry", Box::new(enum_entry_name));
  if render_javadoc {
    registry.insert("javadocRenderer", Box::new(javadoc_block));
  }

  registry
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_capitalize_only_touches_first_character() {
    assert_eq!(capitalize("status code"), "Status code");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("X"), "X");
  }

  #[test]
  fn test_javadoc_block_prefixes_every_line() {
    let block = javadoc_block("Returns a pet.\nOnly one pet per id.");
    assert_eq!(block, "  /**\n   * Returns a pet.\n   * Only one pet per id.\n   */\n");
  }

  #[test]
  fn test_enum_entry_name_pascal_cases() {
    assert_eq!(enum_entry_name("not-available"), "NotAvailable");
    assert_eq!(enum_entry_name("sold out"), "SoldOut");
  }

  #[test]
  fn test_escape_unsafe_characters_breaks_comment_delimiters() {
    assert_eq!(escape_unsafe_characters("evil */ comment /*"), "evil *_/ comment /_*");
  }

  #[test]
  fn test_escape_quotation_mark_strips_quotes() {
    assert_eq!(escape_quotation_mark(r#"say "hello""#), "say hello");
  }

  #[test]
  fn test_registry_names_and_javadoc_flag() {
    let with_docs = transform_registry(true);
    assert!(with_docs.contains_key("javadocRenderer"));
    assert!(with_docs.contains_key("fnCapitalize"));
    assert!(with_docs.contains_key("fnCamelize"));
    assert!(with_docs.contains_key("fnEnumEntry"));

    let without_docs = transform_registry(false);
    assert!(!without_docs.contains_key("javadocRenderer"));
    assert_eq!(without_docs.len(), 3);
  }

  #[test]
  fn test_registered_camelize_lowercases_first_segment() {
    let registry = transform_registry(false);
    let camelize_fn = &registry["fnCamelize"];
    assert_eq!(camelize_fn("some-fragment"), "someFragment");
  }
}
