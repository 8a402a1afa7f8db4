use std::{collections::HashSet, sync::LazyLock};

use anyhow::bail;
use inflections::Inflect;
use regex::Regex;

use crate::generator::ast::Identifier;

/// Keywords that can never appear as bare identifiers in generated Scala
/// source. Matches are case-sensitive.
pub static RESERVED_WORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "abstract", "case", "catch", "class", "def", "do", "else", "extends", "false", "final", "finally", "for",
    "forSome", "if", "implicit", "import", "lazy", "match", "new", "null", "object", "override", "package", "private",
    "protected", "return", "sealed", "super", "this", "throw", "trait", "try", "true", "type", "val", "var", "while",
    "with", "yield",
  ]
  .into_iter()
  .collect()
});

/// Grammar for a plain (non-backticked) Scala identifier.
static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Replaces characters that cannot appear in an identifier with underscores,
/// collapses runs of underscores, and trims them from both ends.
fn sanitize(input: &str) -> String {
  static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
  static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

  let replaced = INVALID_CHARS_RE.replace_all(input, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Uppercases the first character, leaving the rest of the string unchanged.
pub fn capitalize(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Camel-cases a raw schema name: segments split on non-alphanumeric
/// boundaries, first segment lower-case unless `capitalize_first`.
pub fn camelize(input: &str, capitalize_first: bool) -> String {
  let camel = sanitize(input).to_camel_case();
  if capitalize_first { capitalize(&camel) } else { camel }
}

/// Wraps a name in the Scala identifier-escaping delimiters.
pub fn escape_reserved_word(name: &str) -> String {
  format!("`{name}`")
}

/// Converts a raw schema-supplied name into a valid Scala identifier.
///
/// The result is camel-cased (Pascal-cased when `capitalize_first`) and then
/// checked against the identifier grammar and the reserved-word table. A name
/// that fails either check is not rejected; it is marked for backtick
/// escaping instead, so normalization is total.
pub fn normalize(raw: &str, capitalize_first: bool) -> Identifier {
  let normalized = camelize(raw, capitalize_first);
  let valid = IDENTIFIER_RE.is_match(&normalized) && !RESERVED_WORDS.contains(normalized.as_str());

  Identifier {
    raw: raw.to_string(),
    normalized,
    is_escaped: !valid,
  }
}

/// Normalizes a parameter or variable name for use in generated method
/// signatures and case-class fields.
pub fn to_var_name(name: &str) -> String {
  normalize(name, false).rendered()
}

/// Normalizes an operation id into a lower-camel Scala method name.
///
/// Unlike property names, a method name that cannot be emitted aborts the
/// generation run: a client library silently missing a method is worse than
/// a failed build.
pub fn to_operation_id(operation_id: &str) -> anyhow::Result<String> {
  if operation_id.trim().is_empty() {
    bail!("empty method name (operationId) is not allowed");
  }

  let method = camelize(operation_id, false);
  if RESERVED_WORDS.contains(method.as_str()) {
    bail!("operationId `{operation_id}` normalizes to the reserved word `{method}` and cannot be used as a method name");
  }

  Ok(method)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_camelize_splits_on_separators() {
    assert_eq!(camelize("user-id", false), "userId");
    assert_eq!(camelize("pet.store_order", false), "petStoreOrder");
    assert_eq!(camelize("GetUserById", false), "getUserById");
    assert_eq!(camelize("user-id", true), "UserId");
  }

  #[test]
  fn test_normalize_plain_names() {
    let ident = normalize("user-id", false);
    assert_eq!(ident.normalized, "userId");
    assert!(!ident.is_escaped);
    assert_eq!(ident.rendered(), "userId");
  }

  #[test]
  fn test_normalize_capitalized_variant() {
    let ident = normalize("pet_status", true);
    assert_eq!(ident.normalized, "PetStatus");
    assert!(!ident.is_escaped);
  }

  #[test]
  fn test_normalize_is_idempotent() {
    let first = normalize("some-raw.name", false);
    let second = normalize(&first.normalized, false);
    assert_eq!(first.normalized, second.normalized);

    let first = normalize("some-raw.name", true);
    let second = normalize(&first.normalized, true);
    assert_eq!(first.normalized, second.normalized);
  }

  #[test]
  fn test_every_reserved_word_escapes() {
    for word in RESERVED_WORDS.iter() {
      let ident = normalize(word, false);
      assert!(ident.is_escaped, "{word} should require escaping");
      assert_eq!(ident.rendered(), format!("`{}`", ident.normalized));
    }
  }

  #[test]
  fn test_normalize_never_fails_on_degenerate_input() {
    let empty = normalize("", false);
    assert!(empty.is_escaped);
    assert_eq!(empty.rendered(), "``");

    let symbols = normalize("!!!", false);
    assert!(symbols.is_escaped);
  }

  #[test]
  fn test_operation_id_lower_camelizes() {
    assert_eq!(to_operation_id("GetUserById").unwrap(), "getUserById");
    assert_eq!(to_operation_id("find_pets_by-status").unwrap(), "findPetsByStatus");
  }

  #[test]
  fn test_operation_id_rejects_empty() {
    assert!(to_operation_id("").is_err());
    assert!(to_operation_id("   ").is_err());
  }

  #[test]
  fn test_operation_id_rejects_reserved_words() {
    let err = to_operation_id("match").unwrap_err();
    assert!(err.to_string().contains("reserved word"));
  }

  #[test]
  fn test_var_name_escapes_reserved_words() {
    assert_eq!(to_var_name("type"), "`type`");
    assert_eq!(to_var_name("class"), "`class`");
    assert_eq!(to_var_name("status"), "status");
  }
}
