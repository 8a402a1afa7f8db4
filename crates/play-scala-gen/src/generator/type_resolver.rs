use std::{collections::HashSet, sync::LazyLock};

use indexmap::IndexMap;

use crate::{
  generator::ast::{ResolvedType, SchemaType},
  reserved::normalize,
};

/// Abstract schema kind names mapped to their Scala type names.
pub static TYPE_MAPPING: LazyLock<IndexMap<&str, &str>> = LazyLock::new(|| {
  IndexMap::from([
    ("array", "Seq"),
    ("set", "Set"),
    ("map", "Map"),
    ("boolean", "Boolean"),
    ("string", "String"),
    ("int", "Int"),
    ("integer", "Int"),
    ("long", "Long"),
    ("float", "Float"),
    ("byte", "Byte"),
    ("short", "Short"),
    ("char", "Char"),
    ("double", "Double"),
    ("object", "Any"),
    ("file", "ApiFile"),
    ("number", "Double"),
    ("DateTime", "OffsetDateTime"),
    ("date", "LocalDate"),
  ])
});

/// Type names that are Scala built-ins and therefore need canonical casing
/// rather than a model-name import.
static LANGUAGE_PRIMITIVES: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "String", "boolean", "Boolean", "Double", "Int", "Long", "Float", "Object", "List", "Seq", "Map",
  ]
  .into_iter()
  .collect()
});

/// Concrete collection types used when instantiating an empty container.
static INSTANTIATION_TYPES: LazyLock<IndexMap<&str, &str>> =
  LazyLock::new(|| IndexMap::from([("array", "ListBuffer"), ("map", "Map")]));

/// Maps an abstract primitive kind name to its Scala display name.
///
/// Mapped names that are language built-ins go through the type-name
/// normalizer to guarantee canonical casing; unmapped names pass through as
/// literal type names for already-resolved or custom types.
fn primitive_display(name: &str) -> String {
  match TYPE_MAPPING.get(name) {
    Some(mapped) if LANGUAGE_PRIMITIVES.contains(mapped) => normalize(mapped, true).rendered(),
    Some(mapped) => (*mapped).to_string(),
    None => name.to_string(),
  }
}

/// Resolves a schema type into its Scala type expression.
///
/// Containers resolve inside-out with no depth limit; the caller guarantees
/// the schema graph is acyclic (a cyclic graph would recurse forever, see
/// DESIGN.md).
pub fn resolve(schema_type: &SchemaType) -> ResolvedType {
  match schema_type {
    SchemaType::Primitive(name) => ResolvedType {
      display_name: primitive_display(name),
      instantiation: None,
    },
    SchemaType::Array(item) => {
      let inner = resolve(item).display_name;
      ResolvedType {
        display_name: format!("{}[{inner}]", TYPE_MAPPING["array"]),
        instantiation: Some(format!("{}[{inner}]", INSTANTIATION_TYPES["array"])),
      }
    }
    SchemaType::Map(value) => {
      let inner = resolve(value).display_name;
      ResolvedType {
        display_name: format!("{}[String, {inner}]", TYPE_MAPPING["map"]),
        instantiation: Some(format!("{}[String, {inner}]", INSTANTIATION_TYPES["map"])),
      }
    }
    SchemaType::ObjectRef(name) | SchemaType::EnumRef(name) => ResolvedType {
      display_name: normalize(name, true).rendered(),
      instantiation: None,
    },
    SchemaType::File => ResolvedType {
      display_name: TYPE_MAPPING["file"].to_string(),
      instantiation: None,
    },
  }
}

/// Whether the innermost type of a property maps to a Scala built-in rather
/// than a generated model type.
pub fn is_primitive(schema_type: &SchemaType) -> bool {
  match schema_type.innermost() {
    SchemaType::Primitive(_) | SchemaType::File => true,
    SchemaType::ObjectRef(_) | SchemaType::EnumRef(_) => false,
    // innermost() never returns a container
    SchemaType::Array(_) | SchemaType::Map(_) => unreachable!("innermost type is never a container"),
  }
}
