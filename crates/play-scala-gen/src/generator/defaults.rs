use crate::generator::{
  ast::{Property, SchemaType},
  type_resolver::resolve,
};

/// Synthesizes the default-value expression for a property.
///
/// Optionality dominates type: any optional property defaults to `None`.
/// Required containers default to a type-parameterized empty constructor.
/// Required scalars (and object/enum references) default to `null`, a
/// legacy carry-over kept verbatim; see the open-question log in DESIGN.md.
pub fn default_value(property: &Property) -> String {
  if !property.required {
    return "None".to_string();
  }

  match &property.schema_type {
    SchemaType::Array(_) | SchemaType::Map(_) => {
      format!("{}.empty", resolve(&property.schema_type).display_name)
    }
    _ => "null".to_string(),
  }
}
