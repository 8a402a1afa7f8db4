use itertools::Itertools;

use crate::{
  generator::{
    ast::{Model, SchemaType},
    config::ScalaPlayConfig,
    type_resolver::resolve,
  },
  reserved::normalize,
};

/// Removes imports of sibling models living in the same output package.
///
/// Scala rejects such imports with a "permanently hidden by definition"
/// warning, since every generated model already shares the model package.
/// Externally-mapped types (anything present in the config's import mapping)
/// are left alone, as are unrelated imports. Running the pass twice on the
/// same model is a no-op the second time.
pub fn dedupe_imports(model: &mut Model, config: &ScalaPlayConfig) {
  let local_imports: Vec<String> = model
    .properties
    .iter()
    .filter_map(|property| match property.schema_type.innermost() {
      SchemaType::ObjectRef(_) | SchemaType::EnumRef(_) => {
        let type_name = resolve(property.schema_type.innermost()).display_name;
        if config.import_mapping.contains_key(&type_name) {
          None
        } else {
          Some(format!("{}.{type_name}", config.model_package))
        }
      }
      _ => None,
    })
    .unique()
    .collect();

  model
    .declared_imports
    .retain(|import| !local_imports.contains(import));
}

/// Fully-qualified import path for a generated model type.
pub fn to_model_import(type_name: &str, config: &ScalaPlayConfig) -> String {
  format!("{}.{}", config.model_package, normalize(type_name, true).rendered())
}
