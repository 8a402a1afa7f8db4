use indexmap::IndexSet;
use strum::Display;

use crate::reserved::escape_reserved_word;

/// Abstract schema type handed over by the API-description parser.
///
/// Array and Map items may themselves be any `SchemaType`, so nesting depth
/// is unbounded. The resolver requires the graph to be acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaType {
  Primitive(String),
  Array(Box<SchemaType>),
  Map(Box<SchemaType>),
  ObjectRef(String),
  EnumRef(String),
  File,
}

impl SchemaType {
  pub fn primitive(name: &str) -> Self {
    Self::Primitive(name.to_string())
  }

  pub fn array(item: SchemaType) -> Self {
    Self::Array(Box::new(item))
  }

  pub fn map(value: SchemaType) -> Self {
    Self::Map(Box::new(value))
  }

  /// Unwraps Array/Map containers down to the innermost non-container type.
  pub fn innermost(&self) -> &SchemaType {
    match self {
      SchemaType::Array(item) => item.innermost(),
      SchemaType::Map(value) => value.innermost(),
      other => other,
    }
  }
}

/// A schema type resolved into Scala source text.
///
/// `instantiation` carries the literal construction syntax for an empty
/// instance and is only present for container types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
  pub display_name: String,
  pub instantiation: Option<String>,
}

/// A schema-supplied name normalized into a valid Scala identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
  pub raw: String,
  pub normalized: String,
  pub is_escaped: bool,
}

impl Identifier {
  /// The form to emit into generated source: bare when the normalized name
  /// is already valid, backtick-quoted otherwise.
  pub fn rendered(&self) -> String {
    if self.is_escaped {
      escape_reserved_word(&self.normalized)
    } else {
      self.normalized.clone()
    }
  }
}

/// A single named property of a model schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
  pub base_name: String,
  pub schema_type: SchemaType,
  pub required: bool,
}

impl Property {
  pub fn new(base_name: &str, schema_type: SchemaType, required: bool) -> Self {
    Self {
      base_name: base_name.to_string(),
      schema_type,
      required,
    }
  }
}

/// A generated model schema with the imports its rendered file declares.
///
/// `declared_imports` is only replaced by the import-dedup pass; nothing
/// mutates a model after post-processing completes.
#[derive(Debug, Clone)]
pub struct Model {
  pub name: String,
  pub properties: Vec<Property>,
  pub declared_imports: IndexSet<String>,
}

/// Authentication scheme categories recognized by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeCategory {
  ApiKey,
  Basic,
  OAuth,
}

/// One named security scheme attached to an operation.
///
/// `is_last` is adjacency metadata for the template engine and must be
/// recomputed whenever the containing sequence changes length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityRequirement {
  pub scheme_name: String,
  pub category: SchemeCategory,
  pub is_last: bool,
}

impl SecurityRequirement {
  pub fn new(scheme_name: &str, category: SchemeCategory) -> Self {
    Self {
      scheme_name: scheme_name.to_string(),
      category,
      is_last: false,
    }
  }
}

/// Template ids for the fixed auxiliary files emitted with every client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SupportTemplate {
  #[strum(serialize = "sbt.mustache")]
  Sbt,
  #[strum(serialize = "reference.mustache")]
  Reference,
  #[strum(serialize = "apiFile.mustache")]
  ApiFile,
  #[strum(serialize = "apiConfig.mustache")]
  ApiConfig,
  #[strum(serialize = "apiRequest.mustache")]
  ApiRequest,
  #[strum(serialize = "apiResponse.mustache")]
  ApiResponse,
  #[strum(serialize = "apiInvoker.mustache")]
  ApiInvoker,
  #[strum(serialize = "apiImplicits.mustache")]
  ApiImplicits,
}

/// One auxiliary file the planner schedules for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportFile {
  pub template: SupportTemplate,
  pub folder: String,
  pub file_name: String,
}

impl SupportFile {
  pub fn new(template: SupportTemplate, folder: &str, file_name: &str) -> Self {
    Self {
      template,
      folder: folder.to_string(),
      file_name: file_name.to_string(),
    }
  }

  /// Output path relative to the generation root.
  pub fn relative_path(&self) -> String {
    if self.folder.is_empty() {
      self.file_name.clone()
    } else {
      format!("{}/{}", self.folder, self.file_name)
    }
  }
}
