use indexmap::IndexMap;
use serde::Deserialize;

const DEFAULT_MAIN_PACKAGE: &str = "io.swagger.client";
const DEFAULT_SOURCE_FOLDER: &str = "src/main/scala";
const DEFAULT_RESOURCES_FOLDER: &str = "src/main/resources";
const DEFAULT_PROJECT_ORGANIZATION: &str = "io.swagger";
const DEFAULT_PROJECT_NAME: &str = "swagger-client";
const DEFAULT_PROJECT_VERSION: &str = "1.0.0";
const DEFAULT_SCALA_VERSION: &str = "2.12.3";
const DEFAULT_PLAY_VERSION: &str = "2.6.6";

/// Partial, user-supplied generation options.
///
/// Every field is optional; `ScalaPlayConfig::resolve` fills in defaults and
/// computes the derived packages. Deserializable from a JSON config file and
/// constructible in code through the generated builder.
#[derive(Debug, Clone, Default, Deserialize, bon::Builder)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorOptions {
  #[builder(into)]
  pub main_package: Option<String>,
  #[builder(into)]
  pub invoker_package: Option<String>,
  #[builder(into)]
  pub config_path: Option<String>,
  #[builder(into)]
  pub source_folder: Option<String>,
  #[builder(into)]
  pub resources_folder: Option<String>,
  #[builder(into)]
  pub project_organization: Option<String>,
  #[builder(into)]
  pub project_name: Option<String>,
  #[builder(into)]
  pub project_version: Option<String>,
  #[builder(into)]
  pub scala_version: Option<String>,
  #[builder(into)]
  pub play_version: Option<String>,
  pub render_javadoc: Option<bool>,
  pub remove_oauth_securities: Option<bool>,
  pub only_one_success: Option<bool>,
}

/// Fully-resolved, immutable configuration for one generation run.
///
/// Built once from `GeneratorOptions` and passed by reference into every
/// component; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct ScalaPlayConfig {
  pub main_package: String,
  pub api_package: String,
  pub model_package: String,
  pub invoker_package: String,
  pub config_path: String,
  pub source_folder: String,
  pub resources_folder: String,
  pub project_organization: String,
  pub project_name: String,
  pub project_version: String,
  pub scala_version: String,
  pub play_version: String,
  pub render_javadoc: bool,
  pub remove_oauth_securities: bool,
  /// Passed straight through to the rendering layer: when true, only the
  /// lowest 2XX response is treated as a success.
  pub only_one_success: bool,
  /// Externally-mapped type names and their fully-qualified import paths.
  /// Anything absent from this table is a locally generated sibling model.
  pub import_mapping: IndexMap<String, String>,
}

impl ScalaPlayConfig {
  /// Applies defaults and computes the derived packages, mirroring what used
  /// to be scattered across option processing.
  pub fn resolve(options: GeneratorOptions) -> Self {
    let main_package = options.main_package.unwrap_or_else(|| DEFAULT_MAIN_PACKAGE.to_string());
    let invoker_package = options
      .invoker_package
      .unwrap_or_else(|| format!("{main_package}.core"));
    let config_path = options.config_path.unwrap_or_else(|| main_package.clone());

    let mut import_mapping = IndexMap::new();
    import_mapping.insert("OffsetDateTime".to_string(), "java.time.OffsetDateTime".to_string());
    import_mapping.insert("LocalDate".to_string(), "java.time.LocalDate".to_string());
    import_mapping.insert("ApiFile".to_string(), format!("{invoker_package}.ApiFile"));

    Self {
      api_package: format!("{main_package}.api"),
      model_package: format!("{main_package}.model"),
      main_package,
      invoker_package,
      config_path,
      source_folder: options.source_folder.unwrap_or_else(|| DEFAULT_SOURCE_FOLDER.to_string()),
      resources_folder: options
        .resources_folder
        .unwrap_or_else(|| DEFAULT_RESOURCES_FOLDER.to_string()),
      project_organization: options
        .project_organization
        .unwrap_or_else(|| DEFAULT_PROJECT_ORGANIZATION.to_string()),
      project_name: options.project_name.unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
      project_version: options
        .project_version
        .unwrap_or_else(|| DEFAULT_PROJECT_VERSION.to_string()),
      scala_version: options.scala_version.unwrap_or_else(|| DEFAULT_SCALA_VERSION.to_string()),
      play_version: options.play_version.unwrap_or_else(|| DEFAULT_PLAY_VERSION.to_string()),
      render_javadoc: options.render_javadoc.unwrap_or(true),
      remove_oauth_securities: options.remove_oauth_securities.unwrap_or(true),
      only_one_success: options.only_one_success.unwrap_or(true),
      import_mapping,
    }
  }

  fn package_folder(&self, package: &str) -> String {
    format!("{}/{}", self.source_folder, package.replace('.', "/"))
  }

  /// Folder receiving the invoker scaffolding support files.
  pub fn invoker_folder(&self) -> String {
    self.package_folder(&self.invoker_package)
  }

  /// Folder receiving generated API operation files.
  pub fn api_file_folder(&self) -> String {
    self.package_folder(&self.api_package)
  }

  /// Folder receiving generated model files.
  pub fn model_file_folder(&self) -> String {
    self.package_folder(&self.model_package)
  }
}
