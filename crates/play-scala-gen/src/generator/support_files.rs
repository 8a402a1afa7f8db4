use crate::generator::{
  ast::{SupportFile, SupportTemplate},
  config::ScalaPlayConfig,
};

/// Enumerates the fixed auxiliary files emitted with every generated client.
///
/// Pure configuration expansion: paths depend only on the resolved package
/// and folder settings, never on the schema being generated. The build
/// descriptor and runtime configuration land at the project level; the
/// invoker scaffolding lands under the invoker package folder.
pub fn plan(config: &ScalaPlayConfig) -> Vec<SupportFile> {
  let invoker_folder = config.invoker_folder();

  vec![
    SupportFile::new(SupportTemplate::Sbt, "", "build.sbt"),
    SupportFile::new(SupportTemplate::Reference, &config.resources_folder, "reference.conf"),
    SupportFile::new(SupportTemplate::ApiFile, &invoker_folder, "ApiFile.scala"),
    SupportFile::new(SupportTemplate::ApiConfig, &invoker_folder, "ApiConfig.scala"),
    SupportFile::new(SupportTemplate::ApiRequest, &invoker_folder, "ApiRequest.scala"),
    SupportFile::new(SupportTemplate::ApiResponse, &invoker_folder, "ApiResponse.scala"),
    SupportFile::new(SupportTemplate::ApiInvoker, &invoker_folder, "ApiInvoker.scala"),
    SupportFile::new(SupportTemplate::ApiImplicits, &invoker_folder, "ApiImplicits.scala"),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::config::GeneratorOptions;

  #[test]
  fn test_plan_is_deterministic_and_ordered() {
    let config = ScalaPlayConfig::resolve(GeneratorOptions::default());

    let first = plan(&config);
    let second = plan(&config);
    assert_eq!(first, second);

    assert_eq!(first.len(), 8);
    assert_eq!(first[0].relative_path(), "build.sbt");
    assert_eq!(first[1].relative_path(), "src/main/resources/reference.conf");
  }

  #[test]
  fn test_invoker_files_follow_invoker_package() {
    let options = GeneratorOptions::builder().main_package("com.acme.petstore").build();
    let config = ScalaPlayConfig::resolve(options);

    let files = plan(&config);
    let invoker = &files[2];
    assert_eq!(invoker.template.to_string(), "apiFile.mustache");
    assert_eq!(
      invoker.relative_path(),
      "src/main/scala/com/acme/petstore/core/ApiFile.scala"
    );

    assert!(
      files[2..]
        .iter()
        .all(|f| f.folder == "src/main/scala/com/acme/petstore/core")
    );
  }

  #[test]
  fn test_template_ids_render_as_mustache_names() {
    let config = ScalaPlayConfig::resolve(GeneratorOptions::default());
    let ids: Vec<String> = plan(&config).iter().map(|f| f.template.to_string()).collect();

    assert_eq!(
      ids,
      vec![
        "sbt.mustache",
        "reference.mustache",
        "apiFile.mustache",
        "apiConfig.mustache",
        "apiRequest.mustache",
        "apiResponse.mustache",
        "apiInvoker.mustache",
        "apiImplicits.mustache",
      ]
    );
  }
}
