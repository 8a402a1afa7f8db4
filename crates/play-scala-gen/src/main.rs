use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use play_scala_gen::generator::{
  config::{GeneratorOptions, ScalaPlayConfig},
  support_files,
  type_resolver::TYPE_MAPPING,
};

#[derive(Parser, Debug)]
#[command(name = "play-scala-gen")]
#[command(version, about = "Configuration engine for Scala Play-WS client generation")]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Print the support files a generation run would emit
  Plan {
    /// Path to a JSON file with generator options (defaults apply when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
  },
  /// Print the abstract-to-Scala type mapping table
  Mappings,
}

fn load_options(path: Option<&Path>) -> anyhow::Result<GeneratorOptions> {
  match path {
    Some(path) => {
      let raw = std::fs::read_to_string(path).with_context(|| format!("reading config file {}", path.display()))?;
      serde_json::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }
    None => Ok(GeneratorOptions::default()),
  }
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Commands::Plan { config } => {
      let options = load_options(config.as_deref())?;
      let config = ScalaPlayConfig::resolve(options);
      for file in support_files::plan(&config) {
        println!("{:<24} -> {}", file.template.to_string(), file.relative_path());
      }
    }
    Commands::Mappings => {
      for (abstract_name, scala_name) in TYPE_MAPPING.iter() {
        println!("{abstract_name:<12} -> {scala_name}");
      }
    }
  }

  Ok(())
}
