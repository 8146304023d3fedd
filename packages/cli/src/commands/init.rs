use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

const EXAMPLE_MODEL_NAME: &str = "model.json";

const EXAMPLE_MODEL: &str = r#"{
  "classes": [
    {
      "name": "com.example.User",
      "doc": "/** A registered user */",
      "fields": [
        { "name": "id", "type": "long", "doc": "/** primary key */" },
        { "name": "name", "type": "String", "doc": "/** display name */" },
        { "name": "tags", "type": "java.util.List<String>" },
        { "name": "address", "type": "com.example.Address" }
      ]
    },
    {
      "name": "com.example.Address",
      "fields": [
        { "name": "street", "type": "String" },
        { "name": "zip", "type": "String" }
      ]
    }
  ]
}
"#;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Also write an example model file
    #[arg(short, long)]
    pub example: bool,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        eprintln!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        eprintln!("Use --force to overwrite");
        return Ok(());
    }

    let config_json = serde_json::to_string_pretty(&Config::default())?;
    fs::write(&config_path, config_json)?;
    eprintln!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    if args.example {
        let model_path = PathBuf::from(cwd).join(EXAMPLE_MODEL_NAME);
        if !model_path.exists() || args.force {
            fs::write(&model_path, EXAMPLE_MODEL)?;
            eprintln!("  {} Created {}", "✓".green(), EXAMPLE_MODEL_NAME);
        }
        eprintln!();
        eprintln!("Next: jsonsample generate {} com.example.User", EXAMPLE_MODEL_NAME);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate::load_model;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        init(InitArgs { example: false, force: false }, cwd).unwrap();

        let config = Config::load(cwd).unwrap();
        assert_eq!(config, Config::default());
        assert!(!dir.path().join(EXAMPLE_MODEL_NAME).exists());
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(&path, r#"{ "indent": 8 }"#).unwrap();

        init(InitArgs { example: false, force: false }, cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap().indent, 8);

        init(InitArgs { example: false, force: true }, cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap().indent, 2);
    }

    #[test]
    fn test_example_model_loads() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        init(InitArgs { example: true, force: false }, cwd).unwrap();

        let model = load_model(&dir.path().join(EXAMPLE_MODEL_NAME), true).unwrap();
        assert!(model.classes().any(|decl| decl.name == "com.example.User"));
    }
}
