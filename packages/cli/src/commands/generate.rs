use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use jsonsample_sampler::{render, FieldNaming, OutputFormat, Sampler, ValueKind, MAX_DEPTH_CEILING};
use jsonsample_schema::{SchemaDocument, SchemaModel};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Schema file describing the classes
    pub model: PathBuf,

    /// Class to sample (qualified name, or a unique simple name)
    pub class: String,

    /// Output format (placeholder, commented, strict)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Leaf values for commented/strict output (label, default, random)
    #[arg(long)]
    pub values: Option<ValueKind>,

    /// Key naming convention (asDeclared, camelCase, snakeCase, ...)
    #[arg(long)]
    pub naming: Option<FieldNaming>,

    /// Spaces per nesting level (0 = single line)
    #[arg(long)]
    pub indent: Option<usize>,

    /// Nesting limit (at most 1000)
    #[arg(long, value_parser = parse_max_depth)]
    pub max_depth: Option<usize>,

    /// Fail as soon as a class references itself
    #[arg(long)]
    pub detect_cycles: bool,

    /// Write the sample to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Config file (defaults to jsonsample.config.json in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Flags win over the config file
    fn apply(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(values) = self.values {
            config.sampler.values = values;
        }
        if let Some(naming) = self.naming {
            config.sampler.field_naming = naming;
        }
        if let Some(indent) = self.indent {
            config.indent = indent;
        }
        if let Some(max_depth) = self.max_depth {
            config.sampler.max_depth = max_depth;
        }
        if self.detect_cycles {
            config.sampler.detect_cycles = true;
        }
    }
}

fn parse_max_depth(value: &str) -> Result<usize, String> {
    let depth: usize = value.parse().map_err(|e| format!("{}", e))?;
    if depth > MAX_DEPTH_CEILING {
        return Err(format!("must be at most {}", MAX_DEPTH_CEILING));
    }
    Ok(depth)
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load_file(path)?,
        None => Config::load(cwd)?,
    };
    args.apply(&mut config);
    debug!(?config, "Resolved configuration");

    let model = load_model(&args.model, config.prelude)?;
    let sampler = Sampler::new(&model, config.sampler.clone());

    let sample = sampler
        .generate_class(&args.class)
        .with_context(|| format!("Failed to sample {}", args.class))?;
    let output = render(&sample, config.format, config.indent)?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, format!("{}\n", output))?;
            eprintln!(
                "{} {} → {}",
                "✓".green(),
                args.class.bright_white(),
                path.display()
            );
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Read a schema file, adding the standard declarations when `prelude` is set
pub fn load_model(path: &Path, prelude: bool) -> Result<SchemaModel> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read model {}", path.display()))?;
    let mut document: SchemaDocument =
        serde_json::from_str(&content).with_context(|| format!("Invalid model {}", path.display()))?;
    document.prelude |= prelude;

    SchemaModel::from_document(document).with_context(|| format!("Invalid model {}", path.display()))
}
