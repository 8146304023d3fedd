use crate::commands::generate::load_model;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use jsonsample_schema::ClassKind;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Schema file describing the classes
    pub model: PathBuf,
}

pub fn list(args: ListArgs, _cwd: &str) -> Result<()> {
    // Only what the file declares; the prelude is implied
    let model = load_model(&args.model, false)?;

    if model.is_empty() {
        eprintln!("{} No classes declared in {}", "⚠️".yellow(), args.model.display());
        return Ok(());
    }

    for decl in model.classes() {
        let kind = match decl.kind {
            ClassKind::Class => format!("{:<10}", "class").normal(),
            ClassKind::Interface => format!("{:<10}", "interface").cyan(),
            ClassKind::Enum => format!("{:<10}", "enum").magenta(),
        };
        println!(
            "{} {} {}",
            kind,
            decl.name.bright_white(),
            format!("({} fields)", decl.fields.iter().filter(|f| !f.is_static).count()).dimmed()
        );
    }

    Ok(())
}
