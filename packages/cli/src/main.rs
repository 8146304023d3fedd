mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{generate, init, list, GenerateArgs, InitArgs, ListArgs};
use tracing::Level;

/// jsonsample - representative JSON documents from class declarations
#[derive(Parser, Debug)]
#[command(name = "jsonsample")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default jsonsample.config.json
    Init(InitArgs),

    /// Generate a sample document for one class
    Generate(GenerateArgs),

    /// List the classes declared in a model file
    List(ListArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Generate(args) => generate(args, &cwd),
                Command::List(args) => list(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
