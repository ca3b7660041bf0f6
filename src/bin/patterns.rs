use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use design_patterns::{logger, Demo, DemoConfig};

#[derive(Parser, Debug)]
#[command(name = "patterns", about = "Run the Decorator, Observer and Strategy demos")]
struct Cli {
    /// TOML scenario file; the built-in scenario is used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// StarBuzz Coffee beverages
    Decorator,
    /// Weather-O-Rama station and displays
    Observer,
    /// SimUDuck fly behaviours
    Strategy,
    /// Every demo in turn
    All,
}

impl Command {
    fn demos(self) -> Vec<Demo> {
        match self {
            Command::Decorator => vec![Demo::Decorator],
            Command::Observer => vec![Demo::Observer],
            Command::Strategy => vec![Demo::Strategy],
            Command::All => Demo::ALL.to_vec(),
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<DemoConfig> {
    match path {
        Some(path) => DemoConfig::from_file(path)
            .with_context(|| format!("failed to load scenario {}", path.display())),
        None => Ok(DemoConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let config = load_config(cli.config.as_ref())?;
    let command = cli.command.unwrap_or(Command::All);

    for demo in command.demos() {
        println!("{}", demo.title().bold().cyan());
        println!("{}", "=".repeat(40));
        for line in demo.run(&config) {
            println!("{}", line);
        }
        println!();
    }

    Ok(())
}
