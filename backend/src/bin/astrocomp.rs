//! AstroComp command-line binary.
//!
//! # Usage
//!
//! ```bash
//! # One command, then exit
//! astrocomp sky -58.5 -34.5 2024-11-26 11:00:00
//! astrocomp locate -58.5 -34.5 2024-11-26 11:00:00 31.50 175.63
//! astrocomp research 32349
//!
//! # Interactive prompt
//! astrocomp --config astrocomp.toml
//! ```
//!
//! # Environment Variables
//!
//! - `ASTROCOMP_CONFIG`: Config file path (default: search for `astrocomp.toml`)
//! - `ASTROCOMP_*`: Per-value overrides, see `AppConfig::apply_env_overrides`
//! - `RUST_LOG`: Log level (default: warn)

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use astrocomp::cli::{self, Command, Prompt, Session};
use astrocomp::providers::{AppConfig, ProviderFactory};

#[derive(Parser)]
#[command(name = "astrocomp")]
#[command(about = "What is above the horizon, and which star is that")]
#[command(version)]
struct Args {
    /// Configuration file (overrides ASTROCOMP_CONFIG and the default search)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Command to run once; starts the interactive prompt when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config =
        AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    let providers = ProviderFactory::from_config(&config)
        .await
        .context("Failed to set up providers")?;
    let session = Session::new(providers, config.query.clone());
    info!(
        "Catalog source '{}', details source '{}'",
        config.catalog.source, config.details.source
    );

    if args.command.is_empty() {
        run_prompt(&session).await
    } else {
        let command = cli::parse_line(&args.command.join(" "))?;
        for line in session.execute(&command).await? {
            println!("{}", line);
        }
        Ok(())
    }
}

async fn run_prompt(session: &Session) -> anyhow::Result<()> {
    println!(
        "AstroComp {}. Type 'help' for the list of commands.",
        env!("CARGO_PKG_VERSION")
    );
    let mut prompt = Prompt::new(BufReader::new(tokio::io::stdin()), std::io::stdout());

    while let Some(parsed) = prompt.read_command().await? {
        let command = match parsed {
            Ok(command) => command,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        match session.execute(&command).await {
            Ok(lines) => lines.iter().for_each(|l| println!("{}", l)),
            Err(e) => eprintln!("Error: {}", e),
        }
        if command == Command::Exit {
            break;
        }
    }
    Ok(())
}
