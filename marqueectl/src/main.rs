use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use marquee_config::{
    Config, ConfigLoad, ConfigLoader, ConfigLoaderOptions, ConfigWarnings,
};
use marqueectl::bootstrap::{build_catalog, init_tracing, report_warnings};
use marqueectl::{Replayer, parse_script};
use tracing::info;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "marqueectl", version)]
#[command(about = "Inspect Marquee configuration and replay catalog scripts")]
struct Cli {
    /// Path to marquee.toml (overrides MARQUEE_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// .env file to load before reading the environment
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved configuration and any warnings
    Config,
    /// Replay a JSON-lines script against an in-process catalog
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Script to replay; media paths resolve against its directory
    script: PathBuf,

    /// Print one JSON summary instead of a line per step
    #[arg(long)]
    summary: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let ConfigLoad { config, warnings } =
        ConfigLoader::with_options(ConfigLoaderOptions {
            config_path: cli.config.clone(),
            env_file: cli.env_file.clone(),
        })
        .load()
        .context("failed to load configuration")?;

    init_tracing(&config.logging.filter);
    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    report_warnings(&warnings);

    match cli.command {
        Command::Config => print_config(&config, &warnings),
        Command::Replay(args) => replay(&config, args).await,
    }
}

fn print_config(
    config: &Config,
    warnings: &ConfigWarnings,
) -> anyhow::Result<()> {
    match &config.metadata.config_path {
        Some(path) => println!("# source: {}", path.display()),
        None => println!("# source: environment and defaults"),
    }
    let rendered = toml::to_string_pretty(config)
        .context("failed to render configuration")?;
    print!("{rendered}");
    for warning in &warnings.items {
        println!("# warning: {}", warning.message);
        if let Some(hint) = &warning.hint {
            println!("#   hint: {hint}");
        }
    }
    Ok(())
}

async fn replay(config: &Config, args: ReplayArgs) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(&args.script)
        .await
        .with_context(|| {
            format!("failed to read script {}", args.script.display())
        })?;
    let script = parse_script(&text)?;
    let base_dir = args
        .script
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let catalog = build_catalog(config).await?;
    let mut replayer = Replayer::new(catalog, base_dir);
    let summary = replayer.run(&script).await;

    if args.summary {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for step in &summary.steps {
            println!("{}", serde_json::to_string(step)?);
        }
    }

    if !summary.is_success() {
        bail!(
            "{} of {} replay steps failed",
            summary.failures(),
            summary.steps.len()
        );
    }
    Ok(())
}
