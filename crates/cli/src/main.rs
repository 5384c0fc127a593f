use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tripane_catalog::StaticCatalog;
use tripane_core::{Config, LoggingConfig, logging::sanitize_path};
use tripane_ui::{App, Navigator, StatusMessage, TerminalWindow};

/// Tripane - a keyboard-driven three-pane launcher
#[derive(Parser, Debug)]
#[command(name = "tripane")]
#[command(about = "Pick an item, an action and a target, then run it", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to tripane.toml (default: ./tripane.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the navigator
    Start,
    /// Show configuration and catalog summary
    Status,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from("tripane.toml"));
    let config = load_or_create_config(&config_path)?;

    if cli.verbose {
        println!("{} Using config: {}", "Info:".blue().bold(), config_path.display());
    }

    match cli.command {
        Commands::Start => cmd_start(config, cli.verbose)?,
        Commands::Status => cmd_status(&config, cli.verbose)?,
    }

    Ok(())
}

/// Load config from file or create from example
fn load_or_create_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::from_file(path).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    } else {
        println!("{} Config not found at {}", "Warning:".yellow().bold(), path.display());
        println!("{} Creating config from example...", "Info:".blue().bold());

        std::fs::write(path, Config::example()).context("Failed to create config")?;

        println!(
            "{} Created config at {}. Point [catalog] path at your catalog file.",
            "Success:".green().bold(),
            path.display()
        );

        anyhow::bail!("Please edit {} and run again", path.display())
    }
}

fn load_catalog(config: &Config) -> Result<StaticCatalog> {
    StaticCatalog::from_file(&config.catalog.path)
        .with_context(|| format!("Failed to load catalog {}", sanitize_path(&config.catalog.path)))
}

/// Open the navigator in the terminal
fn cmd_start(config: Config, verbose: bool) -> Result<()> {
    let logging = LoggingConfig::from_section(&config.logging).context("Invalid logging settings")?;
    let log_dir = logging.file_dir.clone();
    let _guard = tripane_core::init_logging(logging, true).context("Failed to initialize logging")?;

    let catalog = load_catalog(&config)?;
    if verbose {
        println!(
            "{} Catalog: {} items, {} actions",
            "Info:".blue().bold(),
            catalog.item_count().to_string().cyan(),
            catalog.action_count().to_string().cyan()
        );
        if let Some(dir) = &log_dir {
            println!("{} Logging to {}", "Info:".blue().bold(), sanitize_path(dir));
        }
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    let status = runtime.block_on(async {
        let navigator = Navigator::from_config(&config.cache);
        let mut app =
            App::new(navigator, Arc::new(catalog), Box::new(TerminalWindow::new()), config.navigator.after_execute);
        tripane_ui::app::run(&mut app).await?;
        Ok::<_, std::io::Error>(app.status().cloned())
    })?;

    match status {
        Some(StatusMessage::Executed { action }) => println!("{} ran {}", "Success:".green().bold(), action.cyan()),
        Some(StatusMessage::Failed { message }) => println!("{} {}", "Warning:".yellow().bold(), message),
        None => {}
    }

    Ok(())
}

/// Show configuration and catalog summary
fn cmd_status(config: &Config, verbose: bool) -> Result<()> {
    println!("{}", "Tripane Status".green().bold().underline());
    println!();

    println!("{} Configuration", "Info:".blue().bold());
    println!("  Catalog: {}", sanitize_path(&config.catalog.path).cyan());
    println!("  After execute: {}", config.navigator.after_execute.as_str().cyan());
    println!("  Cache stale after: {} ms", config.cache.stale_after_ms.to_string().cyan());

    if verbose {
        println!("  Log level: {}", config.logging.level.cyan());
        println!("  Log format: {}", config.logging.format.cyan());
        println!("  File logging: {}", config.logging.file.enabled.to_string().cyan());
    }

    println!();
    let catalog = load_catalog(config)?;
    println!("{} Catalog", "Info:".blue().bold());
    println!("  Items: {}", catalog.item_count().to_string().cyan());
    println!("  Actions: {}", catalog.action_count().to_string().cyan());

    Ok(())
}
