mod app;
mod catalog;
mod error;
mod infra;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use catalog::source::{BirdSource, HttpBirdSource};
use error::AppError;
use infra::config::{AppConfig, SelectionPolicy};
use ui::tiles::{alt_text, image_url};

#[derive(Debug, Parser)]
#[command(name = "bird-gallery", version, about = "Browse bird pictures by category")]
struct Cli {
    /// TOML file with settings; flags below take precedence.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the image API, ending with '/'.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[arg(long, global = true, value_enum)]
    policy: Option<SelectionPolicy>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the gallery window (default).
    Ui,
    /// Print the available categories.
    Categories,
    /// Print image URLs and descriptions for one category.
    Images { category: String },
}

fn main() -> ExitCode {
    infra::logging::init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "bird-gallery failed");
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig, AppError> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config.api_base_url = base_url.clone();
    }
    if let Some(policy) = cli.policy {
        config.selection_policy = policy;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = load_config(&cli)?;
    let source: Arc<dyn BirdSource> = Arc::new(HttpBirdSource::new(&config.api_base_url)?);
    run_command(cli.command.unwrap_or(Command::Ui), &config, source)
}

fn run_command(
    command: Command,
    config: &AppConfig,
    source: Arc<dyn BirdSource>,
) -> Result<(), AppError> {
    match command {
        Command::Ui => ui::app_shell::launch_window(config, source),
        Command::Categories => {
            for category in source.fetch_categories()? {
                println!("{category}");
            }
            Ok(())
        }
        Command::Images { category } => {
            let images = source.fetch_images(&category)?;
            if images.is_empty() {
                println!("no images for {category}");
                return Ok(());
            }
            for image in &images {
                println!(
                    "{}\t{}",
                    image_url(&config.api_base_url, image),
                    alt_text(image)
                );
            }
            Ok(())
        }
    }
}
