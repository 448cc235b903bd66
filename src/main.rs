// src/main.rs

// Modules defined in the crate
mod api;
mod config;
mod constants;
mod error;
mod fetch;
mod model;
mod persist;
mod reconcile;
mod store;
mod types;

// Specific imports
use crate::api::HeroHttpClient;
use crate::config::{Command, CommandLineInput, StoreConfig};
use crate::error::AppError;
use crate::model::HeroContent;
use crate::store::HeroStore;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("herosync.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Wires the HTTP client into a store and dispatches the requested command.
async fn run_command(cli: &CommandLineInput, config: StoreConfig) -> Result<(), AppError> {
    let client = Arc::new(HeroHttpClient::new(
        config.base_url.clone(),
        &config.api_key,
    )?);
    let store = HeroStore::new(client.clone(), client, config.clone());

    match &cli.command {
        Command::Show => {
            store.load_content().await;
            if let Some(error) = store.error().await {
                log::warn!("Load incomplete: {}", error);
            }
            let content = store.hero_content().await;
            let json = serde_json::to_string_pretty(&content)?;
            println!("{}", json);
        }
        Command::Push { file } => {
            store.load_content().await;
            let raw = fs::read_to_string(file)?;
            let edited: HeroContent = serde_json::from_str(&raw).map_err(|e| {
                AppError::JsonParseError {
                    path: file.clone(),
                    source: e,
                }
            })?;
            store.update_section_content(&config.section, edited).await;
            store.save_changes().await?;
            println!("✓ Hero content pushed to both backends.");
        }
        Command::Toggle { visible } => {
            store.load_content().await;
            store.set_visibility(*visible).await;
            store.save_changes().await?;
            println!(
                "✓ Hero section is now {}.",
                if *visible { "visible" } else { "hidden" }
            );
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = StoreConfig::resolve(&cli)?;

    run_command(&cli, config).await?;

    Ok(())
}
