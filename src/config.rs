// src/config.rs
use crate::constants;
use crate::error::AppError;
use crate::types::{ApiKey, LanguageCode, SectionId, ValidatedUrl};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Base URL of the content backend (e.g., "https://api.example.com")
    #[arg(long, env = "HEROSYNC_BASE_URL")]
    pub base_url: String,

    /// Section identifier to reconcile
    #[arg(long, default_value = constants::HERO_SECTION_ID)]
    pub section: String,

    /// Language code for writes
    #[arg(long, default_value = constants::DEFAULT_LANGUAGE)]
    pub language: String,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch and print the canonical hero content as JSON
    Show,
    /// Push an edited hero content file through the store
    Push {
        /// Path to a JSON file containing the edited canonical content
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Toggle the hero section's visibility
    Toggle {
        /// Whether the section should be visible
        #[arg(long)]
        visible: bool,
    },
}

/// Resolved store configuration — validated and ready to drive the
/// reconciliation layer.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: ValidatedUrl,
    pub api_key: ApiKey,
    pub section: SectionId,
    pub language: LanguageCode,
    /// Debounce window after a content edit before autosaving.
    pub content_debounce: Duration,
    /// Debounce window after a visibility toggle before autosaving.
    pub visibility_debounce: Duration,
}

impl StoreConfig {
    /// Resolves a complete store configuration from CLI input and environment.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        let api_key_str = std::env::var("HEROSYNC_API_KEY").map_err(|_| {
            AppError::MissingConfiguration(
                "HEROSYNC_API_KEY environment variable not set".to_string(),
            )
        })?;

        Ok(StoreConfig {
            base_url: ValidatedUrl::parse(&cli.base_url)?,
            api_key: ApiKey::new(api_key_str)?,
            section: SectionId::new(cli.section.clone())?,
            language: LanguageCode::new(cli.language.clone())?,
            content_debounce: Duration::from_millis(constants::CONTENT_AUTOSAVE_DEBOUNCE_MS),
            visibility_debounce: Duration::from_millis(constants::VISIBILITY_AUTOSAVE_DEBOUNCE_MS),
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: ValidatedUrl::parse("https://api.example.com")
                .expect("default base URL is valid"),
            api_key: ApiKey::new("hsk_default_key_for_testing")
                .expect("default API key is valid"),
            section: SectionId::new(constants::HERO_SECTION_ID)
                .expect("hero section constant is valid"),
            language: LanguageCode::new(constants::DEFAULT_LANGUAGE)
                .expect("default language constant is valid"),
            content_debounce: Duration::from_millis(constants::CONTENT_AUTOSAVE_DEBOUNCE_MS),
            visibility_debounce: Duration::from_millis(constants::VISIBILITY_AUTOSAVE_DEBOUNCE_MS),
        }
    }
}
