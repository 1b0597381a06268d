//! SmartVision - text and vision utility toolkit
//!
//! CLI surface for the text utilities (summarizer, keyword highlighter)
//! and the translation client. The live detection pipeline is a library
//! feature driven by embedding applications that supply camera,
//! detection, OCR, and speech providers.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use smartvision::config::{self, AppConfig};
use smartvision::text;
use smartvision::translate::{language_name, TranslateClient, SUPPORTED_LANGUAGES};

/// SmartVision - text and vision utilities
#[derive(Parser, Debug)]
#[command(name = "smartvision")]
#[command(about = "Text summarization, keyword highlighting, and translation utilities")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Produce an extractive summary of the input text
    Summarize {
        /// Input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Highlight every occurrence of a keyword in the input text
    Highlight {
        /// Keyword to search for (case-insensitive, literal)
        #[arg(short, long)]
        keyword: String,
        /// Input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print the plain text with highlight markers removed
        #[arg(long)]
        strip: bool,
    },
    /// Translate the input text via the configured endpoint chain
    Translate {
        /// Target language code (defaults to the configured target)
        #[arg(short, long)]
        target: Option<String>,
        /// Input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// List supported translation languages
    Languages,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let config = load_or_create_config();

    match args.command {
        Command::Summarize { input } => {
            let original = read_input(input)?;
            let summary = text::summarize(&original)?;
            let percent = summary.len() * 100 / original.len().max(1);
            println!("{}", summary);
            eprintln!("Reduced to {}% of original length", percent);
        }
        Command::Highlight {
            keyword,
            input,
            strip,
        } => {
            let original = read_input(input)?;
            let result = text::highlight(&original, &keyword)?;
            if strip {
                println!("{}", text::strip_markup(&result.annotated));
            } else {
                println!("{}", result.annotated);
            }
            eprintln!("Found {} occurrence(s) of \"{}\"", result.matches, keyword);
        }
        Command::Translate { target, input } => {
            let original = read_input(input)?;
            let target = target.unwrap_or_else(|| config.translate.default_target.clone());
            let client = TranslateClient::with_endpoints(config.translate.endpoints.clone());
            let translated = client.translate(&original, &target).await?;
            println!("{}", translated);
            if let Some(name) = language_name(&target) {
                eprintln!("Translated to {}", name);
            }
        }
        Command::Languages => {
            for (code, name) in SUPPORTED_LANGUAGES {
                println!("{:4} {}", code, name);
            }
        }
    }

    Ok(())
}

/// Load configuration from file or create default
fn load_or_create_config() -> AppConfig {
    if let Ok(config_dir) = config::get_config_dir() {
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            if let Ok(config) = config::load_config(&config_path) {
                info!("Loaded configuration from {:?}", config_path);
                return config;
            }
        }
    }
    info!("Using default configuration");
    AppConfig::default()
}

/// Read the input text from a file or stdin
fn read_input(path: Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file {:?}", path)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
