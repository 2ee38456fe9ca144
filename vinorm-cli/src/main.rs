//! vinorm: Vietnamese text normalization for speech synthesis

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vinorm_core::{Config, TextNormalizer};

/// Normalize Vietnamese text into its spoken form
#[derive(Debug, Parser)]
#[command(name = "vinorm", version, about)]
struct Cli {
    /// Text to normalize; reads stdin when neither this nor --input
    /// is given
    text: Option<String>,

    /// Input file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Dictionary directory (default: embedded dictionaries)
    #[arg(short, long, value_name = "DIR")]
    dictionaries: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One spoken sentence per line
    Text,
    /// JSON array of spoken sentences
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let text = read_input(&cli)?;

    let mut builder = Config::builder();
    if let Some(dir) = &cli.dictionaries {
        builder = builder.dictionary_dir(dir);
    }
    let normalizer =
        TextNormalizer::with_config(builder.build()).context("failed to initialize normalizer")?;

    log::info!("normalizing {} bytes of input", text.len());
    let sentences = normalizer.normalize(&text)?;

    match cli.format {
        OutputFormat::Text => {
            for sentence in &sentences {
                println!("{sentence}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&sentences)?);
        }
    }
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

fn init_logging(cli: &Cli) {
    if cli.quiet {
        return;
    }
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
