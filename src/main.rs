//! textsum is a CLI tool that reads a text file and prints a concise summary
//! produced by an LLM completion service.
//!
//! The credential is taken from `OPENAI_API_KEY`, either exported or placed in
//! a `.env` file in the working directory.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, info};

use textsum::{
    SummarizerConfig, config::load_dotenv, constants::DEFAULT_MODEL, load_text, summarize,
    write_summary,
};

/// Summarize a text file using an LLM completion service
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the UTF-8 text file to summarize
    input_file: PathBuf,

    /// Model identifier to request from the completion service
    #[arg(long, short, default_value = DEFAULT_MODEL)]
    model: String,

    /// OpenAI-compatible API base URL (default: the provider's own)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (default: no limit)
    #[arg(long, short)]
    timeout: Option<u64>,

    /// Reject input longer than this many characters (default: no limit)
    #[arg(long)]
    max_chars: Option<usize>,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", default_value_t = 1)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    load_dotenv();

    let text = load_text(&cli.input_file, cli.max_chars)?;
    info!("Loaded input from {}", cli.input_file.display());

    let config = SummarizerConfig::from_env(Some(&cli.model))?
        .with_base_url(cli.base_url)
        .with_timeout_seconds(cli.timeout);

    let summary = summarize(&config, &text).await?;

    write_summary(&mut io::stdout().lock(), &summary)?;
    Ok(())
}
