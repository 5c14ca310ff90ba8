//! simplebot — run the canned-reply demo, or chat with the bot on stdin.

mod chat;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use simplebot_core::config::Config;
use simplebot_core::replies::DEMO_MESSAGES;
use simplebot_core::transcript::Transcript;

/// A tiny phrase-matching chat bot.
#[derive(Parser, Debug)]
#[command(name = "simplebot", version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Path to config.yaml (missing path means defaults).
    #[arg(long, global = true, default_value = "config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Feed the fixed demo messages and print the transcript (default).
    Demo {
        /// Print the transcript as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Chat interactively; type "退出" to quit.
    Chat,
}

/// Missing config is fine; a broken one is reported and ignored.
fn load_config(path: &Path) -> Config {
    match Config::load_or_default(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring config {}: {:#}", path.display(), e);
            Config::default()
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());

    // Stdout carries the transcript, so logs go to stderr or the configured file.
    match config
        .log_file
        .as_ref()
        .map(|p| std::fs::OpenOptions::new().create(true).append(true).open(p))
    {
        Some(Ok(file)) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init();
        }
        other => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
            if let Some(Err(e)) = other {
                warn!("Could not open log file, logging to stderr: {}", e);
            }
        }
    }
}

fn run_demo(config: &Config, json: bool) -> Result<()> {
    let responder = config.build_responder();
    let transcript = Transcript::run(&responder, DEMO_MESSAGES);

    let mut stdout = io::stdout().lock();
    if json {
        let text = serde_json::to_string_pretty(&transcript.to_json())?;
        writeln!(stdout, "{}", text)?;
    } else {
        write!(stdout, "{}", transcript.render())?;
    }
    stdout.flush().context("Failed to write transcript")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config);
    init_tracing(&config);

    info!("Starting {} with {} extra replies", config.name, config.extra_replies.len());

    match cli.command.unwrap_or(Command::Demo { json: false }) {
        Command::Demo { json } => run_demo(&config, json),
        Command::Chat => {
            let responder = config.build_responder();
            info!("Chatting with {} known triggers", responder.len());
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            chat::run_chat(&responder, stdin, &mut stdout)?;
            Ok(())
        }
    }
}
