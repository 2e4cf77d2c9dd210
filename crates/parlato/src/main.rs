//! Local skill runner.
//!
//! Mirrors one platform event invocation: reads a request envelope
//! JSON from a file or stdin, dispatches it through the skill, and
//! prints the platform response envelope JSON.

use clap::Parser;
use parlato::{Skill, UnconfiguredRelay};
use parlato_core::{RequestEnvelope, ResponseEnvelope, SkillConfig, init_telemetry};
use parlato_models::{CompletionClient, ImageClient};
use parlato_social::SlackRelay;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// Dispatch one voice-platform request envelope.
#[derive(Parser, Debug)]
#[command(name = "parlato", version, about)]
struct Cli {
    /// Path to the request envelope JSON; stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_telemetry();

    let cli = Cli::parse();
    let config = SkillConfig::from_env()?;

    let relay: Arc<dyn parlato_core::ChatRelay> = match SlackRelay::new(&config) {
        Ok(relay) => Arc::new(relay),
        Err(e) => {
            tracing::warn!(error = %e, "Chat relay disabled");
            Arc::new(UnconfiguredRelay)
        }
    };

    let skill = Skill::with_default_handlers(
        &config,
        Arc::new(CompletionClient::new(&config)),
        Arc::new(ImageClient::new(&config)),
        relay,
    );

    let raw = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let envelope: RequestEnvelope = serde_json::from_str(&raw)?;
    let response = skill.handle_request(&envelope).await;

    println!(
        "{}",
        serde_json::to_string_pretty(&ResponseEnvelope::from(&response))?
    );
    Ok(())
}
