use std::path::PathBuf;

use anyhow::Context;
use board_contract::{shape, ContractConfig, ResourceKind};
use clap::Parser;
use serde_json::Value;
use tokio::io::AsyncReadExt;

/// Check JSON payloads against the board's record shapes.
#[derive(Debug, Parser)]
#[command(name = "board-contract", version)]
struct Cli {
    /// users, posts or comments
    kind: ResourceKind,
    /// JSON file with one object or an array of objects; stdin when omitted
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "board_contract=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let cfg = ContractConfig::from_env()?;

    let input = match &cli.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("read stdin")?;
            buf
        }
    };

    let payload: Value = serde_json::from_str(&input).context("input is not JSON")?;

    tracing::info!(kind = %cli.kind, "checking payload");
    let results = shape::check_payload(cli.kind, payload);
    for line in shape::report_lines(cli.kind, &cfg, &results) {
        println!("{line}");
    }

    let failed = shape::failed_count(&results);
    if failed > 0 {
        anyhow::bail!("{failed} item(s) do not match the {} shape", cli.kind);
    }
    Ok(())
}
