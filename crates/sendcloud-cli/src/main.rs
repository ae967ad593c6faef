/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Sendcloud API responses on stdout, downloaded documents on disk
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or subcommands
*/

mod commands;
mod config;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sendcloud_client::SendcloudClient;

use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "sendcloud", version, about = "Sendcloud shipping API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Call an endpoint and print the response
    Request {
        /// GET, POST, PUT or DELETE
        method: String,
        /// Endpoint path, e.g. /api/v2/parcels
        endpoint: String,
        /// Payload entry as key=value; repeatable
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
        /// JSON object payload
        #[arg(long)]
        body: Option<String>,
    },
    /// Save a label or document PDF
    Download {
        url: String,
        #[arg(long, value_name = "PATH")]
        output: PathBuf,
    },
    /// Verify a webhook body against its Sendcloud-Signature value
    VerifyWebhook {
        /// Signing secret; falls back to the configured one
        #[arg(long)]
        secret: Option<String>,
        #[arg(long)]
        signature: String,
        #[arg(long = "body-file", value_name = "PATH")]
        body_file: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    match args.command {
        Command::Request {
            method,
            endpoint,
            params,
            body,
        } => {
            let client = build_client(&load_config(args.config_path.as_ref())?)?;
            commands::request(&client, &method, &endpoint, &params, body.as_deref())
        }
        Command::Download { url, output } => {
            let client = build_client(&load_config(args.config_path.as_ref())?)?;
            commands::download(&client, &url, &output)
        }
        Command::VerifyWebhook {
            secret,
            signature,
            body_file,
        } => {
            let secret = match secret {
                Some(secret) => secret,
                None => load_config(args.config_path.as_ref())?
                    .webhook_secret()
                    .to_string(),
            };
            commands::verify_webhook(&secret, &signature, &body_file)
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    let path = path.context("--config is required for this command")?;
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    let config = CliConfig::from_file(path_str).context("load config")?;
    info!(config_path = %path.display(), api_host = %config.client.api_host, "configuration loaded");
    Ok(config)
}

fn build_client(config: &CliConfig) -> Result<SendcloudClient> {
    SendcloudClient::with_config(config.credentials(), config.client.clone())
        .context("create client")
}
