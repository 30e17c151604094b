/*
[INPUT]:  CLI arguments, YAML configuration file, stored session
[OUTPUT]: Running portal TUI or interactive sign-in/sign-out flow
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or tracing setup
*/

use std::path::PathBuf;
use std::sync::{Arc, Mutex as StdMutex};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskdesk_client::PortalClient;
use taskdesk_tui::PortalConfig;

mod cli;
mod session;
mod tui;

use crate::tui::{run_tui, LogBuffer, LogBufferHandle, LogWriterFactory, LOG_BUFFER_CAPACITY};

#[derive(Parser, Debug)]
#[command(name = "taskdesk", version, about = "Employee task portal terminal client")]
struct Cli {
    /// Optional YAML configuration file
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Override the backend origin from the configuration
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Validate configuration and exit without starting the TUI
    #[arg(long = "check-config")]
    check_config: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in interactively and store the session
    Login,
    /// End the stored session
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = load_config(&args)?;

    if args.check_config {
        init_tracing(&args.log_level, None)?;
        PortalClient::with_config(config.client_config(), &config.base_url)
            .map_err(|err| anyhow!("invalid configuration: {err}"))?;
        info!(base_url = %config.base_url, "configuration validated");
        return Ok(());
    }

    match args.command {
        Some(Command::Login) => {
            init_tracing(&args.log_level, None)?;
            cli::login::run_login(&config).await
        }
        Some(Command::Logout) => {
            init_tracing(&args.log_level, None)?;
            cli::login::run_logout(&config).await
        }
        None => {
            // Inside the TUI the subscriber writes into a ring buffer
            // rendered on the Logs tab instead of stdout.
            let log_buffer: LogBufferHandle =
                Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
            init_tracing(
                &args.log_level,
                Some(LogWriterFactory::new(log_buffer.clone())),
            )?;
            run_tui(config, log_buffer).await
        }
    }
}

fn load_config(args: &Cli) -> Result<PortalConfig> {
    let mut config = match args.config_path.as_ref() {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            PortalConfig::from_file(path_str).context("load config")?
        }
        None => PortalConfig::default(),
    };
    if let Some(base_url) = args.base_url.clone() {
        config.base_url = base_url;
    }
    Ok(config)
}

fn init_tracing(log_level: &str, writer: Option<LogWriterFactory>) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let result = match writer {
        Some(factory) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(factory)
            .try_init(),
        None => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };
    result
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
