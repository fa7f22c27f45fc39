//! Command-line host for the social federation modules.
//!
//! ```text
//! federation-cli --config federation.yaml providers
//! federation-cli --config federation.yaml authenticate --provider twitter --provider-user-id u1
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod apis;
mod commands;
mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands::SignIn;
use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "federation-cli", version, about = "Social federation host")]
struct Cli {
    /// YAML configuration file; `FEDERATION_*` variables override it.
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List registered providers with their API type and protocol.
    Providers,
    /// Resolve an external account to a local user.
    Authenticate {
        #[arg(long = "provider")]
        provider_id: String,
        #[arg(long)]
        provider_user_id: String,
        /// Access token already obtained from the provider.
        #[arg(long, default_value = "cli")]
        access_token: String,
        /// Token secret, required by OAuth 1 providers.
        #[arg(long)]
        secret: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = match AppConfig::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&cfg.logging) {
        eprintln!("failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(cli.command, &cfg).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Command failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, cfg: &AppConfig) -> anyhow::Result<ExitCode> {
    match command {
        Command::Providers => {
            for line in commands::providers(cfg)? {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Authenticate {
            provider_id,
            provider_user_id,
            access_token,
            secret,
        } => {
            let sign_in = SignIn {
                provider_id,
                provider_user_id,
                access_token,
                secret,
            };
            match commands::authenticate(cfg, sign_in).await? {
                Ok(token) => {
                    if let Some(principal) = token.principal() {
                        println!(
                            "{}\t{}\t{}",
                            principal.user_id,
                            principal.username,
                            principal.authorities.join(",")
                        );
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    if e.is_authentication_denied() {
                        tracing::warn!(error = %e, "Authentication denied");
                    } else {
                        tracing::error!(error = %e, "Authentication failed");
                    }
                    eprintln!("{e}");
                    Ok(ExitCode::from(commands::exit_code(&e)))
                }
            }
        }
    }
}
