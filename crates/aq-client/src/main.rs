//! aq - Acquire identity service client
//!
//! # Examples
//!
//! ```bash
//! # Ask the identity service to open a login session
//! aq login request chryswoods
//!
//! # Print results on stdout instead of the log
//! aq --output stdout --pretty login request chryswoods
//!
//! # Call any function on the identity service
//! aq call get_status --args '{}'
//! ```

mod cli;
mod commands;
mod login_commands;

use crate::{cli::Cli, commands::Commands, login_commands::LoginCommands};

use aq_client::{
    AcquireIdentityFactory, LogOutput, LoginProbe, LoginUrl, ProbeOutput, ServiceClient,
    StdoutOutput, logger,
};
use aq_config::{Config, OutputMode};

use std::error::Error;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info, warn};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Starting aq v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let service_url = cli
        .service
        .clone()
        .unwrap_or_else(|| config.service.identity_url());

    let client = match ServiceClient::with_timeout(
        &service_url,
        Duration::from_secs(config.service.timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create service client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = cli.output.unwrap_or(config.probe.output);
    let pretty = cli.pretty || config.probe.pretty;

    match cli.command {
        Commands::Login { action } => match action {
            LoginCommands::Request { username } => {
                let Some(username) = username.or_else(|| config.probe.username.clone()) else {
                    eprintln!("Error: no username given and probe.username is not configured");
                    return ExitCode::FAILURE;
                };

                let factory = AcquireIdentityFactory::new(client)
                    .with_login_message(config.probe.login_message.clone());

                match output {
                    OutputMode::Log => request_login(factory, LogOutput, &username).await,
                    OutputMode::Stdout => {
                        request_login(factory, StdoutOutput::new(pretty), &username).await
                    }
                }
            }
        },
        Commands::Call { function, args } => call(&client, &function, args.as_deref(), pretty).await,
    }
}

/// Load and validate configuration, then start logging.
fn load_config() -> Result<Config, Box<dyn Error>> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(ref path) = log_file
        && let Some(dir) = path.parent()
    {
        std::fs::create_dir_all(dir)?;
    }

    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    Ok(config)
}

async fn request_login<O: ProbeOutput>(
    factory: AcquireIdentityFactory,
    output: O,
    username: &str,
) -> ExitCode {
    let probe = LoginProbe::new(factory, output);

    match probe.run(username).await {
        Ok(result) => {
            if let Some(url) = result
                .payload()
                .and_then(|payload| payload.login_url())
                .and_then(LoginUrl::parse)
            {
                info!(
                    "Login session '{}' is waiting for authentication at {}",
                    url.short_uid, url.identity_service
                );
            }

            if result.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("Login probe failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn call(client: &ServiceClient, function: &str, args: Option<&str>, pretty: bool) -> ExitCode {
    let args: Value = match args {
        Some(raw) => match serde_json::from_str(raw) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("Error parsing --args: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Value::Object(Default::default()),
    };

    let value = match client.call_function(function, args).await {
        Ok(Some(value)) => value,
        Ok(None) => {
            warn!("'{function}' returned no value");
            Value::Null
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
