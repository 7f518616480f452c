use std::io;
use std::process::ExitCode;
use token_issuer::config::{Config, ConfigError, USAGE};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the tokens
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "generate_jwt=warn,token_issuer=warn,common=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match Config::from_env_args() {
        Ok(config) => config,
        Err(ConfigError::MissingSecret) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    debug!(roles = ?config.roles, "Configuration loaded");

    let mut stdout = io::stdout().lock();
    match token_issuer::run(&config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
