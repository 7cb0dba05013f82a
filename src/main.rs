//! Portfolio Server
//!
//! Main entry point: parses the command line, loads configuration,
//! initializes logging and dispatches to the selected command.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use portfolio_auth::PasswordHasher;
use portfolio_core::config::AppConfig;
use portfolio_core::error::AppError;

/// Portfolio content API server.
#[derive(Debug, Parser)]
#[command(name = "portfolio-server", version, about)]
struct Cli {
    /// Configuration overlay to load from `config/{env}.toml`.
    #[arg(long, global = true, env = "PORTFOLIO_ENV", default_value = "development")]
    env: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP server (default).
    Serve,
    /// Apply SQL migrations to the configured PostgreSQL database and exit.
    Migrate,
    /// Print an Argon2id hash for use as an owner or maintainer password.
    HashPassword {
        /// Plain-text password to hash.
        password: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(Commands::HashPassword { password }) = &cli.command {
        match PasswordHasher::new().hash_password(password) {
            Ok(hash) => println!("{hash}"),
            Err(e) => {
                eprintln!("Failed to hash password: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut config = match load_configuration(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    ensure_signing_secret(&mut config);

    let result = match cli.command {
        Some(Commands::Migrate) => migrate(&config).await,
        _ => portfolio_api::run_server(config).await,
    };

    if let Err(e) = result {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration(env: &str) -> Result<AppConfig, AppError> {
    let config = AppConfig::load(env)?;
    tracing::debug!(env, "Configuration loaded");
    Ok(config)
}

/// Replace an empty signing secret with a random per-process one.
///
/// Tokens then stop verifying on every restart.
fn ensure_signing_secret(config: &mut AppConfig) {
    if config.auth.jwt_secret.is_empty() {
        config.auth.jwt_secret = uuid::Uuid::new_v4().simple().to_string();
        tracing::warn!("auth.jwt_secret is not set; using a random secret for this process");
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Run database migrations and exit.
async fn migrate(config: &AppConfig) -> Result<(), AppError> {
    let pool = portfolio_database::DatabasePool::connect(&config.database).await?;
    let version = portfolio_database::migration::run_migrations(pool.pool()).await?;

    for (collection, count) in pool.collection_sizes().await? {
        tracing::info!(collection = %collection, documents = count, "Collection ready");
    }
    tracing::info!(schema_version = ?version, "Migration finished");
    Ok(())
}
