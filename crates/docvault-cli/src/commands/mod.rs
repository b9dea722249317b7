//! CLI command definitions and dispatch.

pub mod migrate;
pub mod sweep;
pub mod token;

use clap::{Parser, Subcommand};

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_database::DatabasePool;

use crate::output::OutputFormat;

/// DocVault identity document vault administration
#[derive(Debug, Parser)]
#[command(name = "docvault", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay (config/{env}.toml)
    #[arg(short, long, env = "DOCVAULT_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Mint a development bearer token
    Token(token::TokenArgs),
    /// Delete long-expired share links once
    Sweep,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(&self.config, &self.env)?;
        match &self.command {
            Commands::Migrate => migrate::execute(&config).await,
            Commands::Token(args) => token::execute(args, &config, self.format).await,
            Commands::Sweep => sweep::execute(&config, self.format).await,
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str, env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path, env)
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    tracing::debug!(max_connections = config.database.max_connections, "Opening database pool");
    DatabasePool::connect(&config.database).await
}
