//! Development token minting.

use chrono::Duration;
use clap::Args;
use serde_json::json;
use uuid::Uuid;

use docvault_auth::JwtEncoder;
use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_core::types::{Role, UserId};
use docvault_database::ProfileStore;
use docvault_database::repositories::ProfileRepository;

use crate::output::{self, OutputFormat};

/// Arguments for the token command
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Account ID to put in the `sub` claim
    #[arg(long)]
    pub user: Uuid,

    /// E-mail claim
    #[arg(long)]
    pub email: Option<String>,

    /// Token lifetime in minutes (defaults to auth.dev_token_ttl_minutes)
    #[arg(long)]
    pub ttl_minutes: Option<i64>,

    /// Also create or update the account's profile with this role
    #[arg(long, value_parser = ["user", "admin"], requires = "email")]
    pub register: Option<String>,
}

/// Mint a token signed with `auth.jwt_secret`.
pub async fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let user_id = UserId::from_uuid(args.user);
    let ttl_minutes = args
        .ttl_minutes
        .unwrap_or(config.auth.dev_token_ttl_minutes as i64);
    let ttl = Duration::try_minutes(ttl_minutes)
        .filter(|ttl| *ttl > Duration::zero())
        .ok_or_else(|| AppError::validation("--ttl-minutes must be a positive number of minutes"))?;

    if let (Some(role), Some(email)) = (&args.register, &args.email) {
        let role: Role = role.parse()?;
        let pool = super::create_db_pool(config).await?;
        ProfileRepository::new(pool.pool().clone())
            .upsert(&user_id, email, None, role)
            .await?;
        pool.close().await;
        output::print_success(&format!("Profile {user_id} registered as {role}."));
    }

    let (token, expires_at) = JwtEncoder::new(&config.auth).generate(
        user_id,
        args.email.as_deref(),
        ttl,
    )?;

    match format {
        OutputFormat::Json => output::print_json(&json!({
            "user_id": user_id,
            "token": token,
            "expires_at": expires_at,
        })),
        OutputFormat::Text => {
            output::print_kv("user_id", &user_id.to_string());
            output::print_kv("expires_at", &expires_at.to_rfc3339());
            println!("{token}");
        }
    }
    Ok(())
}
