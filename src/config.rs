use std::env;

use anyhow::Context;
use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use password_hash::rand_core::OsRng;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub upload_dir: String,
    pub admin_username: String,
    /// Argon2 PHC string for the single admin account.
    pub admin_password_hash: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://storefront.db?mode=rwc".to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "static/uploads".to_string());
        let admin_username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_password_hash = admin_password_hash_from_env()?;
        Ok(Self {
            database_url,
            host,
            port,
            upload_dir,
            admin_username,
            admin_password_hash,
        })
    }
}

/// Prefer a precomputed ADMIN_PASSWORD_HASH; fall back to hashing
/// ADMIN_PASSWORD once at startup. One of the two must be set.
fn admin_password_hash_from_env() -> anyhow::Result<String> {
    if let Ok(hash) = env::var("ADMIN_PASSWORD_HASH") {
        return Ok(hash);
    }
    let password =
        env::var("ADMIN_PASSWORD").context("set ADMIN_PASSWORD_HASH or ADMIN_PASSWORD")?;
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();
    Ok(hash)
}
