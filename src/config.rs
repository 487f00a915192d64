use anyhow::{Context, Result, bail};
use std::env;

/// Runtime settings, read once at startup.
///
/// Everything the server needs from the environment lives here so the rest of the
/// app never touches `std::env` directly. Build it in `main`, hand the pieces out.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub database_url: String,
}

pub const DEFAULT_PORT: u16 = 3200;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://movies.db";

impl Config {
    /// Reads `PORT`, `JWT_SECRET` and `DATABASE_URL` from the process environment.
    ///
    /// A missing secret is fatal. We'd rather refuse to boot than sign tokens with
    /// an empty key and find out from the first login.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) if !secret.trim().is_empty() => secret,
            _ => bail!("JWT_SECRET must be set"),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            port,
            jwt_secret,
            database_url,
        })
    }
}
