use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Single token lifetime for login and registration alike.
    pub ttl_days: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        // No fallback secret: a deployment that signs tokens with a default
        // value must refuse to start instead.
        let secret = std::env::var("JWT_SECRET")
            .context("JWT_SECRET must be set, refusing to start without one")?;
        if secret.trim().is_empty() {
            anyhow::bail!("JWT_SECRET is empty, refusing to start without one");
        }

        let ttl_days = std::env::var("TOKEN_TTL_DAYS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(7);

        Ok(Self {
            database_url,
            jwt: JwtConfig { secret, ttl_days },
        })
    }
}
