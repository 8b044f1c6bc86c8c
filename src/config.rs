use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://backoffice.db?mode=rwc";

/// Process settings, read from the environment after `.env` is loaded.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("APP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid APP_PORT {raw:?}: {e}"))?,
            Err(_) => 3000,
        };
        let jwt_secret = env::var("JWT_SECRET").ok().filter(|s| !s.is_empty());

        if jwt_secret.is_none() {
            tracing::warn!("JWT_SECRET is not set; authenticated requests will be rejected");
        }

        Ok(Self {
            database_url,
            host,
            port,
            jwt_secret,
        })
    }
}
