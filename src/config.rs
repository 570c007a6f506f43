use anyhow::Context;
use axum::http::HeaderValue;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Sent verbatim as `Access-Control-Allow-Origin` on every response.
    pub allowed_origin: HeaderValue,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("ALLOWED_ORIGIN").ok(),
        )
    }

    fn from_vars(port: Option<String>, allowed_origin: Option<String>) -> anyhow::Result<Self> {
        let port = match port.filter(|p| !p.is_empty()) {
            Some(p) => p.parse().context("PORT must be a valid number")?,
            None => DEFAULT_PORT,
        };
        let allowed_origin = allowed_origin
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());

        Ok(Self {
            port,
            allowed_origin: HeaderValue::from_str(&allowed_origin)
                .context("ALLOWED_ORIGIN must be a valid header value")?,
        })
    }
}
