use std::time::Duration;

use flashdeck_generation::AnthropicConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://flashcards.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `90`). Must exceed the
    /// generation timeout; see [`ServerConfig::validate`].
    pub request_timeout_secs: u64,
    /// Generation service settings.
    pub generation: AnthropicConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                      |
    /// |---------------------------|------------------------------|
    /// | `HOST`                    | `0.0.0.0`                    |
    /// | `PORT`                    | `5000`                       |
    /// | `DATABASE_URL`            | `sqlite://flashcards.db`     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`      |
    /// | `REQUEST_TIMEOUT_SECS`    | `90`                         |
    /// | `ANTHROPIC_API_KEY`       | unset                        |
    /// | `ANTHROPIC_BASE_URL`      | `https://api.anthropic.com`  |
    /// | `GENERATION_MODEL`        | `claude-sonnet-4-20250514`   |
    /// | `GENERATION_MAX_TOKENS`   | `2000`                       |
    /// | `GENERATION_CARD_COUNT`   | `10`                         |
    /// | `GENERATION_TIMEOUT_SECS` | `60`                         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://flashcards.db".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "90".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let generation = generation_from_env();

        let config = Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            generation,
        };
        config
            .validate()
            .unwrap_or_else(|e| panic!("Invalid configuration: {e}"));
        config
    }

    /// Check cross-field constraints that parsing alone cannot catch.
    ///
    /// - `GENERATION_CARD_COUNT` must be at least 1.
    /// - `REQUEST_TIMEOUT_SECS` must be strictly greater than
    ///   `GENERATION_TIMEOUT_SECS`.
    pub fn validate(&self) -> Result<(), String> {
        if self.generation.card_count == 0 {
            return Err("GENERATION_CARD_COUNT must be at least 1".to_string());
        }
        let request_timeout = Duration::from_secs(self.request_timeout_secs);
        if request_timeout <= self.generation.timeout {
            return Err(format!(
                "REQUEST_TIMEOUT_SECS ({}s) must exceed GENERATION_TIMEOUT_SECS ({}s)",
                self.request_timeout_secs,
                self.generation.timeout.as_secs()
            ));
        }
        Ok(())
    }
}

/// Whether a `LOG_FORMAT` value selects JSON log output.
pub fn is_json_log_format(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("json")
}

fn generation_from_env() -> AnthropicConfig {
    let defaults = AnthropicConfig::default();

    let api_key = std::env::var("ANTHROPIC_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());

    let base_url = std::env::var("ANTHROPIC_BASE_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or(defaults.base_url);

    let model = std::env::var("GENERATION_MODEL").unwrap_or(defaults.model);

    let max_tokens: u32 = std::env::var("GENERATION_MAX_TOKENS")
        .map(|v| v.parse().expect("GENERATION_MAX_TOKENS must be a valid u32"))
        .unwrap_or(defaults.max_tokens);

    let card_count: usize = std::env::var("GENERATION_CARD_COUNT")
        .map(|v| v.parse().expect("GENERATION_CARD_COUNT must be a valid usize"))
        .unwrap_or(defaults.card_count);

    let timeout = std::env::var("GENERATION_TIMEOUT_SECS")
        .map(|v| {
            Duration::from_secs(v.parse().expect("GENERATION_TIMEOUT_SECS must be a valid u64"))
        })
        .unwrap_or(defaults.timeout);

    AnthropicConfig {
        api_key,
        base_url,
        model,
        max_tokens,
        card_count,
        timeout,
    }
}
