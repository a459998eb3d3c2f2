use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or a value is out of range.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub max_body_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

/// Everything the chat-completion client needs to reach the upstream model.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    pub max_attempts: u32,
}

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };
        let or_default = |key: &str, default: &str| -> String {
            lookup(key).unwrap_or_else(|| default.to_string())
        };

        let temperature = or_default("LLM_TEMPERATURE", "0.7")
            .parse::<f32>()
            .context("LLM_TEMPERATURE must be a number")?;
        if !(0.0..=2.0).contains(&temperature) {
            bail!("LLM_TEMPERATURE must be between 0.0 and 2.0, got {temperature}");
        }

        let max_tokens = or_default("LLM_MAX_TOKENS", "1024")
            .parse::<u32>()
            .context("LLM_MAX_TOKENS must be a positive integer")?;
        if max_tokens == 0 {
            bail!("LLM_MAX_TOKENS must be greater than zero");
        }

        let max_attempts = or_default("LLM_MAX_ATTEMPTS", "1")
            .parse::<u32>()
            .context("LLM_MAX_ATTEMPTS must be a positive integer")?;
        if max_attempts == 0 {
            bail!("LLM_MAX_ATTEMPTS must be at least 1");
        }

        let llm = LlmSettings {
            api_key: require("LLM_API_KEY")?,
            base_url: or_default("LLM_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            model: or_default("LLM_MODEL", DEFAULT_MODEL),
            temperature,
            max_tokens,
            timeout_secs: or_default("LLM_TIMEOUT_SECS", "60")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            max_attempts,
        };

        Ok(Config {
            llm,
            max_body_bytes: or_default("MAX_BODY_BYTES", "65536")
                .parse::<usize>()
                .context("MAX_BODY_BYTES must be a byte count")?,
            port: or_default("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: or_default("RUST_LOG", "info"),
        })
    }
}
