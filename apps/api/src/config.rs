use anyhow::{anyhow, Context, Result};

use crate::suggest::SuggestionPick;

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults suit local development.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Seed the collection with the two sample resumes at startup.
    pub seed_sample_data: bool,
    pub suggestion_pick: SuggestionPick,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            seed_sample_data: parse_bool(
                "SEED_SAMPLE_DATA",
                &std::env::var("SEED_SAMPLE_DATA").unwrap_or_else(|_| "true".to_string()),
            )?,
            suggestion_pick: std::env::var("SUGGESTION_PICK")
                .unwrap_or_else(|_| "random".to_string())
                .parse::<SuggestionPick>()
                .map_err(|e| anyhow!(e))
                .context("SUGGESTION_PICK must be 'random' or 'first'")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            seed_sample_data: true,
            suggestion_pick: SuggestionPick::Random,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("{key} must be a boolean, got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("K", "TRUE").unwrap());
        assert!(parse_bool("K", "1").unwrap());
        assert!(!parse_bool("K", "off").unwrap());
        assert!(parse_bool("K", "maybe").is_err());
    }

    #[test]
    fn test_default_config() {
        let c = Config::default();
        assert_eq!(c.port, 8080);
        assert!(c.seed_sample_data);
        assert_eq!(c.suggestion_pick, SuggestionPick::Random);
    }
}
