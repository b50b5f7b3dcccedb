use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for a multipart upload (résumé + job description).
    pub max_upload_bytes: usize,
    /// Drop stop words from the similarity axis as well as from keywords.
    pub similarity_ignore_stop_words: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            similarity_ignore_stop_words: parse_bool(&env_or(
                "SIMILARITY_IGNORE_STOP_WORDS",
                "false",
            ))
            .context("SIMILARITY_IGNORE_STOP_WORDS must be true or false")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool(" YES ").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("false").unwrap());
        assert!(!parse_bool("Off").unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        assert!(parse_bool("maybe").is_err());
        assert!(parse_bool("").is_err());
    }
}
