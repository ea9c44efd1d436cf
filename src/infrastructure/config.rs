use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_SESSION_TTL_SECS: u64 = 1800;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub port: u16,
    pub static_dir: String,
    pub cors_allowed_origins: Vec<String>,
    pub session_ttl: Duration,
    /// Fixed RNG seed for reproducible recommendations
    pub recommendation_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Malformed numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let session_ttl_secs = lookup("SESSION_TTL_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SESSION_TTL_SECS);

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            static_dir: lookup("STATIC_DIR")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            session_ttl: Duration::from_secs(session_ttl_secs),
            recommendation_seed: lookup("RECOMMENDATION_SEED").and_then(|s| s.parse().ok()),
        }
    }
}
