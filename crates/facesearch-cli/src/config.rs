/// CLI configuration, loaded from environment variables.
pub struct Config {
    /// Minimum blended confidence for a reported match.
    pub threshold: f32,
}

impl Config {
    /// Load configuration from `FACESEARCH_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self {
            threshold: env_f32(
                "FACESEARCH_THRESHOLD",
                facesearch_core::DEFAULT_MATCH_THRESHOLD,
            ),
        }
    }
}

fn env_f32(key: &str, default: f32) -> f32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
