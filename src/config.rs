use std::env;

/// Deploy-time settings, read from the environment.
/// Site content itself lives in `site.rs` and is not configurable at runtime.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Serve inactive socials/skills from the listing endpoints by default.
    /// Individual requests can still override with `?include_inactive=`.
    pub expose_inactive: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            expose_inactive: env::var("EXPOSE_INACTIVE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so env mutation cannot race the parallel test runner
    #[test]
    fn from_env_defaults_and_fallbacks() {
        std::env::remove_var("PORT");
        std::env::remove_var("EXPOSE_INACTIVE");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert!(!config.expose_inactive);

        std::env::set_var("PORT", "3000");
        std::env::set_var("EXPOSE_INACTIVE", "true");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.expose_inactive);

        // Garbage flag falls back to false instead of failing startup
        std::env::set_var("EXPOSE_INACTIVE", "not-a-bool");
        let config = Config::from_env().unwrap();
        assert!(!config.expose_inactive);

        std::env::remove_var("PORT");
        std::env::remove_var("EXPOSE_INACTIVE");
    }
}
