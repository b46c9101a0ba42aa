//! Application configuration loading

use config::{Config, ConfigError, Environment};

use ic_shared::config::AppConfig;

/// Load configuration from the environment.
///
/// Variables use the `IC_` prefix with `__` as the section separator, e.g.
/// `IC_SERVER__PORT=9000` or `IC_DATABASE__URL=mysql://...`. Anything
/// unset falls back to the defaults in [`AppConfig`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(Environment::with_prefix("IC").separator("__"))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load_without_environment() {
        let config = load_config().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.rate_limit.resend_cooldown_seconds, 60);
        assert_eq!(config.email.provider, "mock");
    }
}
