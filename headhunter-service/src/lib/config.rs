use std::env;

use auth::AuthConfig;
use auth::AuthConfigError;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Raw token settings as read from files and environment.
#[derive(Deserialize, Clone)]
pub struct AuthSettings {
    pub secret: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_expire_minutes")]
    pub access_token_expire_minutes: i64,
    /// Allowed clock skew when checking token expiry
    #[serde(default)]
    pub leeway_seconds: i64,
    /// Answer a login for an unknown email like a wrong password
    #[serde(default)]
    pub conceal_unknown_email: bool,
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_expire_minutes() -> i64 {
    30
}

impl AuthSettings {
    /// Validate into the immutable configuration used by the token codec.
    ///
    /// # Errors
    /// * `AuthConfigError` - Unsupported algorithm, empty secret or bad durations
    pub fn to_auth_config(&self) -> Result<AuthConfig, AuthConfigError> {
        AuthConfig::new(
            self.secret.as_bytes(),
            &self.algorithm,
            self.access_token_expire_minutes,
            self.leeway_seconds,
        )
    }
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field(
                "access_token_expire_minutes",
                &self.access_token_expire_minutes,
            )
            .field("leeway_seconds", &self.leeway_seconds)
            .field("conceal_unknown_email", &self.conceal_unknown_email)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, AUTH__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: AUTH__SECRET=... overrides auth.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}
