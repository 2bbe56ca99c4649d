use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Error raised when token settings cannot be turned into a usable configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthConfigError {
    #[error("Unsupported signing algorithm: {0} (expected one of HS256, HS384, HS512)")]
    UnsupportedAlgorithm(String),

    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Token time-to-live must be a positive number of minutes, got {0}")]
    InvalidTtl(i64),

    #[error("Clock leeway must not be negative, got {0}")]
    InvalidLeeway(i64),
}

/// Immutable token settings shared by every request.
///
/// Built once at startup. Only symmetric HMAC algorithms are accepted, so a
/// misconfigured algorithm is rejected here rather than on the first login.
#[derive(Clone)]
pub struct AuthConfig {
    secret: Vec<u8>,
    algorithm: Algorithm,
    ttl_minutes: i64,
    leeway_seconds: i64,
}

impl AuthConfig {
    /// Validate raw settings.
    ///
    /// # Arguments
    /// * `secret` - Shared HMAC secret
    /// * `algorithm` - Algorithm identifier such as `"HS256"`
    /// * `ttl_minutes` - Lifetime of issued tokens
    /// * `leeway_seconds` - Allowed clock skew when checking expiry
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Unknown or asymmetric algorithm
    /// * `EmptySecret` - Secret is empty
    /// * `InvalidTtl` - Time-to-live is zero or negative
    /// * `InvalidLeeway` - Leeway is negative
    pub fn new(
        secret: impl AsRef<[u8]>,
        algorithm: &str,
        ttl_minutes: i64,
        leeway_seconds: i64,
    ) -> Result<Self, AuthConfigError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(AuthConfigError::EmptySecret);
        }
        if ttl_minutes <= 0 {
            return Err(AuthConfigError::InvalidTtl(ttl_minutes));
        }
        if leeway_seconds < 0 {
            return Err(AuthConfigError::InvalidLeeway(leeway_seconds));
        }

        Ok(Self {
            secret: secret.to_vec(),
            algorithm: parse_symmetric_algorithm(algorithm)?,
            ttl_minutes,
            leeway_seconds,
        })
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn ttl_minutes(&self) -> i64 {
        self.ttl_minutes
    }

    pub fn ttl(&self) -> Duration {
        Duration::minutes(self.ttl_minutes)
    }

    pub fn leeway_seconds(&self) -> i64 {
        self.leeway_seconds
    }
}

// Keep the secret out of debug output.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("ttl_minutes", &self.ttl_minutes)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

fn parse_symmetric_algorithm(algorithm: &str) -> Result<Algorithm, AuthConfigError> {
    let unsupported = || AuthConfigError::UnsupportedAlgorithm(algorithm.to_string());

    match Algorithm::from_str(algorithm.trim()).map_err(|_| unsupported())? {
        alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) => Ok(alg),
        _ => Err(unsupported()),
    }
}
