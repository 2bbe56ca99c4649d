use std::sync::Arc;

use crate::clock::Clock;
use crate::config::AuthConfig;
use crate::jwt::IssuedToken;
use crate::jwt::JwtError;
use crate::jwt::TokenCodec;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator using the system clock.
    ///
    /// # Arguments
    /// * `config` - Validated token settings
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(config: AuthConfig) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(config),
        }
    }

    /// Create an authenticator reading time from `clock`.
    pub fn with_clock(config: AuthConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::with_clock(config, clock),
        }
    }

    /// Replace the password hasher (e.g. cheaper parameters in tests).
    pub fn with_password_hasher(mut self, password_hasher: PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Spend one failed verification when there is no stored hash to check.
    pub fn verify_decoy(&self, password: &str) {
        self.password_hasher.verify_decoy(password)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier to embed in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<IssuedToken, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_codec.issue(subject)?)
    }

    /// Validate a token and return its subject.
    ///
    /// # Errors
    /// * `JwtError` - Token validation failed
    pub fn validate_token(&self, token: &str) -> Result<String, JwtError> {
        self.token_codec.parse(token)
    }
}
