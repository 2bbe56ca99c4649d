use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Argon2id with a fresh random salt per hash. The PHC output embeds the
/// algorithm, cost parameters and salt, so verification needs nothing else.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
    decoy_hash: OnceLock<String>,
}

impl PasswordHasher {
    /// Memory cost in KiB.
    pub const MEMORY_COST_KIB: u32 = 19 * 1024;
    /// Number of passes over memory.
    pub const ITERATIONS: u32 = 2;
    /// Degree of parallelism.
    pub const PARALLELISM: u32 = 1;

    /// Create a new password hasher with the default cost parameters.
    pub fn new() -> Self {
        Self {
            params: Params::new(Self::MEMORY_COST_KIB, Self::ITERATIONS, Self::PARALLELISM, None)
                .unwrap_or_default(),
            decoy_hash: OnceLock::new(),
        }
    }

    /// Create a hasher with custom cost parameters.
    ///
    /// Hashes produced with other parameters still verify, since verification
    /// reads the parameters back from the stored hash.
    ///
    /// # Errors
    /// * `InvalidParams` - Parameters are outside what Argon2 accepts
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;
        Ok(Self {
            params,
            decoy_hash: OnceLock::new(),
        })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a plaintext password securely.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// A hash that cannot be parsed is treated as a mismatch.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        self.argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Run one verification against a hash no password matches.
    ///
    /// Costs the same as a failed `verify` against a hash made by this
    /// hasher. The decoy is hashed from a random plaintext on first use.
    pub fn verify_decoy(&self, password: &str) {
        let _ = self.verify(password, self.decoy_hash());
    }

    fn decoy_hash(&self) -> &str {
        self.decoy_hash.get_or_init(|| {
            let plaintext = SaltString::generate(&mut OsRng);
            self.hash(plaintext.as_str()).unwrap_or_default()
        })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
