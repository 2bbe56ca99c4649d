//! Authentication utilities library
//!
//! Provides the credential primitives used by the headhunter service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited bearer tokens (JWT, HMAC)
//! - Validated token settings and an injectable clock
//!
//! The library performs no I/O. Looking identities up is left to the caller.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{AuthConfig, TokenCodec};
//!
//! let config = AuthConfig::new(b"secret_key_at_least_32_bytes_long!", "HS256", 30, 0).unwrap();
//! let codec = TokenCodec::new(config);
//! let issued = codec.issue("42").unwrap();
//! assert_eq!(codec.parse(&issued.access_token).unwrap(), "42");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthConfig, Authenticator};
//!
//! let config = AuthConfig::new(b"secret_key_at_least_32_bytes_long!", "HS256", 30, 0).unwrap();
//! let auth = Authenticator::new(config);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let issued = auth.authenticate("password123", &hash, "42").unwrap();
//! println!("Token: {}", issued.access_token);
//!
//! // Validate token
//! let subject = auth.validate_token(&issued.access_token).unwrap();
//! assert_eq!(subject, "42");
//! ```

pub mod authenticator;
pub mod clock;
pub mod config;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use config::AuthConfig;
pub use config::AuthConfigError;
pub use jwt::Claims;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::TokenCodec;
pub use password::PasswordError;
pub use password::PasswordHasher;
