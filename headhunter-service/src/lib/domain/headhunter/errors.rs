use thiserror::Error;

/// Error for HeadhunterId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HeadhunterIdError {
    #[error("Invalid headhunter identifier: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Phone too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Phone too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Role too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AreaIdError {
    #[error("Area identifier must be positive, got {0}")]
    NotPositive(i64),
}

/// Password rejected before hashing. Never echoes the password itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password too long: maximum {max} characters")]
    TooLong { max: usize },
}

/// Failures reported by a headhunter directory implementation.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("Email already registered: {0}")]
    Conflict(String),

    #[error("Stored record is invalid: {0}")]
    CorruptRecord(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Outcome of every authentication operation that did not succeed.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Bad signature, malformed token, missing or unusable subject.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token has expired")]
    Expired,

    /// Token verified but its subject has no directory record.
    #[error("No headhunter for token subject {0}")]
    Unauthorized(String),

    #[error("Headhunter with email '{0}' not found")]
    NotFound(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Whether the caller should only ever see "unauthenticated".
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken(_) | AuthError::Expired | AuthError::Unauthorized(_)
        )
    }
}

impl From<DirectoryError> for AuthError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Conflict(email) => AuthError::EmailAlreadyExists(email),
            DirectoryError::CorruptRecord(_) | DirectoryError::DatabaseError(_) => {
                AuthError::Internal(err.to_string())
            }
        }
    }
}

impl From<auth::JwtError> for AuthError {
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::TokenExpired => AuthError::Expired,
            auth::JwtError::InvalidToken(_) | auth::JwtError::MissingClaim(_) => {
                AuthError::InvalidToken(err.to_string())
            }
            auth::JwtError::EncodingFailed(_) => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<auth::PasswordError> for AuthError {
    fn from(err: auth::PasswordError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<HeadhunterIdError> for AuthError {
    fn from(err: HeadhunterIdError) -> Self {
        AuthError::InvalidToken(err.to_string())
    }
}
