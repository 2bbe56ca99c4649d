use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::headhunter::errors::AreaIdError;
use crate::headhunter::errors::EmailError;
use crate::headhunter::errors::HeadhunterIdError;
use crate::headhunter::errors::NameError;
use crate::headhunter::errors::PasswordPolicyError;
use crate::headhunter::errors::PhoneError;
use crate::headhunter::errors::RoleError;

/// Headhunter aggregate as held by the directory.
///
/// `id` is `None` only for a record the directory failed to key.
#[derive(Clone)]
pub struct Headhunter {
    pub id: Option<HeadhunterId>,
    pub name: Name,
    pub phone: Phone,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub area_id: AreaId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Debug for Headhunter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Headhunter")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("area_id", &self.area_id)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Record submitted to the directory on registration.
#[derive(Clone)]
pub struct NewHeadhunter {
    pub name: Name,
    pub phone: Phone,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub area_id: AreaId,
}

impl fmt::Debug for NewHeadhunter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewHeadhunter")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("area_id", &self.area_id)
            .finish()
    }
}

/// Public projection of a headhunter. Carries no secret material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadhunterProfile {
    pub id: HeadhunterId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub area_id: i64,
    pub role: String,
}

impl HeadhunterProfile {
    /// Project a stored record, which must have been assigned an identifier.
    pub fn from_headhunter(headhunter: &Headhunter) -> Option<Self> {
        headhunter.id.map(|id| Self {
            id,
            name: headhunter.name.as_str().to_string(),
            phone: headhunter.phone.as_str().to_string(),
            email: headhunter.email.as_str().to_string(),
            area_id: headhunter.area_id.value(),
            role: headhunter.role.as_str().to_string(),
        })
    }
}

/// Headhunter unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeadhunterId(pub i64);

impl HeadhunterId {
    /// Parse an identifier from its decimal string form (the token subject).
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a positive integer
    pub fn from_string(s: &str) -> Result<Self, HeadhunterIdError> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(HeadhunterIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for HeadhunterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name, 1-255 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    const MAX_LENGTH: usize = 255;

    pub fn new(name: String) -> Result<Self, NameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();
        if length == 0 {
            Err(NameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number, 10-20 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    const MIN_LENGTH: usize = 10;
    const MAX_LENGTH: usize = 20;

    /// Create a new valid phone number.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 10 characters
    /// * `TooLong` - More than 20 characters
    pub fn new(phone: String) -> Result<Self, PhoneError> {
        let phone = phone.trim().to_string();
        let length = phone.chars().count();
        if length < Self::MIN_LENGTH {
            Err(PhoneError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(PhoneError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(phone))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_string();
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Free-form role label carried into the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role(String);

impl Role {
    pub const DEFAULT: &'static str = "HEADHUNTER";
    const MAX_LENGTH: usize = 50;

    /// Create a role; a blank label falls back to [`Role::DEFAULT`].
    pub fn new(role: String) -> Result<Self, RoleError> {
        let role = role.trim().to_string();
        if role.is_empty() {
            return Ok(Self::default());
        }

        let length = role.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(RoleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(role))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Role {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

/// Reference to the area a headhunter works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaId(i64);

impl AreaId {
    pub fn new(id: i64) -> Result<Self, AreaIdError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(AreaIdError::NotPositive(id))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Plaintext password accepted for registration, 8-255 characters.
///
/// Only lives for the duration of the request; `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 255;

    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(PasswordPolicyError::TooLong {
                max: Self::MAX_LENGTH,
            })
        } else {
            Ok(Self(password))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to register a new headhunter with domain types
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub name: Name,
    pub phone: Phone,
    pub email: EmailAddress,
    pub password: Password,
    pub area_id: AreaId,
    pub role: Role,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(
        name: Name,
        phone: Phone,
        email: EmailAddress,
        password: Password,
        area_id: AreaId,
        role: Role,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            password,
            area_id,
            role,
        }
    }
}

/// Credentials exchanged for a token.
#[derive(Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: DateTime<Utc>,
}

impl From<auth::IssuedToken> for AccessToken {
    fn from(issued: auth::IssuedToken) -> Self {
        Self {
            access_token: issued.access_token,
            token_type: issued.token_type.to_string(),
            expires_in: issued.expires_in,
            expires_at: issued.expires_at,
        }
    }
}
