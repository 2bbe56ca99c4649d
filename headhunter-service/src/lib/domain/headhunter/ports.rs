use async_trait::async_trait;

use crate::domain::headhunter::models::AccessToken;
use crate::domain::headhunter::models::Headhunter;
use crate::domain::headhunter::models::HeadhunterId;
use crate::domain::headhunter::models::HeadhunterProfile;
use crate::domain::headhunter::models::LoginCommand;
use crate::domain::headhunter::models::NewHeadhunter;
use crate::domain::headhunter::models::RegisterCommand;
use crate::headhunter::errors::AuthError;
use crate::headhunter::errors::DirectoryError;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Create a headhunter account.
    ///
    /// # Arguments
    /// * `command` - Validated registration fields including the plaintext password
    ///
    /// # Returns
    /// Public profile of the created headhunter
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Internal` - Hashing failed, the directory failed, or no identifier was assigned
    async fn register(&self, command: RegisterCommand) -> Result<HeadhunterProfile, AuthError>;

    /// Exchange email and password for an access token.
    ///
    /// # Errors
    /// * `NotFound` - No headhunter with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `Internal` - Directory or token signing failure
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError>;

    /// Resolve the headhunter a bearer token was issued to.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, badly signed or lacks a subject
    /// * `Expired` - Token is past its expiry
    /// * `Unauthorized` - Subject has no directory record
    /// * `Internal` - Directory failure
    async fn current_identity(&self, token: &str) -> Result<Headhunter, AuthError>;
}

/// Lookup and creation of headhunter records.
#[async_trait]
pub trait HeadhunterDirectory: Send + Sync + 'static {
    /// Persist a new headhunter.
    ///
    /// # Returns
    /// Stored record, normally with an assigned identifier
    ///
    /// # Errors
    /// * `Conflict` - Email is already registered
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, headhunter: NewHeadhunter) -> Result<Headhunter, DirectoryError>;

    /// Retrieve a headhunter by identifier.
    ///
    /// # Returns
    /// Optional record (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_id(&self, id: HeadhunterId) -> Result<Option<Headhunter>, DirectoryError>;

    /// Retrieve a headhunter by email address.
    ///
    /// # Returns
    /// Optional record (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Headhunter>, DirectoryError>;
}
