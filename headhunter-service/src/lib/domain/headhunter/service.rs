use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::headhunter::models::AccessToken;
use crate::domain::headhunter::models::Headhunter;
use crate::domain::headhunter::models::HeadhunterId;
use crate::domain::headhunter::models::HeadhunterProfile;
use crate::domain::headhunter::models::LoginCommand;
use crate::domain::headhunter::models::NewHeadhunter;
use crate::domain::headhunter::models::RegisterCommand;
use crate::headhunter::errors::AuthError;
use crate::headhunter::ports::AuthServicePort;
use crate::headhunter::ports::HeadhunterDirectory;

/// Registration, login and token resolution for headhunters.
///
/// Stateless apart from the injected directory and authenticator; every
/// call is independent and nothing is retried.
pub struct AuthService<D>
where
    D: HeadhunterDirectory,
{
    directory: Arc<D>,
    authenticator: Arc<Authenticator>,
}

impl<D> AuthService<D>
where
    D: HeadhunterDirectory,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - Headhunter lookup and persistence
    /// * `authenticator` - Password hashing and token handling
    pub fn new(directory: Arc<D>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            directory,
            authenticator,
        }
    }

    /// Run password work on the blocking thread pool.
    async fn with_authenticator<T, F>(&self, f: F) -> Result<T, AuthError>
    where
        F: FnOnce(&Authenticator) -> T + Send + 'static,
        T: Send + 'static,
    {
        let authenticator = Arc::clone(&self.authenticator);
        tokio::task::spawn_blocking(move || f(&authenticator))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password task did not complete");
                AuthError::Internal(format!("password task failed: {}", e))
            })
    }
}

#[async_trait]
impl<D> AuthServicePort for AuthService<D>
where
    D: HeadhunterDirectory,
{
    async fn register(&self, command: RegisterCommand) -> Result<HeadhunterProfile, AuthError> {
        let password = command.password;
        let password_hash = self
            .with_authenticator(move |authenticator| authenticator.hash_password(password.expose()))
            .await?
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed during registration");
                AuthError::from(e)
            })?;

        let new_headhunter = NewHeadhunter {
            name: command.name,
            phone: command.phone,
            email: command.email,
            password_hash,
            role: command.role,
            area_id: command.area_id,
        };

        let created = self.directory.create(new_headhunter).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create headhunter");
            AuthError::from(e)
        })?;

        let profile = HeadhunterProfile::from_headhunter(&created).ok_or_else(|| {
            tracing::error!(email = %created.email, "Headhunter creation returned no identifier");
            AuthError::Internal("creation did not yield an identifier".to_string())
        })?;

        tracing::info!(headhunter_id = %profile.id, "Headhunter registered");

        Ok(profile)
    }

    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError> {
        let LoginCommand { email, password } = command;
        let email = email.trim().to_string();

        let Some(headhunter) = self.directory.find_by_email(&email).await? else {
            // Same Argon2 cost as a wrong password
            self.with_authenticator(move |authenticator| authenticator.verify_decoy(&password))
                .await?;
            tracing::warn!(email = %email, "Login for unknown email");
            return Err(AuthError::NotFound(email));
        };

        let id = headhunter.id.ok_or_else(|| {
            tracing::error!(email = %email, "Stored headhunter has no identifier");
            AuthError::Internal("stored headhunter has no identifier".to_string())
        })?;

        let stored_hash = headhunter.password_hash;
        let subject = id.to_string();
        let issued = self
            .with_authenticator(move |authenticator| {
                authenticator.authenticate(&password, &stored_hash, &subject)
            })
            .await?
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(headhunter_id = %id, "Invalid password");
                    AuthError::InvalidCredentials
                }
                AuthenticationError::JwtError(err) => {
                    tracing::error!(error = %err, "Token issuance failed");
                    AuthError::from(err)
                }
            })?;

        tracing::info!(headhunter_id = %id, expires_at = %issued.expires_at, "Token issued");

        Ok(issued.into())
    }

    async fn current_identity(&self, token: &str) -> Result<Headhunter, AuthError> {
        let subject = self.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Token rejected");
            AuthError::from(e)
        })?;

        let id = HeadhunterId::from_string(&subject).map_err(|e| {
            tracing::warn!(error = %e, "Token subject is not a headhunter identifier");
            AuthError::from(e)
        })?;

        self.directory.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(headhunter_id = %id, "Token subject has no headhunter record");
            AuthError::Unauthorized(id.to_string())
        })
    }
}
