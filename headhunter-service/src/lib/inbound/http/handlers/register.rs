use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::HeadhunterData;
use crate::domain::headhunter::models::AreaId;
use crate::domain::headhunter::models::EmailAddress;
use crate::domain::headhunter::models::Name;
use crate::domain::headhunter::models::Password;
use crate::domain::headhunter::models::Phone;
use crate::domain::headhunter::models::RegisterCommand;
use crate::domain::headhunter::models::Role;
use crate::domain::headhunter::ports::AuthServicePort;
use crate::headhunter::errors::AreaIdError;
use crate::headhunter::errors::EmailError;
use crate::headhunter::errors::NameError;
use crate::headhunter::errors::PasswordPolicyError;
use crate::headhunter::errors::PhoneError;
use crate::headhunter::errors::RoleError;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<HeadhunterData>, ApiError> {
    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|profile| ApiSuccess::new(StatusCode::CREATED, profile.into()))
}

/// HTTP request body for registering a headhunter (raw JSON)
#[derive(Clone, Deserialize)]
pub struct RegisterRequest {
    name: String,
    phone: String,
    email: String,
    password: String,
    area_id: i64,
    #[serde(default)]
    role: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] NameError),

    #[error("Invalid phone: {0}")]
    Phone(#[from] PhoneError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),

    #[error("Invalid area: {0}")]
    AreaId(#[from] AreaIdError),

    #[error("Invalid role: {0}")]
    Role(#[from] RoleError),
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ParseRegisterRequestError> {
        let name = Name::new(self.name)?;
        let phone = Phone::new(self.phone)?;
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        let area_id = AreaId::new(self.area_id)?;
        let role = Role::new(self.role.unwrap_or_default())?;
        Ok(RegisterCommand::new(
            name, phone, email, password, area_id, role,
        ))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
