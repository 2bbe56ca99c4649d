use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::headhunter::models::AccessToken;
use crate::domain::headhunter::models::LoginCommand;
use crate::domain::headhunter::ports::AuthServicePort;
use crate::headhunter::errors::AuthError;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "Email and password are required".to_string(),
        ));
    }

    let command = LoginCommand {
        email: body.email,
        password: body.password,
    };

    state
        .auth_service
        .login(command)
        .await
        .map_err(|e| match e {
            AuthError::NotFound(_) if state.conceal_unknown_email => {
                ApiError::from(AuthError::InvalidCredentials)
            }
            _ => ApiError::from(e),
        })
        .map(|token| ApiSuccess::new(StatusCode::OK, token.into()))
}

#[derive(Clone, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: DateTime<Utc>,
}

impl From<AccessToken> for LoginResponseData {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            expires_at: token.expires_at,
        }
    }
}
