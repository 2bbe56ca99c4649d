use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::headhunter::models::HeadhunterProfile;
use crate::headhunter::errors::AuthError;

pub mod health;
pub mod login;
pub mod me;
pub mod register;

/// Message returned for every token failure, whatever the precise cause.
pub const UNAUTHENTICATED_MESSAGE: &str = "Could not validate credentials";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        let mut response =
            (status, Json(ApiResponseBody::new_error(status, message))).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                http::header::WWW_AUTHENTICATE,
                http::HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken(_) | AuthError::Expired | AuthError::Unauthorized(_) => {
                ApiError::Unauthorized(UNAUTHENTICATED_MESSAGE.to_string())
            }
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AuthError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AuthError::Internal(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Public headhunter representation shared by register and me.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadhunterData {
    pub headhunter_id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub area_id: i64,
    pub role: String,
}

impl From<HeadhunterProfile> for HeadhunterData {
    fn from(profile: HeadhunterProfile) -> Self {
        Self {
            headhunter_id: profile.id.0,
            name: profile.name,
            phone: profile.phone,
            email: profile.email,
            area_id: profile.area_id,
            role: profile.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_share_one_response() {
        let invalid = ApiError::from(AuthError::InvalidToken("bad signature".into()));
        let expired = ApiError::from(AuthError::Expired);
        let unknown = ApiError::from(AuthError::Unauthorized("9".into()));

        assert_eq!(invalid, expired);
        assert_eq!(expired, unknown);
        assert_eq!(
            invalid,
            ApiError::Unauthorized(UNAUTHENTICATED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_internal_detail_is_not_returned() {
        let response =
            ApiError::from(AuthError::Internal("pool timed out".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_login_failures() {
        assert!(matches!(
            ApiError::from(AuthError::InvalidCredentials),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::NotFound("a@x.com".into())),
            ApiError::NotFound(_)
        ));
    }

    #[test]
    fn test_unauthorized_sets_challenge_header() {
        let response = ApiError::from(AuthError::Expired).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(http::header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
