use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::headhunter::models::Headhunter;
use crate::domain::headhunter::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::UNAUTHENTICATED_MESSAGE;
use crate::inbound::http::router::AppState;

/// Extension type carrying the headhunter resolved from the bearer token
#[derive(Debug, Clone)]
pub struct CurrentHeadhunter(pub Headhunter);

/// Middleware that resolves the bearer token to a headhunter and adds it to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?.to_owned();

    let headhunter = state
        .auth_service
        .current_identity(&token)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    req.extensions_mut().insert(CurrentHeadhunter(headhunter));

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let unauthenticated = |reason: &str| {
        tracing::warn!(reason, "Rejected Authorization header");
        ApiError::Unauthorized(UNAUTHENTICATED_MESSAGE.to_string()).into_response()
    };

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthenticated("missing"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthenticated("not visible ASCII"))?;

    let (scheme, token) = auth_str
        .split_once(' ')
        .ok_or_else(|| unauthenticated("no scheme"))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(unauthenticated("scheme is not Bearer"));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(unauthenticated("empty token"));
    }

    Ok(token)
}
