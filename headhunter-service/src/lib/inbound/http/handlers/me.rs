use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::HeadhunterData;
use crate::domain::headhunter::models::HeadhunterProfile;
use crate::inbound::http::middleware::CurrentHeadhunter;

pub async fn me(
    Extension(CurrentHeadhunter(headhunter)): Extension<CurrentHeadhunter>,
) -> Result<ApiSuccess<HeadhunterData>, ApiError> {
    HeadhunterProfile::from_headhunter(&headhunter)
        .map(|profile| ApiSuccess::new(StatusCode::OK, profile.into()))
        .ok_or_else(|| ApiError::NotFound("Headhunter not found".to_string()))
}
