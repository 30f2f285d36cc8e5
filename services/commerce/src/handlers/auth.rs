use axum::{Json, extract::State};
use serde::Serialize;

use tradepost_domain::business::UserRole;

use crate::domain::repository::UserRepository;
use crate::error::CommerceServiceError;
use crate::extract::CurrentUser;
use crate::state::AppState;

// ── GET /auth/user ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: Option<String>,
    pub role: UserRole,
    #[serde(serialize_with = "tradepost_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "tradepost_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Mirrored profile of the authenticated user. The extractor has already
/// refreshed the mirror within the cache TTL window.
pub async fn get_current_user(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, CommerceServiceError> {
    let profile = state
        .user_repo()
        .find_by_id(&user.user_id)
        .await?
        .ok_or(CommerceServiceError::UserNotFound)?;
    Ok(Json(UserResponse {
        id: profile.id,
        email: profile.email,
        first_name: profile.first_name,
        last_name: profile.last_name,
        profile_image_url: profile.profile_image_url,
        role: profile.role,
        created_at: profile.created_at,
        updated_at: profile.updated_at,
    }))
}
