use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tradepost_domain::business::BusinessCategory;
use tradepost_domain::pagination::PageRequest;

use crate::domain::repository::BusinessChanges;
use crate::domain::types::Business;
use crate::error::CommerceServiceError;
use crate::extract::CurrentUser;
use crate::state::AppState;
use crate::usecase::business::{
    CreateBusinessInput, CreateBusinessUseCase, DeleteBusinessUseCase, GetBusinessUseCase,
    ListBusinessesUseCase, RegenerateApiKeyUseCase, UpdateBusinessUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessResponse {
    pub id: Uuid,
    pub name: String,
    pub category: BusinessCategory,
    pub owner_id: String,
    /// Present only when the requester owns the business.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub is_active: bool,
    #[serde(serialize_with = "tradepost_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "tradepost_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl BusinessResponse {
    fn from_business(business: Business, requester_id: &str) -> Self {
        let is_owner = business.owner_id == requester_id;
        Self {
            id: business.id,
            name: business.name,
            category: business.category,
            owner_id: business.owner_id,
            api_key: if is_owner { business.api_key } else { None },
            is_active: business.is_active,
            created_at: business.created_at,
            updated_at: business.updated_at,
        }
    }
}

// ── GET /businesses ──────────────────────────────────────────────────────────

pub async fn list_businesses(
    user: CurrentUser,
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<BusinessResponse>>, CommerceServiceError> {
    let usecase = ListBusinessesUseCase {
        businesses: state.business_repo(),
    };
    let businesses = usecase.execute(&user.user_id, page).await?;
    Ok(Json(
        businesses
            .into_iter()
            .map(|b| BusinessResponse::from_business(b, &user.user_id))
            .collect(),
    ))
}

// ── POST /businesses ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessRequest {
    pub name: String,
    pub category: BusinessCategory,
}

pub async fn create_business(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(body): Json<CreateBusinessRequest>,
) -> Result<(StatusCode, Json<BusinessResponse>), CommerceServiceError> {
    let usecase = CreateBusinessUseCase {
        businesses: state.business_repo(),
    };
    let business = usecase
        .execute(
            &user.user_id,
            CreateBusinessInput {
                name: body.name,
                category: body.category,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(BusinessResponse::from_business(business, &user.user_id)),
    ))
}

// ── GET /businesses/{id} ─────────────────────────────────────────────────────

pub async fn get_business(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
) -> Result<Json<BusinessResponse>, CommerceServiceError> {
    let usecase = GetBusinessUseCase {
        policy: state.policy(),
    };
    let business = usecase.execute(&user.user_id, business_id).await?;
    Ok(Json(BusinessResponse::from_business(
        business,
        &user.user_id,
    )))
}

// ── PATCH /businesses/{id} ───────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusinessRequest {
    pub name: Option<String>,
    pub category: Option<BusinessCategory>,
    pub is_active: Option<bool>,
}

pub async fn update_business(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
    Json(body): Json<UpdateBusinessRequest>,
) -> Result<StatusCode, CommerceServiceError> {
    let usecase = UpdateBusinessUseCase {
        policy: state.policy(),
    };
    usecase
        .execute(
            &user.user_id,
            business_id,
            BusinessChanges {
                name: body.name,
                category: body.category,
                is_active: body.is_active,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /businesses/{id} ──────────────────────────────────────────────────

pub async fn delete_business(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
) -> Result<StatusCode, CommerceServiceError> {
    let usecase = DeleteBusinessUseCase {
        policy: state.policy(),
    };
    usecase.execute(&user.user_id, business_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /businesses/{id}/api-key ────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    pub api_key: String,
}

pub async fn regenerate_api_key(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
) -> Result<Json<ApiKeyResponse>, CommerceServiceError> {
    let usecase = RegenerateApiKeyUseCase {
        policy: state.policy(),
    };
    let api_key = usecase.execute(&user.user_id, business_id).await?;
    Ok(Json(ApiKeyResponse { api_key }))
}
