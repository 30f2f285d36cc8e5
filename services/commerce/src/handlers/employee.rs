use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tradepost_domain::business::EmployeeRole;
use tradepost_domain::pagination::PageRequest;

use crate::domain::types::EmployeeMembership;
use crate::error::CommerceServiceError;
use crate::extract::CurrentUser;
use crate::state::AppState;
use crate::usecase::employee::{
    AddEmployeeInput, AddEmployeeUseCase, ListEmployeesUseCase, RemoveEmployeeUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub business_id: Uuid,
    pub user_id: String,
    pub role: EmployeeRole,
    #[serde(serialize_with = "tradepost_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<EmployeeMembership> for EmployeeResponse {
    fn from(m: EmployeeMembership) -> Self {
        Self {
            id: m.id,
            business_id: m.business_id,
            user_id: m.user_id,
            role: m.role,
            created_at: m.created_at,
        }
    }
}

// ── GET /businesses/{id}/employees ───────────────────────────────────────────

pub async fn list_employees(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<EmployeeResponse>>, CommerceServiceError> {
    let usecase = ListEmployeesUseCase {
        policy: state.policy(),
    };
    let employees = usecase.execute(&user.user_id, business_id, page).await?;
    Ok(Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

// ── POST /businesses/{id}/employees ──────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEmployeeRequest {
    pub user_id: String,
    pub role: Option<EmployeeRole>,
}

pub async fn add_employee(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
    Json(body): Json<AddEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), CommerceServiceError> {
    let usecase = AddEmployeeUseCase {
        policy: state.policy(),
        users: state.user_repo(),
    };
    let membership = usecase
        .execute(
            &user.user_id,
            business_id,
            AddEmployeeInput {
                user_id: body.user_id,
                role: body.role.unwrap_or_default(),
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(membership.into())))
}

// ── DELETE /businesses/{id}/employees/{user_id} ──────────────────────────────

pub async fn remove_employee(
    user: CurrentUser,
    State(state): State<AppState>,
    Path((business_id, employee_user_id)): Path<(Uuid, String)>,
) -> Result<StatusCode, CommerceServiceError> {
    let usecase = RemoveEmployeeUseCase {
        policy: state.policy(),
    };
    usecase
        .execute(&user.user_id, business_id, &employee_user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
