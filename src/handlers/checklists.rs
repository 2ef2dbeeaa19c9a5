// src/handlers/checklists.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireRole, RoleAdmin},
    models::checklist::{ChecklistTemplate, CreateChecklistPayload, UpdateChecklistPayload},
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ChecklistListParams {
    pub cleaning_type: Option<Uuid>,
}

// POST /api/checklists
#[utoipa::path(
    post,
    path = "/api/checklists",
    tag = "Reference",
    request_body = CreateChecklistPayload,
    responses(
        (status = 201, description = "Checklist criado", body = ChecklistTemplate),
        (status = 404, description = "Tipo de faxina não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_checklist(
    State(app_state): State<AppState>,
    _admin: RequireRole<RoleAdmin>,
    Json(payload): Json<CreateChecklistPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // O vínculo com o tipo precisa existir antes do insert.
    app_state
        .cleaning_type_repo
        .find_by_id(payload.cleaning_type_id)
        .await?
        .ok_or(AppError::CleaningTypeNotFound)?;

    let template = app_state
        .checklist_repo
        .create(
            &app_state.db_pool,
            &payload.name,
            payload.cleaning_type_id,
            &payload.items,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(template)))
}

// GET /api/checklists?cleaningType=...
#[utoipa::path(
    get,
    path = "/api/checklists",
    tag = "Reference",
    params(ChecklistListParams),
    responses(
        (status = 200, description = "Modelos de checklist", body = Vec<ChecklistTemplate>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_checklists(
    State(app_state): State<AppState>,
    Query(params): Query<ChecklistListParams>,
) -> Result<impl IntoResponse, AppError> {
    let templates = match params.cleaning_type {
        Some(cleaning_type_id) => {
            app_state
                .checklist_repo
                .list_by_cleaning_type(cleaning_type_id)
                .await?
        }
        None => app_state.checklist_repo.list_all().await?,
    };
    Ok((StatusCode::OK, Json(templates)))
}

// PATCH /api/checklists/{id}
#[utoipa::path(
    patch,
    path = "/api/checklists/{id}",
    tag = "Reference",
    request_body = UpdateChecklistPayload,
    params(("id" = Uuid, Path, description = "ID do checklist")),
    responses(
        (status = 200, description = "Checklist atualizado", body = ChecklistTemplate),
        (status = 404, description = "Checklist não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_checklist(
    State(app_state): State<AppState>,
    _admin: RequireRole<RoleAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateChecklistPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let template = app_state
        .checklist_repo
        .update(id, payload.name.as_deref(), payload.items.as_deref())
        .await?;
    Ok((StatusCode::OK, Json(template)))
}
