// src/handlers/cleaning_types.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireRole, RoleAdmin},
    models::cleaning_type::{CleaningType, CreateCleaningTypePayload, UpdateCleaningTypePayload},
};

// POST /api/cleaning-types
#[utoipa::path(
    post,
    path = "/api/cleaning-types",
    tag = "Reference",
    request_body = CreateCleaningTypePayload,
    responses(
        (status = 201, description = "Tipo de faxina criado", body = CleaningType),
        (status = 409, description = "Slug já existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_cleaning_type(
    State(app_state): State<AppState>,
    _admin: RequireRole<RoleAdmin>,
    Json(payload): Json<CreateCleaningTypePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cleaning_type = app_state
        .cleaning_type_repo
        .create(
            &app_state.db_pool,
            &payload.name,
            &payload.slug,
            payload.estimated_duration_minutes,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(cleaning_type)))
}

// GET /api/cleaning-types
// Dado de referência: qualquer autenticado pode listar.
#[utoipa::path(
    get,
    path = "/api/cleaning-types",
    tag = "Reference",
    responses(
        (status = 200, description = "Tipos de faxina", body = Vec<CleaningType>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_cleaning_types(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let types = app_state.cleaning_type_repo.list_all().await?;
    Ok((StatusCode::OK, Json(types)))
}

// PATCH /api/cleaning-types/{id}
#[utoipa::path(
    patch,
    path = "/api/cleaning-types/{id}",
    tag = "Reference",
    request_body = UpdateCleaningTypePayload,
    params(("id" = Uuid, Path, description = "ID do tipo de faxina")),
    responses(
        (status = 200, description = "Tipo atualizado", body = CleaningType),
        (status = 404, description = "Tipo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_cleaning_type(
    State(app_state): State<AppState>,
    _admin: RequireRole<RoleAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCleaningTypePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cleaning_type = app_state
        .cleaning_type_repo
        .update(
            id,
            payload.name.as_deref(),
            payload.estimated_duration_minutes,
        )
        .await?;
    Ok((StatusCode::OK, Json(cleaning_type)))
}
