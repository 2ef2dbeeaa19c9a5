// src/handlers/cleanings.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        auth::AuthenticatedProfile,
        rbac::{RequireRole, RoleCleaner},
    },
    models::cleaning::{
        Cleaning, CleaningFilters, CleaningWithDetails, ScheduleCleaningPayload,
        UpdateStatusPayload,
    },
};

// GET /api/cleanings
// Uma rota só para os três papéis: o escopo sai do papel do principal,
// os filtros vêm da query string e nunca alargam o escopo.
#[utoipa::path(
    get,
    path = "/api/cleanings",
    tag = "Cleanings",
    params(CleaningFilters),
    responses(
        (status = 200, description = "Faxinas visíveis, ordenadas por data e hora", body = Vec<CleaningWithDetails>),
        (status = 403, description = "Gestor ainda não aprovado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_cleanings(
    State(app_state): State<AppState>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
    Query(filters): Query<CleaningFilters>,
) -> Result<impl IntoResponse, AppError> {
    let cleanings = app_state
        .cleaning_service
        .list_for(&profile, &filters)
        .await?;
    Ok((StatusCode::OK, Json(cleanings)))
}

// GET /api/cleanings/today
// A agenda do dia do faxineiro, em ordem de hora.
#[utoipa::path(
    get,
    path = "/api/cleanings/today",
    tag = "Cleanings",
    responses(
        (status = 200, description = "Faxinas de hoje do faxineiro", body = Vec<CleaningWithDetails>),
        (status = 403, description = "Apenas faxineiros")
    ),
    security(("api_jwt" = []))
)]
pub async fn today_cleanings(
    State(app_state): State<AppState>,
    _cleaner: RequireRole<RoleCleaner>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let cleanings = app_state
        .cleaning_service
        .today_for_cleaner(profile.id, today)
        .await?;
    Ok((StatusCode::OK, Json(cleanings)))
}

// POST /api/cleanings
#[utoipa::path(
    post,
    path = "/api/cleanings",
    tag = "Cleanings",
    request_body = ScheduleCleaningPayload,
    responses(
        (status = 201, description = "Faxina agendada", body = Cleaning),
        (status = 403, description = "Imóvel fora do portfólio"),
        (status = 404, description = "Imóvel ou tipo de faxina inexistente")
    ),
    security(("api_jwt" = []))
)]
pub async fn schedule_cleaning(
    State(app_state): State<AppState>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
    Json(payload): Json<ScheduleCleaningPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cleaning = app_state
        .cleaning_service
        .schedule(&profile, &payload)
        .await?;

    tracing::info!(
        "🧹 Faxina agendada para {} às {} (imóvel {})",
        cleaning.scheduled_date,
        cleaning.scheduled_time,
        cleaning.property_id
    );
    Ok((StatusCode::CREATED, Json(cleaning)))
}

// PATCH /api/cleanings/{id}/status
#[utoipa::path(
    patch,
    path = "/api/cleanings/{id}/status",
    tag = "Cleanings",
    request_body = UpdateStatusPayload,
    params(("id" = Uuid, Path, description = "ID da faxina")),
    responses(
        (status = 200, description = "Status atualizado", body = Cleaning),
        (status = 400, description = "Transição não permitida"),
        (status = 403, description = "Faxina de outro faxineiro"),
        (status = 409, description = "Status mudou por outra requisição")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_status(
    State(app_state): State<AppState>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let cleaning = app_state
        .cleaning_service
        .transition(&profile, id, payload.status)
        .await?;
    Ok((StatusCode::OK, Json(cleaning)))
}
