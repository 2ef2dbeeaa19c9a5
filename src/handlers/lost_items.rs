// src/handlers/lost_items.rs

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
    middleware::auth::AuthenticatedProfile,
    models::lost_item::{CreateLostItemPayload, LostItemReport, LostItemWithDetails},
};

// POST /api/cleanings/{id}/lost-items
#[utoipa::path(
    post,
    path = "/api/cleanings/{id}/lost-items",
    tag = "LostItems",
    request_body = CreateLostItemPayload,
    params(("id" = Uuid, Path, description = "ID da faxina")),
    responses(
        (status = 201, description = "Relato registrado", body = LostItemReport),
        (status = 403, description = "Faxina de outro faxineiro"),
        (status = 404, description = "Faxina não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn report_lost_item(
    State(app_state): State<AppState>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
    Path(cleaning_id): Path<Uuid>,
    Json(payload): Json<CreateLostItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let report = app_state
        .lost_item_service
        .report(&profile, cleaning_id, &payload.description)
        .await?;
    Ok((StatusCode::CREATED, Json(report)))
}

// GET /api/lost-items
// Revisão: admin vê tudo; gestor, só o próprio portfólio.
#[utoipa::path(
    get,
    path = "/api/lost-items",
    tag = "LostItems",
    responses(
        (status = 200, description = "Relatos visíveis para o principal", body = Vec<LostItemWithDetails>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_lost_items(
    State(app_state): State<AppState>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
) -> Result<impl IntoResponse, AppError> {
    let reports = app_state.lost_item_service.list_for(&profile).await?;
    Ok((StatusCode::OK, Json(reports)))
}

// PATCH /api/lost-items/{id}/acknowledge
#[utoipa::path(
    patch,
    path = "/api/lost-items/{id}/acknowledge",
    tag = "LostItems",
    params(("id" = Uuid, Path, description = "ID do relato")),
    responses(
        (status = 200, description = "Relato reconhecido", body = LostItemReport),
        (status = 403, description = "Relato de imóvel fora do portfólio"),
        (status = 409, description = "Relato já reconhecido")
    ),
    security(("api_jwt" = []))
)]
pub async fn acknowledge_lost_item(
    State(app_state): State<AppState>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state
        .lost_item_service
        .acknowledge(&profile, id)
        .await?;
    Ok((StatusCode::OK, Json(report)))
}
