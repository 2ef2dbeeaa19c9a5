// src/handlers/properties.rs

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
    middleware::{
        auth::AuthenticatedProfile,
        rbac::{RequireRole, RolePropertyManager},
    },
    models::{
        ical::IcalSyncConfig,
        property::{CreatePropertyPayload, Property, UpdatePropertyPayload},
    },
};

// POST /api/properties
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = "Properties",
    request_body = CreatePropertyPayload,
    responses(
        (status = 201, description = "Imóvel criado", body = Property),
        (status = 403, description = "Apenas gestores aprovados")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_property(
    State(app_state): State<AppState>,
    _pm: RequireRole<RolePropertyManager>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
    Json(payload): Json<CreatePropertyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let property = app_state.property_service.create(&profile, &payload).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

// GET /api/properties
// Admin enxerga todos; gestor, o próprio portfólio.
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = "Properties",
    responses(
        (status = 200, description = "Imóveis visíveis para o principal", body = Vec<Property>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_properties(
    State(app_state): State<AppState>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
) -> Result<impl IntoResponse, AppError> {
    let properties = app_state.property_service.list_for(&profile).await?;
    Ok((StatusCode::OK, Json(properties)))
}

// GET /api/properties/{id}
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "ID do imóvel")),
    responses(
        (status = 200, description = "Detalhes do imóvel", body = Property),
        (status = 403, description = "Imóvel fora do portfólio"),
        (status = 404, description = "Imóvel não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_property(
    State(app_state): State<AppState>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let property = app_state.property_service.find_visible(&profile, id).await?;
    Ok((StatusCode::OK, Json(property)))
}

// PATCH /api/properties/{id}
#[utoipa::path(
    patch,
    path = "/api/properties/{id}",
    tag = "Properties",
    request_body = UpdatePropertyPayload,
    params(("id" = Uuid, Path, description = "ID do imóvel")),
    responses(
        (status = 200, description = "Imóvel atualizado", body = Property),
        (status = 403, description = "Imóvel fora do portfólio"),
        (status = 404, description = "Imóvel não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_property(
    State(app_state): State<AppState>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePropertyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let property = app_state
        .property_service
        .update(&profile, id, &payload)
        .await?;
    Ok((StatusCode::OK, Json(property)))
}

// GET /api/properties/{id}/sync-configs
#[utoipa::path(
    get,
    path = "/api/properties/{id}/sync-configs",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "ID do imóvel")),
    responses(
        (status = 200, description = "Feeds de calendário do imóvel", body = Vec<IcalSyncConfig>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_sync_configs(
    State(app_state): State<AppState>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let configs = app_state
        .property_service
        .sync_configs_for(&profile, id)
        .await?;
    Ok((StatusCode::OK, Json(configs)))
}
