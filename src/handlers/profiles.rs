// src/handlers/profiles.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireRole, RoleAdmin},
    models::profile::{Profile, UpdateActivePayload, UpdateApprovalPayload, UpdateRolePayload},
};

// GET /api/profiles
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = "Profiles",
    responses(
        (status = 200, description = "Todos os perfis cadastrados", body = Vec<Profile>),
        (status = 403, description = "Apenas admin")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_profiles(
    State(app_state): State<AppState>,
    _admin: RequireRole<RoleAdmin>,
) -> Result<impl IntoResponse, AppError> {
    let profiles = app_state.profile_repo.list_all().await?;
    Ok((StatusCode::OK, Json(profiles)))
}

// PATCH /api/profiles/{id}/role
#[utoipa::path(
    patch,
    path = "/api/profiles/{id}/role",
    tag = "Profiles",
    request_body = UpdateRolePayload,
    params(("id" = Uuid, Path, description = "ID do perfil")),
    responses(
        (status = 200, description = "Papel atualizado", body = Profile),
        (status = 404, description = "Perfil não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_role(
    State(app_state): State<AppState>,
    _admin: RequireRole<RoleAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRolePayload>,
) -> Result<impl IntoResponse, AppError> {
    let profile = app_state
        .profile_repo
        .update_role(id, payload.role.as_slug())
        .await?;

    tracing::info!("🔑 Papel de {} alterado para {}", profile.email, profile.role);
    Ok((StatusCode::OK, Json(profile)))
}

// PATCH /api/profiles/{id}/approval
#[utoipa::path(
    patch,
    path = "/api/profiles/{id}/approval",
    tag = "Profiles",
    request_body = UpdateApprovalPayload,
    params(("id" = Uuid, Path, description = "ID do perfil")),
    responses(
        (status = 200, description = "Aprovação atualizada", body = Profile),
        (status = 404, description = "Perfil não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_approval(
    State(app_state): State<AppState>,
    _admin: RequireRole<RoleAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateApprovalPayload>,
) -> Result<impl IntoResponse, AppError> {
    let profile = app_state
        .profile_repo
        .update_approval(id, payload.is_approved)
        .await?;
    Ok((StatusCode::OK, Json(profile)))
}

// PATCH /api/profiles/{id}/active
// Perfis nunca são apagados; desativar é o caminho.
#[utoipa::path(
    patch,
    path = "/api/profiles/{id}/active",
    tag = "Profiles",
    request_body = UpdateActivePayload,
    params(("id" = Uuid, Path, description = "ID do perfil")),
    responses(
        (status = 200, description = "Ativação atualizada", body = Profile),
        (status = 404, description = "Perfil não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_active(
    State(app_state): State<AppState>,
    _admin: RequireRole<RoleAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateActivePayload>,
) -> Result<impl IntoResponse, AppError> {
    let profile = app_state
        .profile_repo
        .update_active(id, payload.is_active)
        .await?;
    Ok((StatusCode::OK, Json(profile)))
}
