// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        auth::AuthenticatedProfile,
        rbac::{RequireRole, RoleAdmin, RoleCleaner, RolePropertyManager},
    },
    models::dashboard::{AdminDashboard, CleanerDashboard, PmDashboard},
};

// GET /api/dashboard/admin
#[utoipa::path(
    get,
    path = "/api/dashboard/admin",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Painel do administrador", body = AdminDashboard),
        (status = 403, description = "Apenas admin")
    ),
    security(("api_jwt" = []))
)]
pub async fn admin_dashboard(
    State(app_state): State<AppState>,
    _admin: RequireRole<RoleAdmin>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let dashboard = app_state
        .dashboard_service
        .admin_dashboard(&profile, today)
        .await?;
    Ok((StatusCode::OK, Json(dashboard)))
}

// GET /api/dashboard/pm
// Inclui o resumo da sincronização de calendários do portfólio.
#[utoipa::path(
    get,
    path = "/api/dashboard/pm",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Painel do gestor de imóveis", body = PmDashboard),
        (status = 403, description = "Apenas gestores aprovados")
    ),
    security(("api_jwt" = []))
)]
pub async fn pm_dashboard(
    State(app_state): State<AppState>,
    _pm: RequireRole<RolePropertyManager>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let dashboard = app_state
        .dashboard_service
        .pm_dashboard(&profile, today)
        .await?;
    Ok((StatusCode::OK, Json(dashboard)))
}

// GET /api/dashboard/cleaner
#[utoipa::path(
    get,
    path = "/api/dashboard/cleaner",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Painel do faxineiro", body = CleanerDashboard),
        (status = 403, description = "Apenas faxineiros")
    ),
    security(("api_jwt" = []))
)]
pub async fn cleaner_dashboard(
    State(app_state): State<AppState>,
    _cleaner: RequireRole<RoleCleaner>,
    AuthenticatedProfile(profile): AuthenticatedProfile,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let dashboard = app_state
        .dashboard_service
        .cleaner_dashboard(&profile, today)
        .await?;
    Ok((StatusCode::OK, Json(dashboard)))
}
