// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedProfile,
    models::{
        auth::{AuthResponse, LoginPayload, RegisterPayload},
        profile::Profile,
    },
    services::access,
};

// POST /api/auth/register
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "Perfil criado", body = AuthResponse),
        (status = 400, description = "Dados inválidos ou papel não permitido"),
        (status = 409, description = "E-mail já cadastrado")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let token = app_state
        .auth_service
        .register(&payload.full_name, &payload.email, &payload.password, payload.role)
        .await?;

    Ok((StatusCode::CREATED, Json(AuthResponse { token })))
}

// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login efetuado", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let token = app_state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(AuthResponse { token })))
}

// GET /api/me
#[utoipa::path(
    get,
    path = "/api/me",
    tag = "Me",
    responses(
        (status = 200, description = "Perfil do principal autenticado", body = Profile),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedProfile(profile): AuthenticatedProfile) -> Json<Profile> {
    Json(profile)
}

// GET /api/me/route
// O destino é uma decisão pura sobre o perfil; quem navega é o frontend.
#[utoipa::path(
    get,
    path = "/api/me/route",
    tag = "Me",
    responses(
        (status = 200, description = "Área para onde este perfil deve ser levado"),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_route(
    AuthenticatedProfile(profile): AuthenticatedProfile,
) -> Result<impl IntoResponse, AppError> {
    let target = access::route_for(Some(&profile));
    Ok((StatusCode::OK, Json(json!({ "redirectTo": target }))))
}
