// src/handlers/catalog.rs

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
    models::catalog::{CreateCatalogItemPayload, DamageCatalogItem, UpdateCatalogItemPayload},
};

// POST /api/catalog
#[utoipa::path(
    post,
    path = "/api/catalog",
    tag = "Catalog",
    request_body = CreateCatalogItemPayload,
    responses(
        (status = 201, description = "Item de catálogo criado", body = DamageCatalogItem)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_catalog_item(
    State(app_state): State<AppState>,
    _admin: RequireRole<RoleAdmin>,
    Json(payload): Json<CreateCatalogItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .catalog_repo
        .create(
            &app_state.db_pool,
            &payload.category,
            &payload.name,
            payload.estimated_price,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

// GET /api/catalog
#[utoipa::path(
    get,
    path = "/api/catalog",
    tag = "Catalog",
    responses(
        (status = 200, description = "Catálogo de danos completo", body = Vec<DamageCatalogItem>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_catalog(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.catalog_repo.list_all().await?;
    Ok((StatusCode::OK, Json(items)))
}

// GET /api/catalog/categories
// As categorias são derivadas por DISTINCT, não existem como tabela.
#[utoipa::path(
    get,
    path = "/api/catalog/categories",
    tag = "Catalog",
    responses(
        (status = 200, description = "Categorias distintas do catálogo", body = Vec<String>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_categories(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = app_state.catalog_repo.distinct_categories().await?;
    Ok((StatusCode::OK, Json(categories)))
}

// PATCH /api/catalog/{id}
#[utoipa::path(
    patch,
    path = "/api/catalog/{id}",
    tag = "Catalog",
    request_body = UpdateCatalogItemPayload,
    params(("id" = Uuid, Path, description = "ID do item")),
    responses(
        (status = 200, description = "Item atualizado", body = DamageCatalogItem),
        (status = 404, description = "Item não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_catalog_item(
    State(app_state): State<AppState>,
    _admin: RequireRole<RoleAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCatalogItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .catalog_repo
        .update(
            id,
            payload.category.as_deref(),
            payload.name.as_deref(),
            payload.estimated_price,
        )
        .await?;
    Ok((StatusCode::OK, Json(item)))
}
