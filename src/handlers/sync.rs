// src/handlers/sync.rs

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
    models::ical::{IcalSyncConfig, SyncOutcomePayload},
};

// POST /api/sync-configs/{id}/result
// Porta de entrada do worker de sincronização: registra o desfecho de uma
// rodada (sucesso carimba last_sync_at, falha marca o erro).
#[utoipa::path(
    post,
    path = "/api/sync-configs/{id}/result",
    tag = "Sync",
    request_body = SyncOutcomePayload,
    params(("id" = Uuid, Path, description = "ID da configuração de calendário")),
    responses(
        (status = 200, description = "Desfecho registrado", body = IcalSyncConfig),
        (status = 404, description = "Configuração não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn record_sync_result(
    State(app_state): State<AppState>,
    _admin: RequireRole<RoleAdmin>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SyncOutcomePayload>,
) -> Result<impl IntoResponse, AppError> {
    let config = app_state.sync_service.record_outcome(id, &payload).await?;
    Ok((StatusCode::OK, Json(config)))
}
