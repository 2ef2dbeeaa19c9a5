// src/models/ical.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Uma linha por feed externo conectado a um imóvel.
// last_sync_at/has_error são escritos pelo worker de sincronização
// (colaborador externo); aqui só armazenamos e agregamos.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IcalSyncConfig {
    pub id: Uuid,
    pub property_id: Uuid,
    #[schema(example = "airbnb")]
    pub source: String,
    pub url: String,
    pub last_sync_at: Option<DateTime<Utc>>,
    pub has_error: bool,
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Resultado de uma rodada de sincronização, reportado pelo worker.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutcomePayload {
    pub success: bool,
    pub error: Option<String>,
}
