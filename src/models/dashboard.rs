// src/models/dashboard.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::cleaning::CleaningWithDetails;

// Contagens de faxinas por balde. Canceladas não entram em nenhum balde,
// só no total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleaningSummary {
    pub completed_count: i64,
    pub pending_count: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistSummary {
    pub template_count: i64,
    pub total_items: i64,
    // round(total/count); 0 quando não há modelos.
    pub average_items: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub item_count: i64,
    pub min_price: Decimal,
    pub max_price: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatusSummary {
    pub total_properties: i64,
    pub properties_with_ical: i64,
    pub properties_without_ical: i64,
    pub total_configs: i64,
    pub configs_with_error: i64,
    // None = nunca sincronizou (serializado como null; o texto "nunca"
    // é decisão de apresentação do frontend).
    pub last_sync_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub cleanings_today: CleaningSummary,
    pub total_properties: i64,
    pub pending_approvals: i64,
    pub checklists: ChecklistSummary,
    pub catalog: CatalogSummary,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PmDashboard {
    pub cleanings_today: CleaningSummary,
    pub total_properties: i64,
    pub sync: SyncStatusSummary,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanerDashboard {
    pub today: CleaningSummary,
    pub next_cleaning: Option<CleaningWithDetails>,
}
