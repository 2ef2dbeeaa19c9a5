// src/models/lost_item.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LostItemReport {
    pub id: Uuid,
    pub cleaning_id: Uuid,
    pub reported_by: Uuid,
    #[schema(example = "Carregador de celular na tomada do quarto")]
    pub description: String,
    pub acknowledged_by_pm: bool,
    pub created_at: DateTime<Utc>,
}

// Linha da tela de revisão do gestor, com o contexto da faxina.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LostItemWithDetails {
    pub id: Uuid,
    pub cleaning_id: Uuid,
    pub property_name: String,
    pub scheduled_date: NaiveDate,
    pub reporter_name: String,
    pub description: String,
    pub acknowledged_by_pm: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLostItemPayload {
    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,
}
