// src/models/checklist.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Modelo de checklist por tipo de faxina.
// `items` é uma sequência ordenada de descrições de tarefa.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistTemplate {
    pub id: Uuid,
    #[schema(example = "Checklist padrão de checkout")]
    pub name: String,
    pub cleaning_type_id: Uuid,
    pub items: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChecklistPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,
    pub cleaning_type_id: Uuid,
    #[validate(length(min = 1, message = "O checklist precisa de pelo menos um item."))]
    pub items: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChecklistPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "O checklist precisa de pelo menos um item."))]
    pub items: Option<Vec<String>>,
}
