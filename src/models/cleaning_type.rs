// src/models/cleaning_type.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Dado de referência, editado apenas pelo admin.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleaningType {
    pub id: Uuid,
    #[schema(example = "Faxina de checkout")]
    pub name: String,
    #[schema(example = "checkout")]
    pub slug: String,
    #[schema(example = 120)]
    pub estimated_duration_minutes: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCleaningTypePayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,
    #[validate(length(min = 1, message = "O slug é obrigatório."))]
    pub slug: String,
    #[validate(range(min = 1, message = "A duração deve ser positiva."))]
    pub estimated_duration_minutes: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCleaningTypePayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,
    #[validate(range(min = 1, message = "A duração deve ser positiva."))]
    pub estimated_duration_minutes: Option<i32>,
}
