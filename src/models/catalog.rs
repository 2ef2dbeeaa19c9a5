// src/models/catalog.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Item do catálogo de danos. As categorias são derivadas por extração de
// valores distintos, nunca armazenadas em tabela própria.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DamageCatalogItem {
    pub id: Uuid,
    #[schema(example = "Eletrodomésticos")]
    pub category: String,
    #[schema(example = "Micro-ondas")]
    pub name: String,
    #[schema(example = "350.00")]
    pub estimated_price: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCatalogItemPayload {
    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    pub category: String,
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,
    pub estimated_price: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCatalogItemPayload {
    #[validate(length(min = 1, message = "A categoria não pode ficar vazia."))]
    pub category: Option<String>,
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,
    pub estimated_price: Option<Decimal>,
}
