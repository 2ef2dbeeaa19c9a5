// src/models/profile.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Os papéis conhecidos do sistema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProfileRole {
    Admin,
    Cleaner,
    PropertyManager,
}

impl ProfileRole {
    // O papel é armazenado como TEXT: valores desconhecidos (provisionamento
    // antigo, escrita manual no banco) precisam ser representáveis.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "admin" => Some(Self::Admin),
            "cleaner" => Some(Self::Cleaner),
            "property_manager" => Some(Self::PropertyManager),
            _ => None,
        }
    }

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Cleaner => "cleaner",
            Self::PropertyManager => "property_manager",
        }
    }
}

// Para onde o frontend deve levar o usuário. A navegação em si é
// responsabilidade de quem consome a API; aqui só decidimos o destino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum RouteTarget {
    AdminArea,
    CleanerArea,
    PmArea,
    PendingApproval,
    Login,
}

// Representa um perfil vindo do banco de dados
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub password_hash: String,

    // Slug cru do banco; use `parsed_role()` para o enum tipado.
    #[schema(example = "property_manager")]
    pub role: String,
    pub is_approved: bool,
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn parsed_role(&self) -> Option<ProfileRole> {
        ProfileRole::from_slug(&self.role)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRolePayload {
    pub role: ProfileRole,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApprovalPayload {
    pub is_approved: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivePayload {
    pub is_active: bool,
}
