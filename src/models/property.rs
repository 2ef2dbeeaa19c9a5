// src/models/property.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    #[schema(example = "Apto Vista Mar 302")]
    pub name: String,
    #[schema(example = "Av. Atlântica, 1702 - Copacabana")]
    pub address: String,
    pub property_manager_id: Uuid,

    // URLs de calendários externos. A presença de qualquer um deles marca o
    // imóvel como "conectado a calendário".
    pub ical_airbnb: Option<String>,
    pub ical_booking: Option<String>,
    pub ical_other: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub access_instructions: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    // Conectado = pelo menos uma URL de calendário não vazia.
    pub fn is_calendar_connected(&self) -> bool {
        [&self.ical_airbnb, &self.ical_booking, &self.ical_other]
            .into_iter()
            .any(|url| url.as_deref().is_some_and(|u| !u.is_empty()))
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyPayload {
    #[validate(length(min = 1, message = "O nome do imóvel é obrigatório."))]
    pub name: String,
    #[validate(length(min = 1, message = "O endereço é obrigatório."))]
    pub address: String,
    #[validate(url(message = "URL de iCal inválida."))]
    pub ical_airbnb: Option<String>,
    #[validate(url(message = "URL de iCal inválida."))]
    pub ical_booking: Option<String>,
    #[validate(url(message = "URL de iCal inválida."))]
    pub ical_other: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub access_instructions: Option<String>,
}

// Patch parcial: campos ausentes ficam como estão.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyPayload {
    #[validate(length(min = 1, message = "O nome do imóvel não pode ficar vazio."))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "O endereço não pode ficar vazio."))]
    pub address: Option<String>,
    // Some("") limpa a URL; None mantém.
    pub ical_airbnb: Option<String>,
    pub ical_booking: Option<String>,
    pub ical_other: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub access_instructions: Option<String>,
}
