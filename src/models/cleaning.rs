// src/models/cleaning.rs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "cleaning_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CleaningStatus {
    Pending,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl CleaningStatus {
    // Transições legais do ciclo de vida de uma faxina.
    // Cancelamento só antes do trabalho começar.
    pub fn can_transition_to(&self, next: CleaningStatus) -> bool {
        use CleaningStatus::*;
        matches!(
            (self, next),
            (Pending, Assigned)
                | (Assigned, InProgress)
                | (InProgress, Completed)
                | (Pending, Cancelled)
                | (Assigned, Cancelled)
        )
    }
}

// --- Escopo ---

// O subconjunto de faxinas que um principal pode enxergar, derivado do papel.
// O escopo é aplicado ANTES de qualquer filtro; filtro nunca alarga escopo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleaningScope {
    // Admin enxerga tudo
    Admin,
    // Faxineiro: apenas as faxinas atribuídas a ele
    Cleaner(Uuid),
    // Gestor: apenas faxinas de imóveis do seu portfólio
    Portfolio(Vec<Uuid>),
}

// --- Filtros ---

// Cada filtro presente vira um predicado conjuntivo (AND).
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CleaningFilters {
    pub status: Option<CleaningStatus>,
    pub date: Option<NaiveDate>,
    pub property: Option<Uuid>,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cleaning {
    pub id: Uuid,
    pub property_id: Uuid,
    pub cleaner_id: Option<Uuid>,
    pub cleaning_type_id: Uuid,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub status: CleaningStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Linha já juntada com imóvel, faxineiro e tipo de faxina, montada na
// borda do banco para isolar a lógica do schema externo.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleaningWithDetails {
    pub id: Uuid,
    pub property_id: Uuid,
    #[schema(example = "Apto Vista Mar 302")]
    pub property_name: String,
    pub property_address: String,
    pub cleaner_id: Option<Uuid>,
    pub cleaner_name: Option<String>,
    pub cleaning_type_id: Uuid,
    #[schema(example = "Faxina de checkout")]
    pub cleaning_type_name: String,
    pub estimated_duration_minutes: i32,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub status: CleaningStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCleaningPayload {
    pub property_id: Uuid,
    pub cleaning_type_id: Uuid,
    pub cleaner_id: Option<Uuid>,
    #[schema(example = "2025-06-15")]
    pub scheduled_date: NaiveDate,
    #[schema(example = "11:00:00")]
    pub scheduled_time: NaiveTime,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusPayload {
    pub status: CleaningStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ciclo_de_vida_feliz() {
        use CleaningStatus::*;
        assert!(Pending.can_transition_to(Assigned));
        assert!(Assigned.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Completed));
    }

    #[test]
    fn cancelamento_so_antes_de_comecar() {
        use CleaningStatus::*;
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Assigned.can_transition_to(Cancelled));
        assert!(!InProgress.can_transition_to(Cancelled));
        assert!(!Completed.can_transition_to(Cancelled));
    }

    #[test]
    fn estados_finais_nao_transicionam() {
        use CleaningStatus::*;
        for next in [Pending, Assigned, InProgress, Completed, Cancelled] {
            assert!(!Completed.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn sem_pulos_de_etapa() {
        use CleaningStatus::*;
        assert!(!Pending.can_transition_to(InProgress));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Assigned.can_transition_to(Completed));
    }
}
