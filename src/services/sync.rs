// src/services/sync.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{IcalRepository, PropertyRepository},
    models::{
        dashboard::SyncStatusSummary,
        ical::{IcalSyncConfig, SyncOutcomePayload},
        property::Property,
    },
};

// Agrega o estado da sincronização de calendários de um portfólio.
// Função pura sobre os dois conjuntos; a busca fica no service.
pub fn summarize_sync(properties: &[Property], configs: &[IcalSyncConfig]) -> SyncStatusSummary {
    let total_properties = properties.len() as i64;
    let properties_with_ical = properties
        .iter()
        .filter(|p| p.is_calendar_connected())
        .count() as i64;

    SyncStatusSummary {
        total_properties,
        properties_with_ical,
        properties_without_ical: total_properties - properties_with_ical,
        total_configs: configs.len() as i64,
        configs_with_error: configs.iter().filter(|c| c.has_error).count() as i64,
        // No máximo, None vale menos-infinito: o filter_map descarta quem
        // nunca sincronizou antes de comparar.
        last_sync_at: configs.iter().filter_map(|c| c.last_sync_at).max(),
    }
}

#[derive(Clone)]
pub struct SyncService {
    property_repo: PropertyRepository,
    ical_repo: IcalRepository,
}

impl SyncService {
    pub fn new(property_repo: PropertyRepository, ical_repo: IcalRepository) -> Self {
        Self {
            property_repo,
            ical_repo,
        }
    }

    pub async fn summary_for_manager(&self, manager_id: Uuid) -> Result<SyncStatusSummary, AppError> {
        let properties = self.property_repo.list_by_manager(manager_id).await?;
        let configs = self.ical_repo.list_by_manager(manager_id).await?;
        Ok(summarize_sync(&properties, &configs))
    }

    // O worker externo reporta o desfecho de cada rodada por aqui.
    pub async fn record_outcome(
        &self,
        config_id: Uuid,
        payload: &SyncOutcomePayload,
    ) -> Result<IcalSyncConfig, AppError> {
        if payload.success {
            tracing::debug!("📅 Sincronização concluída para config {}", config_id);
        } else {
            tracing::warn!(
                "📅 Sincronização falhou para config {}: {:?}",
                config_id,
                payload.error
            );
        }
        self.ical_repo
            .record_sync_result(config_id, payload.success, payload.error.as_deref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn property_with_icals(
        airbnb: Option<&str>,
        booking: Option<&str>,
        other: Option<&str>,
    ) -> Property {
        Property {
            id: Uuid::new_v4(),
            name: "Imóvel".into(),
            address: "Rua X, 1".into(),
            property_manager_id: Uuid::new_v4(),
            ical_airbnb: airbnb.map(String::from),
            ical_booking: booking.map(String::from),
            ical_other: other.map(String::from),
            latitude: None,
            longitude: None,
            access_instructions: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn config_with(last_sync_at: Option<chrono::DateTime<Utc>>, has_error: bool) -> IcalSyncConfig {
        IcalSyncConfig {
            id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            source: "airbnb".into(),
            url: "https://exemplo.com/feed.ics".into(),
            last_sync_at,
            has_error,
            last_error: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn conta_imoveis_conectados_e_nao_conectados() {
        let properties = vec![
            property_with_icals(Some("x"), None, None),
            property_with_icals(None, None, None),
            property_with_icals(None, Some("y"), None),
        ];
        let summary = summarize_sync(&properties, &[]);
        assert_eq!(summary.total_properties, 3);
        assert_eq!(summary.properties_with_ical, 2);
        assert_eq!(summary.properties_without_ical, 1);
    }

    #[test]
    fn url_vazia_nao_conta_como_conectado() {
        let properties = vec![property_with_icals(Some(""), None, None)];
        let summary = summarize_sync(&properties, &[]);
        assert_eq!(summary.properties_with_ical, 0);
        assert_eq!(summary.properties_without_ical, 1);
    }

    #[test]
    fn ultima_sincronizacao_ignora_quem_nunca_sincronizou() {
        let jan = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let fev = Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap();
        let configs = vec![
            config_with(None, false),
            config_with(Some(jan), false),
            config_with(Some(fev), false),
        ];
        let summary = summarize_sync(&[], &configs);
        assert_eq!(summary.last_sync_at, Some(fev));
    }

    #[test]
    fn sem_nenhuma_sincronizacao_vira_sentinela_nunca() {
        let configs = vec![config_with(None, false), config_with(None, true)];
        let summary = summarize_sync(&[], &configs);
        assert_eq!(summary.last_sync_at, None);
        assert_eq!(summary.configs_with_error, 1);
        assert_eq!(summary.total_configs, 2);
    }

    #[test]
    fn conjuntos_vazios_nao_quebram() {
        let summary = summarize_sync(&[], &[]);
        assert_eq!(summary.total_properties, 0);
        assert_eq!(summary.properties_with_ical, 0);
        assert_eq!(summary.properties_without_ical, 0);
        assert_eq!(summary.last_sync_at, None);
    }
}
