// src/db/ical_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::ical::IcalSyncConfig};

const CONFIG_COLUMNS: &str =
    "id, property_id, source, url, last_sync_at, has_error, last_error, created_at";

#[derive(Clone)]
pub struct IcalRepository {
    pool: PgPool,
}

impl IcalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<IcalSyncConfig>, AppError> {
        let maybe_config = sqlx::query_as::<_, IcalSyncConfig>(&format!(
            "SELECT {CONFIG_COLUMNS} FROM ical_sync_configs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_config)
    }

    pub async fn list_by_property(&self, property_id: Uuid) -> Result<Vec<IcalSyncConfig>, AppError> {
        let configs = sqlx::query_as::<_, IcalSyncConfig>(&format!(
            "SELECT {CONFIG_COLUMNS} FROM ical_sync_configs WHERE property_id = $1 ORDER BY source ASC"
        ))
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(configs)
    }

    // Todas as configurações do portfólio de um gestor, para a agregação
    // de status de sincronização.
    pub async fn list_by_manager(&self, manager_id: Uuid) -> Result<Vec<IcalSyncConfig>, AppError> {
        let configs = sqlx::query_as::<_, IcalSyncConfig>(
            r#"
            SELECT s.id, s.property_id, s.source, s.url,
                   s.last_sync_at, s.has_error, s.last_error, s.created_at
            FROM ical_sync_configs s
            JOIN properties p ON p.id = s.property_id
            WHERE p.property_manager_id = $1
            ORDER BY s.source ASC
            "#,
        )
        .bind(manager_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(configs)
    }

    // Mantém uma linha por fonte presente no imóvel.
    pub async fn upsert<'e, E>(
        &self,
        executor: E,
        property_id: Uuid,
        source: &str,
        url: &str,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO ical_sync_configs (property_id, source, url)
            VALUES ($1, $2, $3)
            ON CONFLICT (property_id, source)
            DO UPDATE SET url = EXCLUDED.url
            "#,
        )
        .bind(property_id)
        .bind(source)
        .bind(url)
        .execute(executor)
        .await?;
        Ok(())
    }

    pub async fn delete<'e, E>(
        &self,
        executor: E,
        property_id: Uuid,
        source: &str,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM ical_sync_configs WHERE property_id = $1 AND source = $2")
            .bind(property_id)
            .bind(source)
            .execute(executor)
            .await?;
        Ok(())
    }

    // Chamado pelo worker de sincronização ao fim de cada rodada.
    // Sucesso carimba last_sync_at; falha só marca o erro.
    pub async fn record_sync_result(
        &self,
        id: Uuid,
        success: bool,
        error: Option<&str>,
    ) -> Result<IcalSyncConfig, AppError> {
        sqlx::query_as::<_, IcalSyncConfig>(&format!(
            r#"
            UPDATE ical_sync_configs SET
                last_sync_at = CASE WHEN $2 THEN NOW() ELSE last_sync_at END,
                has_error = NOT $2,
                last_error = $3
            WHERE id = $1
            RETURNING {CONFIG_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(success)
        .bind(error)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::SyncConfigNotFound)
    }
}
