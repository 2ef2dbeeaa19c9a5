// src/db/lost_item_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::lost_item::{LostItemReport, LostItemWithDetails},
};

const DETAIL_SELECT: &str = r#"
    SELECT
        r.id, r.cleaning_id,
        p.name AS property_name, c.scheduled_date,
        rep.full_name AS reporter_name,
        r.description, r.acknowledged_by_pm, r.created_at
    FROM lost_item_reports r
    JOIN cleanings c ON c.id = r.cleaning_id
    JOIN properties p ON p.id = c.property_id
    JOIN profiles rep ON rep.id = r.reported_by
"#;

#[derive(Clone)]
pub struct LostItemRepository {
    pool: PgPool,
}

impl LostItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        cleaning_id: Uuid,
        reported_by: Uuid,
        description: &str,
    ) -> Result<LostItemReport, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let report = sqlx::query_as::<_, LostItemReport>(
            r#"
            INSERT INTO lost_item_reports (cleaning_id, reported_by, description)
            VALUES ($1, $2, $3)
            RETURNING id, cleaning_id, reported_by, description, acknowledged_by_pm, created_at
            "#,
        )
        .bind(cleaning_id)
        .bind(reported_by)
        .bind(description)
        .fetch_one(executor)
        .await?;

        Ok(report)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<LostItemReport>, AppError> {
        let maybe_report = sqlx::query_as::<_, LostItemReport>(
            r#"
            SELECT id, cleaning_id, reported_by, description, acknowledged_by_pm, created_at
            FROM lost_item_reports
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_report)
    }

    pub async fn list_all(&self) -> Result<Vec<LostItemWithDetails>, AppError> {
        let rows = sqlx::query_as::<_, LostItemWithDetails>(&format!(
            "{DETAIL_SELECT} ORDER BY r.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    // Revisão do gestor: só relatos de faxinas em imóveis do portfólio dele.
    pub async fn list_by_manager(&self, manager_id: Uuid) -> Result<Vec<LostItemWithDetails>, AppError> {
        let rows = sqlx::query_as::<_, LostItemWithDetails>(&format!(
            "{DETAIL_SELECT} WHERE p.property_manager_id = $1 ORDER BY r.created_at DESC"
        ))
        .bind(manager_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    // Quem é o gestor dono do imóvel daquele relato (para o check de escopo).
    pub async fn find_property_manager(&self, report_id: Uuid) -> Result<Option<Uuid>, AppError> {
        let maybe_manager = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT p.property_manager_id
            FROM lost_item_reports r
            JOIN cleanings c ON c.id = r.cleaning_id
            JOIN properties p ON p.id = c.property_id
            WHERE r.id = $1
            "#,
        )
        .bind(report_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_manager)
    }

    // Update guardado: reconhecer duas vezes é conflito, não no-op.
    pub async fn acknowledge(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE lost_item_reports
            SET acknowledged_by_pm = TRUE
            WHERE id = $1 AND acknowledged_by_pm = FALSE
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
