// src/db/checklist_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::checklist::ChecklistTemplate};

#[derive(Clone)]
pub struct ChecklistRepository {
    pool: PgPool,
}

impl ChecklistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ChecklistTemplate>, AppError> {
        let maybe_template = sqlx::query_as::<_, ChecklistTemplate>(
            "SELECT id, name, cleaning_type_id, items FROM checklist_templates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_template)
    }

    pub async fn list_all(&self) -> Result<Vec<ChecklistTemplate>, AppError> {
        let templates = sqlx::query_as::<_, ChecklistTemplate>(
            "SELECT id, name, cleaning_type_id, items FROM checklist_templates ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(templates)
    }

    pub async fn list_by_cleaning_type(
        &self,
        cleaning_type_id: Uuid,
    ) -> Result<Vec<ChecklistTemplate>, AppError> {
        let templates = sqlx::query_as::<_, ChecklistTemplate>(
            r#"
            SELECT id, name, cleaning_type_id, items
            FROM checklist_templates
            WHERE cleaning_type_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(cleaning_type_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(templates)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        name: &str,
        cleaning_type_id: Uuid,
        items: &[String],
    ) -> Result<ChecklistTemplate, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let template = sqlx::query_as::<_, ChecklistTemplate>(
            r#"
            INSERT INTO checklist_templates (name, cleaning_type_id, items)
            VALUES ($1, $2, $3)
            RETURNING id, name, cleaning_type_id, items
            "#,
        )
        .bind(name)
        .bind(cleaning_type_id)
        .bind(items)
        .fetch_one(executor)
        .await?;

        Ok(template)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        items: Option<&[String]>,
    ) -> Result<ChecklistTemplate, AppError> {
        sqlx::query_as::<_, ChecklistTemplate>(
            r#"
            UPDATE checklist_templates SET
                name = COALESCE($2, name),
                items = COALESCE($3, items)
            WHERE id = $1
            RETURNING id, name, cleaning_type_id, items
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(items)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::ChecklistNotFound)
    }
}
