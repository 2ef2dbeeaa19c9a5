// src/db/cleaning_type_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::cleaning_type::CleaningType};

#[derive(Clone)]
pub struct CleaningTypeRepository {
    pool: PgPool,
}

impl CleaningTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CleaningType>, AppError> {
        let maybe_type = sqlx::query_as::<_, CleaningType>(
            "SELECT id, name, slug, estimated_duration_minutes FROM cleaning_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_type)
    }

    pub async fn list_all(&self) -> Result<Vec<CleaningType>, AppError> {
        let types = sqlx::query_as::<_, CleaningType>(
            "SELECT id, name, slug, estimated_duration_minutes FROM cleaning_types ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(types)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        name: &str,
        slug: &str,
        estimated_duration_minutes: i32,
    ) -> Result<CleaningType, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cleaning_type = sqlx::query_as::<_, CleaningType>(
            r#"
            INSERT INTO cleaning_types (name, slug, estimated_duration_minutes)
            VALUES ($1, $2, $3)
            RETURNING id, name, slug, estimated_duration_minutes
            "#,
        )
        .bind(name)
        .bind(slug)
        .bind(estimated_duration_minutes)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation("cleaning_types_slug_key".into());
                }
            }
            e.into()
        })?;

        Ok(cleaning_type)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        estimated_duration_minutes: Option<i32>,
    ) -> Result<CleaningType, AppError> {
        sqlx::query_as::<_, CleaningType>(
            r#"
            UPDATE cleaning_types SET
                name = COALESCE($2, name),
                estimated_duration_minutes = COALESCE($3, estimated_duration_minutes)
            WHERE id = $1
            RETURNING id, name, slug, estimated_duration_minutes
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(estimated_duration_minutes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::CleaningTypeNotFound)
    }
}
