// src/db/catalog_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::catalog::DamageCatalogItem};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<DamageCatalogItem>, AppError> {
        let maybe_item = sqlx::query_as::<_, DamageCatalogItem>(
            "SELECT id, category, name, estimated_price FROM damage_catalog_items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_item)
    }

    pub async fn list_all(&self) -> Result<Vec<DamageCatalogItem>, AppError> {
        let items = sqlx::query_as::<_, DamageCatalogItem>(
            r#"
            SELECT id, category, name, estimated_price
            FROM damage_catalog_items
            ORDER BY category ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    // O agrupamento por categoria é derivado, nunca tabela própria.
    pub async fn distinct_categories(&self) -> Result<Vec<String>, AppError> {
        let categories = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM damage_catalog_items ORDER BY category ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        category: &str,
        name: &str,
        estimated_price: Decimal,
    ) -> Result<DamageCatalogItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, DamageCatalogItem>(
            r#"
            INSERT INTO damage_catalog_items (category, name, estimated_price)
            VALUES ($1, $2, $3)
            RETURNING id, category, name, estimated_price
            "#,
        )
        .bind(category)
        .bind(name)
        .bind(estimated_price)
        .fetch_one(executor)
        .await?;

        Ok(item)
    }

    pub async fn update(
        &self,
        id: Uuid,
        category: Option<&str>,
        name: Option<&str>,
        estimated_price: Option<Decimal>,
    ) -> Result<DamageCatalogItem, AppError> {
        sqlx::query_as::<_, DamageCatalogItem>(
            r#"
            UPDATE damage_catalog_items SET
                category = COALESCE($2, category),
                name = COALESCE($3, name),
                estimated_price = COALESCE($4, estimated_price)
            WHERE id = $1
            RETURNING id, category, name, estimated_price
            "#,
        )
        .bind(id)
        .bind(category)
        .bind(name)
        .bind(estimated_price)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::CatalogItemNotFound)
    }
}
