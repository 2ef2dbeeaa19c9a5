// src/db/property_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::property::Property};

const PROPERTY_COLUMNS: &str = "id, name, address, property_manager_id, ical_airbnb, \
     ical_booking, ical_other, latitude, longitude, access_instructions, created_at, updated_at";

#[derive(Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, AppError> {
        let maybe_property = sqlx::query_as::<_, Property>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_property)
    }

    pub async fn list_all(&self) -> Result<Vec<Property>, AppError> {
        let properties = sqlx::query_as::<_, Property>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties ORDER BY name ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(properties)
    }

    // O portfólio de um gestor.
    pub async fn list_by_manager(&self, manager_id: Uuid) -> Result<Vec<Property>, AppError> {
        let properties = sqlx::query_as::<_, Property>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE property_manager_id = $1 ORDER BY name ASC"
        ))
        .bind(manager_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(properties)
    }

    // Só os IDs do portfólio: é isso que delimita o escopo das consultas
    // de faxina de um gestor, e precisa ser resolvido ANTES delas.
    pub async fn list_ids_by_manager(&self, manager_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM properties WHERE property_manager_id = $1",
        )
        .bind(manager_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    pub async fn count_all(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        manager_id: Uuid,
        name: &str,
        address: &str,
        ical_airbnb: Option<&str>,
        ical_booking: Option<&str>,
        ical_other: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        access_instructions: Option<&str>,
    ) -> Result<Property, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let property = sqlx::query_as::<_, Property>(&format!(
            r#"
            INSERT INTO properties (
                name, address, property_manager_id,
                ical_airbnb, ical_booking, ical_other,
                latitude, longitude, access_instructions
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {PROPERTY_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(address)
        .bind(manager_id)
        .bind(ical_airbnb)
        .bind(ical_booking)
        .bind(ical_other)
        .bind(latitude)
        .bind(longitude)
        .bind(access_instructions)
        .fetch_one(executor)
        .await?;

        Ok(property)
    }

    // O merge do patch parcial acontece no service; aqui gravamos a linha
    // inteira já mesclada.
    pub async fn update<'e, E>(&self, executor: E, property: &Property) -> Result<Property, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Property>(&format!(
            r#"
            UPDATE properties SET
                name = $2, address = $3,
                ical_airbnb = $4, ical_booking = $5, ical_other = $6,
                latitude = $7, longitude = $8, access_instructions = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PROPERTY_COLUMNS}
            "#
        ))
        .bind(property.id)
        .bind(&property.name)
        .bind(&property.address)
        .bind(&property.ical_airbnb)
        .bind(&property.ical_booking)
        .bind(&property.ical_other)
        .bind(property.latitude)
        .bind(property.longitude)
        .bind(&property.access_instructions)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::PropertyNotFound)
    }
}
