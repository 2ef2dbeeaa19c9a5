// src/db/cleaning_repo.rs

use chrono::{NaiveDate, NaiveTime};
use sqlx::{Executor, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::cleaning::{Cleaning, CleaningFilters, CleaningScope, CleaningStatus, CleaningWithDetails},
};

const CLEANING_COLUMNS: &str = "id, property_id, cleaner_id, cleaning_type_id, \
     scheduled_date, scheduled_time, status, created_at, updated_at";

#[derive(Clone)]
pub struct CleaningRepository {
    pool: PgPool,
}

// Monta a consulta de listagem: escopo primeiro, filtros depois, sempre
// conjuntivos. O filtro nunca consegue alargar o que o escopo delimitou.
fn build_list_query(
    scope: &CleaningScope,
    filters: &CleaningFilters,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        r#"
        SELECT
            c.id, c.property_id,
            p.name AS property_name, p.address AS property_address,
            c.cleaner_id, cl.full_name AS cleaner_name,
            c.cleaning_type_id, ct.name AS cleaning_type_name,
            ct.estimated_duration_minutes,
            c.scheduled_date, c.scheduled_time, c.status, c.created_at
        FROM cleanings c
        JOIN properties p ON p.id = c.property_id
        JOIN cleaning_types ct ON ct.id = c.cleaning_type_id
        LEFT JOIN profiles cl ON cl.id = c.cleaner_id
        WHERE TRUE
        "#,
    );

    // 1. Escopo (derivado do papel, nunca do filtro)
    match scope {
        CleaningScope::Admin => {}
        CleaningScope::Cleaner(cleaner_id) => {
            qb.push(" AND c.cleaner_id = ").push_bind(*cleaner_id);
        }
        CleaningScope::Portfolio(property_ids) => {
            qb.push(" AND c.property_id = ANY(")
                .push_bind(property_ids.clone())
                .push(")");
        }
    }

    // 2. Filtros opcionais (cada um presente vira um AND)
    if let Some(status) = filters.status {
        qb.push(" AND c.status = ").push_bind(status);
    }
    if let Some(date) = filters.date {
        qb.push(" AND c.scheduled_date = ").push_bind(date);
    }
    if let Some(property) = filters.property {
        qb.push(" AND c.property_id = ").push_bind(property);
    }

    // 3. Ordenação: data crescente, desempate pela hora
    qb.push(" ORDER BY c.scheduled_date ASC, c.scheduled_time ASC");
    qb
}

impl CleaningRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Lista faxinas dentro de um escopo, com filtros conjuntivos.
    // Pré-condição: portfólio vazio já foi curto-circuitado no service.
    pub async fn list_scoped(
        &self,
        scope: &CleaningScope,
        filters: &CleaningFilters,
    ) -> Result<Vec<CleaningWithDetails>, AppError> {
        let mut qb = build_list_query(scope, filters);
        let rows = qb
            .build_query_as::<CleaningWithDetails>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cleaning>, AppError> {
        let maybe_cleaning = sqlx::query_as::<_, Cleaning>(&format!(
            "SELECT {CLEANING_COLUMNS} FROM cleanings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_cleaning)
    }

    pub async fn schedule<'e, E>(
        &self,
        executor: E,
        property_id: Uuid,
        cleaning_type_id: Uuid,
        cleaner_id: Option<Uuid>,
        scheduled_date: NaiveDate,
        scheduled_time: NaiveTime,
        status: CleaningStatus,
    ) -> Result<Cleaning, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cleaning = sqlx::query_as::<_, Cleaning>(&format!(
            r#"
            INSERT INTO cleanings (
                property_id, cleaning_type_id, cleaner_id,
                scheduled_date, scheduled_time, status
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {CLEANING_COLUMNS}
            "#
        ))
        .bind(property_id)
        .bind(cleaning_type_id)
        .bind(cleaner_id)
        .bind(scheduled_date)
        .bind(scheduled_time)
        .bind(status)
        .fetch_one(executor)
        .await?;

        Ok(cleaning)
    }

    // Update guardado: só aplica se o status atual ainda for o esperado.
    // 0 linhas afetadas = outra requisição passou na frente.
    pub async fn transition_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        expected: CleaningStatus,
        next: CleaningStatus,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "UPDATE cleanings SET status = $3, updated_at = NOW() WHERE id = $1 AND status = $2",
        )
        .bind(id)
        .bind(expected)
        .bind(next)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql_for(scope: &CleaningScope, filters: &CleaningFilters) -> String {
        build_list_query(scope, filters).sql().to_string()
    }

    #[test]
    fn escopo_admin_nao_restringe() {
        let sql = sql_for(&CleaningScope::Admin, &CleaningFilters::default());
        assert!(!sql.contains("c.cleaner_id ="));
        assert!(!sql.contains("= ANY("));
        assert!(sql.contains("ORDER BY c.scheduled_date ASC, c.scheduled_time ASC"));
    }

    #[test]
    fn escopo_faxineiro_restringe_por_atribuicao() {
        let sql = sql_for(
            &CleaningScope::Cleaner(Uuid::nil()),
            &CleaningFilters::default(),
        );
        assert!(sql.contains("c.cleaner_id = $1"));
    }

    #[test]
    fn escopo_portfolio_restringe_por_imoveis() {
        let sql = sql_for(
            &CleaningScope::Portfolio(vec![Uuid::nil()]),
            &CleaningFilters::default(),
        );
        assert!(sql.contains("c.property_id = ANY($1)"));
    }

    #[test]
    fn filtros_sao_conjuntivos_e_vem_depois_do_escopo() {
        let filters = CleaningFilters {
            status: Some(CleaningStatus::Completed),
            date: NaiveDate::from_ymd_opt(2025, 6, 15),
            property: Some(Uuid::nil()),
        };
        let sql = sql_for(&CleaningScope::Cleaner(Uuid::nil()), &filters);

        let scope_pos = sql.find("c.cleaner_id = $1").unwrap();
        let status_pos = sql.find("c.status = $2").unwrap();
        let date_pos = sql.find("c.scheduled_date = $3").unwrap();
        let property_pos = sql.find("c.property_id = $4").unwrap();

        assert!(scope_pos < status_pos);
        assert!(status_pos < date_pos);
        assert!(date_pos < property_pos);
    }

    #[test]
    fn filtro_ausente_nao_gera_predicado() {
        let filters = CleaningFilters {
            status: None,
            date: None,
            property: Some(Uuid::nil()),
        };
        let sql = sql_for(&CleaningScope::Admin, &filters);
        assert!(!sql.contains("c.status ="));
        assert!(!sql.contains("c.scheduled_date ="));
        assert!(sql.contains("c.property_id = $1"));
    }
}
