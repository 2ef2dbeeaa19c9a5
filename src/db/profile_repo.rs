// src/db/profile_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::profile::Profile};

const PROFILE_COLUMNS: &str =
    "id, full_name, email, password_hash, role, is_approved, is_active, created_at, updated_at";

// O repositório de perfis, responsável por todas as interações com a tabela 'profiles'
#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca um perfil pelo seu e-mail
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, AppError> {
        let maybe_profile = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_profile)
    }

    // Busca um perfil pelo seu ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, AppError> {
        let maybe_profile = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_profile)
    }

    pub async fn list_all(&self) -> Result<Vec<Profile>, AppError> {
        let profiles = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY full_name ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(profiles)
    }

    // Gestores registrados mas ainda não liberados pelo admin.
    pub async fn count_pending_approvals(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM profiles WHERE role = 'property_manager' AND is_approved = FALSE",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    // Cria um novo perfil no banco de dados.
    // Com tratamento de erro específico para e-mails duplicados.
    pub async fn create<'e, E>(
        &self,
        executor: E,
        full_name: &str,
        email: &str,
        password_hash: &str,
        role: &str,
        is_approved: bool,
    ) -> Result<Profile, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            r#"
            INSERT INTO profiles (full_name, email, password_hash, role, is_approved)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(full_name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(is_approved)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    if let Some(constraint) = db_err.constraint() {
                        return match constraint {
                            // O nome padrão que o Postgres cria para "UNIQUE" na coluna email
                            "profiles_email_key" => AppError::EmailAlreadyExists,
                            _ => AppError::UniqueConstraintViolation(constraint.to_string()),
                        };
                    }
                }
            }
            e.into()
        })?;

        Ok(profile)
    }

    pub async fn update_role(&self, id: Uuid, role: &str) -> Result<Profile, AppError> {
        sqlx::query_as::<_, Profile>(&format!(
            r#"
            UPDATE profiles SET role = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::ProfileNotFound)
    }

    pub async fn update_approval(&self, id: Uuid, is_approved: bool) -> Result<Profile, AppError> {
        sqlx::query_as::<_, Profile>(&format!(
            r#"
            UPDATE profiles SET is_approved = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(is_approved)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::ProfileNotFound)
    }

    // Perfis nunca são apagados de verdade; desativar é o caminho.
    pub async fn update_active(&self, id: Uuid, is_active: bool) -> Result<Profile, AppError> {
        sqlx::query_as::<_, Profile>(&format!(
            r#"
            UPDATE profiles SET is_active = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::ProfileNotFound)
    }
}
