// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ProfileRepository,
    models::{
        auth::Claims,
        profile::{Profile, ProfileRole},
    },
};

#[derive(Clone)]
pub struct AuthService {
    profile_repo: ProfileRepository,
    jwt_secret: String,
    pool: PgPool,
}

impl AuthService {
    pub fn new(profile_repo: ProfileRepository, jwt_secret: String, pool: PgPool) -> Self {
        Self {
            profile_repo,
            jwt_secret,
            pool,
        }
    }

    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        role: ProfileRole,
    ) -> Result<String, AppError> {
        // Admins são provisionados por fora; ninguém se registra como admin.
        if role == ProfileRole::Admin {
            return Err(AppError::SignupRoleNotAllowed);
        }

        // Gestores entram aguardando aprovação do admin; faxineiros
        // já entram liberados.
        let is_approved = role != ProfileRole::PropertyManager;

        // 1. Hashing (fora da transação, não toca no banco)
        let password_clone = password.to_owned();
        let password_hash =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        // 2. Cria o perfil dentro de uma transação
        let mut tx = self.pool.begin().await?;

        let profile = self
            .profile_repo
            .create(
                &mut *tx,
                full_name,
                email,
                &password_hash,
                role.as_slug(),
                is_approved,
            )
            .await?;

        tx.commit().await?;

        tracing::info!("👤 Novo perfil registrado: {} ({})", profile.email, profile.role);

        // 3. Gera o token
        self.create_token(profile.id)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let profile = self
            .profile_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Perfil desativado não entra, mas a resposta é a mesma de
        // credencial errada para não vazar o estado da conta.
        if !profile.is_active {
            return Err(AppError::InvalidCredentials);
        }

        let password_clone = password.to_owned();
        let password_hash_clone = profile.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token(profile.id)
    }

    // Sessão sem perfil correspondente = provisionamento inconsistente:
    // tratamos igual a não-autenticado.
    pub async fn validate_token(&self, token: &str) -> Result<Profile, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        let profile = self
            .profile_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::ProfileMissing)?;

        if !profile.is_active {
            return Err(AppError::InvalidToken);
        }

        Ok(profile)
    }

    fn create_token(&self, profile_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: profile_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
