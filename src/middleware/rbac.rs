// src/middleware/rbac.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{
    common::error::AppError,
    models::profile::{Profile, ProfileRole},
    services::access,
};

/// 1. O Trait que define qual papel uma rota exige
pub trait RoleDef: Send + Sync + 'static {
    fn role() -> ProfileRole;
}

/// 2. O Extractor (Guardião)
pub struct RequireRole<T>(pub PhantomData<T>);

// 3. Implementação do FromRequestParts

impl<T, S> FromRequestParts<S> for RequireRole<T>
where
    T: RoleDef,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A. Extrai o perfil que o auth_guard deixou nas extensions
        let profile = parts
            .extensions
            .get::<Profile>()
            .ok_or(AppError::InvalidToken)?;

        // B. Checagem de papel por igualdade. Papel errado não é erro de
        // verdade: devolvemos o destino certo e o frontend redireciona.
        match profile.parsed_role() {
            Some(role) if role == T::role() => {
                // Gestor só entra na própria área depois de aprovado.
                if role == ProfileRole::PropertyManager && !profile.is_approved {
                    return Err(AppError::PendingApproval);
                }
                Ok(RequireRole(PhantomData))
            }
            _ => Err(AppError::WrongArea(access::route_for(Some(profile)))),
        }
    }
}

// ---
// DEFINIÇÃO DOS PAPÉIS (TIPOS)
// ---

pub struct RoleAdmin;
impl RoleDef for RoleAdmin {
    fn role() -> ProfileRole {
        ProfileRole::Admin
    }
}

pub struct RoleCleaner;
impl RoleDef for RoleCleaner {
    fn role() -> ProfileRole {
        ProfileRole::Cleaner
    }
}

pub struct RolePropertyManager;
impl RoleDef for RolePropertyManager {
    fn role() -> ProfileRole {
        ProfileRole::PropertyManager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::RouteTarget;
    use axum::http::Request;
    use chrono::Utc;
    use uuid::Uuid;

    fn parts_with_profile(role: &str, is_approved: bool) -> Parts {
        let profile = Profile {
            id: Uuid::new_v4(),
            full_name: "Teste".into(),
            email: "teste@exemplo.com".into(),
            password_hash: "hash".into(),
            role: role.into(),
            is_approved,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let mut request = Request::new(());
        request.extensions_mut().insert(profile);
        let (parts, _) = request.into_parts();
        parts
    }

    #[tokio::test]
    async fn papel_certo_passa() {
        let mut parts = parts_with_profile("admin", false);
        let result = RequireRole::<RoleAdmin>::from_request_parts(&mut parts, &()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn papel_errado_recebe_o_destino_correto() {
        let mut parts = parts_with_profile("cleaner", false);
        let result = RequireRole::<RoleAdmin>::from_request_parts(&mut parts, &()).await;
        match result {
            Err(AppError::WrongArea(target)) => assert_eq!(target, RouteTarget::CleanerArea),
            Err(other) => panic!("esperava WrongArea, veio {other:?}"),
            Ok(_) => panic!("esperava WrongArea, mas o guard deixou passar"),
        }
    }

    #[tokio::test]
    async fn gestor_nao_aprovado_fica_aguardando() {
        let mut parts = parts_with_profile("property_manager", false);
        let result =
            RequireRole::<RolePropertyManager>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::PendingApproval)));
    }

    #[tokio::test]
    async fn sem_perfil_nas_extensions_e_nao_autenticado() {
        let (mut parts, _) = Request::new(()).into_parts();
        let result = RequireRole::<RoleAdmin>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }
}
