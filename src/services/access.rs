// src/services/access.rs

use crate::models::profile::{Profile, ProfileRole, RouteTarget};

// Decide para onde cada principal vai. Função pura e total: quem consome a
// API executa a navegação; aqui não há efeito colateral nenhum.
//
// Sem perfil (sessão órfã incluída) => login. Papel desconhecido => login.
// Gestor não aprovado => tela de aguardando aprovação.
pub fn route_for(profile: Option<&Profile>) -> RouteTarget {
    let Some(profile) = profile else {
        return RouteTarget::Login;
    };

    match profile.parsed_role() {
        Some(ProfileRole::Admin) => RouteTarget::AdminArea,
        Some(ProfileRole::Cleaner) => RouteTarget::CleanerArea,
        Some(ProfileRole::PropertyManager) if profile.is_approved => RouteTarget::PmArea,
        Some(ProfileRole::PropertyManager) => RouteTarget::PendingApproval,
        None => RouteTarget::Login,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn profile_with(role: &str, is_approved: bool) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            full_name: "Teste".into(),
            email: "teste@exemplo.com".into(),
            password_hash: "hash".into(),
            role: role.into(),
            is_approved,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn sem_perfil_vai_para_login() {
        assert_eq!(route_for(None), RouteTarget::Login);
    }

    #[test]
    fn cada_papel_vai_para_sua_area() {
        assert_eq!(
            route_for(Some(&profile_with("admin", false))),
            RouteTarget::AdminArea
        );
        assert_eq!(
            route_for(Some(&profile_with("cleaner", false))),
            RouteTarget::CleanerArea
        );
        assert_eq!(
            route_for(Some(&profile_with("property_manager", true))),
            RouteTarget::PmArea
        );
    }

    #[test]
    fn gestor_nao_aprovado_fica_aguardando() {
        assert_eq!(
            route_for(Some(&profile_with("property_manager", false))),
            RouteTarget::PendingApproval
        );
    }

    // O papel vem como TEXT do banco: qualquer slug fora do conjunto
    // conhecido precisa cair no ramo padrão.
    #[test]
    fn papel_desconhecido_cai_no_login() {
        for slug in ["superuser", "ADMIN", "gerente", ""] {
            assert_eq!(
                route_for(Some(&profile_with(slug, true))),
                RouteTarget::Login,
                "slug inesperado: {slug:?}"
            );
        }
    }
}
