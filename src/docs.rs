// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,
        handlers::auth::get_route,

        // --- Profiles (admin) ---
        handlers::profiles::list_profiles,
        handlers::profiles::update_role,
        handlers::profiles::update_approval,
        handlers::profiles::update_active,

        // --- Properties ---
        handlers::properties::create_property,
        handlers::properties::list_properties,
        handlers::properties::get_property,
        handlers::properties::update_property,
        handlers::properties::list_sync_configs,

        // --- Reference ---
        handlers::cleaning_types::create_cleaning_type,
        handlers::cleaning_types::list_cleaning_types,
        handlers::cleaning_types::update_cleaning_type,
        handlers::checklists::create_checklist,
        handlers::checklists::list_checklists,
        handlers::checklists::update_checklist,

        // --- Catalog ---
        handlers::catalog::create_catalog_item,
        handlers::catalog::list_catalog,
        handlers::catalog::list_categories,
        handlers::catalog::update_catalog_item,

        // --- Cleanings ---
        handlers::cleanings::list_cleanings,
        handlers::cleanings::today_cleanings,
        handlers::cleanings::schedule_cleaning,
        handlers::cleanings::update_status,

        // --- Lost Items ---
        handlers::lost_items::report_lost_item,
        handlers::lost_items::list_lost_items,
        handlers::lost_items::acknowledge_lost_item,

        // --- Dashboard ---
        handlers::dashboard::admin_dashboard,
        handlers::dashboard::pm_dashboard,
        handlers::dashboard::cleaner_dashboard,

        // --- Sync ---
        handlers::sync::record_sync_result,
    ),
    components(
        schemas(
            // --- Profiles ---
            models::profile::ProfileRole,
            models::profile::RouteTarget,
            models::profile::Profile,
            models::profile::UpdateRolePayload,
            models::profile::UpdateApprovalPayload,
            models::profile::UpdateActivePayload,

            // --- Auth ---
            models::auth::RegisterPayload,
            models::auth::LoginPayload,
            models::auth::AuthResponse,

            // --- Properties ---
            models::property::Property,
            models::property::CreatePropertyPayload,
            models::property::UpdatePropertyPayload,

            // --- Cleanings ---
            models::cleaning::CleaningStatus,
            models::cleaning::Cleaning,
            models::cleaning::CleaningWithDetails,
            models::cleaning::ScheduleCleaningPayload,
            models::cleaning::UpdateStatusPayload,

            // --- Reference ---
            models::cleaning_type::CleaningType,
            models::cleaning_type::CreateCleaningTypePayload,
            models::cleaning_type::UpdateCleaningTypePayload,
            models::checklist::ChecklistTemplate,
            models::checklist::CreateChecklistPayload,
            models::checklist::UpdateChecklistPayload,

            // --- Catalog ---
            models::catalog::DamageCatalogItem,
            models::catalog::CreateCatalogItemPayload,
            models::catalog::UpdateCatalogItemPayload,

            // --- Lost Items ---
            models::lost_item::LostItemReport,
            models::lost_item::LostItemWithDetails,
            models::lost_item::CreateLostItemPayload,

            // --- iCal ---
            models::ical::IcalSyncConfig,
            models::ical::SyncOutcomePayload,

            // --- Dashboard ---
            models::dashboard::CleaningSummary,
            models::dashboard::ChecklistSummary,
            models::dashboard::CatalogSummary,
            models::dashboard::SyncStatusSummary,
            models::dashboard::AdminDashboard,
            models::dashboard::PmDashboard,
            models::dashboard::CleanerDashboard,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Me", description = "Dados e destino do principal autenticado"),
        (name = "Profiles", description = "Gestão de Perfis (admin)"),
        (name = "Properties", description = "Gestão de Imóveis"),
        (name = "Reference", description = "Tipos de Faxina e Checklists"),
        (name = "Catalog", description = "Catálogo de Danos"),
        (name = "Cleanings", description = "Agendamento e Execução de Faxinas"),
        (name = "LostItems", description = "Itens Esquecidos"),
        (name = "Dashboard", description = "Painéis por Papel"),
        (name = "Sync", description = "Sincronização de Calendários Externos")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
