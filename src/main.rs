// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Dados do principal (protegidas)
    let me_routes = Router::new()
        .route("/", get(handlers::auth::get_me))
        .route("/route", get(handlers::auth::get_route));

    // Gestão de perfis (admin; o guard de papel fica no extractor)
    let profile_routes = Router::new()
        .route("/", get(handlers::profiles::list_profiles))
        .route("/{id}/role", patch(handlers::profiles::update_role))
        .route("/{id}/approval", patch(handlers::profiles::update_approval))
        .route("/{id}/active", patch(handlers::profiles::update_active));

    let property_routes = Router::new()
        .route(
            "/",
            post(handlers::properties::create_property)
                .get(handlers::properties::list_properties),
        )
        .route(
            "/{id}",
            get(handlers::properties::get_property)
                .patch(handlers::properties::update_property),
        )
        .route(
            "/{id}/sync-configs",
            get(handlers::properties::list_sync_configs),
        );

    let cleaning_type_routes = Router::new()
        .route(
            "/",
            post(handlers::cleaning_types::create_cleaning_type)
                .get(handlers::cleaning_types::list_cleaning_types),
        )
        .route(
            "/{id}",
            patch(handlers::cleaning_types::update_cleaning_type),
        );

    let checklist_routes = Router::new()
        .route(
            "/",
            post(handlers::checklists::create_checklist)
                .get(handlers::checklists::list_checklists),
        )
        .route("/{id}", patch(handlers::checklists::update_checklist));

    let catalog_routes = Router::new()
        .route(
            "/",
            post(handlers::catalog::create_catalog_item).get(handlers::catalog::list_catalog),
        )
        .route("/categories", get(handlers::catalog::list_categories))
        .route("/{id}", patch(handlers::catalog::update_catalog_item));

    let cleaning_routes = Router::new()
        .route(
            "/",
            get(handlers::cleanings::list_cleanings).post(handlers::cleanings::schedule_cleaning),
        )
        .route("/today", get(handlers::cleanings::today_cleanings))
        .route("/{id}/status", patch(handlers::cleanings::update_status))
        .route(
            "/{id}/lost-items",
            post(handlers::lost_items::report_lost_item),
        );

    let lost_item_routes = Router::new()
        .route("/", get(handlers::lost_items::list_lost_items))
        .route(
            "/{id}/acknowledge",
            patch(handlers::lost_items::acknowledge_lost_item),
        );

    let dashboard_routes = Router::new()
        .route("/admin", get(handlers::dashboard::admin_dashboard))
        .route("/pm", get(handlers::dashboard::pm_dashboard))
        .route("/cleaner", get(handlers::dashboard::cleaner_dashboard));

    let sync_routes = Router::new().route(
        "/{id}/result",
        post(handlers::sync::record_sync_result),
    );

    // Tudo que não é público passa pelo auth_guard.
    let protected_routes = Router::new()
        .nest("/api/me", me_routes)
        .nest("/api/profiles", profile_routes)
        .nest("/api/properties", property_routes)
        .nest("/api/cleaning-types", cleaning_type_routes)
        .nest("/api/checklists", checklist_routes)
        .nest("/api/catalog", catalog_routes)
        .nest("/api/cleanings", cleaning_routes)
        .nest("/api/lost-items", lost_item_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/sync-configs", sync_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .merge(protected_routes)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
