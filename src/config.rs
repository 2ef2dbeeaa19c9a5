// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CatalogRepository, ChecklistRepository, CleaningRepository, CleaningTypeRepository,
        IcalRepository, LostItemRepository, ProfileRepository, PropertyRepository,
    },
    services::{
        AuthService, CleaningService, DashboardService, LostItemService, PropertyService,
        SyncService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,

    pub auth_service: AuthService,
    pub cleaning_service: CleaningService,
    pub property_service: PropertyService,
    pub dashboard_service: DashboardService,
    pub sync_service: SyncService,
    pub lost_item_service: LostItemService,

    // Repositórios de dado de referência, usados direto pelos handlers
    pub profile_repo: ProfileRepository,
    pub cleaning_type_repo: CleaningTypeRepository,
    pub checklist_repo: ChecklistRepository,
    pub catalog_repo: CatalogRepository,
}

impl AppState {
    // A assinatura retorna um Result: se a configuração falhar, quem decide
    // o que fazer é o main.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let profile_repo = ProfileRepository::new(db_pool.clone());
        let property_repo = PropertyRepository::new(db_pool.clone());
        let cleaning_type_repo = CleaningTypeRepository::new(db_pool.clone());
        let cleaning_repo = CleaningRepository::new(db_pool.clone());
        let checklist_repo = ChecklistRepository::new(db_pool.clone());
        let catalog_repo = CatalogRepository::new(db_pool.clone());
        let lost_item_repo = LostItemRepository::new(db_pool.clone());
        let ical_repo = IcalRepository::new(db_pool.clone());

        let auth_service =
            AuthService::new(profile_repo.clone(), jwt_secret.clone(), db_pool.clone());
        let cleaning_service = CleaningService::new(
            cleaning_repo.clone(),
            property_repo.clone(),
            cleaning_type_repo.clone(),
            profile_repo.clone(),
            db_pool.clone(),
        );
        let property_service =
            PropertyService::new(property_repo.clone(), ical_repo.clone(), db_pool.clone());
        let sync_service = SyncService::new(property_repo.clone(), ical_repo.clone());
        let dashboard_service = DashboardService::new(
            cleaning_service.clone(),
            sync_service.clone(),
            profile_repo.clone(),
            checklist_repo.clone(),
            catalog_repo.clone(),
            property_repo.clone(),
        );
        let lost_item_service =
            LostItemService::new(lost_item_repo, cleaning_repo, db_pool.clone());

        Ok(Self {
            db_pool,
            jwt_secret,
            auth_service,
            cleaning_service,
            property_service,
            dashboard_service,
            sync_service,
            lost_item_service,
            profile_repo,
            cleaning_type_repo,
            checklist_repo,
            catalog_repo,
        })
    }
}
