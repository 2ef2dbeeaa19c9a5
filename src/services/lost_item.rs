// src/services/lost_item.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CleaningRepository, LostItemRepository},
    models::{
        lost_item::{LostItemReport, LostItemWithDetails},
        profile::{Profile, ProfileRole},
    },
    services::access,
};

#[derive(Clone)]
pub struct LostItemService {
    repo: LostItemRepository,
    cleaning_repo: CleaningRepository,
    pool: PgPool,
}

impl LostItemService {
    pub fn new(repo: LostItemRepository, cleaning_repo: CleaningRepository, pool: PgPool) -> Self {
        Self {
            repo,
            cleaning_repo,
            pool,
        }
    }

    // Faxineiro relata item esquecido na faxina que é dele; admin pode
    // registrar por qualquer faxina.
    pub async fn report(
        &self,
        actor: &Profile,
        cleaning_id: Uuid,
        description: &str,
    ) -> Result<LostItemReport, AppError> {
        let cleaning = self
            .cleaning_repo
            .find_by_id(cleaning_id)
            .await?
            .ok_or(AppError::CleaningNotFound)?;

        match actor.parsed_role() {
            Some(ProfileRole::Admin) => {}
            Some(ProfileRole::Cleaner) => {
                if cleaning.cleaner_id != Some(actor.id) {
                    return Err(AppError::NotAssignedToCleaning);
                }
            }
            _ => return Err(AppError::WrongArea(access::route_for(Some(actor)))),
        }

        self.repo
            .create(&self.pool, cleaning.id, actor.id, description)
            .await
    }

    // A tela de revisão: gestor só enxerga relatos do próprio portfólio.
    pub async fn list_for(&self, actor: &Profile) -> Result<Vec<LostItemWithDetails>, AppError> {
        match actor.parsed_role() {
            Some(ProfileRole::Admin) => self.repo.list_all().await,
            Some(ProfileRole::PropertyManager) => {
                if !actor.is_approved {
                    return Err(AppError::PendingApproval);
                }
                self.repo.list_by_manager(actor.id).await
            }
            _ => Err(AppError::WrongArea(access::route_for(Some(actor)))),
        }
    }

    pub async fn acknowledge(
        &self,
        actor: &Profile,
        report_id: Uuid,
    ) -> Result<LostItemReport, AppError> {
        let manager_id = self
            .repo
            .find_property_manager(report_id)
            .await?
            .ok_or(AppError::LostItemNotFound)?;

        match actor.parsed_role() {
            Some(ProfileRole::Admin) => {}
            Some(ProfileRole::PropertyManager) => {
                if manager_id != actor.id {
                    return Err(AppError::OutsidePortfolio);
                }
            }
            _ => return Err(AppError::WrongArea(access::route_for(Some(actor)))),
        }

        // Reconhecer um relato já reconhecido é conflito: alguém revisou
        // antes desta requisição.
        let affected = self.repo.acknowledge(report_id).await?;
        if affected == 0 {
            return Err(AppError::StaleUpdate);
        }

        self.repo
            .find_by_id(report_id)
            .await?
            .ok_or(AppError::LostItemNotFound)
    }
}
