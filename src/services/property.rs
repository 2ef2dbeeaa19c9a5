// src/services/property.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{IcalRepository, PropertyRepository},
    models::{
        ical::IcalSyncConfig,
        profile::{Profile, ProfileRole},
        property::{CreatePropertyPayload, Property, UpdatePropertyPayload},
    },
    services::access,
};

#[derive(Clone)]
pub struct PropertyService {
    repo: PropertyRepository,
    ical_repo: IcalRepository,
    pool: PgPool,
}

impl PropertyService {
    pub fn new(repo: PropertyRepository, ical_repo: IcalRepository, pool: PgPool) -> Self {
        Self {
            repo,
            ical_repo,
            pool,
        }
    }

    pub async fn list_for(&self, profile: &Profile) -> Result<Vec<Property>, AppError> {
        match profile.parsed_role() {
            Some(ProfileRole::Admin) => self.repo.list_all().await,
            Some(ProfileRole::PropertyManager) => self.repo.list_by_manager(profile.id).await,
            _ => Err(AppError::WrongArea(access::route_for(Some(profile)))),
        }
    }

    pub async fn create(
        &self,
        manager: &Profile,
        payload: &CreatePropertyPayload,
    ) -> Result<Property, AppError> {
        let mut tx = self.pool.begin().await?;

        let property = self
            .repo
            .create(
                &mut *tx,
                manager.id,
                &payload.name,
                &payload.address,
                payload.ical_airbnb.as_deref(),
                payload.ical_booking.as_deref(),
                payload.ical_other.as_deref(),
                payload.latitude,
                payload.longitude,
                payload.access_instructions.as_deref(),
            )
            .await?;

        // As configurações de sincronização nascem junto com as URLs.
        self.reconcile_sync_configs(&mut tx, &property).await?;

        tx.commit().await?;

        tracing::info!("🏠 Imóvel criado: {} ({})", property.name, property.id);
        Ok(property)
    }

    pub async fn update(
        &self,
        actor: &Profile,
        property_id: Uuid,
        payload: &UpdatePropertyPayload,
    ) -> Result<Property, AppError> {
        let mut property = self.find_visible(actor, property_id).await?;

        // Merge do patch: campo ausente mantém o valor atual.
        // Nas URLs de iCal, string vazia limpa a conexão.
        if let Some(name) = &payload.name {
            property.name = name.clone();
        }
        if let Some(address) = &payload.address {
            property.address = address.clone();
        }
        if let Some(url) = &payload.ical_airbnb {
            property.ical_airbnb = if url.is_empty() { None } else { Some(url.clone()) };
        }
        if let Some(url) = &payload.ical_booking {
            property.ical_booking = if url.is_empty() { None } else { Some(url.clone()) };
        }
        if let Some(url) = &payload.ical_other {
            property.ical_other = if url.is_empty() { None } else { Some(url.clone()) };
        }
        if let Some(latitude) = payload.latitude {
            property.latitude = Some(latitude);
        }
        if let Some(longitude) = payload.longitude {
            property.longitude = Some(longitude);
        }
        if let Some(instructions) = &payload.access_instructions {
            property.access_instructions = Some(instructions.clone());
        }

        let mut tx = self.pool.begin().await?;
        let updated = self.repo.update(&mut *tx, &property).await?;
        self.reconcile_sync_configs(&mut tx, &updated).await?;
        tx.commit().await?;

        Ok(updated)
    }

    // Imóvel visível para o ator: admin enxerga qualquer um; gestor, só os
    // do próprio portfólio.
    pub async fn find_visible(
        &self,
        actor: &Profile,
        property_id: Uuid,
    ) -> Result<Property, AppError> {
        let property = self
            .repo
            .find_by_id(property_id)
            .await?
            .ok_or(AppError::PropertyNotFound)?;

        match actor.parsed_role() {
            Some(ProfileRole::Admin) => Ok(property),
            Some(ProfileRole::PropertyManager) => {
                if property.property_manager_id != actor.id {
                    return Err(AppError::OutsidePortfolio);
                }
                Ok(property)
            }
            _ => Err(AppError::WrongArea(access::route_for(Some(actor)))),
        }
    }

    pub async fn sync_configs_for(
        &self,
        actor: &Profile,
        property_id: Uuid,
    ) -> Result<Vec<IcalSyncConfig>, AppError> {
        let property = self.find_visible(actor, property_id).await?;
        self.ical_repo.list_by_property(property.id).await
    }

    // Uma linha de configuração por fonte com URL presente; fonte removida
    // perde a linha.
    async fn reconcile_sync_configs(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        property: &Property,
    ) -> Result<(), AppError> {
        let sources = [
            ("airbnb", &property.ical_airbnb),
            ("booking", &property.ical_booking),
            ("other", &property.ical_other),
        ];

        for (source, url) in sources {
            match url.as_deref() {
                Some(url) if !url.is_empty() => {
                    self.ical_repo.upsert(&mut **tx, property.id, source, url).await?;
                }
                _ => {
                    self.ical_repo.delete(&mut **tx, property.id, source).await?;
                }
            }
        }
        Ok(())
    }
}
