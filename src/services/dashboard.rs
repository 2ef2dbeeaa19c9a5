// src/services/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::{CatalogRepository, ChecklistRepository, ProfileRepository, PropertyRepository},
    models::{
        catalog::DamageCatalogItem,
        checklist::ChecklistTemplate,
        cleaning::{CleaningFilters, CleaningStatus},
        dashboard::{
            AdminDashboard, CatalogSummary, ChecklistSummary, CleanerDashboard, CleaningSummary,
            PmDashboard,
        },
        profile::Profile,
    },
    services::{cleaning::CleaningService, sync::SyncService},
};

// ---
// Funções puras de agregação. Sem efeito colateral e totais sobre
// coleções vazias; quem busca os dados são os métodos do service.
// ---

// Canceladas não são trabalho feito nem trabalho por fazer: ficam fora dos
// dois baldes e só aparecem no total.
pub fn summarize_cleanings(statuses: &[CleaningStatus]) -> CleaningSummary {
    let completed_count = statuses
        .iter()
        .filter(|s| **s == CleaningStatus::Completed)
        .count() as i64;
    let pending_count = statuses
        .iter()
        .filter(|s| !matches!(s, CleaningStatus::Completed | CleaningStatus::Cancelled))
        .count() as i64;

    CleaningSummary {
        completed_count,
        pending_count,
        total: statuses.len() as i64,
    }
}

pub fn summarize_checklists(templates: &[ChecklistTemplate]) -> ChecklistSummary {
    let template_count = templates.len() as i64;
    let total_items: i64 = templates.iter().map(|t| t.items.len() as i64).sum();
    // Zero modelos => média 0, nada de divisão por zero.
    let average_items = if template_count == 0 {
        0
    } else {
        (total_items as f64 / template_count as f64).round() as i64
    };

    ChecklistSummary {
        template_count,
        total_items,
        average_items,
    }
}

// Catálogo vazio devolve 0/0 por política explícita, não é erro.
pub fn summarize_catalog(items: &[DamageCatalogItem]) -> CatalogSummary {
    let min_price = items
        .iter()
        .map(|i| i.estimated_price)
        .min()
        .unwrap_or(Decimal::ZERO);
    let max_price = items
        .iter()
        .map(|i| i.estimated_price)
        .max()
        .unwrap_or(Decimal::ZERO);

    CatalogSummary {
        item_count: items.len() as i64,
        min_price,
        max_price,
    }
}

// ---
// Composição por papel. Se qualquer busca intermediária falhar, o painel
// inteiro falha: nunca devolvemos um resumo computado pela metade.
// ---

#[derive(Clone)]
pub struct DashboardService {
    cleaning: CleaningService,
    sync: SyncService,
    profile_repo: ProfileRepository,
    checklist_repo: ChecklistRepository,
    catalog_repo: CatalogRepository,
    property_repo: PropertyRepository,
}

impl DashboardService {
    pub fn new(
        cleaning: CleaningService,
        sync: SyncService,
        profile_repo: ProfileRepository,
        checklist_repo: ChecklistRepository,
        catalog_repo: CatalogRepository,
        property_repo: PropertyRepository,
    ) -> Self {
        Self {
            cleaning,
            sync,
            profile_repo,
            checklist_repo,
            catalog_repo,
            property_repo,
        }
    }

    pub async fn admin_dashboard(
        &self,
        admin: &Profile,
        reference_date: NaiveDate,
    ) -> Result<AdminDashboard, AppError> {
        let filters = CleaningFilters {
            date: Some(reference_date),
            ..Default::default()
        };
        let cleanings = self.cleaning.list_for(admin, &filters).await?;
        let statuses: Vec<CleaningStatus> = cleanings.iter().map(|c| c.status).collect();

        let templates = self.checklist_repo.list_all().await?;
        let catalog_items = self.catalog_repo.list_all().await?;

        Ok(AdminDashboard {
            cleanings_today: summarize_cleanings(&statuses),
            total_properties: self.property_repo.count_all().await?,
            pending_approvals: self.profile_repo.count_pending_approvals().await?,
            checklists: summarize_checklists(&templates),
            catalog: summarize_catalog(&catalog_items),
        })
    }

    pub async fn pm_dashboard(
        &self,
        manager: &Profile,
        reference_date: NaiveDate,
    ) -> Result<PmDashboard, AppError> {
        let filters = CleaningFilters {
            date: Some(reference_date),
            ..Default::default()
        };
        let cleanings = self.cleaning.list_for(manager, &filters).await?;
        let statuses: Vec<CleaningStatus> = cleanings.iter().map(|c| c.status).collect();

        let sync = self.sync.summary_for_manager(manager.id).await?;

        Ok(PmDashboard {
            cleanings_today: summarize_cleanings(&statuses),
            total_properties: sync.total_properties,
            sync,
        })
    }

    pub async fn cleaner_dashboard(
        &self,
        cleaner: &Profile,
        reference_date: NaiveDate,
    ) -> Result<CleanerDashboard, AppError> {
        let today = self
            .cleaning
            .today_for_cleaner(cleaner.id, reference_date)
            .await?;
        let statuses: Vec<CleaningStatus> = today.iter().map(|c| c.status).collect();

        // A lista já vem em ordem de hora; a próxima é a primeira que ainda
        // está por fazer.
        let next_cleaning = today
            .iter()
            .find(|c| matches!(c.status, CleaningStatus::Assigned | CleaningStatus::InProgress))
            .cloned();

        Ok(CleanerDashboard {
            today: summarize_cleanings(&statuses),
            next_cleaning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn resumo_de_faxinas_separa_baldes() {
        use CleaningStatus::*;
        let statuses = [Completed, Pending, Assigned, InProgress, Cancelled, Completed];
        let summary = summarize_cleanings(&statuses);
        assert_eq!(summary.completed_count, 2);
        assert_eq!(summary.pending_count, 3);
        assert_eq!(summary.total, 6);
    }

    // pendentes + concluídas <= total, com igualdade exatamente quando não
    // há canceladas.
    #[test]
    fn canceladas_ficam_fora_dos_dois_baldes() {
        use CleaningStatus::*;

        let sem_canceladas = summarize_cleanings(&[Completed, Pending]);
        assert_eq!(
            sem_canceladas.completed_count + sem_canceladas.pending_count,
            sem_canceladas.total
        );

        let com_canceladas = summarize_cleanings(&[Completed, Pending, Cancelled]);
        assert!(
            com_canceladas.completed_count + com_canceladas.pending_count
                < com_canceladas.total
        );
    }

    #[test]
    fn resumo_de_faxinas_vazio_nao_quebra() {
        let summary = summarize_cleanings(&[]);
        assert_eq!(summary.completed_count, 0);
        assert_eq!(summary.pending_count, 0);
        assert_eq!(summary.total, 0);
    }

    fn template_with_items(count: usize) -> ChecklistTemplate {
        ChecklistTemplate {
            id: Uuid::new_v4(),
            name: "Checklist".into(),
            cleaning_type_id: Uuid::new_v4(),
            items: (0..count).map(|i| format!("Tarefa {i}")).collect(),
        }
    }

    #[test]
    fn media_de_itens_arredondada() {
        let templates = vec![
            template_with_items(4),
            template_with_items(6),
            template_with_items(5),
        ];
        let summary = summarize_checklists(&templates);
        assert_eq!(summary.template_count, 3);
        assert_eq!(summary.total_items, 15);
        assert_eq!(summary.average_items, 5);
    }

    #[test]
    fn zero_modelos_nao_divide_por_zero() {
        let summary = summarize_checklists(&[]);
        assert_eq!(summary.template_count, 0);
        assert_eq!(summary.average_items, 0);
    }

    fn item_with_price(price: Decimal) -> DamageCatalogItem {
        DamageCatalogItem {
            id: Uuid::new_v4(),
            category: "Geral".into(),
            name: "Item".into(),
            estimated_price: price,
        }
    }

    #[test]
    fn precos_minimo_e_maximo_do_catalogo() {
        let items = vec![
            item_with_price(Decimal::new(1250, 2)), // 12.50
            item_with_price(Decimal::new(4000, 2)), // 40.00
            item_with_price(Decimal::new(2500, 2)), // 25.00
        ];
        let summary = summarize_catalog(&items);
        assert_eq!(summary.min_price, Decimal::new(1250, 2));
        assert_eq!(summary.max_price, Decimal::new(4000, 2));
        assert_eq!(summary.item_count, 3);
    }

    #[test]
    fn catalogo_vazio_devolve_zeros() {
        let summary = summarize_catalog(&[]);
        assert_eq!(summary.min_price, Decimal::ZERO);
        assert_eq!(summary.max_price, Decimal::ZERO);
        assert_eq!(summary.item_count, 0);
    }
}
