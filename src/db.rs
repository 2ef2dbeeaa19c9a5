pub mod profile_repo;
pub use profile_repo::ProfileRepository;
pub mod property_repo;
pub use property_repo::PropertyRepository;
pub mod cleaning_type_repo;
pub use cleaning_type_repo::CleaningTypeRepository;
pub mod cleaning_repo;
pub use cleaning_repo::CleaningRepository;
pub mod checklist_repo;
pub use checklist_repo::ChecklistRepository;
pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod lost_item_repo;
pub use lost_item_repo::LostItemRepository;
pub mod ical_repo;
pub use ical_repo::IcalRepository;
