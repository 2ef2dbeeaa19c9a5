pub mod access;
pub mod auth;
pub use auth::AuthService;
pub mod cleaning;
pub use cleaning::CleaningService;
pub mod property;
pub use property::PropertyService;
pub mod dashboard;
pub use dashboard::DashboardService;
pub mod lost_item;
pub use lost_item::LostItemService;
pub mod sync;
pub use sync::SyncService;
