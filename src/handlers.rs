pub mod auth;
pub mod catalog;
pub mod checklists;
pub mod cleaning_types;
pub mod cleanings;
pub mod dashboard;
pub mod lost_items;
pub mod profiles;
pub mod properties;
pub mod sync;
