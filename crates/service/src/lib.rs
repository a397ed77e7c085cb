//! Service layer for fieldsense
//!
//! Centralizes business logic between the HTTP handlers and storage.

mod alert_service;
mod dashboard_service;
mod error;
mod field_service;
mod reading_service;
mod user_service;

pub use alert_service::AlertService;
pub use dashboard_service::DashboardService;
pub use error::ServiceError;
pub use field_service::FieldService;
pub use reading_service::ReadingService;
pub use user_service::UserService;
