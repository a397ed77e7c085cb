//! Storage layer for fieldsense
//!
//! Async storage traits with two backends: PostgreSQL via sqlx (feature
//! `postgres`, default) and an in-memory store used by tests and demos.

mod error;
mod mem;
#[cfg(feature = "postgres")]
mod pg;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use mem::MemStorage;
#[cfg(feature = "postgres")]
pub use pg::PgStorage;
#[cfg(feature = "postgres")]
pub use pg_migrations::run_pg_migrations;
pub use traits::{AlertStore, FieldStore, SeriesStore, Storage, UserStore};
