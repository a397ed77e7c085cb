use async_trait::async_trait;
use fieldsense_core::SeriesRecord;

use crate::error::StorageError;

/// Append-mostly time-series rows keyed by field, one implementation per
/// record type (satellite readings, weather readings, yield predictions).
///
/// Rows are never deduplicated by date: repeated ingestion for the same
/// field and day produces multiple rows, all kept.
#[async_trait]
pub trait SeriesStore<R: SeriesRecord>: Send + Sync {
    /// Append a new row. Always succeeds given a valid field reference.
    async fn append(&self, new: R::New) -> Result<R, StorageError>;

    /// The row with the maximum date for the field, or `None` if the field
    /// has no rows. Ties on equal dates are broken by `created_at`, then by
    /// id as a stable final disambiguator (most recently inserted wins in
    /// the in-memory backend).
    async fn latest_for(&self, field_id: &str) -> Result<Option<R>, StorageError>;

    /// All rows for the field, ordered by date descending.
    async fn all_for(&self, field_id: &str) -> Result<Vec<R>, StorageError>;
}
