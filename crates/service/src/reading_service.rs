use std::sync::Arc;

use fieldsense_core::SeriesRecord;
use fieldsense_storage::traits::SeriesStore;

use crate::ServiceError;

/// Thin typed facade over one time-series store. One instance per record
/// type (satellite, weather, yield predictions).
pub struct ReadingService<R: SeriesRecord> {
    storage: Arc<dyn SeriesStore<R>>,
}

impl<R: SeriesRecord> ReadingService<R> {
    pub fn new<S: SeriesStore<R> + 'static>(storage: &Arc<S>) -> Self {
        let storage: Arc<dyn SeriesStore<R>> = storage.clone();
        Self { storage }
    }

    /// Append a reading. Repeated ingestion for the same field and date is
    /// expected and kept as separate rows.
    pub async fn ingest(&self, new: R::New) -> Result<R, ServiceError> {
        Ok(self.storage.append(new).await?)
    }

    pub async fn latest(&self, field_id: &str) -> Result<Option<R>, ServiceError> {
        Ok(self.storage.latest_for(field_id).await?)
    }

    pub async fn history(&self, field_id: &str) -> Result<Vec<R>, ServiceError> {
        Ok(self.storage.all_for(field_id).await?)
    }
}
