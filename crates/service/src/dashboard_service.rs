//! The dashboard rollup: four summary numbers for one user.

use std::sync::Arc;

use fieldsense_core::{
    DashboardStats, SatelliteReading, YieldPrediction, HEALTHY_NDVI_THRESHOLD,
};
use fieldsense_storage::traits::{FieldStore, SeriesStore, Storage};

use crate::ServiceError;

/// Computes `DashboardStats` from current store state on every call.
/// Nothing is cached.
pub struct DashboardService {
    fields: Arc<dyn FieldStore>,
    satellite: Arc<dyn SeriesStore<SatelliteReading>>,
    predictions: Arc<dyn SeriesStore<YieldPrediction>>,
}

impl DashboardService {
    pub fn new<S: Storage + 'static>(storage: &Arc<S>) -> Self {
        let fields: Arc<dyn FieldStore> = storage.clone();
        let satellite: Arc<dyn SeriesStore<SatelliteReading>> = storage.clone();
        let predictions: Arc<dyn SeriesStore<YieldPrediction>> = storage.clone();
        Self { fields, satellite, predictions }
    }

    /// Load the user's fields, then fold per-field latest readings into the
    /// four summary numbers:
    ///
    /// - `total_fields`: field count;
    /// - `total_acres`: sum of sizes, missing size counts as 0;
    /// - `healthy_fields`: fields whose latest satellite NDVI is strictly
    ///   above the threshold; a field with no satellite data (or a reading
    ///   with no NDVI) never counts;
    /// - `predicted_yield`: sum of the latest predicted yield per field,
    ///   missing prediction contributes 0.
    ///
    /// The per-field reads are independent read-only lookups; the loop is
    /// sequential because N is small here.
    pub async fn stats_for(&self, user_id: &str) -> Result<DashboardStats, ServiceError> {
        let fields = self.fields.fields_by_user(user_id).await?;

        let total_fields = fields.len();
        let total_acres: f64 = fields.iter().map(|f| f.size.unwrap_or(0.0)).sum();

        let mut healthy_fields = 0_usize;
        let mut predicted_yield = 0.0_f64;
        for field in &fields {
            let reading = self.satellite.latest_for(&field.id).await?;
            if reading.is_some_and(|r| r.ndvi.is_some_and(|v| v > HEALTHY_NDVI_THRESHOLD)) {
                healthy_fields += 1;
            }

            if let Some(prediction) = self.predictions.latest_for(&field.id).await? {
                predicted_yield += prediction.predicted_yield.unwrap_or(0.0);
            }
        }

        tracing::debug!(user_id, total_fields, healthy_fields, "dashboard stats computed");
        Ok(DashboardStats { total_fields, healthy_fields, total_acres, predicted_yield })
    }
}
