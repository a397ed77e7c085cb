//! In-memory storage backend.
//!
//! Implements the full trait set over `RwLock`-guarded vectors so services
//! and tests can run without a database. Mirrors the PostgreSQL backend's
//! observable behavior: foreign keys are checked, field deletion cascades
//! into series rows and field-scoped alerts, and latest-reading ties on
//! equal dates go to the most recently inserted row.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use fieldsense_core::{
    Alert, Field, FieldPatch, NewAlert, NewField, NewSatelliteReading, NewWeatherReading,
    NewYieldPrediction, SatelliteReading, SeriesRecord, UpsertUser, User, WeatherReading,
    YieldPrediction,
};

use crate::error::StorageError;
use crate::traits::{AlertStore, FieldStore, SeriesStore, UserStore};

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<String, User>,
    fields: Vec<Field>,
    satellite: Vec<SatelliteReading>,
    weather: Vec<WeatherReading>,
    predictions: Vec<YieldPrediction>,
    alerts: Vec<Alert>,
}

impl Inner {
    fn field_exists(&self, id: &str) -> bool {
        self.fields.iter().any(|f| f.id == id)
    }

    fn check_field_ref(&self, entity: &'static str, field_id: &str) -> Result<(), StorageError> {
        if self.field_exists(field_id) {
            Ok(())
        } else {
            Err(StorageError::Constraint(format!(
                "{entity} references missing field {field_id}"
            )))
        }
    }
}

#[derive(Debug, Default)]
pub struct MemStorage {
    inner: RwLock<Inner>,
}

impl MemStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Latest = max date; ties go to max `created_at`, then to the row
/// inserted last (vector order is insertion order).
fn latest_of<'a, R: SeriesRecord>(
    rows: impl Iterator<Item = &'a R>,
    field_id: &str,
) -> Option<R> {
    rows.filter(|r| r.field_id() == field_id)
        .enumerate()
        .max_by_key(|(idx, r)| (r.date(), r.created_at(), *idx))
        .map(|(_, r)| r.clone())
}

fn all_of<'a, R: SeriesRecord>(rows: impl Iterator<Item = &'a R>, field_id: &str) -> Vec<R> {
    let mut out: Vec<(usize, R)> = rows
        .filter(|r| r.field_id() == field_id)
        .cloned()
        .enumerate()
        .collect();
    out.sort_by(|(ai, a), (bi, b)| {
        (b.date(), b.created_at(), bi).cmp(&(a.date(), a.created_at(), ai))
    });
    out.into_iter().map(|(_, r)| r).collect()
}

#[async_trait]
impl UserStore for MemStorage {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        Ok(self.read().users.get(id).cloned())
    }

    async fn upsert_user(&self, user: UpsertUser) -> Result<User, StorageError> {
        let mut inner = self.write();
        let now = Utc::now();
        let row = match inner.users.get(&user.id) {
            Some(existing) => User {
                id: user.id.clone(),
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
                profile_image_url: user.profile_image_url,
                role: user.role,
                created_at: existing.created_at,
                updated_at: now,
            },
            None => User {
                id: user.id.clone(),
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
                profile_image_url: user.profile_image_url,
                role: user.role,
                created_at: now,
                updated_at: now,
            },
        };
        inner.users.insert(user.id, row.clone());
        Ok(row)
    }
}

#[async_trait]
impl FieldStore for MemStorage {
    async fn create_field(&self, new: NewField) -> Result<Field, StorageError> {
        let mut inner = self.write();
        if !inner.users.contains_key(&new.user_id) {
            return Err(StorageError::Constraint(format!(
                "field references missing user {}",
                new.user_id
            )));
        }
        let now = Utc::now();
        let field = Field {
            id: new_id(),
            name: new.name,
            user_id: new.user_id,
            latitude: new.latitude,
            longitude: new.longitude,
            size: new.size,
            crop_type: new.crop_type,
            planting_date: new.planting_date,
            expected_harvest_date: new.expected_harvest_date,
            location: new.location,
            created_at: now,
            updated_at: now,
        };
        inner.fields.push(field.clone());
        Ok(field)
    }

    async fn fields_by_user(&self, user_id: &str) -> Result<Vec<Field>, StorageError> {
        let mut out: Vec<Field> =
            self.read().fields.iter().filter(|f| f.user_id == user_id).cloned().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    async fn get_field(&self, id: &str) -> Result<Option<Field>, StorageError> {
        Ok(self.read().fields.iter().find(|f| f.id == id).cloned())
    }

    async fn update_field(&self, id: &str, patch: FieldPatch) -> Result<Field, StorageError> {
        let mut inner = self.write();
        let slot = inner
            .fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| StorageError::not_found("field", id))?;
        let mut merged = patch.apply_to(slot);
        merged.updated_at = Utc::now();
        *slot = merged.clone();
        Ok(merged)
    }

    async fn delete_field(&self, id: &str) -> Result<(), StorageError> {
        let mut inner = self.write();
        let before = inner.fields.len();
        inner.fields.retain(|f| f.id != id);
        if inner.fields.len() == before {
            tracing::debug!(field_id = %id, "delete_field: no row, treating as success");
            return Ok(());
        }
        // Mirror the Postgres ON DELETE CASCADE clauses.
        inner.satellite.retain(|r| r.field_id != id);
        inner.weather.retain(|r| r.field_id != id);
        inner.predictions.retain(|r| r.field_id != id);
        inner.alerts.retain(|a| a.field_id.as_deref() != Some(id));
        Ok(())
    }
}

#[async_trait]
impl SeriesStore<SatelliteReading> for MemStorage {
    async fn append(&self, new: NewSatelliteReading) -> Result<SatelliteReading, StorageError> {
        let mut inner = self.write();
        inner.check_field_ref(SatelliteReading::ENTITY, &new.field_id)?;
        let reading = SatelliteReading {
            id: new_id(),
            field_id: new.field_id,
            date: new.date,
            ndvi: new.ndvi,
            evi: new.evi,
            sarvi: new.sarvi,
            created_at: Utc::now(),
        };
        inner.satellite.push(reading.clone());
        Ok(reading)
    }

    async fn latest_for(&self, field_id: &str) -> Result<Option<SatelliteReading>, StorageError> {
        Ok(latest_of(self.read().satellite.iter(), field_id))
    }

    async fn all_for(&self, field_id: &str) -> Result<Vec<SatelliteReading>, StorageError> {
        Ok(all_of(self.read().satellite.iter(), field_id))
    }
}

#[async_trait]
impl SeriesStore<WeatherReading> for MemStorage {
    async fn append(&self, new: NewWeatherReading) -> Result<WeatherReading, StorageError> {
        let mut inner = self.write();
        inner.check_field_ref(WeatherReading::ENTITY, &new.field_id)?;
        let reading = WeatherReading {
            id: new_id(),
            field_id: new.field_id,
            date: new.date,
            temperature: new.temperature,
            humidity: new.humidity,
            rainfall: new.rainfall,
            wind_speed: new.wind_speed,
            condition: new.condition,
            created_at: Utc::now(),
        };
        inner.weather.push(reading.clone());
        Ok(reading)
    }

    async fn latest_for(&self, field_id: &str) -> Result<Option<WeatherReading>, StorageError> {
        Ok(latest_of(self.read().weather.iter(), field_id))
    }

    async fn all_for(&self, field_id: &str) -> Result<Vec<WeatherReading>, StorageError> {
        Ok(all_of(self.read().weather.iter(), field_id))
    }
}

#[async_trait]
impl SeriesStore<YieldPrediction> for MemStorage {
    async fn append(&self, new: NewYieldPrediction) -> Result<YieldPrediction, StorageError> {
        let mut inner = self.write();
        inner.check_field_ref(YieldPrediction::ENTITY, &new.field_id)?;
        let prediction = YieldPrediction {
            id: new_id(),
            field_id: new.field_id,
            prediction_date: new.prediction_date,
            predicted_yield: new.predicted_yield,
            confidence: new.confidence,
            model_version: new.model_version,
            created_at: Utc::now(),
        };
        inner.predictions.push(prediction.clone());
        Ok(prediction)
    }

    async fn latest_for(&self, field_id: &str) -> Result<Option<YieldPrediction>, StorageError> {
        Ok(latest_of(self.read().predictions.iter(), field_id))
    }

    async fn all_for(&self, field_id: &str) -> Result<Vec<YieldPrediction>, StorageError> {
        Ok(all_of(self.read().predictions.iter(), field_id))
    }
}

#[async_trait]
impl AlertStore for MemStorage {
    async fn create_alert(&self, new: NewAlert) -> Result<Alert, StorageError> {
        let mut inner = self.write();
        if !inner.users.contains_key(&new.user_id) {
            return Err(StorageError::Constraint(format!(
                "alert references missing user {}",
                new.user_id
            )));
        }
        if let Some(field_id) = new.field_id.as_deref() {
            inner.check_field_ref("alert", field_id)?;
        }
        let alert = Alert {
            id: new_id(),
            user_id: new.user_id,
            field_id: new.field_id,
            kind: new.kind,
            priority: new.priority,
            title: new.title,
            description: new.description,
            is_read: false,
            is_active: true,
            created_at: Utc::now(),
        };
        inner.alerts.push(alert.clone());
        Ok(alert)
    }

    async fn alerts_by_user(&self, user_id: &str) -> Result<Vec<Alert>, StorageError> {
        Ok(newest_first(&self.read().alerts, |a| a.user_id == user_id))
    }

    async fn unread_alerts(&self, user_id: &str) -> Result<Vec<Alert>, StorageError> {
        Ok(newest_first(&self.read().alerts, |a| a.user_id == user_id && !a.is_read))
    }

    async fn active_alerts(&self, user_id: &str) -> Result<Vec<Alert>, StorageError> {
        Ok(newest_first(&self.read().alerts, |a| a.user_id == user_id && a.is_active))
    }

    async fn mark_alert_read(&self, id: &str) -> Result<(), StorageError> {
        let mut inner = self.write();
        match inner.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => alert.is_read = true,
            None => {
                tracing::debug!(alert_id = %id, "mark_alert_read: no row, treating as success");
            },
        }
        Ok(())
    }
}

fn newest_first(alerts: &[Alert], keep: impl Fn(&Alert) -> bool) -> Vec<Alert> {
    let mut out: Vec<(usize, Alert)> =
        alerts.iter().filter(|a| keep(a)).cloned().enumerate().collect();
    out.sort_by(|(ai, a), (bi, b)| (b.created_at, bi).cmp(&(a.created_at, ai)));
    out.into_iter().map(|(_, a)| a).collect()
}
