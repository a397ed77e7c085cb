//! FieldStore implementation for PgStorage.

use super::*;

use crate::traits::FieldStore;
use async_trait::async_trait;
use fieldsense_core::{FieldPatch, NewField};

#[async_trait]
impl FieldStore for PgStorage {
    async fn create_field(&self, new: NewField) -> Result<Field, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        let row = sqlx::query(&format!(
            r#"INSERT INTO fields
               (id, name, user_id, latitude, longitude, size, crop_type,
                planting_date, expected_harvest_date, location)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
               RETURNING {FIELD_COLUMNS}"#
        ))
        .bind(&id)
        .bind(&new.name)
        .bind(&new.user_id)
        .bind(new.latitude)
        .bind(new.longitude)
        .bind(new.size)
        .bind(new.crop_type.as_str())
        .bind(new.planting_date)
        .bind(new.expected_harvest_date)
        .bind(&new.location)
        .fetch_one(&self.pool)
        .await?;
        row_to_field(&row)
    }

    async fn fields_by_user(&self, user_id: &str) -> Result<Vec<Field>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {FIELD_COLUMNS} FROM fields WHERE user_id = $1 ORDER BY name ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_field).collect()
    }

    async fn get_field(&self, id: &str) -> Result<Option<Field>, StorageError> {
        let row = sqlx::query(&format!("SELECT {FIELD_COLUMNS} FROM fields WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_field(&r)).transpose()
    }

    async fn update_field(&self, id: &str, patch: FieldPatch) -> Result<Field, StorageError> {
        let mut tx = self.pool.begin().await?;

        let row =
            sqlx::query(&format!("SELECT {FIELD_COLUMNS} FROM fields WHERE id = $1 FOR UPDATE"))
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let existing = row
            .map(|r| row_to_field(&r))
            .transpose()?
            .ok_or_else(|| StorageError::not_found("field", id))?;

        let merged = patch.apply_to(&existing);

        let row = sqlx::query(&format!(
            r#"UPDATE fields SET
                   name = $1, latitude = $2, longitude = $3, size = $4, crop_type = $5,
                   planting_date = $6, expected_harvest_date = $7, location = $8,
                   updated_at = NOW()
               WHERE id = $9
               RETURNING {FIELD_COLUMNS}"#
        ))
        .bind(&merged.name)
        .bind(merged.latitude)
        .bind(merged.longitude)
        .bind(merged.size)
        .bind(merged.crop_type.as_str())
        .bind(merged.planting_date)
        .bind(merged.expected_harvest_date)
        .bind(&merged.location)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        row_to_field(&row)
    }

    async fn delete_field(&self, id: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM fields WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(field_id = %id, "delete_field: no row, treating as success");
        }
        Ok(())
    }
}
