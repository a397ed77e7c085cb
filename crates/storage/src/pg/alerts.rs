//! AlertStore implementation for PgStorage.

use super::*;

use crate::traits::AlertStore;
use async_trait::async_trait;
use fieldsense_core::NewAlert;

#[async_trait]
impl AlertStore for PgStorage {
    async fn create_alert(&self, new: NewAlert) -> Result<Alert, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        let row = sqlx::query(&format!(
            r#"INSERT INTO alerts (id, user_id, field_id, kind, priority, title, description)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING {ALERT_COLUMNS}"#
        ))
        .bind(&id)
        .bind(&new.user_id)
        .bind(&new.field_id)
        .bind(new.kind.as_str())
        .bind(new.priority.as_str())
        .bind(&new.title)
        .bind(&new.description)
        .fetch_one(&self.pool)
        .await?;
        row_to_alert(&row)
    }

    async fn alerts_by_user(&self, user_id: &str) -> Result<Vec<Alert>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {ALERT_COLUMNS} FROM alerts WHERE user_id = $1
             ORDER BY created_at DESC, id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_alert).collect()
    }

    async fn unread_alerts(&self, user_id: &str) -> Result<Vec<Alert>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {ALERT_COLUMNS} FROM alerts WHERE user_id = $1 AND is_read = FALSE
             ORDER BY created_at DESC, id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_alert).collect()
    }

    async fn active_alerts(&self, user_id: &str) -> Result<Vec<Alert>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {ALERT_COLUMNS} FROM alerts WHERE user_id = $1 AND is_active = TRUE
             ORDER BY created_at DESC, id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_alert).collect()
    }

    async fn mark_alert_read(&self, id: &str) -> Result<(), StorageError> {
        // Unconditional update: an absent id is a no-op success so the
        // UI's fire-and-forget dismiss never errors.
        let result = sqlx::query("UPDATE alerts SET is_read = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(alert_id = %id, "mark_alert_read: no row, treating as success");
        }
        Ok(())
    }
}
