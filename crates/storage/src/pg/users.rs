//! UserStore implementation for PgStorage.

use super::*;

use crate::traits::UserStore;
use async_trait::async_trait;
use fieldsense_core::UpsertUser;

#[async_trait]
impl UserStore for PgStorage {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_user(&r)).transpose()
    }

    async fn upsert_user(&self, user: UpsertUser) -> Result<User, StorageError> {
        let row = sqlx::query(&format!(
            r#"INSERT INTO users (id, email, first_name, last_name, profile_image_url, role)
               VALUES ($1, $2, $3, $4, $5, $6)
               ON CONFLICT (id) DO UPDATE SET
                   email = EXCLUDED.email,
                   first_name = EXCLUDED.first_name,
                   last_name = EXCLUDED.last_name,
                   profile_image_url = EXCLUDED.profile_image_url,
                   role = EXCLUDED.role,
                   updated_at = NOW()
               RETURNING {USER_COLUMNS}"#
        ))
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.profile_image_url)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await?;
        row_to_user(&row)
    }
}
