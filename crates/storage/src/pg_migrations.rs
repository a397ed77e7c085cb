//! PostgreSQL schema migrations for fieldsense storage.

use sqlx::PgPool;

use crate::error::StorageError;

/// Execute one DDL statement, tagging failures as migration errors so
/// callers can tell a broken schema apart from a runtime query failure.
async fn exec(pool: &PgPool, sql: &str) -> Result<(), StorageError> {
    sqlx::query(sql)
        .execute(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))?;
    Ok(())
}

/// Run all PostgreSQL migrations. Every statement is idempotent, so this
/// is safe to run on every startup.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    // Session storage for the upstream auth layer. Nothing in this
    // workspace reads it; it exists so auth and the app share one database.
    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            sid TEXT PRIMARY KEY,
            sess JSONB NOT NULL,
            expire TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .await?;

    exec(pool, "CREATE INDEX IF NOT EXISTS idx_sessions_expire ON sessions (expire)").await?;

    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT UNIQUE,
            first_name TEXT,
            last_name TEXT,
            profile_image_url TEXT,
            role TEXT NOT NULL DEFAULT 'farmer',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .await?;

    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS fields (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            user_id TEXT NOT NULL REFERENCES users(id),
            latitude DOUBLE PRECISION NOT NULL,
            longitude DOUBLE PRECISION NOT NULL,
            size DOUBLE PRECISION,
            crop_type TEXT NOT NULL DEFAULT 'maize',
            planting_date TIMESTAMPTZ,
            expected_harvest_date TIMESTAMPTZ,
            location TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .await?;

    exec(pool, "CREATE INDEX IF NOT EXISTS idx_fields_user ON fields (user_id)").await?;

    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS satellite_readings (
            id TEXT PRIMARY KEY,
            field_id TEXT NOT NULL REFERENCES fields(id) ON DELETE CASCADE,
            date TIMESTAMPTZ NOT NULL,
            ndvi DOUBLE PRECISION,
            evi DOUBLE PRECISION,
            sarvi DOUBLE PRECISION,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .await?;

    exec(
        pool,
        "CREATE INDEX IF NOT EXISTS idx_satellite_field_date
         ON satellite_readings (field_id, date DESC)",
    )
    .await?;

    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS weather_readings (
            id TEXT PRIMARY KEY,
            field_id TEXT NOT NULL REFERENCES fields(id) ON DELETE CASCADE,
            date TIMESTAMPTZ NOT NULL,
            temperature DOUBLE PRECISION,
            humidity DOUBLE PRECISION,
            rainfall DOUBLE PRECISION,
            wind_speed DOUBLE PRECISION,
            condition TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .await?;

    exec(
        pool,
        "CREATE INDEX IF NOT EXISTS idx_weather_field_date
         ON weather_readings (field_id, date DESC)",
    )
    .await?;

    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS yield_predictions (
            id TEXT PRIMARY KEY,
            field_id TEXT NOT NULL REFERENCES fields(id) ON DELETE CASCADE,
            prediction_date TIMESTAMPTZ NOT NULL,
            predicted_yield DOUBLE PRECISION,
            confidence DOUBLE PRECISION,
            model_version TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .await?;

    exec(
        pool,
        "CREATE INDEX IF NOT EXISTS idx_predictions_field_date
         ON yield_predictions (field_id, prediction_date DESC)",
    )
    .await?;

    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS alerts (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id),
            field_id TEXT REFERENCES fields(id) ON DELETE CASCADE,
            kind TEXT NOT NULL,
            priority TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT,
            is_read BOOLEAN NOT NULL DEFAULT FALSE,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .await?;

    exec(
        pool,
        "CREATE INDEX IF NOT EXISTS idx_alerts_user_created
         ON alerts (user_id, created_at DESC)",
    )
    .await?;

    Ok(())
}
