//! Shared constants for fieldsense.

/// Latest NDVI strictly above this counts a field as healthy on the dashboard.
/// A reading of exactly this value does not count.
pub const HEALTHY_NDVI_THRESHOLD: f64 = 0.6;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;
