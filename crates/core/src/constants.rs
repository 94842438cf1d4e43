//! Shared constants for plant-catalog.

/// Marker prepended to the display field of duplicated records.
pub const COPY_MARKER: &str = "[COPY] ";

/// Listing page size when neither the caller nor the environment sets one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound for any requested page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Maximum number of ids in one admin action request.
pub const MAX_BATCH_IDS: usize = 500;

/// Environment variable overriding [`DEFAULT_PAGE_SIZE`].
pub const PAGE_SIZE_ENV: &str = "PLANT_CATALOG_PAGE_SIZE";

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "PLANT_CATALOG_DB";

/// Environment variable overriding the connection pool size.
pub const DB_POOL_SIZE_ENV: &str = "PLANT_CATALOG_DB_POOL_SIZE";
