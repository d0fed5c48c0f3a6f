//! Transaction data models and API request types.
//!
//! This module defines:
//! - `Transaction`: Database entity representing a product sale
//! - `SeedTransaction`: One record of the upstream seed feed
//! - `ListQuery`: Search and pagination parameters for the listing endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a product transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each record:
/// - Carries the storage-assigned `id`, which fixes insertion order
/// - Keeps the upstream `product_id` as-is (not unique; the feed repeats it
///   and re-seeding duplicates rows)
/// - Is never updated or deleted by this service
///
/// # Serialization
///
/// Serialized to clients with camelCase field names (`productId`,
/// `dateOfSale`, ...), matching the upstream feed's naming.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Storage-assigned row identifier, monotonically increasing
    pub id: i64,

    /// Source identifier from the feed, not guaranteed unique
    pub product_id: String,

    /// Product name (searchable)
    pub product_name: String,

    /// Product description (searchable)
    pub product_description: String,

    /// Sale price (searchable by exact match)
    pub product_price: f64,

    /// When the sale happened
    ///
    /// Feed timestamps carry arbitrary UTC offsets; they are normalized to
    /// UTC at decode time, and month filtering applies to the UTC instant.
    pub date_of_sale: DateTime<Utc>,

    /// Units sold
    pub quantity: i64,
}

/// One record of the upstream seed feed.
///
/// # JSON Example
///
/// ```json
/// {
///   "productId": "P-1042",
///   "productName": "Noise Cancelling Headphones",
///   "productDescription": "Over-ear, 30h battery",
///   "productPrice": 329.99,
///   "dateOfSale": "2021-11-27T20:29:54+05:30",
///   "quantity": 2
/// }
/// ```
///
/// The feed schema is an external contract this service depends on but does
/// not control. Field values are persisted as given, with no deduplication
/// and no validation beyond shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedTransaction {
    pub product_id: String,
    pub product_name: String,
    pub product_description: String,
    pub product_price: f64,
    pub date_of_sale: DateTime<Utc>,
    pub quantity: i64,
}

/// Query parameters for the transaction listing endpoint.
///
/// # Query String Example
///
/// `/transactions?search=headphones&page=2&perPage=5`
///
/// # Defaults
///
/// - `page`: 1 (1-based)
/// - `perPage`: 10
///
/// Non-numeric `page`/`perPage` values are rejected by the typed extractor
/// with 400; zero values are rejected by the query service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Optional free-text search term
    pub search: Option<String>,

    /// 1-based page number (defaults to 1 if not provided)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Page size (defaults to 10 if not provided)
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// Default page number when not specified in the query string.
fn default_page() -> u32 {
    1
}

/// Default page size when not specified in the query string.
fn default_per_page() -> u32 {
    10
}
