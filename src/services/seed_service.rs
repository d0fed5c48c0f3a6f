//! Seed service - Bulk load of the transaction collection from the upstream feed.
//!
//! This service handles:
//! - Fetching the seed JSON array over HTTP
//! - Inserting every record as a new row
//!
//! # Duplication
//!
//! Seeding is NOT idempotent. The feed carries no key the storage layer
//! treats as unique, so every invocation appends the full feed again. A
//! test pins this behavior.

use crate::{db::DbPool, error::AppError, models::transaction::SeedTransaction};

/// Fetch the seed feed and persist every record.
///
/// # Process
///
/// 1. GET the configured feed URL (client-level timeout applies)
/// 2. Reject non-2xx upstream responses
/// 3. Decode the body as a JSON array of transactions
/// 4. Insert the records one at a time
///
/// # Returns
///
/// The number of records inserted.
///
/// # Errors
///
/// - `Upstream`: connect/timeout failure, non-2xx response, or a body that
///   does not decode as a transaction array
/// - `Database`: an insert failed; earlier inserts of the batch remain (no
///   batch atomicity)
pub async fn seed_from_feed(
    pool: &DbPool,
    http: &reqwest::Client,
    feed_url: &str,
) -> Result<u64, AppError> {
    let records: Vec<SeedTransaction> = http
        .get(feed_url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    tracing::debug!(count = records.len(), "seed feed fetched");

    insert_transactions(pool, &records).await
}

/// Insert transaction records one at a time, preserving field values as given.
///
/// No deduplication and no validation beyond shape. Insert order fixes the
/// `id` sequence the listing endpoint sorts by.
pub async fn insert_transactions(
    pool: &DbPool,
    records: &[SeedTransaction],
) -> Result<u64, AppError> {
    let mut inserted = 0;

    for record in records {
        sqlx::query(
            r#"
            INSERT INTO transactions (
                product_id,
                product_name,
                product_description,
                product_price,
                date_of_sale,
                quantity
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&record.product_id)
        .bind(&record.product_name)
        .bind(&record.product_description)
        .bind(record.product_price)
        .bind(record.date_of_sale)
        .bind(record.quantity)
        .execute(pool)
        .await?;

        inserted += 1;
    }

    Ok(inserted)
}
