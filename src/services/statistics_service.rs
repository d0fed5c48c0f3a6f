//! Statistics service - Per-month aggregates over the transaction collection.
//!
//! One aggregate query computes all three figures. The month filter compares
//! the month component of `date_of_sale` only, so a given month matches
//! across every year in the collection.

use crate::{db::DbPool, error::AppError, models::statistics::MonthlyStatistics};

/// Aggregate row backing [`MonthlyStatistics`].
#[derive(Debug, sqlx::FromRow)]
struct MonthAggregateRow {
    matched_count: i64,
    total_sale_amount: f64,
    total_sold_items: i64,
}

/// Compute the sales summary for one calendar month (1-12), any year.
///
/// # Figures
///
/// - `total_sale_amount`: sum of `product_price` over matching records
/// - `total_sold_items`: sum of `quantity` over matching records
/// - `total_not_sold_items`: matching-record count minus `total_sold_items`
///   (the contract formula; see [`MonthlyStatistics`])
///
/// A month with no matching records yields all zeros rather than an error;
/// the sums are coalesced in SQL, not derived from a missing group.
///
/// # Errors
///
/// - `InvalidRequest`: `month` outside 1-12
/// - `Database`: query failure
pub async fn monthly_statistics(
    pool: &DbPool,
    month: u32,
) -> Result<MonthlyStatistics, AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidRequest(
            "month must be between 1 and 12".to_string(),
        ));
    }

    let row = sqlx::query_as::<_, MonthAggregateRow>(
        r#"
        SELECT COUNT(*)                            AS matched_count,
               COALESCE(SUM(product_price), 0.0)   AS total_sale_amount,
               COALESCE(SUM(quantity), 0)          AS total_sold_items
        FROM transactions
        WHERE CAST(strftime('%m', date_of_sale) AS INTEGER) = $1
        "#,
    )
    .bind(i64::from(month))
    .fetch_one(pool)
    .await?;

    Ok(MonthlyStatistics {
        total_sale_amount: row.total_sale_amount,
        total_sold_items: row.total_sold_items,
        total_not_sold_items: row.matched_count - row.total_sold_items,
    })
}
