//! Transaction service - Search and pagination over the transaction collection.
//!
//! This service translates the listing endpoint's parameters into a single
//! SQL query:
//! - Optional free-text filter over name, description, and exact price
//! - Offset pagination in insertion order

use crate::{
    db::DbPool,
    error::AppError,
    models::transaction::{ListQuery, Transaction},
};

/// Fetch one page of transactions, optionally filtered by a search term.
///
/// # Matching
///
/// With a search term present, a record matches when:
/// - `product_name` contains the term (ASCII case-insensitive), OR
/// - `product_description` contains the term (ASCII case-insensitive), OR
/// - `product_price` equals the term parsed as a number
///
/// The price arm is skipped when the term is not numeric, so a term like
/// `"wool"` only matches on the text columns. Without a term, every record
/// matches.
///
/// # Pagination
///
/// Skips `(page - 1) * per_page` records and returns at most `per_page`,
/// ordered by insertion (`id`). No total count accompanies the page; that is
/// a documented limitation of the API, not an omission.
///
/// # Errors
///
/// - `InvalidRequest`: `page` or `per_page` is zero
/// - `Database`: query failure
pub async fn search_transactions(
    pool: &DbPool,
    params: &ListQuery,
) -> Result<Vec<Transaction>, AppError> {
    if params.page == 0 {
        return Err(AppError::InvalidRequest(
            "page must be a positive integer".to_string(),
        ));
    }
    if params.per_page == 0 {
        return Err(AppError::InvalidRequest(
            "perPage must be a positive integer".to_string(),
        ));
    }

    let limit = i64::from(params.per_page);
    let offset = i64::from(params.page - 1) * limit;

    let transactions = match params.search.as_deref().filter(|s| !s.is_empty()) {
        Some(term) => {
            // A non-numeric term binds NULL for the price arm, which then
            // matches no record.
            let price: Option<f64> = term.parse().ok();

            sqlx::query_as::<_, Transaction>(
                r#"
                SELECT id, product_id, product_name, product_description,
                       product_price, date_of_sale, quantity
                FROM transactions
                WHERE instr(lower(product_name), lower($1)) > 0
                   OR instr(lower(product_description), lower($1)) > 0
                   OR ($2 IS NOT NULL AND product_price = $2)
                ORDER BY id
                LIMIT $3 OFFSET $4
                "#,
            )
            .bind(term)
            .bind(price)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Transaction>(
                r#"
                SELECT id, product_id, product_name, product_description,
                       product_price, date_of_sale, quantity
                FROM transactions
                ORDER BY id
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed_service;
    use crate::services::seed_service::tests::{fixture_records, test_pool};

    fn query(search: Option<&str>, page: u32, per_page: u32) -> ListQuery {
        ListQuery {
            search: search.map(String::from),
            page,
            per_page,
        }
    }

    #[tokio::test]
    async fn first_page_in_insertion_order() {
        let pool = test_pool().await;
        seed_service::insert_transactions(&pool, &fixture_records(12))
            .await
            .unwrap();

        let page = search_transactions(&pool, &query(None, 1, 10)).await.unwrap();
        assert_eq!(page.len(), 10);
        let ids: Vec<i64> = page.iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
    }

    #[tokio::test]
    async fn second_page_continues_where_first_ended() {
        let pool = test_pool().await;
        seed_service::insert_transactions(&pool, &fixture_records(12))
            .await
            .unwrap();

        let page = search_transactions(&pool, &query(None, 2, 10)).await.unwrap();
        let ids: Vec<i64> = page.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![11, 12]);
    }

    #[tokio::test]
    async fn name_substring_matches_exactly_one() {
        let pool = test_pool().await;
        seed_service::insert_transactions(&pool, &fixture_records(5))
            .await
            .unwrap();

        // "product 3" appears in exactly one productName of the fixture set.
        let hits = search_transactions(&pool, &query(Some("product 3"), 1, 10))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_name, "Fixture product 3");
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let pool = test_pool().await;
        seed_service::insert_transactions(&pool, &fixture_records(5))
            .await
            .unwrap();

        let hits = search_transactions(&pool, &query(Some("FIXTURE PRODUCT 3"), 1, 10))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn numeric_term_matches_price_exactly() {
        let pool = test_pool().await;
        seed_service::insert_transactions(&pool, &fixture_records(5))
            .await
            .unwrap();

        // Fixture prices are 10.5 * n; 31.5 belongs to product 3 only, and
        // "31.5" appears in no name or description.
        let hits = search_transactions(&pool, &query(Some("31.5"), 1, 10))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_price, 31.5);
    }

    #[tokio::test]
    async fn description_substring_matches() {
        let pool = test_pool().await;
        seed_service::insert_transactions(&pool, &fixture_records(5))
            .await
            .unwrap();

        let hits = search_transactions(&pool, &query(Some("restocked"), 1, 10))
            .await
            .unwrap();
        assert_eq!(hits.len(), 5);
    }

    #[tokio::test]
    async fn unmatched_term_returns_empty_page() {
        let pool = test_pool().await;
        seed_service::insert_transactions(&pool, &fixture_records(5))
            .await
            .unwrap();

        let hits = search_transactions(&pool, &query(Some("no such product"), 1, 10))
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn zero_page_is_rejected() {
        let pool = test_pool().await;

        let err = search_transactions(&pool, &query(None, 0, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn zero_per_page_is_rejected() {
        let pool = test_pool().await;

        let err = search_transactions(&pool, &query(None, 1, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }
}
