//! Transaction listing HTTP handler.
//!
//! This module implements:
//! - GET /transactions - Searchable, paginated listing of the collection

use crate::{
    AppState,
    error::AppError,
    models::transaction::{ListQuery, Transaction},
    services::transaction_service,
};
use axum::{
    Json,
    extract::{Query, State},
};

/// List one page of transactions.
///
/// # Endpoint
///
/// `GET /transactions?search=<term>&page=<n>&perPage=<n>`
///
/// # Query Parameters
///
/// - `search` (optional): matches name or description case-insensitively, or
///   price exactly when numeric
/// - `page` (optional): 1-based page number, defaults to 1
/// - `perPage` (optional): page size, defaults to 10
///
/// # Response (200)
///
/// ```json
/// [
///   {
///     "id": 1,
///     "productId": "P-1042",
///     "productName": "Noise Cancelling Headphones",
///     "productDescription": "Over-ear, 30h battery",
///     "productPrice": 329.99,
///     "dateOfSale": "2021-11-27T14:59:54Z",
///     "quantity": 2
///   }
/// ]
/// ```
///
/// Records arrive in insertion order. The page carries no total count.
///
/// # Errors
///
/// - **400**: `page`/`perPage` zero or non-numeric
/// - **500**: database failure
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let page = transaction_service::search_transactions(&state.pool, &params).await?;

    Ok(Json(page))
}
