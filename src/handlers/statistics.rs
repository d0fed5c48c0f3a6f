//! Monthly statistics HTTP handler.
//!
//! This module implements:
//! - GET /statistics/{month} - Sales summary for one calendar month

use crate::{
    AppState, error::AppError, models::statistics::MonthlyStatistics,
    services::statistics_service,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Sales summary for a calendar month (1-12), any year.
///
/// # Endpoint
///
/// `GET /statistics/{month}`
///
/// # Response (200)
///
/// ```json
/// {
///   "totalSaleAmount": 15.0,
///   "totalSoldItems": 3,
///   "totalNotSoldItems": -1
/// }
/// ```
///
/// A month with no sales returns all zeros.
///
/// # Errors
///
/// - **400**: `month` not an integer in 1-12
/// - **500**: database failure
pub async fn monthly_statistics(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<MonthlyStatistics>, AppError> {
    // Parsed by hand so a bad month reports through the shared error body.
    let month: u32 = month.parse().map_err(|_| {
        AppError::InvalidRequest("month must be an integer between 1 and 12".to_string())
    })?;

    let stats = statistics_service::monthly_statistics(&state.pool, month).await?;

    Ok(Json(stats))
}
