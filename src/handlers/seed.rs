//! Database seeding HTTP handler.
//!
//! This module implements:
//! - GET /initialize - Bulk load the collection from the upstream feed

use crate::{AppState, error::AppError, services::seed_service};
use axum::extract::State;

/// Fetch the upstream feed and insert every record.
///
/// # Endpoint
///
/// `GET /initialize`
///
/// # Response (200)
///
/// The plain-text confirmation string `Database initialized successfully!`,
/// sent only after every record of the batch was written. The inserted count
/// goes to the log, not the response body.
///
/// # Side Effect
///
/// Grows the collection monotonically: calling this twice stores the feed
/// twice. There is no deduplication.
///
/// # Errors
///
/// - **502**: feed unreachable, non-2xx, or body not a transaction array
/// - **500**: an insert failed (earlier inserts of the batch remain)
pub async fn initialize(State(state): State<AppState>) -> Result<&'static str, AppError> {
    let inserted =
        seed_service::seed_from_feed(&state.pool, &state.http, &state.seed_source_url).await?;

    tracing::info!(inserted, "transaction collection seeded");

    Ok("Database initialized successfully!")
}
