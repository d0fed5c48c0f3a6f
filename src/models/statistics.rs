//! Monthly statistics response type.

use serde::Serialize;

/// Aggregate summary for one calendar month, any year.
///
/// # JSON Example
///
/// ```json
/// {
///   "totalSaleAmount": 1543.5,
///   "totalSoldItems": 38,
///   "totalNotSoldItems": -13
/// }
/// ```
///
/// `totalNotSoldItems` is the matching-record count minus `totalSoldItems`.
/// The subtraction mixes a row count with a quantity sum and can go
/// negative; existing consumers depend on the figure as-is, so the formula
/// is part of the wire contract and must not be redefined here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatistics {
    /// Sum of `productPrice` over records sold in the month
    pub total_sale_amount: f64,

    /// Sum of `quantity` over records sold in the month
    pub total_sold_items: i64,

    /// Matching-record count minus `totalSoldItems` (see type docs)
    pub total_not_sold_items: i64,
}
