use serde::Serialize;

/// Custom actions for Product records.
///
/// These are the only way the sales counters change; patches cannot touch them.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Counts one completed sale worth `amount`.
    ///
    /// # Errors
    /// Fails without changing anything if either counter would overflow.
    RecordSale { amount: u64 },
    /// Reads the counters without modifying them.
    SalesSummary,
}

/// Snapshot of a product's sales counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub total_sales: u64,
    pub total_sales_amount: u64,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Counters after the sale was recorded
    RecordSale(SalesSummary),
    SalesSummary(SalesSummary),
}
