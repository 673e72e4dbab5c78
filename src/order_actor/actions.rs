/// Custom actions for OrderDetail records.
#[derive(Debug, Clone)]
pub enum OrderDetailAction {
    /// Flips `has_paid` to true. Only allowed once per order.
    MarkPaid,
    /// Undoes a `MarkPaid` whose sale could not be recorded on the product.
    /// Only issued by [`crate::clients::OrderDetailClient::complete_order`].
    RevertPaid,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderDetailActionResult {
    /// The order as it stands after being marked paid
    MarkPaid(crate::domain::OrderDetail),
    /// The order as it stands after the paid flag was withdrawn
    RevertPaid(crate::domain::OrderDetail),
}
