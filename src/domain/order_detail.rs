use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::validation::{check_email, check_text, ValidationError};

pub const PAYMENT_INTENT_MAX_LEN: usize = 200;

/// One purchase attempt against a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: String,
    pub customer_email: String,
    pub product_id: String,
    pub amount: u64,
    /// Payment provider's transaction id.
    pub stripe_payment_intent: String,
    pub has_paid: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// Payload for opening an order.
#[derive(Debug, Clone)]
pub struct OrderDetailCreate {
    pub customer_email: String,
    pub product_id: String,
    pub amount: u64,
    pub stripe_payment_intent: String,
}

/// Payload for correcting an unpaid order.
#[derive(Debug, Clone, Default)]
pub struct OrderDetailPatch {
    pub customer_email: Option<String>,
    pub stripe_payment_intent: Option<String>,
}

impl OrderDetail {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_email(&self.customer_email)?;
        check_text("stripe_payment_intent", &self.stripe_payment_intent, PAYMENT_INTENT_MAX_LEN)
    }
}
