use chrono::Utc;
use crate::actor_framework::Entity;
use crate::domain::{OrderDetail, OrderDetailCreate, OrderDetailPatch};
use super::actions::{OrderDetailAction, OrderDetailActionResult};

pub const ALREADY_PAID: &str = "order already paid";
pub const NOT_PAID: &str = "order not paid";

impl Entity for OrderDetail {
    type Id = String;
    type CreateParams = OrderDetailCreate;
    type Patch = OrderDetailPatch;
    type Action = OrderDetailAction;
    type ActionResult = OrderDetailActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new, unpaid order.
    ///
    /// # Notes
    /// `created_on` and `updated_on` both start at the creation time.
    fn from_create_params(id: String, params: OrderDetailCreate) -> Result<Self, String> {
        let now = Utc::now();
        let order = Self {
            id,
            customer_email: params.customer_email,
            product_id: params.product_id,
            amount: params.amount,
            stripe_payment_intent: params.stripe_payment_intent,
            has_paid: false,
            created_on: now,
            updated_on: now,
        };
        order.validate().map_err(|e| e.to_string())?;
        Ok(order)
    }

    /// Corrects the customer email and/or payment intent of an unpaid order.
    fn on_update(&mut self, patch: OrderDetailPatch) -> Result<(), String> {
        if self.has_paid {
            return Err(ALREADY_PAID.to_string());
        }
        if let Some(customer_email) = patch.customer_email {
            self.customer_email = customer_email;
        }
        if let Some(stripe_payment_intent) = patch.stripe_payment_intent {
            self.stripe_payment_intent = stripe_payment_intent;
        }
        self.validate().map_err(|e| e.to_string())?;
        self.updated_on = Utc::now();
        Ok(())
    }

    fn handle_action(&mut self, action: OrderDetailAction) -> Result<OrderDetailActionResult, String> {
        match action {
            OrderDetailAction::MarkPaid => {
                if self.has_paid {
                    return Err(ALREADY_PAID.to_string());
                }
                self.has_paid = true;
                self.updated_on = Utc::now();
                Ok(OrderDetailActionResult::MarkPaid(self.clone()))
            }
            OrderDetailAction::RevertPaid => {
                if !self.has_paid {
                    return Err(NOT_PAID.to_string());
                }
                self.has_paid = false;
                self.updated_on = Utc::now();
                Ok(OrderDetailActionResult::RevertPaid(self.clone()))
            }
        }
    }
}
