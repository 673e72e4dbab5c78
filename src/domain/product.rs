use serde::{Deserialize, Serialize};
use std::fmt;
use super::file::StoredFile;
use super::validation::{check_price, check_text, ValidationError};

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 100;

/// A downloadable item listed by a seller.
///
/// `total_sales` counts completed orders and `total_sales_amount` sums their
/// amounts. Both only ever grow, and only through [`crate::product_actor::ProductAction::RecordSale`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub seller_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub file: StoredFile,
    pub total_sales_amount: u64,
    pub total_sales: u64,
}

/// Payload for listing a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub seller_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub file: StoredFile,
}

/// Payload for editing a listing. Sales counters are not patchable.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub file: Option<StoredFile>,
}

impl Product {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("name", &self.name, NAME_MAX_LEN)?;
        check_text("description", &self.description, DESCRIPTION_MAX_LEN)?;
        check_price(self.price)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
