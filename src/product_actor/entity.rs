use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductPatch};
use super::actions::{ProductAction, ProductActionResult, SalesSummary};

impl Product {
    pub fn sales_summary(&self) -> SalesSummary {
        SalesSummary {
            total_sales: self.total_sales,
            total_sales_amount: self.total_sales_amount,
        }
    }
}

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new listing with both sales counters at zero.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        let product = Self {
            id,
            seller_id: params.seller_id,
            name: params.name,
            description: params.description,
            price: params.price,
            file: params.file,
            total_sales_amount: 0,
            total_sales: 0,
        };
        product.validate().map_err(|e| e.to_string())?;
        Ok(product)
    }

    /// Updates the listing's name, description, price and/or file.
    ///
    /// The seller and the sales counters are fixed once the product exists.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(file) = patch.file {
            self.file = file;
        }
        self.validate().map_err(|e| e.to_string())
    }

    /// Handles product-specific actions.
    ///
    /// # Actions
    /// - `RecordSale { amount }`: one more sale, `amount` more revenue
    /// - `SalesSummary`: returns the current counters
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::RecordSale { amount } => {
                let total_sales = self
                    .total_sales
                    .checked_add(1)
                    .ok_or_else(|| "total_sales overflow".to_string())?;
                let total_sales_amount = self
                    .total_sales_amount
                    .checked_add(amount)
                    .ok_or_else(|| format!("total_sales_amount overflow adding {}", amount))?;
                self.total_sales = total_sales;
                self.total_sales_amount = total_sales_amount;
                Ok(ProductActionResult::RecordSale(self.sales_summary()))
            }
            ProductAction::SalesSummary => Ok(ProductActionResult::SalesSummary(self.sales_summary())),
        }
    }
}
