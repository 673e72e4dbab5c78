use serde::{Deserialize, Serialize};
use super::validation::{check_email, check_text, ValidationError};

pub const USERNAME_MAX_LEN: usize = 150;

/// The account that owns listed products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Payload for registering a seller.
#[derive(Debug, Clone)]
pub struct SellerCreate {
    pub username: String,
    pub email: String,
}

/// Payload for updating an existing seller.
#[derive(Debug, Clone, Default)]
pub struct SellerPatch {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl SellerCreate {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

impl Seller {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("username", &self.username, USERNAME_MAX_LEN)?;
        check_email(&self.email)
    }
}
