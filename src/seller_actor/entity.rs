use crate::actor_framework::Entity;
use crate::domain::{Seller, SellerCreate, SellerPatch};

impl Entity for Seller {
    type Id = String;
    type CreateParams = SellerCreate;
    type Patch = SellerPatch;
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: SellerCreate) -> Result<Self, String> {
        let seller = Self {
            id,
            username: params.username,
            email: params.email,
        };
        seller.validate().map_err(|e| e.to_string())?;
        Ok(seller)
    }

    /// Updates the seller's username and/or email.
    fn on_update(&mut self, patch: SellerPatch) -> Result<(), String> {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        self.validate().map_err(|e| e.to_string())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_create_params_validates() {
        let seller = Seller::from_create_params("seller_1".into(), SellerCreate::new("ada", "ada@example.com")).unwrap();
        assert_eq!(seller.username, "ada");

        let err = Seller::from_create_params("seller_2".into(), SellerCreate::new("ada", "not-an-email")).unwrap_err();
        assert_eq!(err, "invalid email address: not-an-email");
    }

    #[test]
    fn test_update_revalidates() {
        let mut seller = Seller::from_create_params("seller_1".into(), SellerCreate::new("ada", "ada@example.com")).unwrap();
        seller.on_update(SellerPatch { username: Some("ada_l".into()), email: None }).unwrap();
        assert_eq!(seller.username, "ada_l");

        let result = seller.on_update(SellerPatch { username: Some(String::new()), email: None });
        assert_eq!(result, Err("username is required".to_string()));
    }
}
