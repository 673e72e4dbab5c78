pub mod file;
pub mod order_detail;
pub mod product;
pub mod seller;
pub mod validation;

pub use file::*;
pub use order_detail::*;
pub use product::*;
pub use seller::*;
pub use validation::ValidationError;
