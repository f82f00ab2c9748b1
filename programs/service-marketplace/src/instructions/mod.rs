pub mod initialize_marketplace;
pub mod list_service;
pub mod purchase_service;
pub mod resell_service;

pub use initialize_marketplace::*;
pub use list_service::*;
pub use purchase_service::*;
pub use resell_service::*;
