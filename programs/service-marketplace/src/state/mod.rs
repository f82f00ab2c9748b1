pub mod marketplace;
pub mod service;

pub use marketplace::*;
pub use service::*;
