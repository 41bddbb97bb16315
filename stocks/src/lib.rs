//! Stock registry of the ice cream shop

pub mod category;
pub mod stock;

pub use category::Category;
pub use stock::{Stock, StockError};
