use stocks::StockError;
use thiserror::Error;

/// Reasons the kitchen stops preparing an order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("Shop is closed")]
    Closed,
    #[error("out of stock: {0}")]
    OutOfStock(#[from] StockError),
}
