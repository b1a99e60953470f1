//! Cart
//!
//! - [`CartAggregator`]: cart lines, quantities and the running total
//! - [`Bill`]: printable snapshot of the cart

mod aggregator;
mod bill;
mod error;

pub use aggregator::CartAggregator;
pub use bill::{Bill, BillRow, CURRENCY_SYMBOL, DEFAULT_BILL_WIDTH};
pub use error::CartError;
