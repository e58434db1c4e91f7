pub mod order;
pub mod quote;
pub mod trade;

pub use order::{Order, OrderRequest, OrderSide, ResidualOrder};
pub use quote::Quote;
pub use trade::Trade;
