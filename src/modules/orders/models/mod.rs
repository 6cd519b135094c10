pub mod line_item;
pub mod order;

pub use line_item::{LineItem, UNCATEGORIZED};
pub use order::{Customer, Order, OrderStatus};
