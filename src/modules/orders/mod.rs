pub mod models;
pub mod repositories;

pub use models::{Customer, LineItem, Order, OrderStatus};
pub use repositories::OrderRepository;
