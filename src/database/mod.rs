pub mod manager;
pub mod order;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use order::next_order_value;
pub use repository::EntityRepository;
