pub mod connection;
pub mod repositories;
pub mod rows;
pub mod schema;
pub mod store;

pub use connection::{Database, DbPool};
pub use rows::{TableCounts, UserRow};
pub use store::{SqliteStore, UserStore};
