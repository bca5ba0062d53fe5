pub mod error;
pub mod load;
pub mod users;

pub use error::{ApiError, ApiResult};
