pub mod error;
pub mod response;
pub mod route;

pub use error::ApiError;
pub use response::with_total_count;
pub use route::create_router;
