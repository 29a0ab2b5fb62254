pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod pagination;
pub mod service;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use api::error::ApiError;
pub use api::route::{create_router, SEARCH_TRANSACTIONS_SUPPORTED_QUERY_PARAMS};
pub use db::connection;
pub use db::TransactionFilter;
pub use models::{Confirmation, SearchTransactionsQuery, Transaction, TransactionPage};
pub use pagination::Pagination;
pub use validation::{validate_query, ValidationError};
