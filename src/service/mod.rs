pub mod transaction;

pub use transaction::{
    build_filter, get_block_transactions, get_transaction, get_transaction_confirmation, search_transactions,
};
