mod filter_tests;
mod service_tests;

use serde_json::json;
use sqlx::SqlitePool;

use crate::{db::connection, models::Transaction};

/// Fresh in-memory database with the schema applied.
pub(crate) async fn setup_pool() -> SqlitePool {
    connection::establish_connection("sqlite::memory:", 1)
        .await
        .expect("Failed to create in-memory database")
}

/// Transaction with no metadata or parsed output.
pub(crate) fn make_transaction(hash: &str, block_hash: &str, created_at: i64) -> Transaction {
    Transaction {
        hash: hash.to_string(),
        block_hash: block_hash.to_string(),
        round: 1,
        client_id: "sender".to_string(),
        to_client_id: Some("recipient".to_string()),
        value: 100,
        fee: 1,
        nonce: 0,
        status: 1,
        transaction_data: None,
        transaction_output: None,
        metadata: None,
        parsed_output: None,
        created_at,
    }
}

pub(crate) fn with_file_metadata(mut tx: Transaction, key: &str, value: &str) -> Transaction {
    tx.metadata = Some(json!({ "MetaData": { key: value } }));
    tx
}

pub(crate) fn with_parsed_output(mut tx: Transaction, output: serde_json::Value) -> Transaction {
    tx.parsed_output = Some(output);
    tx
}
