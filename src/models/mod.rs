// Records read from the chain store, the validated search request, and the
// page returned by list queries.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub block_hash: String,
    pub round: i64,
    pub client_id: String,
    pub to_client_id: Option<String>,
    pub value: i64,
    pub fee: i64,
    pub nonce: i64,
    pub status: i64,
    pub transaction_data: Option<String>,
    pub transaction_output: Option<String>,
    /// Raw storage metadata; file fields sit under its `MetaData` object.
    pub metadata: Option<Value>,
    pub parsed_output: Option<Value>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    pub hash: String,
    pub version: String,
    pub block_hash: String,
    pub previous_block_hash: Option<String>,
    pub round: i64,
    pub creation_date: i64,
    pub merkle_tree_root: Option<String>,
    pub merkle_tree_path: Option<Value>,
    pub receipt_merkle_tree_root: Option<String>,
    pub created_at: i64,
}

/// One page of a list query plus the number of records matching the filter.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub count: i64,
}

/// Search request after allow-list validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTransactionsQuery {
    pub hash: Option<String>,
    pub block_hash: Option<String>,
    pub client_id: Option<String>,
    pub to_client_id: Option<String>,
    /// Free-text term matched against file metadata, parties and blobbers.
    pub metadata: Option<String>,
}

impl SearchTransactionsQuery {
    pub fn from_sanitized(mut sanitized: BTreeMap<String, String>) -> Self {
        Self {
            hash: sanitized.remove("hash"),
            block_hash: sanitized.remove("block_hash"),
            client_id: sanitized.remove("client_id"),
            to_client_id: sanitized.remove("to_client_id"),
            metadata: sanitized.remove("metadata"),
        }
    }

    /// Names of the exact-match fields that are set.
    pub fn exact_fields(&self) -> Vec<&'static str> {
        [
            ("hash", &self.hash),
            ("block_hash", &self.block_hash),
            ("client_id", &self.client_id),
            ("to_client_id", &self.to_client_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(name, _)| name)
        .collect()
    }
}
