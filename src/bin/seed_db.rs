use chain_query_service::config::Config;
use chain_query_service::db::{confirmation, connection, transaction};
use chain_query_service::models::{Confirmation, Transaction};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    println!("Establishing database connection...");
    let pool = connection::establish_connection(&config.database_url, config.db_max_connections).await?;
    println!("✅ Database connection established!");

    let now = chrono::Utc::now().timestamp();
    let block_hash = format!("demo_block_{}", now);

    let transactions: Vec<Transaction> = (0..5)
        .map(|i| Transaction {
            hash: format!("demo_tx_{}_{}", now, i),
            block_hash: block_hash.clone(),
            round: 1000 + i,
            client_id: "demo_client".to_string(),
            to_client_id: Some("demo_storage_sc".to_string()),
            value: 10 * (i + 1),
            fee: 1,
            nonce: i,
            status: 1,
            transaction_data: Some(json!({ "name": "commit_connection" }).to_string()),
            transaction_output: None,
            metadata: Some(json!({
                "MetaData": {
                    "Name": format!("file_{}.txt", i),
                    "Path": format!("/demo/file_{}.txt", i),
                    "PathHash": format!("path_hash_{}", i),
                    "Hash": format!("content_hash_{}", i),
                }
            })),
            parsed_output: Some(json!({
                "allocation_id": "demo_allocation",
                "blobber_id": format!("blobber_{}", i % 2),
                "blobbers": [{ "id": "blobber_0" }, { "id": "blobber_1" }],
            })),
            created_at: now - i * 10,
        })
        .collect();

    println!("Adding {} demo transactions to block {}...", transactions.len(), block_hash);
    transaction::add_transactions(&pool, &transactions).await?;

    let confirmations: Vec<Confirmation> = transactions
        .iter()
        .map(|tx| Confirmation {
            hash: tx.hash.clone(),
            version: "1.0".to_string(),
            block_hash: tx.block_hash.clone(),
            previous_block_hash: None,
            round: tx.round,
            creation_date: tx.created_at,
            merkle_tree_root: Some(format!("root_{}", tx.hash)),
            merkle_tree_path: Some(json!({ "nodes": [], "leaf_index": 0 })),
            receipt_merkle_tree_root: None,
            created_at: tx.created_at,
        })
        .collect();

    confirmation::add_confirmations(&pool, &confirmations).await?;
    println!("✅ Demo data loaded!");

    Ok(())
}
