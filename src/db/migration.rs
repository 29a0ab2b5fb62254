use sqlx::SqlitePool;
use tracing::info;

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");

    // Nested documents (metadata, parsed_output, merkle paths) are stored as JSON text
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS transactions (
            hash TEXT PRIMARY KEY,
            block_hash TEXT NOT NULL,
            round INTEGER NOT NULL DEFAULT 0,
            client_id TEXT NOT NULL,
            to_client_id TEXT,
            value INTEGER NOT NULL DEFAULT 0,
            fee INTEGER NOT NULL DEFAULT 0,
            nonce INTEGER NOT NULL DEFAULT 0,
            status INTEGER NOT NULL DEFAULT 0,
            transaction_data TEXT,
            transaction_output TEXT,
            metadata TEXT,
            parsed_output TEXT,
            created_at INTEGER NOT NULL
        )"
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS confirmations (
            hash TEXT PRIMARY KEY,
            version TEXT NOT NULL,
            block_hash TEXT NOT NULL,
            previous_block_hash TEXT,
            round INTEGER NOT NULL DEFAULT 0,
            creation_date INTEGER NOT NULL,
            merkle_tree_root TEXT,
            merkle_tree_path TEXT,
            receipt_merkle_tree_root TEXT,
            created_at INTEGER NOT NULL
        )"
    )
    .execute(pool)
    .await?;

    // Indexes for the list queries, all ordered by created_at
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_transactions_created_at
         ON transactions(created_at)"
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_transactions_block_hash_created_at
         ON transactions(block_hash, created_at)"
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_transactions_client_id
         ON transactions(client_id)"
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_transactions_to_client_id
         ON transactions(to_client_id)"
    )
    .execute(pool)
    .await?;

    info!("Database migrations completed successfully");
    Ok(())
}
