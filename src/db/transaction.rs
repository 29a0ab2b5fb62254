use sqlx::{sqlite::SqliteRow, Pool, QueryBuilder, Row, Sqlite};

use crate::db::{filter::TransactionFilter, json_column};
use crate::models::Transaction;

const TRANSACTION_COLUMNS: &str = "SELECT hash, block_hash, round, client_id, to_client_id, value, fee, nonce, \
     status, transaction_data, transaction_output, metadata, parsed_output, created_at \
     FROM transactions";

/// Loads fixture transactions; existing hashes are left untouched.
pub async fn add_transactions(pool: &Pool<Sqlite>, transactions: &[Transaction]) -> Result<(), sqlx::Error> {
    // Start a transaction for batch insert
    let mut tx = pool.begin().await?;

    for transaction in transactions {
        sqlx::query(
            r#"
            INSERT INTO transactions
            (hash, block_hash, round, client_id, to_client_id, value, fee, nonce, status,
             transaction_data, transaction_output, metadata, parsed_output, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(hash) DO NOTHING
            "#,
        )
        .bind(&transaction.hash)
        .bind(&transaction.block_hash)
        .bind(transaction.round)
        .bind(&transaction.client_id)
        .bind(&transaction.to_client_id)
        .bind(transaction.value)
        .bind(transaction.fee)
        .bind(transaction.nonce)
        .bind(transaction.status)
        .bind(&transaction.transaction_data)
        .bind(&transaction.transaction_output)
        .bind(transaction.metadata.as_ref().map(|v| v.to_string()))
        .bind(transaction.parsed_output.as_ref().map(|v| v.to_string()))
        .bind(transaction.created_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}

pub async fn get_transaction(pool: &Pool<Sqlite>, hash: &str) -> Result<Option<Transaction>, sqlx::Error> {
    let row = sqlx::query(&format!("{} WHERE hash = ?", TRANSACTION_COLUMNS))
        .bind(hash)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(transaction_from_row).transpose()
}

/// Newest first; equal `created_at` values are ordered by hash.
pub async fn get_transactions(
    pool: &Pool<Sqlite>,
    filter: &TransactionFilter,
    skip: i64,
    limit: i64,
) -> Result<Vec<Transaction>, sqlx::Error> {
    let mut builder = QueryBuilder::<Sqlite>::new(TRANSACTION_COLUMNS);
    filter.push_where(&mut builder);
    builder
        .push(" ORDER BY created_at DESC, hash ASC LIMIT ")
        .push_bind(limit)
        .push(" OFFSET ")
        .push_bind(skip);

    let rows = builder.build().fetch_all(pool).await?;

    rows.iter().map(transaction_from_row).collect()
}

pub async fn count_transactions(pool: &Pool<Sqlite>, filter: &TransactionFilter) -> Result<i64, sqlx::Error> {
    let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM transactions");
    filter.push_where(&mut builder);

    builder.build_query_scalar::<i64>().fetch_one(pool).await
}

fn transaction_from_row(row: &SqliteRow) -> Result<Transaction, sqlx::Error> {
    Ok(Transaction {
        hash: row.try_get("hash")?,
        block_hash: row.try_get("block_hash")?,
        round: row.try_get("round")?,
        client_id: row.try_get("client_id")?,
        to_client_id: row.try_get("to_client_id")?,
        value: row.try_get("value")?,
        fee: row.try_get("fee")?,
        nonce: row.try_get("nonce")?,
        status: row.try_get("status")?,
        transaction_data: row.try_get("transaction_data")?,
        transaction_output: row.try_get("transaction_output")?,
        metadata: json_column(row, "metadata")?,
        parsed_output: json_column(row, "parsed_output")?,
        created_at: row.try_get("created_at")?,
    })
}
