use sqlx::{sqlite::SqliteRow, Pool, Row, Sqlite};

use crate::db::json_column;
use crate::models::Confirmation;

pub async fn add_confirmations(pool: &Pool<Sqlite>, confirmations: &[Confirmation]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for confirmation in confirmations {
        sqlx::query(
            r#"
            INSERT INTO confirmations
            (hash, version, block_hash, previous_block_hash, round, creation_date,
             merkle_tree_root, merkle_tree_path, receipt_merkle_tree_root, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(hash) DO NOTHING
            "#,
        )
        .bind(&confirmation.hash)
        .bind(&confirmation.version)
        .bind(&confirmation.block_hash)
        .bind(&confirmation.previous_block_hash)
        .bind(confirmation.round)
        .bind(confirmation.creation_date)
        .bind(&confirmation.merkle_tree_root)
        .bind(confirmation.merkle_tree_path.as_ref().map(|v| v.to_string()))
        .bind(&confirmation.receipt_merkle_tree_root)
        .bind(confirmation.created_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}

pub async fn get_confirmation(pool: &Pool<Sqlite>, hash: &str) -> Result<Option<Confirmation>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT hash, version, block_hash, previous_block_hash, round, creation_date,
                merkle_tree_root, merkle_tree_path, receipt_merkle_tree_root, created_at
         FROM confirmations WHERE hash = ?",
    )
    .bind(hash)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(confirmation_from_row).transpose()
}

fn confirmation_from_row(row: &SqliteRow) -> Result<Confirmation, sqlx::Error> {
    Ok(Confirmation {
        hash: row.try_get("hash")?,
        version: row.try_get("version")?,
        block_hash: row.try_get("block_hash")?,
        previous_block_hash: row.try_get("previous_block_hash")?,
        round: row.try_get("round")?,
        creation_date: row.try_get("creation_date")?,
        merkle_tree_root: row.try_get("merkle_tree_root")?,
        merkle_tree_path: json_column(row, "merkle_tree_path")?,
        receipt_merkle_tree_root: row.try_get("receipt_merkle_tree_root")?,
        created_at: row.try_get("created_at")?,
    })
}
