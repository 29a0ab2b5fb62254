//! Read operations over chain transactions.
//!
//! Every list operation issues two independent reads, the page and the total
//! count for the same filter. Under concurrent writes the two may disagree.

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::db::{self, ExactField, TransactionFilter};
use crate::models::{Confirmation, SearchTransactionsQuery, Transaction, TransactionPage};

/// Turns a validated search request into a filter.
///
/// A `metadata` term switches to free-text search over file metadata,
/// parties and blobbers; any exact-match fields sent with it are dropped.
pub fn build_filter(query: &SearchTransactionsQuery) -> TransactionFilter {
    if let Some(term) = &query.metadata {
        let discarded = query.exact_fields();
        if !discarded.is_empty() {
            warn!("Free-text search ignores exact-match fields: {:?}", discarded);
        }
        return TransactionFilter::FreeText(term.clone());
    }

    let conditions = [
        (ExactField::Hash, &query.hash),
        (ExactField::BlockHash, &query.block_hash),
        (ExactField::ClientId, &query.client_id),
        (ExactField::ToClientId, &query.to_client_id),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.as_ref().map(|v| (field, v.clone())))
    .collect();

    TransactionFilter::Exact(conditions)
}

pub async fn get_transaction(pool: &SqlitePool, hash: &str) -> Result<Option<Transaction>, sqlx::Error> {
    db::transaction::get_transaction(pool, hash).await
}

pub async fn get_transaction_confirmation(pool: &SqlitePool, hash: &str) -> Result<Option<Confirmation>, sqlx::Error> {
    db::confirmation::get_confirmation(pool, hash).await
}

pub async fn search_transactions(
    pool: &SqlitePool,
    query: &SearchTransactionsQuery,
    skip: i64,
    limit: i64,
) -> Result<TransactionPage, sqlx::Error> {
    let filter = build_filter(query);
    debug!("Searching transactions with {:?}, skip: {}, limit: {}", filter, skip, limit);

    find_page(pool, &filter, skip, limit).await
}

pub async fn get_block_transactions(
    pool: &SqlitePool,
    block_hash: &str,
    skip: i64,
    limit: i64,
) -> Result<TransactionPage, sqlx::Error> {
    let filter = TransactionFilter::block(block_hash);
    debug!("Listing transactions of block {}, skip: {}, limit: {}", block_hash, skip, limit);

    find_page(pool, &filter, skip, limit).await
}

async fn find_page(
    pool: &SqlitePool,
    filter: &TransactionFilter,
    skip: i64,
    limit: i64,
) -> Result<TransactionPage, sqlx::Error> {
    let transactions = db::transaction::get_transactions(pool, filter, skip, limit).await?;
    let count = db::transaction::count_transactions(pool, filter).await?;

    Ok(TransactionPage { transactions, count })
}
