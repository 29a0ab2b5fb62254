use crate::{
    api::{error::ApiError, response::with_total_count},
    models::{Confirmation, SearchTransactionsQuery, Transaction},
    pagination::{self, Pagination},
    service,
    state::AppState,
    validation::{validate_hash, validate_parameter, validate_query},
};
use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::get,
    Json, Router,
};
use std::{collections::HashMap, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

pub const SEARCH_TRANSACTIONS_SUPPORTED_QUERY_PARAMS: [&str; 5] =
    ["hash", "block_hash", "metadata", "client_id", "to_client_id"];

// Create router with all routes
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/transaction/{hash}", get(get_transaction))
        .route("/transaction/{hash}/confirmation", get(get_transaction_confirmation))
        .route("/transactions", get(search_transactions))
        .route("/block/{block_hash}/transactions", get(get_block_transactions))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn health() -> &'static str {
    "ok"
}

// GET /transaction/{hash} handler
async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(hash): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    let hash = validate_hash(&hash)?;

    match service::get_transaction(&state.db_pool, hash).await? {
        Some(transaction) => Ok(Json(transaction)),
        None => {
            info!("Transaction {} not found", hash);
            Err(ApiError::NotFound(format!("Unable to get transaction of hash {}", hash)))
        }
    }
}

// GET /transaction/{hash}/confirmation handler
async fn get_transaction_confirmation(
    State(state): State<Arc<AppState>>,
    Path(hash): Path<String>,
) -> Result<Json<Confirmation>, ApiError> {
    let hash = validate_hash(&hash)?;

    match service::get_transaction_confirmation(&state.db_pool, hash).await? {
        Some(confirmation) => Ok(Json(confirmation)),
        None => Err(ApiError::NotFound(format!(
            "Unable to get confirmation of transaction hash {}",
            hash
        ))),
    }
}

// GET /transactions handler
async fn search_transactions(
    State(state): State<Arc<AppState>>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let page = params.remove("page");
    let size = params.remove("size");

    let sanitized = validate_query(&params, &SEARCH_TRANSACTIONS_SUPPORTED_QUERY_PARAMS).map_err(|e| {
        error!("Error occurred: {}", e);
        e
    })?;
    let window = pagination_window(&state, page.as_deref(), size.as_deref())?;
    let query = SearchTransactionsQuery::from_sanitized(sanitized);

    info!("Searching transactions: {:?}, skip: {}, limit: {}", query, window.skip, window.limit);

    let page = service::search_transactions(&state.db_pool, &query, window.skip, window.limit).await?;

    Ok(with_total_count(page.transactions, page.count))
}

// GET /block/{block_hash}/transactions handler
async fn get_block_transactions(
    State(state): State<Arc<AppState>>,
    Path(block_hash): Path<String>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let block_hash = validate_parameter("block_hash", &block_hash)?;
    let page = params.remove("page");
    let size = params.remove("size");

    // Only page and size are accepted here
    validate_query(&params, &[]).map_err(|e| {
        error!("Error occurred: {}", e);
        e
    })?;
    let window = pagination_window(&state, page.as_deref(), size.as_deref())?;

    info!("Fetching transactions of block: {}, skip: {}, limit: {}", block_hash, window.skip, window.limit);

    let page = service::get_block_transactions(&state.db_pool, block_hash, window.skip, window.limit).await?;

    Ok(with_total_count(page.transactions, page.count))
}

fn pagination_window(state: &AppState, page: Option<&str>, size: Option<&str>) -> Result<Pagination, ApiError> {
    pagination::from_request(page, size, state.config.max_page_size).map_err(|e| {
        error!("Error occurred: {}", e);
        ApiError::from(e)
    })
}
