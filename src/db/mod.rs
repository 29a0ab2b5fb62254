pub mod confirmation;
pub mod connection;
pub mod filter;
pub mod migration;
pub mod transaction;

pub use filter::{ExactField, FreeTextField, TransactionFilter};

use serde_json::Value;
use sqlx::{sqlite::SqliteRow, Row};

/// Reads a nullable JSON text column.
pub(crate) fn json_column(row: &SqliteRow, name: &str) -> Result<Option<Value>, sqlx::Error> {
    let raw: Option<String> = row.try_get(name)?;
    raw.map(|text| serde_json::from_str(&text))
        .transpose()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: name.to_string(),
            source: Box::new(e),
        })
}
