//! Filters accepted by the transaction queries and their SQL rendering.

use sqlx::{QueryBuilder, Sqlite};

/// Columns that can be matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExactField {
    Hash,
    BlockHash,
    ClientId,
    ToClientId,
}

impl ExactField {
    pub fn column(self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::BlockHash => "block_hash",
            Self::ClientId => "client_id",
            Self::ToClientId => "to_client_id",
        }
    }
}

/// Document fields a free-text term is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeTextField {
    FileName,
    FilePath,
    FilePathHash,
    FileHash,
    ClientId,
    ToClientId,
    BlobberId,
    BlobbersId,
    AllocationId,
}

impl FreeTextField {
    pub const ALL: [FreeTextField; 9] = [
        Self::FileName,
        Self::FilePath,
        Self::FilePathHash,
        Self::FileHash,
        Self::ClientId,
        Self::ToClientId,
        Self::BlobberId,
        Self::BlobbersId,
        Self::AllocationId,
    ];

    /// Dotted document path of the field.
    pub fn path(self) -> &'static str {
        match self {
            Self::FileName => "metadata.MetaData.Name",
            Self::FilePath => "metadata.MetaData.Path",
            Self::FilePathHash => "metadata.MetaData.PathHash",
            Self::FileHash => "metadata.MetaData.Hash",
            Self::ClientId => "client_id",
            Self::ToClientId => "to_client_id",
            Self::BlobberId => "parsed_output.blobber_id",
            Self::BlobbersId => "parsed_output.blobbers.id",
            Self::AllocationId => "parsed_output.allocation_id",
        }
    }

    // SQL placed around the bound term.
    fn sql(self) -> (&'static str, &'static str) {
        match self {
            Self::FileName => ("json_extract(transactions.metadata, '$.MetaData.Name') = ", ""),
            Self::FilePath => ("json_extract(transactions.metadata, '$.MetaData.Path') = ", ""),
            Self::FilePathHash => ("json_extract(transactions.metadata, '$.MetaData.PathHash') = ", ""),
            Self::FileHash => ("json_extract(transactions.metadata, '$.MetaData.Hash') = ", ""),
            Self::ClientId => ("transactions.client_id = ", ""),
            Self::ToClientId => ("transactions.to_client_id = ", ""),
            Self::BlobberId => ("json_extract(transactions.parsed_output, '$.blobber_id') = ", ""),
            Self::BlobbersId => (
                "EXISTS (SELECT 1 FROM json_each(transactions.parsed_output, '$.blobbers') AS blobber \
                 WHERE json_extract(transactions.parsed_output, blobber.fullkey || '.id') = ",
                ")",
            ),
            Self::AllocationId => ("json_extract(transactions.parsed_output, '$.allocation_id') = ", ""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionFilter {
    /// AND of equality conditions; empty matches every transaction.
    Exact(Vec<(ExactField, String)>),
    /// OR of equality against every [`FreeTextField`].
    FreeText(String),
}

impl TransactionFilter {
    pub fn block(block_hash: &str) -> Self {
        Self::Exact(vec![(ExactField::BlockHash, block_hash.to_string())])
    }

    /// Appends the WHERE clause for this filter, if any.
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        match self {
            Self::Exact(conditions) => {
                for (i, (field, value)) in conditions.iter().enumerate() {
                    builder.push(if i == 0 { " WHERE " } else { " AND " });
                    builder
                        .push("transactions.")
                        .push(field.column())
                        .push(" = ")
                        .push_bind(value.clone());
                }
            }
            Self::FreeText(term) => {
                builder.push(" WHERE (");
                for (i, field) in FreeTextField::ALL.iter().enumerate() {
                    if i > 0 {
                        builder.push(" OR ");
                    }
                    let (prefix, suffix) = field.sql();
                    builder.push(prefix).push_bind(term.clone()).push(suffix);
                }
                builder.push(")");
            }
        }
    }
}
