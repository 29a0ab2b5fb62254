#[cfg(test)]
mod tests {
    use crate::{
        db::{ExactField, FreeTextField, TransactionFilter},
        models::SearchTransactionsQuery,
        service::build_filter,
    };
    use sqlx::{QueryBuilder, Sqlite};

    fn rendered(filter: &TransactionFilter) -> String {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT hash FROM transactions");
        filter.push_where(&mut builder);
        builder.sql().to_string()
    }

    #[test]
    fn test_exact_filter_passes_fields_through() {
        let query = SearchTransactionsQuery {
            hash: Some("h1".to_string()),
            to_client_id: Some("bob".to_string()),
            ..Default::default()
        };

        assert_eq!(
            build_filter(&query),
            TransactionFilter::Exact(vec![
                (ExactField::Hash, "h1".to_string()),
                (ExactField::ToClientId, "bob".to_string()),
            ])
        );
    }

    #[test]
    fn test_metadata_switches_to_free_text() {
        let query = SearchTransactionsQuery {
            metadata: Some("X".to_string()),
            client_id: Some("alice".to_string()),
            block_hash: Some("bh1".to_string()),
            ..Default::default()
        };

        // Only the metadata term survives
        assert_eq!(build_filter(&query), TransactionFilter::FreeText("X".to_string()));
    }

    #[test]
    fn test_free_text_covers_nine_fields() {
        let paths: Vec<_> = FreeTextField::ALL.iter().map(|f| f.path()).collect();
        assert_eq!(
            paths,
            vec![
                "metadata.MetaData.Name",
                "metadata.MetaData.Path",
                "metadata.MetaData.PathHash",
                "metadata.MetaData.Hash",
                "client_id",
                "to_client_id",
                "parsed_output.blobber_id",
                "parsed_output.blobbers.id",
                "parsed_output.allocation_id",
            ]
        );

        let sql = rendered(&TransactionFilter::FreeText("X".to_string()));
        assert_eq!(sql.matches('?').count(), 9);
        assert_eq!(sql.matches(" OR ").count(), 8);
        assert!(!sql.contains(" AND "));
    }

    #[test]
    fn test_exact_sql_is_conjunction() {
        let sql = rendered(&TransactionFilter::Exact(vec![
            (ExactField::BlockHash, "bh1".to_string()),
            (ExactField::ClientId, "alice".to_string()),
        ]));

        assert_eq!(
            sql,
            "SELECT hash FROM transactions WHERE transactions.block_hash = ? AND transactions.client_id = ?"
        );
    }

    #[test]
    fn test_empty_exact_filter_has_no_where() {
        let sql = rendered(&TransactionFilter::Exact(Vec::new()));
        assert_eq!(sql, "SELECT hash FROM transactions");
    }
}
