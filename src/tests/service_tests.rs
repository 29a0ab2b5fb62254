//! Service-level tests for lookups, searches and block listings against an
//! in-memory database.

#[cfg(test)]
mod tests {
    use crate::{
        db::{confirmation, transaction},
        models::{Confirmation, SearchTransactionsQuery},
        service,
        tests::{make_transaction, setup_pool, with_file_metadata, with_parsed_output},
    };
    use serde_json::json;

    const TERM: &str = "blobber42";

    fn metadata_query(term: &str) -> SearchTransactionsQuery {
        SearchTransactionsQuery {
            metadata: Some(term.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_get_transaction_found_and_absent() {
        let pool = setup_pool().await;

        let missing = service::get_transaction(&pool, "abc123").await.unwrap();
        assert!(missing.is_none(), "Empty store should yield an absent result");

        let tx = make_transaction("abc123", "bh1", 1_000);
        transaction::add_transactions(&pool, &[tx.clone()]).await.unwrap();

        let found = service::get_transaction(&pool, "abc123").await.unwrap();
        assert_eq!(found, Some(tx));
    }

    #[tokio::test]
    async fn test_json_columns_round_trip_through_store() {
        let pool = setup_pool().await;
        let tx = with_parsed_output(
            with_file_metadata(make_transaction("json1", "bh1", 1), "Name", "photo.png"),
            json!({ "allocation_id": "alloc", "blobbers": [{ "id": "b1" }] }),
        );
        transaction::add_transactions(&pool, &[tx.clone()]).await.unwrap();

        let found = service::get_transaction(&pool, "json1").await.unwrap().unwrap();
        assert_eq!(found.metadata, tx.metadata);
        assert_eq!(found.parsed_output, tx.parsed_output);
    }

    #[tokio::test]
    async fn test_exact_search_matches_all_supplied_fields() {
        let pool = setup_pool().await;

        let mut a = make_transaction("a", "bh1", 3);
        a.client_id = "alice".to_string();
        let mut b = make_transaction("b", "bh2", 2);
        b.client_id = "alice".to_string();
        let mut c = make_transaction("c", "bh1", 1);
        c.client_id = "bob".to_string();
        transaction::add_transactions(&pool, &[a, b, c]).await.unwrap();

        let query = SearchTransactionsQuery {
            client_id: Some("alice".to_string()),
            ..Default::default()
        };
        let page = service::search_transactions(&pool, &query, 0, 100).await.unwrap();
        let hashes: Vec<_> = page.transactions.iter().map(|t| t.hash.as_str()).collect();
        assert_eq!(hashes, vec!["a", "b"]);
        assert_eq!(page.count, 2);

        let query = SearchTransactionsQuery {
            client_id: Some("alice".to_string()),
            block_hash: Some("bh1".to_string()),
            ..Default::default()
        };
        let page = service::search_transactions(&pool, &query, 0, 100).await.unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.transactions[0].hash, "a");
    }

    #[tokio::test]
    async fn test_empty_search_returns_everything() {
        let pool = setup_pool().await;
        let txs: Vec<_> = (0..4).map(|i| make_transaction(&format!("t{}", i), "bh", i)).collect();
        transaction::add_transactions(&pool, &txs).await.unwrap();

        let page = service::search_transactions(&pool, &SearchTransactionsQuery::default(), 0, 100)
            .await
            .unwrap();
        assert_eq!(page.count, 4);
        assert_eq!(page.transactions.len(), 4);
    }

    #[tokio::test]
    async fn test_metadata_search_matches_every_field() {
        let pool = setup_pool().await;

        let mut by_client = make_transaction("m5", "bh", 5);
        by_client.client_id = TERM.to_string();
        let mut by_recipient = make_transaction("m6", "bh", 6);
        by_recipient.to_client_id = Some(TERM.to_string());

        let matching = vec![
            with_file_metadata(make_transaction("m1", "bh", 1), "Name", TERM),
            with_file_metadata(make_transaction("m2", "bh", 2), "Path", TERM),
            with_file_metadata(make_transaction("m3", "bh", 3), "PathHash", TERM),
            with_file_metadata(make_transaction("m4", "bh", 4), "Hash", TERM),
            by_client,
            by_recipient,
            with_parsed_output(make_transaction("m7", "bh", 7), json!({ "blobber_id": TERM })),
            with_parsed_output(
                make_transaction("m8", "bh", 8),
                json!({ "blobbers": [{ "id": "other" }, { "id": TERM }] }),
            ),
            with_parsed_output(make_transaction("m9", "bh", 9), json!({ "allocation_id": TERM })),
        ];
        let unrelated = vec![
            with_file_metadata(make_transaction("n1", "bh", 10), "Name", "blobber43"),
            with_parsed_output(
                make_transaction("n2", "bh", 11),
                json!({ "blobbers": [{ "id": "blobber43" }], "allocation_id": "alloc" }),
            ),
            // Term nested under an unsearched key
            with_parsed_output(make_transaction("n3", "bh", 12), json!({ "owner": TERM })),
        ];
        transaction::add_transactions(&pool, &matching).await.unwrap();
        transaction::add_transactions(&pool, &unrelated).await.unwrap();

        let page = service::search_transactions(&pool, &metadata_query(TERM), 0, 100).await.unwrap();
        let hashes: Vec<_> = page.transactions.iter().map(|t| t.hash.as_str()).collect();

        assert_eq!(page.count, 9);
        assert_eq!(hashes, vec!["m9", "m8", "m7", "m6", "m5", "m4", "m3", "m2", "m1"]);
    }

    #[tokio::test]
    async fn test_metadata_search_skips_non_object_blobbers() {
        let pool = setup_pool().await;
        let mut hit = make_transaction("hit", "bh1", 2);
        hit.client_id = TERM.to_string();
        let odd = vec![
            with_parsed_output(make_transaction("odd_strings", "bh1", 1), json!({ "blobbers": ["b1", "b2"] })),
            with_parsed_output(make_transaction("odd_numbers", "bh1", 0), json!({ "blobbers": [1, 2.5] })),
            with_parsed_output(make_transaction("odd_scalar", "bh1", 3), json!({ "blobbers": TERM })),
        ];
        transaction::add_transactions(&pool, &[hit]).await.unwrap();
        transaction::add_transactions(&pool, &odd).await.unwrap();

        let page = service::search_transactions(&pool, &metadata_query(TERM), 0, 100).await.unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.transactions[0].hash, "hit");
    }

    #[tokio::test]
    async fn test_metadata_search_discards_other_fields() {
        // Exact-match fields sent alongside metadata do not narrow the search
        let pool = setup_pool().await;
        let mut tx = make_transaction("x1", "bh1", 1);
        tx.client_id = TERM.to_string();
        transaction::add_transactions(&pool, &[tx]).await.unwrap();

        let query = SearchTransactionsQuery {
            metadata: Some(TERM.to_string()),
            block_hash: Some("some_other_block".to_string()),
            hash: Some("not_x1".to_string()),
            ..Default::default()
        };
        let page = service::search_transactions(&pool, &query, 0, 100).await.unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.transactions[0].hash, "x1");
    }

    #[tokio::test]
    async fn test_block_transactions_pagination_window() {
        let pool = setup_pool().await;

        // t00 is oldest, t19 newest
        let txs: Vec<_> = (0..20)
            .map(|i| make_transaction(&format!("t{:02}", i), "bh1", 1_000 + i))
            .collect();
        transaction::add_transactions(&pool, &txs).await.unwrap();
        transaction::add_transactions(&pool, &[make_transaction("other", "bh2", 5_000)])
            .await
            .unwrap();

        let page = service::get_block_transactions(&pool, "bh1", 10, 5).await.unwrap();
        let hashes: Vec<_> = page.transactions.iter().map(|t| t.hash.as_str()).collect();

        // Records 11-15 by descending created_at
        assert_eq!(hashes, vec!["t09", "t08", "t07", "t06", "t05"]);
        assert_eq!(page.count, 20, "Count covers the whole block, not the page");
    }

    #[tokio::test]
    async fn test_count_is_independent_of_window() {
        let pool = setup_pool().await;
        let txs: Vec<_> = (0..3).map(|i| make_transaction(&format!("c{}", i), "bh1", i)).collect();
        transaction::add_transactions(&pool, &txs).await.unwrap();

        let first = service::get_block_transactions(&pool, "bh1", 0, 1).await.unwrap();
        let beyond = service::get_block_transactions(&pool, "bh1", 50, 10).await.unwrap();

        assert_eq!(first.transactions.len(), 1);
        assert_eq!(first.count, 3);
        assert!(beyond.transactions.is_empty());
        assert_eq!(beyond.count, 3);
    }

    #[tokio::test]
    async fn test_equal_timestamps_ordered_by_hash() {
        let pool = setup_pool().await;
        let txs = vec![
            make_transaction("tie_c", "bh1", 500),
            make_transaction("tie_a", "bh1", 500),
            make_transaction("newer", "bh1", 600),
            make_transaction("tie_b", "bh1", 500),
        ];
        transaction::add_transactions(&pool, &txs).await.unwrap();

        let page = service::get_block_transactions(&pool, "bh1", 0, 10).await.unwrap();
        let hashes: Vec<_> = page.transactions.iter().map(|t| t.hash.as_str()).collect();

        assert_eq!(hashes, vec!["newer", "tie_a", "tie_b", "tie_c"]);
    }

    #[tokio::test]
    async fn test_get_transaction_confirmation() {
        let pool = setup_pool().await;

        let missing = service::get_transaction_confirmation(&pool, "abc123").await.unwrap();
        assert!(missing.is_none());

        let confirmation = Confirmation {
            hash: "abc123".to_string(),
            version: "1.0".to_string(),
            block_hash: "bh1".to_string(),
            previous_block_hash: Some("bh0".to_string()),
            round: 42,
            creation_date: 1_700_000_000,
            merkle_tree_root: Some("root".to_string()),
            merkle_tree_path: Some(json!({ "nodes": ["n1", "n2"], "leaf_index": 1 })),
            receipt_merkle_tree_root: None,
            created_at: 1_700_000_001,
        };
        confirmation::add_confirmations(&pool, &[confirmation.clone()]).await.unwrap();

        let found = service::get_transaction_confirmation(&pool, "abc123").await.unwrap();
        assert_eq!(found, Some(confirmation));
    }

    #[tokio::test]
    async fn test_database_errors_propagate() {
        let pool = setup_pool().await;
        pool.close().await;

        let result = service::search_transactions(&pool, &SearchTransactionsQuery::default(), 0, 10).await;
        assert!(result.is_err(), "Closed pool should surface an error");
    }
}
