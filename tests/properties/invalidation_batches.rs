//! Property tests for invalidation batch chunking.

use proptest::prelude::*;

use deploy_site::domain::entities::MAX_BATCH_SIZE;
use deploy_site::InvalidationBatch;

fn paths(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z0-9/]{1,12}", 0..=max)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Chunking keeps every path, in order, and respects the size cap.
    #[test]
    fn property_chunking_is_lossless(
        input in paths(300),
        max_size in 1usize..=64,
    ) {
        let batches = InvalidationBatch::chunked(&input, max_size);

        prop_assert_eq!(batches.len(), input.len().div_ceil(max_size));
        prop_assert!(batches.iter().all(|b| !b.is_empty() && b.len() <= max_size));

        let flattened: Vec<String> = batches.iter().flat_map(|b| b.paths().to_vec()).collect();
        let expected: Vec<String> = input
            .iter()
            .map(|p| if p.starts_with('/') { p.clone() } else { format!("/{p}") })
            .collect();
        prop_assert_eq!(flattened, expected);
    }

    /// PROPERTY: Only the last batch may be short.
    #[test]
    fn property_only_last_batch_is_partial(count in 0usize..=2500) {
        let input: Vec<String> = (0..count).map(|i| format!("p{i}")).collect();
        let batches = InvalidationBatch::chunked(&input, MAX_BATCH_SIZE);

        if let Some((last, full)) = batches.split_last() {
            prop_assert!(full.iter().all(|b| b.len() == MAX_BATCH_SIZE));
            prop_assert!(last.len() <= MAX_BATCH_SIZE);
        } else {
            prop_assert_eq!(count, 0);
        }
    }

    /// PROPERTY: Caller references are unique across batches.
    #[test]
    fn property_caller_references_are_unique(count in 1usize..=40) {
        let input: Vec<String> = (0..count).map(|i| format!("p{i}")).collect();
        let batches = InvalidationBatch::chunked(&input, 3);

        let mut refs: Vec<&str> = batches.iter().map(|b| b.caller_reference()).collect();
        refs.sort_unstable();
        refs.dedup();
        prop_assert_eq!(refs.len(), batches.len());
    }
}
