//! Property-based tests for seed counting

use droobi::backend::status::seeds::count_records;
use proptest::prelude::*;
use serde_json::Value;

use crate::common::TestSeeds;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime")
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_array_length_is_counted(items in proptest::collection::vec(any::<i64>(), 0..200)) {
        let seeds = TestSeeds::new();
        let contents = serde_json::to_string(&items).unwrap();
        let path = seeds.write("terms.json", &contents);

        prop_assert_eq!(block_on(count_records(&path)), items.len() as u64);
    }

    #[test]
    fn test_arbitrary_content_never_fails(contents in ".{0,200}") {
        let seeds = TestSeeds::new();
        let path = seeds.write("videos.json", &contents);

        let expected = match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Array(items)) => items.len() as u64,
            _ => 0,
        };
        prop_assert_eq!(block_on(count_records(&path)), expected);
    }
}
