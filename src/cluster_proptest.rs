//! Property-based tests for cluster registration.
//!
//! These tests use proptest to generate random selector sequences and verify
//! that the ordering and deduplication invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::cluster::Cluster;
    use crate::error::Error;
    use crate::selector::SelectorValue;
    use proptest::collection::{btree_set, vec};
    use proptest::prelude::*;

    proptest! {
        /// Property: distinct values come back in call order, one entry per call
        #[test]
        fn distinct_values_keep_call_order(
            values in btree_set("[a-z/]{1,12}", 1..40)
                .prop_map(|set| set.into_iter().collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let mut cluster = Cluster::new("prop");
            for value in &values {
                cluster.register(value.as_str(), None).unwrap();
            }

            prop_assert_eq!(cluster.len(), values.len());
            let tokens: Vec<String> = cluster.iter().map(|s| s.token().to_string()).collect();
            prop_assert_eq!(tokens, values.clone());
            for value in &values {
                prop_assert!(cluster.contains_token(value));
                prop_assert!(cluster.contains_value(&SelectorValue::from(value.as_str())));
            }
        }

        /// Property: re-registering any existing value fails, whatever the label
        #[test]
        fn repeated_value_always_fails(
            values in btree_set("[a-z]{1,8}", 1..20),
            pick in any::<prop::sample::Index>(),
            label in proptest::option::of("[A-Za-z ]{0,10}"),
        ) {
            let values: Vec<String> = values.into_iter().collect();
            let mut cluster = Cluster::new("prop");
            for value in &values {
                cluster.register(value.as_str(), None).unwrap();
            }

            let repeated = pick.get(values.as_slice()).clone();
            let result = cluster.register(repeated, label);
            let is_duplicate = matches!(result, Err(Error::DuplicateEntry { .. }));
            prop_assert!(is_duplicate);
            prop_assert_eq!(cluster.len(), values.len());
        }

        /// Property: an integer and its decimal text never coexist in one cluster
        #[test]
        fn integer_and_text_tokens_collide(n in any::<i64>(), text_first in any::<bool>()) {
            let mut cluster = Cluster::new("prop");
            let (first, second) = if text_first {
                (SelectorValue::from(n.to_string()), SelectorValue::from(n))
            } else {
                (SelectorValue::from(n), SelectorValue::from(n.to_string()))
            };

            cluster.register(first, None).unwrap();
            prop_assert!(cluster.register(second, None).is_err());
            prop_assert_eq!(cluster.len(), 1);
        }

        /// Property: labels never affect tokens
        #[test]
        fn labels_do_not_change_tokens(
            entries in vec(("[a-z]{1,6}", proptest::option::of("[A-Z]{1,6}")), 1..20)
        ) {
            let mut cluster = Cluster::new("prop");
            for (value, label) in &entries {
                if let Ok(selector) = cluster.register(value.as_str(), label.clone()) {
                    prop_assert_eq!(selector.token(), value.as_str());
                    let expected_title = label.clone().unwrap_or_else(|| value.clone());
                    prop_assert_eq!(selector.title(), expected_title.as_str());
                }
            }
        }
    }
}
