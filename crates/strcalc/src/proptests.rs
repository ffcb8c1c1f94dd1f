use super::*;
use proptest::prelude::*;

// Property: no delimiters, no split
proptest! {
    #[test]
    fn prop_empty_delimiters_keep_input(s in "\\PC*") {
        let tokens = split_all::<&str>(&s, &[]);
        prop_assert_eq!(tokens, vec![s.as_str()]);
    }
}

// Property: default-delimited in-range values sum arithmetically
proptest! {
    #[test]
    fn prop_default_body_sums(
        values in prop::collection::vec(0i64..=1000, 1..50),
        separators in prop::collection::vec(prop::bool::ANY, 50),
    ) {
        let mut body = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                body.push(if separators[i] { ',' } else { '\n' });
            }
            body.push_str(&value.to_string());
        }

        let expected: i64 = values.iter().sum();
        prop_assert_eq!(add(&body).ok(), Some(expected));
    }
}

// Property: values above the bound never change the sum
proptest! {
    #[test]
    fn prop_over_bound_ignored(
        kept in prop::collection::vec(1i64..=1000, 0..20),
        dropped in prop::collection::vec(1001i64..1_000_000, 0..20),
    ) {
        let body = kept
            .iter()
            .chain(dropped.iter())
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let expected: i64 = kept.iter().sum();
        prop_assert_eq!(add(&body).ok(), Some(expected));
    }
}

// Property: every negative shows up in the error, in order
proptest! {
    #[test]
    fn prop_negatives_all_reported(
        negatives in prop::collection::vec(-1_000_000i64..0, 1..10),
        positives in prop::collection::vec(0i64..1000, 0..10),
    ) {
        let body = positives
            .iter()
            .chain(negatives.iter())
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let err = add(&body).err();
        prop_assert_eq!(err.as_ref().and_then(|e| e.negatives()), Some(&negatives[..]));
    }
}

// Property: a header delimiter behaves like a comma
proptest! {
    #[test]
    fn prop_custom_delimiter_matches_comma(
        values in prop::collection::vec(0i64..=1000, 1..20),
        delimiter in "[;|#*%]{1,3}",
    ) {
        let plain = values.iter().map(i64::to_string).collect::<Vec<_>>();
        let with_commas = add(&plain.join(",")).ok();
        let with_header = add(&format!("//[{}]\n{}", delimiter, plain.join(&delimiter))).ok();
        prop_assert_eq!(with_header, with_commas);
    }
}

// Property: add never panics
proptest! {
    #[test]
    fn prop_add_total(s in "\\PC*") {
        let _ = add(&s);
    }
}
