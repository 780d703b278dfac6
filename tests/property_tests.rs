//! Property-based tests over generated compact JSON documents.
//!
//! Documents are generated already in canonical compact form, so the
//! round-trip property is plain string identity: tokenizing and serializing
//! a canonical document must reproduce it byte for byte.

use hoconlite::{measure, parse, to_string, tokenize, Error, Token};
use proptest::prelude::*;

/// Any compact JSON value, rendered as text.
fn json_value() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("null".to_string()),
        Just("true".to_string()),
        Just("false".to_string()),
        any::<i32>().prop_map(|n| n.to_string()),
        "[a-z][a-z0-9]{0,6}".prop_map(|s| format!("\"{}\"", s)),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6)
                .prop_map(|items| format!("[{}]", items.join(","))),
            prop::collection::vec(("[a-z][a-z0-9]{0,5}", inner), 0..6).prop_map(|pairs| {
                let body = pairs
                    .into_iter()
                    .map(|(k, v)| format!("\"{}\":{}", k, v))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{{{}}}", body)
            }),
        ]
    })
}

/// A compact JSON document whose top level is a container, so that every
/// proper prefix is necessarily incomplete.
fn json_document() -> impl Strategy<Value = String> {
    prop::collection::vec(json_value(), 0..5).prop_map(|items| format!("[{}]", items.join(",")))
}

proptest! {
    #[test]
    fn prop_round_trip_identity(doc in json_document()) {
        let tokens = tokenize(doc.as_bytes()).unwrap();
        prop_assert_eq!(to_string(&doc, &tokens), doc);
    }

    #[test]
    fn prop_output_is_valid_json(doc in json_document()) {
        let tokens = tokenize(doc.as_bytes()).unwrap();
        let rendered = to_string(&doc, &tokens);
        prop_assert!(serde_json::from_str::<serde_json::Value>(&rendered).is_ok());
    }

    #[test]
    fn prop_proper_prefixes_are_incomplete(doc in json_document()) {
        let bytes = doc.as_bytes();
        let needed = measure(bytes).unwrap();
        let mut tokens = vec![Token::default(); needed];
        for cut in 1..bytes.len() {
            let mut parser = hoconlite::Parser::new();
            prop_assert_eq!(
                parser.parse(&bytes[..cut], &mut tokens),
                Err(Error::Incomplete)
            );
        }
    }

    #[test]
    fn prop_measure_equals_parse_count(doc in json_document()) {
        let bytes = doc.as_bytes();
        let needed = measure(bytes).unwrap();
        let mut tokens = vec![Token::default(); needed];
        prop_assert_eq!(parse(bytes, &mut tokens).unwrap(), needed);
    }

    #[test]
    fn prop_undersized_pool_is_exhausted(doc in json_document()) {
        let bytes = doc.as_bytes();
        let needed = measure(bytes).unwrap();
        prop_assume!(needed > 0);
        let mut tokens = vec![Token::default(); needed - 1];
        prop_assert_eq!(parse(bytes, &mut tokens), Err(Error::PoolExhausted));
    }

    #[test]
    fn prop_parents_point_backward(doc in json_document()) {
        let tokens = tokenize(doc.as_bytes()).unwrap();
        for (i, tok) in tokens.iter().enumerate() {
            prop_assert!(tok.parent < i as i32);
        }
    }

    #[test]
    fn prop_container_sizes_count_direct_children(doc in json_document()) {
        let tokens = tokenize(doc.as_bytes()).unwrap();
        for (i, tok) in tokens.iter().enumerate() {
            let children = tokens
                .iter()
                .filter(|t| t.parent == i as i32)
                .count();
            prop_assert_eq!(tok.size as usize, children);
        }
    }

    #[test]
    fn prop_comment_injection_is_transparent(doc in json_document(), note in "[ a-z]{0,10}") {
        // Splicing a line comment right after the opening bracket must not
        // change the serialized output.
        let commented = format!("[ // {}\n{}", &note, &doc[1..]);
        let tokens = tokenize(commented.as_bytes()).unwrap();
        prop_assert_eq!(to_string(&commented, &tokens), doc.clone());

        let hashed = format!("[ # {}\n{}", &note, &doc[1..]);
        let tokens = tokenize(hashed.as_bytes()).unwrap();
        prop_assert_eq!(to_string(&hashed, &tokens), doc);
    }
}
