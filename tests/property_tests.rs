//! Property-based tests - pragmatic coverage of the core guarantees:
//! encode/decode inversion, round-tripping through both dialects, and the
//! comparator being a strict total order.

use std::cmp::Ordering;

use indexmap::IndexMap;
use proptest::prelude::*;

use grif_data::{
    compare_keys, encode, export_to_string, load_from_str, ExportOptions, PassthroughFormatter,
    Scanner,
};

fn decode(encoded: &str) -> String {
    let mut scanner = Scanner::new(&format!("\"{encoded}\""));
    scanner.read_quoted_string().unwrap()
}

/// Keys: dotted lowercase identifiers, occasionally with wildcard or
/// numeric segments. Segments are either identifiers (letter first) or
/// plain numbers, the shape real stores use.
fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex(
        "[a-z][a-z0-9]{0,6}(\\.([a-z][a-z0-9]{0,3}|0|[1-9][0-9]{0,2}|\\*|\\?|#)){0,3}",
    )
    .unwrap()
}

/// Values safe in the line-oriented dialect: printable ASCII, not starting
/// with whitespace (leading whitespace is continuation syntax and cannot
/// survive).
fn grif_value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("([!-~][ -~]{0,19})?").unwrap()
}

fn roundtrip(store: &IndexMap<String, String>, options: &ExportOptions) -> bool {
    let text = match export_to_string(store, options, &PassthroughFormatter) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("export failed: {e}");
            return false;
        }
    };
    let mut reloaded: IndexMap<String, String> = IndexMap::new();
    match load_from_str(&text, &mut reloaded, &PassthroughFormatter) {
        Ok(()) => *store == reloaded,
        Err(e) => {
            eprintln!("reload failed: {e}\nexported was: {text}");
            false
        }
    }
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(s in ".*") {
        prop_assert_eq!(decode(&encode(&s)), s);
    }

    #[test]
    fn prop_decode_inverts_encode_for_scripts(s in ".*") {
        let script = format!("@{s}");
        prop_assert_eq!(decode(&encode(&script)), script);
    }

    #[test]
    fn prop_json_roundtrip_any_value(
        entries in proptest::collection::btree_map(key_strategy(), ".*", 0..12)
    ) {
        let store: IndexMap<String, String> = entries.into_iter().collect();
        prop_assert!(roundtrip(&store, &ExportOptions::json()));
    }

    #[test]
    fn prop_grif_roundtrip_line_safe_values(
        entries in proptest::collection::btree_map(key_strategy(), grif_value_strategy(), 0..12)
    ) {
        let store: IndexMap<String, String> = entries.into_iter().collect();
        prop_assert!(roundtrip(&store, &ExportOptions::grif()));
    }

    #[test]
    fn prop_compare_is_reflexive(key in key_strategy()) {
        prop_assert_eq!(compare_keys(&key, &key), Ordering::Equal);
    }

    #[test]
    fn prop_compare_is_antisymmetric(x in key_strategy(), y in key_strategy()) {
        prop_assert_eq!(compare_keys(&x, &y), compare_keys(&y, &x).reverse());
    }

    #[test]
    fn prop_compare_is_transitive(
        x in key_strategy(),
        y in key_strategy(),
        z in key_strategy(),
    ) {
        let mut keys = [x, y, z];
        keys.sort_by(|a, b| compare_keys(a, b));
        // Sorted order must be internally consistent.
        prop_assert_ne!(compare_keys(&keys[0], &keys[1]), Ordering::Greater);
        prop_assert_ne!(compare_keys(&keys[1], &keys[2]), Ordering::Greater);
        prop_assert_ne!(compare_keys(&keys[0], &keys[2]), Ordering::Greater);
    }

    #[test]
    fn prop_export_is_deterministic(
        entries in proptest::collection::btree_map(key_strategy(), ".*", 0..12)
    ) {
        let store: IndexMap<String, String> = entries.clone().into_iter().collect();
        let reversed: IndexMap<String, String> = entries.into_iter().rev().collect();
        let a = export_to_string(&store, &ExportOptions::json(), &PassthroughFormatter).unwrap();
        let b = export_to_string(&reversed, &ExportOptions::json(), &PassthroughFormatter).unwrap();
        // Insertion order must not leak into the output.
        prop_assert_eq!(a, b);
    }
}
