//! Property-based tests for the case-insensitive ordered map and the
//! parser's key handling.
//!
//! The central property: the map's comparison agrees in sign with an
//! ordinary case-insensitive string comparison, for every pair of keys.

use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use inicfg::{parse_str, Error, IniMap, IniOptions};

/// Reference comparison: case-insensitive lexicographic string compare.
fn reference_cmp(a: &str, b: &str) -> Ordering {
    a.to_ascii_uppercase().cmp(&b.to_ascii_uppercase())
}

fn permute_case(key: &str, flips: &[bool]) -> String {
    key.chars()
        .zip(flips.iter().chain(std::iter::repeat(&false)))
        .map(|(c, flip)| {
            if *flip {
                if c.is_ascii_lowercase() {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_lookup_any_case_permutation(
        key in "[a-zA-Z0-9_-]{1,16}",
        flips in prop::collection::vec(any::<bool>(), 16),
    ) {
        let mut map = IniMap::new();
        map.insert(&key, 1u32);
        let permuted = permute_case(&key, &flips);
        prop_assert_eq!(map.get(&permuted), Some(&1));
    }

    #[test]
    fn prop_ordering_agrees_with_reference(a in "[ -~]{0,12}", b in "[ -~]{0,12}") {
        let mut map = IniMap::new();
        map.insert(&a, 0u32);
        map.insert(&b, 1u32);
        let keys: Vec<&str> = map.keys().collect();
        match reference_cmp(&a, &b) {
            Ordering::Equal => {
                // One entry, last write wins, first spelling kept.
                prop_assert_eq!(map.len(), 1);
                prop_assert_eq!(keys, vec![a.as_str()]);
                prop_assert_eq!(map.get(&a), Some(&1));
            }
            Ordering::Less => prop_assert_eq!(keys, vec![a.as_str(), b.as_str()]),
            Ordering::Greater => prop_assert_eq!(keys, vec![b.as_str(), a.as_str()]),
        }
    }

    #[test]
    fn prop_iteration_sorted_and_unique(
        keys in prop::collection::vec("[!-~]{1,10}", 0..20),
    ) {
        let mut map = IniMap::new();
        for (i, key) in keys.iter().enumerate() {
            map.insert(key, i);
        }

        let collected: Vec<&str> = map.keys().collect();
        for pair in collected.windows(2) {
            prop_assert_eq!(reference_cmp(pair[0], pair[1]), Ordering::Less);
        }

        let distinct: BTreeSet<String> =
            keys.iter().map(|k| k.to_ascii_uppercase()).collect();
        prop_assert_eq!(map.len(), distinct.len());
    }

    #[test]
    fn prop_parse_then_get(
        key in "[a-zA-Z][a-zA-Z0-9_]{0,11}",
        flips in prop::collection::vec(any::<bool>(), 12),
        value in "[0-9a-zA-Z ]{0,16}",
    ) {
        let source = format!("[s]\n{key}={value}\n");
        let ini = parse_str(&source, IniOptions::stable()).unwrap();
        // Any case permutation of the key finds the same stripped value.
        let permuted = permute_case(&key, &flips);
        let got = ini.get("s", &permuted).unwrap();
        prop_assert_eq!(got.as_str(), Some(value.trim()));
    }

    #[test]
    fn prop_missing_delimiter_reports_line(key in "[a-zA-Z][a-zA-Z0-9_]{0,11}") {
        let source = format!("[s]\n{key}\n");
        let err = parse_str(&source, IniOptions::stable()).unwrap_err();
        prop_assert_eq!(err, Error::NameWithoutValue { line: 2 });
    }
}
