//! Tests for construction, append, iteration and membership
//!
//! Uses `IntCollection` (only `i32`) and `StrCollection` (only `String`).

use tola_coll::prelude::*;

type IntCollection = TypedCollection<i32>;
type StrCollection = TypedCollection<String>;

fn valid_int_list() -> Vec<i32> {
    vec![1, 2, 3, 4, 5, 26]
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_collection_init() {
    let coll = IntCollection::from_items(valid_int_list()).unwrap();
    assert_eq!(coll.iter().copied().collect::<Vec<_>>(), valid_int_list());
    assert!(coll.is_unique());
}

#[test]
fn test_empty_collection() {
    let coll = IntCollection::new();
    assert!(coll.is_empty());
    assert_eq!(coll.len(), 0);
    assert_eq!(coll.iter().next(), None);
    assert_eq!(coll.reversed().next(), None);
    assert_eq!(coll, IntCollection::default());
}

#[test]
fn test_init_with_duplicate_seed_fails() {
    let err = IntCollection::from_items([1, 2, 2]).unwrap_err();
    assert_eq!(err, CollectionError::ItemAlreadyExists);
}

#[test]
fn test_init_from_candidates_checks_types() {
    let err = IntCollection::from_candidates(candidates![1, "two"], CollectionConfig::UNIQUE)
        .unwrap_err();
    assert!(err.is_invalid_type());

    let coll = IntCollection::from_candidates(candidates![1, 2], CollectionConfig::UNIQUE).unwrap();
    assert_eq!(coll.as_slice(), &[1, 2]);
}

// =============================================================================
// Append
// =============================================================================

#[test]
fn test_valid_append() {
    let mut coll = IntCollection::new();
    coll.append(26).unwrap();
    assert_eq!(coll.as_slice()[0], 26);
}

#[test]
fn test_invalid_type_append() {
    let mut coll = IntCollection::new();
    let err = coll.append_candidate(Candidate::new("I'm a String")).unwrap_err();
    assert!(matches!(
        err,
        CollectionError::InvalidItemType { found: "&str", permitted: &["i32"] }
    ));
    assert!(coll.is_empty());
}

#[test]
fn test_invalid_non_unique_append() {
    let mut coll = IntCollection::new();
    coll.append(26).unwrap();
    assert_eq!(coll.append(26), Err(CollectionError::ItemAlreadyExists));
    assert_eq!(coll.len(), 1);
}

#[test]
fn test_valid_non_unique_append() {
    let mut coll = IntCollection::non_unique();
    coll.append(26).unwrap();
    coll.append(26).unwrap();
    assert_eq!(coll.len(), 2);
}

#[test]
fn test_string_collection_append() {
    let mut coll = StrCollection::new();
    coll.append("Once").unwrap();
    coll.append(String::from("Upon")).unwrap();
    assert_eq!(coll.append("Once"), Err(CollectionError::ItemAlreadyExists));
    assert_eq!(coll.as_slice(), &["Once", "Upon"]);
}

// =============================================================================
// Iteration & Membership
// =============================================================================

#[test]
fn test_reverse() {
    let coll = IntCollection::from_items(valid_int_list()).unwrap();
    let reversed: Vec<_> = coll.reversed().copied().collect();
    assert_eq!(reversed, [26, 5, 4, 3, 2, 1]);
}

#[test]
fn test_iterate_twice() {
    let coll = IntCollection::from_items(valid_int_list()).unwrap();
    let first: Vec<_> = coll.iter().collect();
    let second: Vec<_> = coll.iter().collect();
    assert_eq!(first, second);
}

#[test]
fn test_owned_iteration() {
    let coll = IntCollection::from_items([3, 1, 2]).unwrap();
    let mut seen = Vec::new();
    for item in &coll {
        seen.push(*item);
    }
    assert_eq!(seen, coll.clone().into_vec());
    assert_eq!(coll.into_iter().rev().collect::<Vec<_>>(), [2, 1, 3]);
}

#[test]
fn test_contains() {
    let coll = IntCollection::from_items(valid_int_list()).unwrap();
    assert!(coll.contains(&26));
    assert!(!coll.contains(&27));
}
