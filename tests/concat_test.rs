//! Tests for `+` between collections, items and candidates

use tola_coll::prelude::*;

type IntCollection = TypedCollection<i32>;
type StrCollection = TypedCollection<String>;

fn ints(items: &[i32]) -> IntCollection {
    IntCollection::from_items(items.iter().copied()).unwrap()
}

// =============================================================================
// Collection + Collection
// =============================================================================

#[test]
fn test_add_valid_collections() {
    let combined = (ints(&[1, 2, 3]) + ints(&[6, 8])).unwrap();
    assert_eq!(combined.as_slice(), &[1, 2, 3, 6, 8]);
}

#[test]
fn test_add_collection_refs() {
    let left = ints(&[1, 2, 3, 4, 5, 26]);
    let right = ints(&[6, 8, 10, 12, 13]);
    let combined = (&left + &right).unwrap();

    let expected: Vec<_> = left.iter().chain(right.iter()).copied().collect();
    assert_eq!(combined.into_vec(), expected);
}

#[test]
fn test_add_overlapping_unique_collections() {
    let err = (ints(&[1, 2, 3]) + ints(&[3, 4])).unwrap_err();
    assert_eq!(err, CollectionError::ItemAlreadyExists);
}

#[test]
fn test_add_overlapping_non_unique_collections() {
    let left = IntCollection::from_items_with([1, 2, 3], CollectionConfig::NON_UNIQUE).unwrap();
    let combined = (left + ints(&[3, 4])).unwrap();
    assert_eq!(combined.as_slice(), &[1, 2, 3, 3, 4]);
}

#[test]
fn test_add_invalid_collections() {
    let strs = StrCollection::from_items(["Once", "Upon", "a", "midnight", "dreary"]).unwrap();
    let err = (ints(&[1, 2, 3]) + Candidate::new(strs)).unwrap_err();
    assert!(matches!(
        err,
        CollectionError::IncompatibleOperand { permitted: &["i32"], .. }
    ));
}

// =============================================================================
// Collection + Item
// =============================================================================

#[test]
fn test_add_valid_item_to_collection() {
    let coll = (IntCollection::new() + 26).unwrap();
    assert!(coll.contains(&26));
}

#[test]
fn test_add_invalid_item_to_collection() {
    let err = (IntCollection::new() + Candidate::new("Invalid string")).unwrap_err();
    let CollectionError::IncompatibleOperand { operand, collection, .. } = err else {
        panic!("expected IncompatibleOperand, got {err:?}");
    };
    assert_eq!(operand, "&str");
    assert!(collection.ends_with("TypedCollection<i32>"));
}

#[test]
fn test_add_duplicate_item_to_collection() {
    assert_eq!(ints(&[26]) + 26, Err(CollectionError::ItemAlreadyExists));
}

// =============================================================================
// Item + Collection
// =============================================================================

#[test]
fn test_radd_valid_item_to_collection() {
    let coll = (26 + IntCollection::new()).unwrap();
    assert!(coll.contains(&26));
}

#[test]
fn test_radd_matches_add() {
    let right = (26 + ints(&[1, 2, 3])).unwrap();
    let left = (ints(&[1, 2, 3]) + 26).unwrap();
    assert_eq!(right, left);
    assert_eq!(right.as_slice(), &[1, 2, 3, 26]);
}

#[test]
fn test_radd_invalid_item_to_collection() {
    let err = (Candidate::new("Invalid string") + IntCollection::new()).unwrap_err();
    assert!(matches!(err, CollectionError::IncompatibleOperand { operand: "&str", .. }));
}

#[test]
fn test_radd_candidate_collection_keeps_left_first() {
    let coll = (Candidate::new(ints(&[1, 2])) + ints(&[3, 4])).unwrap();
    assert_eq!(coll.as_slice(), &[1, 2, 3, 4]);

    // Left operand's uniqueness, as with `coll + coll`
    let left = IntCollection::from_items_with([1, 1], CollectionConfig::NON_UNIQUE).unwrap();
    let coll = (Candidate::new(left) + ints(&[1])).unwrap();
    assert_eq!(coll.as_slice(), &[1, 1, 1]);
}

#[test]
fn test_radd_candidate_item() {
    let coll = (Candidate::new(26) + ints(&[1])).unwrap();
    assert_eq!(coll.as_slice(), &[1, 26]);
}

// =============================================================================
// Operands are left alone
// =============================================================================

#[test]
fn test_concat_methods_keep_operands() {
    let left = ints(&[1, 2]);
    let right = ints(&[3]);

    let combined = left.concat(&right).unwrap();
    let with_item = left.concat_item(9).unwrap();

    assert_eq!(combined.as_slice(), &[1, 2, 3]);
    assert_eq!(with_item.as_slice(), &[1, 2, 9]);
    assert_eq!(left.as_slice(), &[1, 2]);
    assert_eq!(right.as_slice(), &[3]);
}

#[test]
fn test_failed_concat_keeps_operands() {
    let left = ints(&[1, 2, 3]);
    let right = ints(&[4, 3]);

    assert_eq!(left.concat(&right), Err(CollectionError::ItemAlreadyExists));
    assert_eq!(&left + &right, Err(CollectionError::ItemAlreadyExists));
    assert_eq!(left.as_slice(), &[1, 2, 3]);
    assert_eq!(right.as_slice(), &[4, 3]);
}
