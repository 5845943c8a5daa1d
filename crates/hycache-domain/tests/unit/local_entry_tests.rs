//! Unit tests for local tier entries

use hycache_domain::ports::LocalCacheEntry;

#[derive(Debug, Clone, PartialEq)]
struct Customer {
    id: u32,
    name: String,
}

#[test]
fn test_typed_value_is_recovered() {
    let customer = Customer {
        id: 7,
        name: "Ada".to_string(),
    };
    let entry = LocalCacheEntry::new(customer.clone());

    assert!(entry.holds::<Customer>());
    assert_eq!(entry.value::<Customer>(), Some(customer));
    assert!(entry.payload().is_none());
}

#[test]
fn test_wrong_type_yields_none() {
    let entry = LocalCacheEntry::new("plain".to_string());
    assert!(!entry.holds::<u64>());
    assert_eq!(entry.value::<u64>(), None);
}

#[test]
fn test_payload_is_kept_alongside_value() {
    let entry = LocalCacheEntry::new(42_u64).with_payload(b"42".to_vec());
    assert_eq!(entry.payload(), Some(&b"42"[..]));

    let clone = entry.clone();
    assert_eq!(clone.value::<u64>(), Some(42));
    assert_eq!(clone.payload(), Some(&b"42"[..]));
}
