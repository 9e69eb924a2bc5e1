//! Integration tests for address parsing, canonical form and equality.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use addressbook::{Address, ValidationError};
use proptest::prelude::*;
use rstest::rstest;

fn hash_of(address: &Address) -> u64 {
    let mut hasher = DefaultHasher::new();
    address.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case("123, some street,  #0-00, 999999", "123, some street, #0-00, 999999")]
#[case("123,street,unit,000000", "123, street, unit, 000000")]
#[case("  Blk 5 ,\tMain Road , #12-345,  S(123456)  ", "Blk 5, Main Road, #12-345, S(123456)")]
fn valid_address_is_canonicalized(#[case] raw: &str, #[case] expected: &str) {
    let address = Address::new(raw, false).unwrap();
    assert_eq!(address.to_string(), expected);
    assert_eq!(address.canonical(), expected);
}

#[rstest]
#[case("")]
#[case("123")]
#[case("123, street")]
#[case("123, street, unit")]
#[case("123, street, unit, 000000, extra")]
#[case("123, street, unit, 000000,")]
#[case(",street, unit, 000000")]
#[case("123,,unit,000000")]
#[case("123, , unit, 000000")]
#[case(",,,")]
fn malformed_address_is_rejected(#[case] raw: &str) {
    let err: ValidationError = Address::new(raw, false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Person addresses can be in the format a/BLOCK, STREET, UNIT, POSTAL_CODE"
    );
    assert_eq!(err.input(), raw);
    assert!(!Address::is_valid(raw));
}

#[rstest]
#[case(true)]
#[case(false)]
fn private_flag_is_returned_unchanged(#[case] is_private: bool) {
    let address = Address::new(Address::EXAMPLE, is_private).unwrap();
    assert_eq!(address.is_private(), is_private);
}

// =============================================================================
// Equality, Hash and Ordering
// =============================================================================

#[rstest]
fn equality_ignores_privacy_and_spacing() {
    let public = Address::new("123,street,unit,000000", false).unwrap();
    let private = Address::new(" 123 , street ,unit , 000000", true).unwrap();
    assert_eq!(public, private);
    assert_eq!(hash_of(&public), hash_of(&private));

    let set: HashSet<Address> = [public, private].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[rstest]
fn different_parts_are_not_equal() {
    let a = Address::new("123, street, unit, 000000", false).unwrap();
    let b = Address::new("123, street, unit, 000001", false).unwrap();
    assert_ne!(a, b);
    assert!(a < b);
}

#[rstest]
fn same_instance_is_equal() {
    let address = Address::new(Address::EXAMPLE, false).unwrap();
    assert_eq!(address, address);
    assert_eq!(address.clone(), address);
}

// =============================================================================
// Serde
// =============================================================================

#[rstest]
fn serializes_canonical_form() {
    let address = Address::new(Address::EXAMPLE, true).unwrap();
    let json = serde_json::to_string(&address).unwrap();
    assert_eq!(json, r#"{"address":"123, some street, #0-00, 999999","private":true}"#);

    let back: Address = serde_json::from_str(&json).unwrap();
    assert_eq!(back, address);
    assert!(back.is_private());
}

#[rstest]
fn deserialization_validates() {
    let result = serde_json::from_str::<Address>(r#"{"address":"123"}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains(Address::MESSAGE_CONSTRAINTS));
}

#[rstest]
fn deserialization_defaults_to_public() {
    let address: Address = serde_json::from_str(r#"{"address":"1, s, u, 2"}"#).unwrap();
    assert!(!address.is_private());
}

// =============================================================================
// Properties
// =============================================================================

fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9#()-]([A-Za-z0-9 #()-]{0,8}[A-Za-z0-9#()-])?"
}

fn padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

fn padded_segment() -> impl Strategy<Value = (String, String)> {
    (segment(), padding(), padding()).prop_map(|(seg, left, right)| {
        let padded = format!("{left}{seg}{right}");
        (seg, padded)
    })
}

proptest! {
    #[test]
    fn prop_valid_input_round_trips_to_trimmed_parts(
        parts in prop::collection::vec(padded_segment(), 4),
        is_private in any::<bool>()
    ) {
        let raw = parts.iter().map(|(_, padded)| padded.as_str()).collect::<Vec<_>>().join(",");
        let expected = parts.iter().map(|(seg, _)| seg.as_str()).collect::<Vec<_>>().join(", ");

        let address = Address::new(&raw, is_private).unwrap();
        prop_assert_eq!(address.to_string(), expected);
        prop_assert_eq!(address.block().as_str(), parts[0].0.as_str());
        prop_assert_eq!(address.postal_code().as_str(), parts[3].0.as_str());
        prop_assert_eq!(address.is_private(), is_private);
    }

    #[test]
    fn prop_wrong_segment_count_is_rejected(
        parts in prop::collection::vec(segment(), 1..9usize)
            .prop_filter("four segments are valid", |p| p.len() != 4)
    ) {
        let raw = parts.join(",");
        prop_assert!(Address::new(&raw, false).is_err());
    }

    #[test]
    fn prop_equal_addresses_hash_equal(
        segs in prop::collection::vec(segment(), 4),
        pads in prop::collection::vec(padding(), 8)
    ) {
        let tight = segs.join(",");
        let loose = segs
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}{}{}", pads[2 * i], s, pads[2 * i + 1]))
            .collect::<Vec<_>>()
            .join(",");

        let a = Address::new(&tight, false).unwrap();
        let b = Address::new(&loose, true).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&b, &a);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
        prop_assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    }

    #[test]
    fn prop_equality_matches_canonical_form(
        x in prop::collection::vec(segment(), 4),
        y in prop::collection::vec(segment(), 4)
    ) {
        let a = Address::new(&x.join(","), false).unwrap();
        let b = Address::new(&y.join(","), false).unwrap();
        prop_assert_eq!(a == b, a.canonical() == b.canonical());
        prop_assert_eq!(a.cmp(&b), a.canonical().cmp(&b.canonical()));
    }
}
