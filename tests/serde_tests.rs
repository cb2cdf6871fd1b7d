//! Serde round trips (only built with `--features serde`).
#![cfg(feature = "serde")]

use seqops::Sequence;

#[test]
fn serializes_live_region_only() {
    let mut s = Sequence::from(vec![1, 2, 3, 4]);
    s.cut(2, 4);
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(json, "[1,2]");
}

#[test]
fn round_trip_preserves_contents() {
    let s = Sequence::from(vec!["a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&s).unwrap();
    let back: Sequence<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn empty_round_trip() {
    let s: Sequence<i32> = Sequence::new();
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(json, "[]");
    let back: Sequence<i32> = serde_json::from_str(&json).unwrap();
    assert!(back.is_empty());
}
