//! View tests (batches, sliding windows) and predicate queries.

use seqops::Sequence;

#[test]
fn batches_even_split() {
    let s = Sequence::from(vec![0, 1, 2, 3, 4, 5]);
    let b = s.batches(3);
    assert_eq!(b, vec![&[0, 1, 2][..], &[3, 4, 5][..]]);
}

#[test]
fn batches_with_remainder() {
    let s = Sequence::from((0..8).collect::<Vec<_>>());
    let b = s.batches(3);
    assert_eq!(b, vec![&[0, 1, 2][..], &[3, 4, 5][..], &[6, 7][..]]);
}

#[test]
fn batches_cover_sequence_in_order() {
    let s = Sequence::from((0..17).collect::<Vec<_>>());
    for size in 1..=20 {
        let b = s.batches(size);
        assert_eq!(b.len(), (s.len() + size - 1) / size);
        let flat: Vec<i32> = b.iter().flat_map(|chunk| chunk.iter().copied()).collect();
        assert_eq!(flat, s.as_slice());
        for chunk in &b[..b.len() - 1] {
            assert_eq!(chunk.len(), size);
        }
        let last = b.last().unwrap();
        assert!(!last.is_empty() && last.len() <= size);
    }
}

#[test]
fn batches_of_empty_sequence() {
    let s: Sequence<i32> = Sequence::new();
    assert!(s.batches(3).is_empty());
}

#[test]
fn batches_alias_source_storage() {
    let s = Sequence::from(vec![0, 1, 2, 3]);
    let b = s.batches(2);
    assert_eq!(b[0].as_ptr(), s.as_slice().as_ptr());
    assert_eq!(b[1].as_ptr(), s.as_slice()[2..].as_ptr());
}

#[test]
#[should_panic(expected = "at least 1")]
fn batches_reject_zero_size() {
    let s = Sequence::from(vec![1]);
    s.batches(0);
}

#[test]
fn sliding_windows_step_one() {
    let s = Sequence::from(vec![0, 1, 2, 3, 4, 5]);
    let w = s.sliding_windows(3);
    assert_eq!(w.len(), 4);
    for (i, win) in w.iter().enumerate() {
        assert_eq!(*win, &s.as_slice()[i..i + 3]);
    }
}

#[test]
fn sliding_window_larger_than_sequence_is_whole() {
    let s = Sequence::from(vec![0, 1]);
    let w = s.sliding_windows(5);
    assert_eq!(w, vec![&[0, 1][..]]);
}

#[test]
fn sliding_windows_of_empty_sequence() {
    let s: Sequence<i32> = Sequence::new();
    assert!(s.sliding_windows(3).is_empty());
}

#[test]
fn sliding_windows_alias_source_storage() {
    let s = Sequence::from(vec![0, 1, 2, 3]);
    let w = s.sliding_windows(2);
    assert_eq!(w[0].as_ptr(), s.as_slice().as_ptr());
    assert_eq!(w[1].as_ptr(), s.as_slice()[1..].as_ptr());
}

#[test]
fn views_ignore_dead_slots() {
    let mut s = Sequence::from(vec![0, 1, 2, 3, 4]);
    s.cut(3, 5);
    assert_eq!(s.batches(2), vec![&[0, 1][..], &[2][..]]);
    assert_eq!(s.sliding_windows(5), vec![&[0, 1, 2][..]]);
}

#[test]
fn any_short_circuits() {
    let s = Sequence::from(vec![1, 2, 3, 4]);
    let mut calls = 0;
    assert!(s.any(|&x| {
        calls += 1;
        x == 2
    }));
    assert_eq!(calls, 2);
}

#[test]
fn all_short_circuits_on_first_failure() {
    let s = Sequence::from(vec![2, 3, 4]);
    let mut calls = 0;
    assert!(!s.all(|&x| {
        calls += 1;
        x % 2 == 0
    }));
    assert_eq!(calls, 2);
}

#[test]
fn none_is_negated_any() {
    let s = Sequence::from(vec![1, 3, 5]);
    assert!(s.none(|&x| x % 2 == 0));
    assert!(!s.none(|&x| x == 3));
}

#[test]
fn all_equals_negated_any_of_negation() {
    let s = Sequence::from(vec![1, 2, 3, 4, 5]);
    let p = |x: &i32| *x > 0;
    assert_eq!(s.all(p), !s.any(|x| !p(x)));
    let q = |x: &i32| *x > 3;
    assert_eq!(s.all(q), !s.any(|x| !q(x)));
}

#[test]
fn contains_uses_native_equality() {
    let s = Sequence::from(vec!["a", "b", "c"]);
    assert!(s.contains(&"b"));
    assert!(!s.contains(&"z"));
}

#[test]
fn queries_on_empty_sequence() {
    let s: Sequence<i32> = Sequence::new();
    assert!(!s.any(|_| true));
    assert!(s.all(|_| false));
    assert!(s.none(|_| true));
    assert!(!s.contains(&0));
}
