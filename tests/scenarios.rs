use insta::assert_snapshot;
use seqlist::{Sequence, SequenceError, SortOrder, NOT_FOUND};

#[test]
fn sort_three() {
    let mut seq: Sequence<i32> = [3, 1, 2].into();
    seq.sort();
    assert_snapshot!(seq.to_string(), @"1 -> 2 -> 3");
    seq.sort_with(SortOrder::Descending);
    assert_snapshot!(seq.to_string(), @"3 -> 2 -> 1");
}

#[test]
fn reverse_then_pop_front() {
    let mut seq: Sequence<i32> = [1, 2, 3].into();
    seq.reverse();
    assert_snapshot!(seq.to_string(), @"3 -> 2 -> 1");
    assert_eq!(seq.pop_at(0), Ok(3));
    assert_snapshot!(seq.to_string(), @"2 -> 1");
}

#[test]
fn empty_sequence() {
    let mut seq: Sequence<i32> = Sequence::new();
    assert_snapshot!(seq.to_string(), @"");
    assert_eq!(seq.len(), 0);
    assert!(matches!(
        seq.pop(),
        Err(SequenceError::IndexOutOfRange { .. })
    ));
}

#[test]
fn insert_into_empty() {
    let mut seq = Sequence::new();
    seq.insert(0, 'a');
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.front(), Some(&'a'));
    assert_eq!(seq.back(), Some(&'a'));
    assert_snapshot!(seq.to_string(), @"a");
}

#[test]
fn remove_reports_not_found() {
    let mut empty: Sequence<&str> = Sequence::new();
    let err = empty.remove(&"x").unwrap_err();
    assert!(err.is_not_found());
    assert_snapshot!(err.to_string(), @"value not found: sequence is empty");

    let mut seq: Sequence<&str> = ["a", "b"].into();
    let err = seq.remove(&"x").unwrap_err();
    assert!(err.is_not_found());
    assert_snapshot!(err.to_string(), @"value not found in the sequence");
    assert_snapshot!(seq.to_string(), @"a -> b");
}

#[test]
fn pop_out_of_range() {
    let mut seq: Sequence<i32> = [1, 2, 3].into();
    for index in [3, 4, -4, isize::MIN + 10] {
        assert_eq!(
            seq.pop_at(index),
            Err(SequenceError::IndexOutOfRange { index, len: 3 })
        );
    }
    assert_snapshot!(
        seq.pop_at(7).unwrap_err().to_string(),
        @"index 7 out of range for sequence of length 3"
    );
    assert_eq!(seq.pop(), Ok(3));
    assert_eq!(seq.pop_at(-2), Ok(1));
    assert_snapshot!(seq.to_string(), @"2");
}

#[test]
fn pop_with_duplicates_removes_requested_position() {
    let mut seq: Sequence<i32> = [4, 9, 4, 9].into();
    assert_eq!(seq.pop_at(3), Ok(9));
    assert_snapshot!(seq.to_string(), @"4 -> 9 -> 4");
    seq.append(1);
    assert_snapshot!(seq.to_string(), @"4 -> 9 -> 4 -> 1");
}

#[test]
fn index_of_sentinel() {
    let seq: Sequence<&str> = ["x", "y", "x"].into();
    assert_eq!(seq.index_of(&"x"), 0);
    assert_eq!(seq.index_of_in(&"x", 1..), 2);
    assert_eq!(seq.index_of_in(&"x", 1..2), NOT_FOUND);
    assert_eq!(seq.index_of(&"q"), -1);
}

#[test]
fn extend_and_mutate() {
    let mut seq: Sequence<String> = Sequence::new();
    seq.extend(Vec::<String>::new());
    assert!(seq.is_empty());
    seq.extend(["b", "a", "c"].map(String::from));
    seq.sort_by_key(SortOrder::Descending, |s| s.clone());
    assert_snapshot!(seq.to_string(), @"c -> b -> a");
    for s in seq.iter_mut() {
        s.make_ascii_uppercase();
    }
    assert_snapshot!(format!("{seq:?}"), @r#"["C", "B", "A"]"#);
}
