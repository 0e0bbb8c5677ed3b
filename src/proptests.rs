use std::collections::BTreeSet;

use proptest::{collection::vec, prelude::*, sample::Index};

use crate::{record::compare, CritBitTree, Point, RecordBuf};

/// Keys over a small alphabet so that shared prefixes and embedded zeros are common.
fn record() -> impl Strategy<Value = RecordBuf> {
    let byte = prop_oneof![Just(0_u8), Just(1), Just(b'a'), Just(b'b'), Just(0xff), any::<u8>()];
    (vec(byte, 0..6), any::<bool>()).prop_map(|(key, fixed)| {
        if fixed && !key.is_empty() {
            RecordBuf::fixed(&key).unwrap()
        } else {
            let key: Vec<u8> = key.into_iter().filter(|&b| b != 0).collect();
            RecordBuf::c_str(&key).unwrap()
        }
    })
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Insert,
    Remove,
    Search,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Insert), Just(Op::Remove), Just(Op::Search)]
}

proptest! {
    #[test]
    fn behaves_like_a_set(
        pool in vec(record(), 1..32),
        ops in vec((op(), any::<Index>()), 0..200),
    ) {
        let mut tree = CritBitTree::new();
        let mut model = BTreeSet::new();
        for (op, index) in ops {
            let record = pool[index.index(pool.len())].as_record();
            let bytes = record.as_bytes().to_vec();
            match op {
                Op::Insert => {
                    let inserted = tree.insert(record).unwrap();
                    prop_assert_eq!(inserted.is_new(), model.insert(bytes));
                    prop_assert_eq!(inserted.record(), record);
                }
                Op::Remove => {
                    let removed = tree.remove(record);
                    prop_assert_eq!(removed.is_some(), model.remove(&bytes));
                    if let Some(removed) = removed {
                        prop_assert_eq!(removed, record);
                    }
                }
                Op::Search => {
                    prop_assert_eq!(tree.contains(record), model.contains(&bytes));
                }
            }
            prop_assert_eq!(tree.len(), model.len());
            prop_assert_eq!(tree.branch_count(), model.len().saturating_sub(1));
        }
        prop_assert_eq!(tree.check_invariants(), Ok(()));
    }
}

#[test_strategy::proptest]
fn inserted_keys_find_their_own_record(#[strategy(vec(record(), 0..64))] pool: Vec<RecordBuf>) {
    let mut tree = CritBitTree::new();
    let mut linked = Vec::new();
    for buf in &pool {
        let inserted = tree.insert(buf.as_record()).unwrap();
        if inserted.is_new() {
            linked.push(buf.as_record());
        } else {
            prop_assert!(linked.iter().any(|record| record.ptr_eq(inserted.record())));
        }
    }
    prop_assert_eq!(tree.check_invariants(), Ok(()));
    for record in linked {
        prop_assert!(tree.search(record).is_some_and(|found| found.ptr_eq(record)));
    }
}

#[test_strategy::proptest]
fn insert_then_remove_restores_the_tree(
    #[strategy(vec(record(), 0..48))] base: Vec<RecordBuf>,
    #[strategy(record())] extra: RecordBuf,
) {
    let mut tree = CritBitTree::new();
    for buf in &base {
        tree.insert(buf.as_record()).unwrap();
    }
    prop_assume!(!tree.contains(extra.as_record()));
    let shape = format!("{tree:?}");
    let branches = tree.branch_count();

    prop_assert!(tree.insert(extra.as_record()).unwrap().is_new());
    let removed = tree.remove(extra.as_record());
    prop_assert!(removed.is_some_and(|removed| removed.ptr_eq(extra.as_record())));
    prop_assert!(!tree.contains(extra.as_record()));
    prop_assert_eq!(tree.branch_count(), branches);
    prop_assert_eq!(format!("{tree:?}"), shape);
}

#[test_strategy::proptest]
fn critical_bit_separates_distinct_records(
    #[strategy(record())] a: RecordBuf,
    #[strategy(record())] b: RecordBuf,
) {
    let (a, b) = (a.as_record(), b.as_record());
    let diff = compare(a.as_bytes(), b.as_bytes());
    prop_assert_eq!(diff == 0, a == b);
    if diff != 0 {
        let point = Point::critical(a, b, diff).unwrap();
        prop_assert_ne!(point.direction(a), point.direction(b));
    }
}
