use plain_bst::{Error, Tree};

use std::collections::{HashMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut HashMap<K, V>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                assert_eq!(bst.insert(k.clone(), v.clone()), map.insert(k.clone(), v.clone()));
            }
            Op::Remove(k) => {
                assert_eq!(bst.remove(k).ok(), map.remove(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.len() == map.len() && map.keys().all(|key| tree.find(key).ok() == map.get(key))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.find(x) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == Err(Error::KeyNotFound))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removals: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    for removal in &removals {
        let _ = tree.remove(removal);
    }

    let mut still_present = xs;
    still_present.retain(|x| !removals.contains(x));

    removals.iter().all(|x| tree.find(x) == Err(Error::KeyNotFound))
        && still_present.iter().all(|x| tree.find(x).is_ok())
}

#[quickcheck]
fn latest_insert_wins(xs: Vec<(u8, u16)>) -> bool {
    let mut tree = Tree::new();
    let mut latest = HashMap::new();
    for (k, v) in &xs {
        tree.insert(*k, *v);
        latest.insert(*k, *v);
    }

    latest.iter().all(|(k, v)| tree.find(k) == Ok(v)) && tree.len() == latest.len()
}

#[quickcheck]
fn depth_is_bounded(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    match xs.len() {
        0 => tree.depth() == 0,
        n => (1..=n).contains(&tree.depth()),
    }
}

#[quickcheck]
fn removing_everything_empties_the_tree(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, ());
    }
    for x in &xs {
        let _ = tree.remove(x);
    }

    tree.is_empty() && tree.depth() == 0 && tree.len() == 0
}

#[test]
fn sorted_insertions_are_as_deep_as_the_tree_is_long() {
    let mut tree = Tree::new();
    for key in (0..1_000).rev() {
        tree.insert(key, key);
    }

    assert_eq!(tree.depth(), 1_000);
    assert_eq!(tree.find(&0), Ok(&0));
    assert_eq!(tree.remove(&999), Ok(999));
    assert_eq!(tree.depth(), 999);
}

#[test]
fn remove_root_keeps_the_same_handle() {
    let mut tree = Tree::with_entry(10, "ten");
    tree.insert(5, "five");
    tree.insert(15, "fifteen");

    let handle = &mut tree;
    assert_eq!(handle.remove(&10), Ok("ten"));
    assert_eq!(handle.find(&5), Ok(&"five"));
    assert_eq!(handle.find(&15), Ok(&"fifteen"));
    assert_eq!(handle.depth(), 2);
}
