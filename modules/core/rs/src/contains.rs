use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use impl_tools::autoimpl;

/// Trait for collections that can answer element membership queries.
/// Sequences scan linearly, associative containers use their lookup.
#[autoimpl(for <T: trait + ?Sized> &T, Box<T>, Rc<T>, Arc<T>)]
pub trait Member {
    type Item;

    /// Check if the target occurs in the collection.
    fn member(&self, target: &Self::Item) -> bool;
}

/// Trait for associative collections that can answer key membership queries.
#[autoimpl(for <T: trait + ?Sized> &T, Box<T>, Rc<T>, Arc<T>)]
pub trait KeyMember {
    type Key;

    /// Check if the key occurs in the collection.
    fn member_key(&self, key: &Self::Key) -> bool;
}

/// Check whether the value occurs in the collection.
pub fn contains<C: Member + ?Sized>(items: &C, target: &C::Item) -> bool {
    items.member(target)
}

/// Check whether the key occurs in the associative collection.
pub fn contains_key<C: KeyMember + ?Sized>(items: &C, key: &C::Key) -> bool {
    items.member_key(key)
}

impl<T: PartialEq> Member for [T] {
    type Item = T;

    fn member(&self, target: &Self::Item) -> bool {
        self.iter().any(|item| item == target)
    }
}

impl<T: PartialEq, const N: usize> Member for [T; N] {
    type Item = T;

    fn member(&self, target: &Self::Item) -> bool {
        self.as_slice().member(target)
    }
}

impl<T: PartialEq> Member for Vec<T> {
    type Item = T;

    fn member(&self, target: &Self::Item) -> bool {
        self.as_slice().member(target)
    }
}

impl<T: PartialEq> Member for VecDeque<T> {
    type Item = T;

    fn member(&self, target: &Self::Item) -> bool {
        self.iter().any(|item| item == target)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Member for HashSet<T, S> {
    type Item = T;

    fn member(&self, target: &Self::Item) -> bool {
        self.contains(target)
    }
}

impl<T: Ord> Member for BTreeSet<T> {
    type Item = T;

    fn member(&self, target: &Self::Item) -> bool {
        self.contains(target)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> KeyMember for HashMap<K, V, S> {
    type Key = K;

    fn member_key(&self, key: &Self::Key) -> bool {
        self.contains_key(key)
    }
}

impl<K: Ord, V> KeyMember for BTreeMap<K, V> {
    type Key = K;

    fn member_key(&self, key: &Self::Key) -> bool {
        self.contains_key(key)
    }
}

impl<T: Hash + Eq, S: BuildHasher> KeyMember for HashSet<T, S> {
    type Key = T;

    fn member_key(&self, key: &Self::Key) -> bool {
        self.contains(key)
    }
}

impl<T: Ord> KeyMember for BTreeSet<T> {
    type Key = T;

    fn member_key(&self, key: &Self::Key) -> bool {
        self.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences() {
        let squares = vec![1, 4, 9, 16];
        assert!(contains(&squares, &16));
        assert!(!contains(&squares, &15));
        assert!(contains(squares.as_slice(), &1));

        let deque: VecDeque<_> = squares.iter().collect();
        assert!(contains(&deque, &&9));
    }

    #[test]
    fn test_fixed_arrays() {
        let primes = [2, 3, 5, 7, 11, 13];
        assert!(contains(&primes, &11));
        assert!(!contains(&primes, &12));

        let empty: [i32; 0] = [];
        assert!(!contains(&empty, &1));
    }

    #[test]
    fn test_hashed_sets() {
        let names: HashSet<&str> = ["ada", "grace"].into_iter().collect();
        assert!(contains(&names, &"ada"));
        assert!(!contains(&names, &"linus"));

        let fast: ahash::HashSet<&str> = ["ada", "grace"].into_iter().collect();
        assert!(contains(&fast, &"grace"));
        assert!(!contains(&fast, &"linus"));
    }

    #[test]
    fn test_ordered_sets() {
        let sorted: BTreeSet<i64> = [3, 1, 2].into_iter().collect();
        assert!(contains(&sorted, &2));
        assert!(!contains(&sorted, &4));
    }

    #[test]
    fn test_keys() {
        let ages: HashMap<&str, u32> = [("ada", 36), ("grace", 85)].into_iter().collect();
        assert!(contains_key(&ages, &"ada"));
        assert!(!contains_key(&ages, &"linus"));

        let fast: ahash::HashMap<&str, u32> = [("ada", 36)].into_iter().collect();
        assert!(contains_key(&fast, &"ada"));

        let sorted: BTreeMap<i32, &str> = [(1, "one")].into_iter().collect();
        assert!(contains_key(&sorted, &1));
        assert!(!contains_key(&sorted, &2));

        let names: BTreeSet<&str> = ["ada"].into_iter().collect();
        assert!(contains_key(&names, &"ada"));
    }

    #[test]
    fn test_forwarded_sources() {
        let squares = vec![1, 4, 9, 16];
        assert!(contains(&&squares, &4));
        assert!(contains(&Box::new(squares.clone()), &9));
        assert!(contains(&Rc::new(squares.clone()), &16));
        assert!(contains(&Arc::new(squares), &1));
    }

    #[test]
    fn test_consistency() {
        let items = vec![5, 10, 15, 20];
        for item in &items {
            assert!(contains(&items, item));
        }
        for absent in [0, 7, 21] {
            assert!(!contains(&items, &absent));
        }
    }
}
