//! Emptiness abstraction shared by the `not_empty` and `is_empty` checks.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// Types with a meaningful "contains nothing" state.
///
/// Implemented for strings, slices, fixed-size arrays and the std collections.
/// A blanket impl covers references, so borrowed values can be checked without
/// cloning.
pub trait IsEmpty {
    fn is_empty(&self) -> bool;
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl IsEmpty for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl IsEmpty for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl IsEmpty for Cow<'_, str> {
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T, const N: usize> IsEmpty for [T; N] {
    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> IsEmpty for VecDeque<T> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T> IsEmpty for LinkedList<T> {
    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }
}

impl<T: Ord> IsEmpty for BinaryHeap<T> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }
}

impl<T> IsEmpty for HashSet<T> {
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, V> IsEmpty for HashMap<K, V> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<T> IsEmpty for BTreeSet<T> {
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings() {
        assert!(IsEmpty::is_empty(&""));
        assert!(IsEmpty::is_empty(&String::new()));
        assert!(!IsEmpty::is_empty(&"x"));
        assert!(!IsEmpty::is_empty(&Cow::Borrowed("x")));
    }

    #[test]
    fn test_sequences() {
        assert!(IsEmpty::is_empty(&Vec::<i32>::new()));
        assert!(IsEmpty::is_empty(&[0u8; 0]));
        assert!(!IsEmpty::is_empty(&[1, 2, 3]));
        let slice: &[i32] = &[];
        assert!(IsEmpty::is_empty(&slice));
    }

    #[test]
    fn test_collections() {
        assert!(IsEmpty::is_empty(&HashMap::<String, i32>::new()));
        assert!(IsEmpty::is_empty(&BTreeSet::<i32>::new()));
        let mut q = VecDeque::new();
        q.push_back(1.0);
        assert!(!IsEmpty::is_empty(&q));
    }
}
