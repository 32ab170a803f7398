use crate::storage::tuple::Tuple;
use std::collections::btree_set::{self, BTreeSet};
use std::iter::FromIterator;

/// Duplicate-free container of `N`-ary tuples, iterated in ascending
/// lexicographic order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TupleSet<const N: usize> {
    tuples: BTreeSet<Tuple<N>>,
}

impl<const N: usize> TupleSet<N> {
    pub fn new() -> Self {
        const { assert!(N > 0, "tuples must have at least one attribute") };
        TupleSet {
            tuples: BTreeSet::new(),
        }
    }

    /// Returns false if the tuple was already present.
    pub fn insert(&mut self, tuple: Tuple<N>) -> bool {
        self.tuples.insert(tuple)
    }

    pub fn contains(&self, tuple: &Tuple<N>) -> bool {
        self.tuples.contains(tuple)
    }

    pub fn size(&self) -> usize {
        self.tuples.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            inner: self.tuples.iter(),
        }
    }
}

impl<const N: usize> Default for TupleSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct Iter<'set, const N: usize> {
    inner: btree_set::Iter<'set, Tuple<N>>,
}

impl<'set, const N: usize> Iterator for Iter<'set, N> {
    type Item = &'set Tuple<N>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'set, const N: usize> DoubleEndedIterator for Iter<'set, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'set, const N: usize> ExactSizeIterator for Iter<'set, N> {}

impl<const N: usize> FromIterator<Tuple<N>> for TupleSet<N> {
    fn from_iter<T: IntoIterator<Item = Tuple<N>>>(iter: T) -> Self {
        let mut set = TupleSet::new();
        set.extend(iter);
        set
    }
}

impl<const N: usize> Extend<Tuple<N>> for TupleSet<N> {
    fn extend<T: IntoIterator<Item = Tuple<N>>>(&mut self, iter: T) {
        self.tuples.extend(iter)
    }
}

impl<'set, const N: usize> IntoIterator for &'set TupleSet<N> {
    type Item = &'set Tuple<N>;
    type IntoIter = Iter<'set, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> IntoIterator for TupleSet<N> {
    type Item = Tuple<N>;
    type IntoIter = btree_set::IntoIter<Tuple<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.into_iter()
    }
}
