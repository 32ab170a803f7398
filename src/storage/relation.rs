use crate::storage::config::StorageConfig;
use crate::storage::error::Result as StorageResult;
use crate::storage::tuple::Tuple;
use crate::storage::tuple_set::{Iter, TupleSet};
use std::iter::FromIterator;
use std::path::Path;

/// A set of `N`-ary integer tuples. Attributes are addressed by position
/// only; the arity is the whole schema.
///
/// The tuple count is always read off the underlying set, so it can never
/// disagree with the number of distinct tuples held.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Relation<const N: usize> {
    tuples: TupleSet<N>,
}

impl<const N: usize> Relation<N> {
    pub fn new() -> Self {
        Relation {
            tuples: TupleSet::new(),
        }
    }

    /// Loads a relation file written in native byte order.
    pub fn load<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        StorageConfig::default().load(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> StorageResult<()> {
        StorageConfig::default().save(path, self)
    }

    pub const fn arity(&self) -> usize {
        N
    }

    pub fn tuple_count(&self) -> usize {
        self.tuples.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn insert(&mut self, tuple: Tuple<N>) -> bool {
        self.tuples.insert(tuple)
    }

    pub fn contains(&self, tuple: &Tuple<N>) -> bool {
        self.tuples.contains(tuple)
    }

    pub fn tuples(&self) -> &TupleSet<N> {
        &self.tuples
    }

    pub fn iter(&self) -> Iter<'_, N> {
        self.tuples.iter()
    }
}

impl<const N: usize> From<TupleSet<N>> for Relation<N> {
    fn from(tuples: TupleSet<N>) -> Self {
        Relation { tuples }
    }
}

impl<const N: usize> FromIterator<Tuple<N>> for Relation<N> {
    fn from_iter<T: IntoIterator<Item = Tuple<N>>>(iter: T) -> Self {
        Relation {
            tuples: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> Extend<Tuple<N>> for Relation<N> {
    fn extend<T: IntoIterator<Item = Tuple<N>>>(&mut self, iter: T) {
        self.tuples.extend(iter)
    }
}

impl<'rel, const N: usize> IntoIterator for &'rel Relation<N> {
    type Item = &'rel Tuple<N>;
    type IntoIter = Iter<'rel, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
