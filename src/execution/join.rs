use crate::execution::error::{check_attribute, Result};
use crate::storage::relation::Relation;
use crate::storage::tuple::{concat, pick, Tuple};
use std::collections::HashMap;

/// How an equi-join pairs up tuples. Both strategies produce the same
/// relation.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum JoinStrategy {
    /// Compare every left tuple against every right tuple.
    #[default]
    NestedLoop,
    /// Hash the right input on its join attributes and probe it with the
    /// left input.
    Hash,
}

/// Joins two relations on `K` pairs of attributes. A pair of tuples is kept
/// (concatenated, left first) when `left[left_columns[i]] ==
/// right[right_columns[i]]` for every `i`. With `K == 0` every pair matches
/// and the join is a cross product.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EquiJoinOperation<const K: usize> {
    pub left_columns: [usize; K],
    pub right_columns: [usize; K],
    pub strategy: JoinStrategy,
}

impl<const K: usize> EquiJoinOperation<K> {
    pub fn new(left_columns: [usize; K], right_columns: [usize; K]) -> Self {
        EquiJoinOperation {
            left_columns,
            right_columns,
            strategy: JoinStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: JoinStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn execute<const A: usize, const B: usize, const O: usize>(
        &self,
        left: &Relation<A>,
        right: &Relation<B>,
    ) -> Result<Relation<O>> {
        for &index in &self.left_columns {
            check_attribute(index, A)?;
        }
        for &index in &self.right_columns {
            check_attribute(index, B)?;
        }

        let output = match self.strategy {
            JoinStrategy::NestedLoop => self.nested_loop(left, right),
            JoinStrategy::Hash => self.hash(left, right),
        };

        tracing::debug!(
            "Equi-join ({:?}) on {:?} = {:?}: {} x {} -> {} tuples",
            self.strategy,
            self.left_columns,
            self.right_columns,
            left.tuple_count(),
            right.tuple_count(),
            output.tuple_count()
        );
        Ok(output)
    }

    fn matches<const A: usize, const B: usize>(&self, left: &Tuple<A>, right: &Tuple<B>) -> bool {
        self.left_columns
            .iter()
            .zip(&self.right_columns)
            .all(|(&l, &r)| left[l] == right[r])
    }

    fn nested_loop<const A: usize, const B: usize, const O: usize>(
        &self,
        left: &Relation<A>,
        right: &Relation<B>,
    ) -> Relation<O> {
        let mut output = Relation::new();
        for l in left {
            for r in right {
                if self.matches(l, r) {
                    output.insert(concat(l, r));
                }
            }
        }
        output
    }

    fn hash<const A: usize, const B: usize, const O: usize>(
        &self,
        left: &Relation<A>,
        right: &Relation<B>,
    ) -> Relation<O> {
        let mut table: HashMap<[i32; K], Vec<&Tuple<B>>> = HashMap::new();
        for r in right {
            table
                .entry(pick(r, &self.right_columns))
                .or_default()
                .push(r);
        }

        let mut output = Relation::new();
        for l in left {
            if let Some(partners) = table.get(&pick(l, &self.left_columns)) {
                output.extend(partners.iter().map(|r| concat(l, r)));
            }
        }
        output
    }
}
