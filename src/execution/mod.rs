//! Relational operators. Every operator borrows its inputs and builds a
//! new relation; inputs are never modified.

pub mod error;
mod expr_evaluation;
mod filter;
mod join;
mod product;
mod project;

use crate::execution::error::Result;
use crate::storage::relation::Relation;
pub use expr_evaluation::Comparison;
pub use filter::SelectionOperation;
pub use join::{EquiJoinOperation, JoinStrategy};
pub use product::cross_product;
pub use project::ProjectionOperation;

pub fn selection<const N: usize>(
    input: &Relation<N>,
    attribute_index: usize,
    comparison: Comparison,
    operand: i32,
) -> Result<Relation<N>> {
    SelectionOperation::new(attribute_index, comparison, operand).execute(input)
}

pub fn projection<const I: usize, const O: usize>(
    input: &Relation<I>,
    projected_attributes: [usize; O],
) -> Result<Relation<O>> {
    ProjectionOperation::new(projected_attributes).execute(input)
}

/// Nested-loop equi-join; see [`EquiJoinOperation`] for other strategies.
pub fn equi_join<const A: usize, const B: usize, const O: usize, const K: usize>(
    left: &Relation<A>,
    right: &Relation<B>,
    left_columns: [usize; K],
    right_columns: [usize; K],
) -> Result<Relation<O>> {
    EquiJoinOperation::new(left_columns, right_columns).execute(left, right)
}
