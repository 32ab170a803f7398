use crate::execution::error::{check_attribute, Result};
use crate::execution::Comparison;
use crate::storage::relation::Relation;

/// Keeps the tuples whose attribute at `attribute_index` satisfies
/// `comparison` against `operand`. Columns are left untouched.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SelectionOperation {
    pub attribute_index: usize,
    pub comparison: Comparison,
    pub operand: i32,
}

impl SelectionOperation {
    pub fn new(attribute_index: usize, comparison: Comparison, operand: i32) -> Self {
        SelectionOperation {
            attribute_index,
            comparison,
            operand,
        }
    }

    pub fn execute<const N: usize>(&self, input: &Relation<N>) -> Result<Relation<N>> {
        check_attribute(self.attribute_index, N)?;

        let output: Relation<N> = input
            .iter()
            .filter(|tuple| {
                self.comparison
                    .evaluate(tuple[self.attribute_index], self.operand)
            })
            .copied()
            .collect();

        tracing::debug!(
            "Selection on attribute {} ({:?} {}): {} -> {} tuples",
            self.attribute_index,
            self.comparison,
            self.operand,
            input.tuple_count(),
            output.tuple_count()
        );
        Ok(output)
    }
}
