use crate::execution::error::{check_attribute, OperatorError, Result};
use crate::storage::relation::Relation;
use crate::storage::tuple::pick;

/// Maps every tuple onto the listed attributes, in the listed order.
/// An attribute may be listed more than once. Tuples that become equal
/// after projection are kept once.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProjectionOperation<const O: usize> {
    pub projected_attributes: [usize; O],
}

impl<const O: usize> ProjectionOperation<O> {
    pub fn new(projected_attributes: [usize; O]) -> Self {
        ProjectionOperation {
            projected_attributes,
        }
    }

    pub fn execute<const I: usize>(&self, input: &Relation<I>) -> Result<Relation<O>> {
        if O > I {
            return Err(OperatorError::ArityMismatch {
                requested: O,
                arity: I,
            });
        }
        for &index in &self.projected_attributes {
            check_attribute(index, I)?;
        }

        let output: Relation<O> = input
            .iter()
            .map(|tuple| pick(tuple, &self.projected_attributes))
            .collect();

        tracing::debug!(
            "Projection onto {:?}: {} -> {} tuples",
            self.projected_attributes,
            input.tuple_count(),
            output.tuple_count()
        );
        Ok(output)
    }
}
