use thiserror::Error;

/// Usage errors caught before an operator touches its input.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum OperatorError {
    #[error("attribute index {index} is out of range for a relation of arity {arity}")]
    InvalidAttributeIndex { index: usize, arity: usize },

    #[error("cannot keep {requested} attributes of a relation of arity {arity}")]
    ArityMismatch { requested: usize, arity: usize },
}

pub type Result<T> = std::result::Result<T, OperatorError>;

pub(crate) fn check_attribute(index: usize, arity: usize) -> Result<()> {
    if index < arity {
        Ok(())
    } else {
        Err(OperatorError::InvalidAttributeIndex { index, arity })
    }
}
