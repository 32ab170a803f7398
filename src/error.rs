use crate::execution::error::OperatorError;
use crate::storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Operator(#[from] OperatorError),
}

pub type Result<T> = std::result::Result<T, Error>;
