//! In-memory relational algebra over sets of fixed-arity integer tuples.
//!
//! Relations are loaded from (or saved to) flat binary files, combined with
//! selection, projection, cross product and equi-join, and dumped as text.

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod error;
pub mod execution;
pub mod report;
pub mod storage;

pub use crate::error::{Error, Result};
pub use crate::execution::error::OperatorError;
pub use crate::execution::{
    cross_product, equi_join, projection, selection, Comparison, EquiJoinOperation, JoinStrategy,
    ProjectionOperation, SelectionOperation,
};
pub use crate::storage::config::{Endianness, StorageConfig};
pub use crate::storage::error::StorageError;
pub use crate::storage::relation::Relation;
pub use crate::storage::tuple::Tuple;
pub use crate::storage::tuple_set::TupleSet;
