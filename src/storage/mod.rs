pub mod config;
pub mod error;
pub mod relation;
pub mod tuple;
pub mod tuple_serde;
pub mod tuple_set;
