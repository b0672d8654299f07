//! Typed records exposed by the data-access layer.

pub mod client;
pub mod operator;
pub mod order;
