//! Passes over the finished methods and document of a table.

mod logical_delete;
mod primitive;

pub use logical_delete::{LogicalDelete, NOT_REMOVED_FRAGMENT, SET_DELETED_FRAGMENT};
pub use primitive::PrimitiveClient;
