//! Read-only table metadata
//!
//! Introspection output is adapted once per table into an [`IntrospectedTable`]:
//! columns in metadata order, the ordered primary key and the secondary
//! indexes merged from per-column driver rows. Everything downstream only
//! reads it.

mod column;
mod def;
mod index;
mod table;

pub use column::Column;
pub use def::{ColumnDef, TableDef};
pub use index::{Index, RawIndexRow};
pub use table::{AdaptResult, IntrospectedTable, TableBuilder, Warning};
