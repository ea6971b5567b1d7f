//! # mapgen
//!
//! Metadata-driven synthesis of MyBatis-style mappers: abstract mapper
//! method signatures plus the XML statements backing them, generated from
//! introspected columns, primary keys and secondary indexes.
//!
//! ## Quick Start
//!
//! ```rust
//! use mapgen::prelude::*;
//!
//! let table = TableBuilder::new("t_role")
//!     .domain("Role")
//!     .column(Column::new("id", JdbcType::Integer).identity(true))
//!     .column(Column::new("name", JdbcType::Varchar))
//!     .column(Column::new("is_deleted", JdbcType::Tinyint))
//!     .primary_key(["id"])
//!     .index("idx_name", ["name"], true)
//!     .build()
//!     .table;
//!
//! let output = Pipeline::new(GeneratorConfig::default()).generate(&table)?;
//!
//! assert!(output.method("selectByName").is_some());
//! assert!(output.method("logicalDeleteByPrimaryKey").is_some());
//! assert!(output.document.to_xml().contains("is_deleted = 1"));
//! # Ok::<(), mapgen::MapgenError>(())
//! ```
//!
//! ## Crates
//!
//! | Crate            | Contents |
//! |------------------|----------|
//! | `mapgen-types`   | JDBC and Java type tags, primitive narrowing |
//! | `mapgen-core`    | table metadata, naming, mapper document and rendering |
//! | `mapgen-codegen` | configuration, stages, logical delete, pipeline |

pub use mapgen_codegen as codegen;
pub use mapgen_core as core;
pub use mapgen_types as types;

pub use mapgen_codegen::{GeneratorConfig, Pipeline, StageKind, TableOutput};
pub use mapgen_core::{MapgenError, Result};

/// Prelude module for commonly used types
pub mod prelude {
    pub use mapgen_codegen::prelude::*;
    pub use mapgen_core::schema::{Column, IntrospectedTable, TableBuilder, TableDef};
    pub use mapgen_core::{Document, MapgenError, XmlElement};
    pub use mapgen_types::prelude::*;
}
