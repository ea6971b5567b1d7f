//! Plain metadata definitions, as handed over by an external introspection
//! step or read from a metadata file.

use crate::alloc_prelude::*;
use mapgen_types::{JavaType, JdbcType};

use super::{Column, RawIndexRow, TableBuilder};
use crate::error::{MapgenError, Result};

/// Column as reported by introspection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColumnDef {
    pub name: String,
    pub jdbc_type: String,
    pub property: Option<String>,
    pub java_type: Option<String>,
    pub identity: bool,
    pub generated_always: bool,
}

impl ColumnDef {
    pub fn to_column(&self) -> Result<Column> {
        let jdbc_type =
            JdbcType::parse(&self.jdbc_type).ok_or_else(|| MapgenError::UnknownJdbcType {
                column: self.name.clone(),
                jdbc_type: self.jdbc_type.clone(),
            })?;
        let mut column = Column::new(&self.name, jdbc_type)
            .identity(self.identity)
            .generated_always(self.generated_always);
        if let Some(property) = &self.property {
            column = column.property(property);
        }
        if let Some(java_type) = &self.java_type {
            column = column.java_type(JavaType::new(java_type));
        }
        Ok(column)
    }
}

/// Table as reported by introspection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableDef {
    pub name: String,
    /// Entity class name, derived from the table name when absent
    pub domain: Option<String>,
    pub columns: Vec<ColumnDef>,
    pub primary_key: Vec<String>,
    pub indexes: Vec<RawIndexRow>,
    /// Columns excluded from update statements for this table only
    pub not_update_columns: Vec<String>,
}

impl TableDef {
    pub fn builder(&self) -> Result<TableBuilder> {
        if self.name.trim().is_empty() {
            return Err(MapgenError::Metadata("table without a name".into()));
        }
        let columns = self
            .columns
            .iter()
            .map(ColumnDef::to_column)
            .collect::<Result<Vec<_>>>()?;
        let mut builder = TableBuilder::new(&self.name)
            .columns(columns)
            .primary_key(self.primary_key.iter().cloned())
            .index_rows(self.indexes.iter().cloned())
            .not_updatable(self.not_update_columns.iter().cloned());
        if let Some(domain) = &self.domain {
            builder = builder.domain(domain);
        }
        Ok(builder)
    }
}
