use crate::alloc_prelude::*;
use heck::ToUpperCamelCase;

use super::{Column, Index, RawIndexRow};
use crate::mapgen_trace_warn;

/// Metadata problem that was worked around while adapting a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub table: String,
    pub message: String,
}

impl Warning {
    pub fn new(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            message: message.into(),
        }
    }
}

impl core::fmt::Display for Warning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "table '{}': {}", self.table, self.message)
    }
}

/// Read-only view of one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrospectedTable {
    name: String,
    domain: String,
    columns: Vec<Column>,
    primary_key: Vec<usize>,
    indexes: Vec<Index>,
}

impl IntrospectedTable {
    /// Table name as written in SQL text
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Simple name of the entity class, `t_role` -> `TRole` unless configured
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Columns in metadata order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, position: usize) -> Option<&Column> {
        self.columns.get(position)
    }

    /// Case-insensitive lookup by column name
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.matches(name))
    }

    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.is_empty()
    }

    /// Primary key columns in declaration order
    pub fn primary_key_columns(&self) -> Vec<&Column> {
        self.primary_key.iter().filter_map(|&i| self.columns.get(i)).collect()
    }

    pub fn is_primary_key(&self, column: &Column) -> bool {
        self.primary_key_columns().iter().any(|pk| pk.name() == column.name())
    }

    /// Columns outside the primary key, in metadata order
    pub fn non_primary_key_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.primary_key.contains(i))
            .map(|(_, c)| c)
            .collect()
    }

    /// Secondary indexes in the order their first row was reported
    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    pub fn index_columns(&self, index: &Index) -> Vec<&Column> {
        index.columns.iter().filter_map(|&i| self.columns.get(i)).collect()
    }
}

/// Output of [`TableBuilder::build`]
#[derive(Debug, Clone)]
pub struct AdaptResult {
    pub table: IntrospectedTable,
    pub warnings: Vec<Warning>,
}

/// Adapts raw introspection output into an [`IntrospectedTable`]
///
/// ```
/// use mapgen_core::schema::{Column, TableBuilder};
/// use mapgen_types::JdbcType;
///
/// let adapted = TableBuilder::new("t_role")
///     .domain("Role")
///     .column(Column::new("id", JdbcType::Integer).identity(true))
///     .column(Column::new("name", JdbcType::Varchar))
///     .primary_key(["id"])
///     .index("idx_name", ["name"], true)
///     .build();
///
/// assert!(adapted.warnings.is_empty());
/// assert_eq!(adapted.table.indexes()[0].name(), "idx_name");
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
    name: String,
    domain: Option<String>,
    columns: Vec<Column>,
    primary_key: Vec<String>,
    index_rows: Vec<RawIndexRow>,
    not_updatable: Vec<String>,
}

impl TableBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: None,
            columns: Vec::new(),
            primary_key: Vec::new(),
            index_rows: Vec::new(),
            not_updatable: Vec::new(),
        }
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Primary key column names in declaration order
    pub fn primary_key<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn index_row(mut self, row: RawIndexRow) -> Self {
        self.index_rows.push(row);
        self
    }

    pub fn index_rows(mut self, rows: impl IntoIterator<Item = RawIndexRow>) -> Self {
        self.index_rows.extend(rows);
        self
    }

    /// Shorthand for one row per column of the same index
    pub fn index<I, S>(mut self, name: &str, columns: I, unique: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for column in columns {
            self.index_rows.push(RawIndexRow::new(name, column, !unique));
        }
        self
    }

    /// Columns the host never writes in update statements
    pub fn not_updatable<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.not_updatable.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> AdaptResult {
        let mut warnings = Vec::new();
        let mut warn = |message: String| {
            mapgen_trace_warn!(self.name, message);
            warnings.push(Warning::new(&self.name, message));
        };

        let columns: Vec<Column> = self
            .columns
            .into_iter()
            .map(|c| {
                let frozen = self.not_updatable.iter().any(|n| c.matches(n));
                if frozen { c.updatable(false) } else { c }
            })
            .collect();
        let position = |name: &str| columns.iter().position(|c| c.matches(name));

        let mut primary_key = Vec::new();
        for name in &self.primary_key {
            match position(name) {
                Some(i) if !primary_key.contains(&i) => primary_key.push(i),
                Some(_) => {}
                None => warn(format!("primary key names unknown column '{name}'")),
            }
        }

        let mut indexes: Vec<Index> = Vec::new();
        for row in self.index_rows.iter().filter(|r| !r.is_primary()) {
            let slot = match indexes.iter().position(|i| i.name == row.index_name) {
                Some(slot) => slot,
                None => {
                    indexes.push(Index {
                        name: row.index_name.clone(),
                        columns: Vec::new(),
                        unique: false,
                    });
                    indexes.len() - 1
                }
            };
            let index = &mut indexes[slot];
            index.unique |= !row.non_unique;
            match position(&row.column_name) {
                Some(i) if !index.columns.contains(&i) => index.columns.push(i),
                Some(_) => {}
                None => warn(format!(
                    "index '{}' names unknown column '{}', column dropped",
                    row.index_name, row.column_name
                )),
            }
        }
        indexes.retain(|index| {
            let keep = !index.columns.is_empty();
            if !keep {
                warn(format!("index '{}' has no known columns, index dropped", index.name));
            }
            keep
        });

        let domain = self
            .domain
            .unwrap_or_else(|| self.name.to_upper_camel_case());

        AdaptResult {
            table: IntrospectedTable {
                name: self.name,
                domain,
                columns,
                primary_key,
                indexes,
            },
            warnings,
        }
    }
}
