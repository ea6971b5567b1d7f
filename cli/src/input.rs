//! Introspected metadata input
//!
//! The CLI does not connect to a database. Metadata is handed over as JSON:
//!
//! ```json
//! { "tables": [ { "name": "t_role", "domain": "Role",
//!     "columns": [ { "name": "id", "jdbc_type": "INTEGER", "identity": true } ],
//!     "primary_key": ["id"],
//!     "indexes": [ { "index_name": "idx_name", "column_name": "name", "non_unique": false } ] } ] }
//! ```

use std::path::Path;

use mapgen_core::schema::TableDef;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataFile {
    #[serde(default)]
    pub tables: Vec<TableDef>,
}

impl MetadataFile {
    pub fn parse(json: &str) -> Result<Self, CliError> {
        serde_json::from_str(json).map_err(|e| CliError::Input(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::IoError(format!("{}: {e}", path.display())))?;
        Self::parse(&content).map_err(|e| match e {
            CliError::Input(message) => CliError::Input(format!("{}: {message}", path.display())),
            other => other,
        })
    }

    /// Tables whose name is in `only`, or every table when `only` is empty
    pub fn select<'a>(&'a self, only: &'a [String]) -> impl Iterator<Item = &'a TableDef> + 'a {
        self.tables
            .iter()
            .filter(move |t| only.is_empty() || only.iter().any(|name| name == &t.name))
    }
}
