//! Per-table generation context

use mapgen_core::naming::index_suffix;
use mapgen_core::schema::{Column, Index, IntrospectedTable, Warning};
use mapgen_types::JavaType;

use crate::config::{GeneratorConfig, StageKind};

/// Id of the result map every entity select maps through
pub const BASE_RESULT_MAP: &str = "BaseResultMap";

/// Id of the fragment listing every column
pub const BASE_COLUMN_LIST: &str = "Base_Column_List";

/// An index together with everything derived from it
///
/// Method and statement synthesis both read the same plan, so the return
/// shape of `selectBy<Index>` and the statement mapping agree.
#[derive(Debug, Clone)]
pub struct IndexPlan<'a> {
    pub index: &'a Index,
    pub suffix: String,
    pub unique: bool,
    pub columns: Vec<&'a Column>,
}

/// Typed facts about one table, threaded through every stage
#[derive(Debug)]
pub struct TableContext<'a> {
    pub table: &'a IntrospectedTable,
    pub config: &'a GeneratorConfig,
    pub entity: JavaType,
    pub mapper: JavaType,
    /// The soft delete flag, when the table has one and the rewrite is enabled
    pub logical_delete: Option<&'a Column>,
    pub indexes: Vec<IndexPlan<'a>>,
    pub warnings: Vec<Warning>,
}

impl<'a> TableContext<'a> {
    pub fn new(table: &'a IntrospectedTable, config: &'a GeneratorConfig) -> Self {
        let entity = JavaType::new(qualify(&config.model_package, table.domain()));
        let mapper = JavaType::new(qualify(
            &config.mapper_package,
            &format!("{}Mapper", table.domain()),
        ));
        let logical_delete = if config.has_stage(StageKind::LogicalDelete) {
            table.column_by_name(&config.logical_delete_column)
        } else {
            None
        };

        let mut warnings = Vec::new();
        let mut indexes: Vec<IndexPlan<'a>> = Vec::new();
        for index in table.indexes() {
            let suffix = index_suffix(index.name(), &config.index_prefix);
            if let Some(clash) = indexes.iter().find(|p| p.suffix == suffix) {
                warnings.push(Warning::new(
                    table.name(),
                    format!(
                        "index '{}' maps to the same method names as '{}', skipped",
                        index.name(),
                        clash.index.name()
                    ),
                ));
                continue;
            }
            indexes.push(IndexPlan {
                index,
                suffix,
                unique: index.is_unique(),
                columns: table.index_columns(index),
            });
        }

        Self {
            table,
            config,
            entity,
            mapper,
            logical_delete,
            indexes,
            warnings,
        }
    }

    pub fn table_name(&self) -> &str {
        self.table.name()
    }

    pub fn primary_key(&self) -> Vec<&'a Column> {
        self.table.primary_key_columns()
    }

    pub fn has_primary_key(&self) -> bool {
        self.table.has_primary_key()
    }

    /// Columns written by insert statements
    pub fn insert_columns(&self) -> Vec<&'a Column> {
        self.table.columns().iter().filter(|c| c.is_insertable()).collect()
    }

    /// Columns written by update statements
    pub fn update_columns(&self) -> Vec<&'a Column> {
        self.table
            .columns()
            .iter()
            .filter(|c| c.is_insertable() && c.is_updatable() && !self.table.is_primary_key(c))
            .collect()
    }

    /// Value of a `parameterType` for key columns: their Java type when
    /// there is exactly one, otherwise `map`
    pub fn key_parameter_type(columns: &[&Column]) -> String {
        match columns {
            [single] => single.java().name().to_string(),
            _ => "map".to_string(),
        }
    }

    pub fn is_logical_delete_flag(&self, column: &Column) -> bool {
        self.logical_delete.is_some_and(|flag| flag.name() == column.name())
    }
}

pub(crate) fn qualify(package: &str, simple: &str) -> String {
    if package.is_empty() {
        simple.to_string()
    } else {
        format!("{package}.{simple}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapgen_core::schema::TableBuilder;
    use mapgen_types::JdbcType;

    fn table() -> IntrospectedTable {
        TableBuilder::new("t_user")
            .domain("User")
            .column(Column::new("id", JdbcType::Bigint).identity(true))
            .column(Column::new("email", JdbcType::Varchar))
            .column(Column::new("created_at", JdbcType::Timestamp))
            .column(Column::new("is_deleted", JdbcType::Tinyint))
            .primary_key(["id"])
            .not_updatable(["created_at"])
            .index("idx_email", ["email"], true)
            .index("email", ["email", "created_at"], false)
            .build()
            .table
    }

    #[test]
    fn test_types_qualified() {
        let table = table();
        let config = GeneratorConfig {
            model_package: "com.acme.model".into(),
            mapper_package: "com.acme.mapper".into(),
            ..Default::default()
        };
        let cx = TableContext::new(&table, &config);
        assert_eq!(cx.entity.name(), "com.acme.model.User");
        assert_eq!(cx.mapper.name(), "com.acme.mapper.UserMapper");
    }

    #[test]
    fn test_column_partitions() {
        let table = table();
        let config = GeneratorConfig::default();
        let cx = TableContext::new(&table, &config);
        let insert: Vec<_> = cx.insert_columns().iter().map(|c| c.name()).collect();
        let update: Vec<_> = cx.update_columns().iter().map(|c| c.name()).collect();
        assert_eq!(insert, vec!["email", "created_at", "is_deleted"]);
        assert_eq!(update, vec!["email", "is_deleted"]);
    }

    #[test]
    fn test_logical_delete_needs_stage() {
        let table = table();
        let config = GeneratorConfig::default();
        assert!(TableContext::new(&table, &config).logical_delete.is_some());

        let mut config = GeneratorConfig::default();
        config.retain_stages(&[StageKind::Base]);
        assert!(TableContext::new(&table, &config).logical_delete.is_none());
    }

    #[test]
    fn test_clashing_index_suffix_skipped() {
        let table = table();
        let config = GeneratorConfig::default();
        let cx = TableContext::new(&table, &config);
        assert_eq!(cx.indexes.len(), 1);
        assert_eq!(cx.indexes[0].suffix, "Email");
        assert!(cx.indexes[0].unique);
        assert_eq!(cx.warnings.len(), 1);
    }
}
