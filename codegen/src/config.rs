//! Generator configuration

use serde::{Deserialize, Serialize};

use mapgen_core::{MapgenError, Result};

/// A named generation stage
///
/// The stage list of a [`GeneratorConfig`] selects what gets generated and
/// in which order stages contribute methods and statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Result map, column list fragment and single-row CRUD statements
    Base,
    SelectAll,
    BatchOffset,
    BatchCursor,
    LastId,
    Total,
    SelectByIndex,
    DeleteByIndex,
    BatchInsert,
    BatchInsertSelective,
    BatchDelete,
    BatchUpdate,
    InsertOrUpdate,
    /// Rewrites deletes into flag updates and filters flagged rows from reads
    LogicalDelete,
    /// Narrows boxed parameter types of mapper methods
    PrimitiveClient,
}

impl StageKind {
    /// Every stage in default order
    pub const ALL: [StageKind; 15] = [
        StageKind::Base,
        StageKind::SelectAll,
        StageKind::BatchOffset,
        StageKind::BatchCursor,
        StageKind::LastId,
        StageKind::Total,
        StageKind::SelectByIndex,
        StageKind::DeleteByIndex,
        StageKind::BatchInsert,
        StageKind::BatchInsertSelective,
        StageKind::BatchDelete,
        StageKind::BatchUpdate,
        StageKind::InsertOrUpdate,
        StageKind::LogicalDelete,
        StageKind::PrimitiveClient,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            StageKind::Base => "base",
            StageKind::SelectAll => "select_all",
            StageKind::BatchOffset => "batch_offset",
            StageKind::BatchCursor => "batch_cursor",
            StageKind::LastId => "last_id",
            StageKind::Total => "total",
            StageKind::SelectByIndex => "select_by_index",
            StageKind::DeleteByIndex => "delete_by_index",
            StageKind::BatchInsert => "batch_insert",
            StageKind::BatchInsertSelective => "batch_insert_selective",
            StageKind::BatchDelete => "batch_delete",
            StageKind::BatchUpdate => "batch_update",
            StageKind::InsertOrUpdate => "insert_or_update",
            StageKind::LogicalDelete => "logical_delete",
            StageKind::PrimitiveClient => "primitive_client",
        }
    }

    /// Parse a comma separated stage list such as `"base,total"`
    pub fn parse_list(list: &str) -> Result<Vec<StageKind>> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<StageKind>)
            .collect()
    }
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StageKind {
    type Err = MapgenError;

    fn from_str(s: &str) -> Result<Self> {
        StageKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MapgenError::UnknownStage(s.to_string()))
    }
}

/// Options shared by every table of a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub stages: Vec<StageKind>,
    /// Prefix stripped from index names before deriving method names
    pub index_prefix: String,
    /// Column whose presence enables the logical delete rewrite
    pub logical_delete_column: String,
    /// Columns never written by update statements, for every table
    pub not_update_columns: Vec<String>,
    /// Narrow boxed field, getter and setter types of the model
    pub primitive_model: bool,
    /// Add mapper class and primary key accessors to the model
    pub entity_interface: bool,
    /// Interface the model implements when `entity_interface` is set,
    /// `<model_package>.DbEntity` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_super_interface: Option<String>,
    /// Entities whose fields are `protected` so subclasses can reach them
    pub root_classes: Vec<String>,
    /// Blob columns exposed on the model as typed objects
    #[serde(rename = "blob_transform")]
    pub blob_transforms: Vec<BlobTransform>,
    pub model_package: String,
    pub mapper_package: String,
}

/// How a blob column and its object field convert into each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlobCodec {
    /// JSON text, for character columns
    Json,
    /// Versioned binary serialization, for `byte[]` columns
    Binary,
}

/// A blob column of one table mapped to an object field of its model
///
/// ```toml
/// [[blob_transform]]
/// table = "t_player"
/// column = "bag_data"
/// field = "bag"
/// type = "com.acme.model.Bag"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobTransform {
    pub table: String,
    pub column: String,
    pub field: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Chosen from the column's Java type when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<BlobCodec>,
}

impl BlobTransform {
    pub fn applies_to(&self, table: &str) -> bool {
        self.table.eq_ignore_ascii_case(table)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            stages: StageKind::ALL.to_vec(),
            index_prefix: mapgen_core::naming::DEFAULT_INDEX_PREFIX.to_string(),
            logical_delete_column: "is_deleted".to_string(),
            not_update_columns: Vec::new(),
            primitive_model: false,
            entity_interface: false,
            entity_super_interface: None,
            root_classes: Vec::new(),
            blob_transforms: Vec::new(),
            model_package: String::new(),
            mapper_package: String::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn has_stage(&self, stage: StageKind) -> bool {
        self.stages.contains(&stage)
    }

    /// Keep only the given stages, in their configured order
    pub fn retain_stages(&mut self, only: &[StageKind]) {
        self.stages.retain(|s| only.contains(s));
    }
}
