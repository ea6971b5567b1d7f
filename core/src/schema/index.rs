use crate::alloc_prelude::*;

/// One row of index metadata as reported by the driver, one per indexed column
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawIndexRow {
    pub index_name: String,
    pub column_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub non_unique: bool,
}

impl RawIndexRow {
    pub fn new(index_name: impl Into<String>, column_name: impl Into<String>, non_unique: bool) -> Self {
        Self {
            index_name: index_name.into(),
            column_name: column_name.into(),
            non_unique,
        }
    }

    /// Rows of the primary key index, modelled separately.
    pub fn is_primary(&self) -> bool {
        self.index_name.eq_ignore_ascii_case("PRIMARY")
    }
}

/// A secondary index
///
/// Column positions refer to [`IntrospectedTable::columns`](super::IntrospectedTable::columns)
/// and keep the order the driver reported them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub(crate) name: String,
    pub(crate) columns: Vec<usize>,
    pub(crate) unique: bool,
}

impl Index {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn column_positions(&self) -> &[usize] {
        &self.columns
    }

    pub fn is_composite(&self) -> bool {
        self.columns.len() > 1
    }
}
