//! Mapper method and SQL statement synthesis
//!
//! A [`Pipeline`] runs the configured stages over one table at a time:
//! statement stages contribute [`MethodDescriptor`]s and statement elements,
//! then rewrites such as [`LogicalDelete`] adjust both.

pub mod compose;
pub mod config;
pub mod context;
pub mod interface;
pub mod method;
pub mod model;
pub mod pipeline;
pub mod rewrite;
pub mod stage;
pub mod stages;

// Re-export key types and traits
pub use config::{BlobCodec, BlobTransform, GeneratorConfig, StageKind};
pub use context::{BASE_COLUMN_LIST, BASE_RESULT_MAP, IndexPlan, TableContext};
pub use method::{MethodDescriptor, Parameter, ReturnShape};
pub use model::{Accessor, Field, ModelClass, Visibility};
pub use pipeline::{Pipeline, TableOutput};
pub use rewrite::{LogicalDelete, PrimitiveClient};
pub use stage::{DocumentRewrite, Generated, MethodSynthesis, SqlSynthesis};

pub mod prelude {
    pub use crate::{GeneratorConfig, MethodDescriptor, Pipeline, StageKind, TableOutput};
}
