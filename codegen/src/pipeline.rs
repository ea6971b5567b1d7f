//! Ordered stage pipeline

use mapgen_core::mapgen_trace_stage;
use mapgen_core::schema::{AdaptResult, TableDef};
use mapgen_core::{Document, IntrospectedTable, Result, Warning};
use mapgen_types::JavaType;

use crate::config::{GeneratorConfig, StageKind};
use crate::context::TableContext;
use crate::method::MethodDescriptor;
use crate::model::ModelClass;
use crate::rewrite::{LogicalDelete, PrimitiveClient};
use crate::stage::{DocumentRewrite, Generated, MethodSynthesis, SqlSynthesis};
use crate::stages::{
    BaseStatements, BatchCursor, BatchDelete, BatchInsert, BatchInsertSelective, BatchOffset,
    BatchUpdate, DeleteByIndex, InsertOrUpdate, LastIdOfBatch, SelectAll, SelectByIndex, Total,
};

/// Everything generated for one table
#[derive(Debug, Clone)]
pub struct TableOutput {
    pub table: String,
    pub domain: String,
    pub entity: JavaType,
    pub mapper: JavaType,
    pub methods: Vec<MethodDescriptor>,
    pub document: Document,
    pub model: ModelClass,
    pub warnings: Vec<Warning>,
}

impl TableOutput {
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Stages of a generation run, in configured order
///
/// ```
/// use mapgen_codegen::{GeneratorConfig, Pipeline};
/// use mapgen_core::schema::{Column, TableBuilder};
/// use mapgen_types::JdbcType;
///
/// let table = TableBuilder::new("t_role")
///     .domain("Role")
///     .column(Column::new("id", JdbcType::Integer).identity(true))
///     .column(Column::new("name", JdbcType::Varchar))
///     .primary_key(["id"])
///     .index("idx_name", ["name"], true)
///     .build()
///     .table;
///
/// let output = Pipeline::new(GeneratorConfig::default()).generate(&table).unwrap();
/// assert!(output.method("selectByName").is_some());
/// assert!(output.document.find("insertOrUpdate").is_some());
/// ```
pub struct Pipeline {
    config: GeneratorConfig,
    methods: Vec<Box<dyn MethodSynthesis>>,
    statements: Vec<Box<dyn SqlSynthesis>>,
    rewrites: Vec<Box<dyn DocumentRewrite>>,
}

impl Pipeline {
    pub fn new(config: GeneratorConfig) -> Self {
        let mut pipeline = Self {
            config,
            methods: Vec::new(),
            statements: Vec::new(),
            rewrites: Vec::new(),
        };
        for stage in pipeline.config.stages.clone() {
            pipeline.register(stage);
        }
        pipeline
    }

    fn register(&mut self, stage: StageKind) {
        match stage {
            StageKind::Base => self.statement_stage(BaseStatements),
            StageKind::SelectAll => self.statement_stage(SelectAll),
            StageKind::BatchOffset => self.statement_stage(BatchOffset),
            StageKind::BatchCursor => self.statement_stage(BatchCursor),
            StageKind::LastId => self.statement_stage(LastIdOfBatch),
            StageKind::Total => self.statement_stage(Total),
            StageKind::SelectByIndex => self.statement_stage(SelectByIndex),
            StageKind::DeleteByIndex => self.statement_stage(DeleteByIndex),
            StageKind::BatchInsert => self.statement_stage(BatchInsert),
            StageKind::BatchInsertSelective => self.statement_stage(BatchInsertSelective),
            StageKind::BatchDelete => self.statement_stage(BatchDelete),
            StageKind::BatchUpdate => self.statement_stage(BatchUpdate),
            StageKind::InsertOrUpdate => self.statement_stage(InsertOrUpdate),
            StageKind::LogicalDelete => self.rewrites.push(Box::new(LogicalDelete)),
            StageKind::PrimitiveClient => self.rewrites.push(Box::new(PrimitiveClient)),
        }
    }

    fn statement_stage<S>(&mut self, stage: S)
    where
        S: MethodSynthesis + SqlSynthesis + Copy + 'static,
    {
        self.methods.push(Box::new(stage));
        self.statements.push(Box::new(stage));
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Names of the registered stages, method stages first
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.methods
            .iter()
            .map(|s| s.name())
            .chain(self.rewrites.iter().map(|r| r.name()))
            .collect()
    }

    /// Adapt a metadata definition, applying the configured
    /// `not_update_columns` on top of the table's own
    pub fn adapt(&self, def: &TableDef) -> Result<AdaptResult> {
        let builder = def
            .builder()?
            .not_updatable(self.config.not_update_columns.iter().cloned());
        Ok(builder.build())
    }

    /// Run every stage over `table`
    ///
    /// Methods come first, then statements positioned into the document one
    /// by one, then the rewrites over both.
    pub fn generate(&self, table: &IntrospectedTable) -> Result<TableOutput> {
        let mut cx = TableContext::new(table, &self.config);
        let mut out = Generated {
            methods: Vec::new(),
            document: Document::mapper(cx.mapper.name()),
        };

        for stage in &self.methods {
            mapgen_trace_stage!(stage.name(), table.name());
            out.methods.extend(stage.methods(&cx));
        }
        for stage in &self.statements {
            for statement in stage.statements(&cx) {
                out.document.add_element(statement);
            }
        }
        for pass in &self.rewrites {
            mapgen_trace_stage!(pass.name(), table.name());
            pass.rewrite(&cx, &mut out);
        }

        let model = ModelClass::build(&cx)?;
        let warnings = std::mem::take(&mut cx.warnings);
        Ok(TableOutput {
            table: table.name().to_string(),
            domain: table.domain().to_string(),
            entity: cx.entity,
            mapper: cx.mapper,
            methods: out.methods,
            document: out.document,
            model,
            warnings,
        })
    }

    /// [`adapt`](Self::adapt) then [`generate`](Self::generate), with the
    /// adapter warnings ahead of the generation warnings
    pub fn generate_def(&self, def: &TableDef) -> Result<TableOutput> {
        let adapted = self.adapt(def)?;
        let mut output = self.generate(&adapted.table)?;
        let mut warnings = adapted.warnings;
        warnings.append(&mut output.warnings);
        output.warnings = warnings;
        Ok(output)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}
