#![allow(dead_code)]

use mapgen_codegen::{GeneratorConfig, Pipeline, StageKind, TableOutput};
use mapgen_core::schema::{Column, IntrospectedTable, TableBuilder};
use mapgen_types::JdbcType;

/// `t_role(id, name, description, created_at, is_deleted)` with a unique
/// index on `name`
pub fn role() -> IntrospectedTable {
    TableBuilder::new("t_role")
        .domain("Role")
        .column(Column::new("id", JdbcType::Integer).identity(true))
        .column(Column::new("name", JdbcType::Varchar))
        .column(Column::new("description", JdbcType::Varchar))
        .column(Column::new("created_at", JdbcType::Timestamp))
        .column(Column::new("is_deleted", JdbcType::Tinyint))
        .primary_key(["id"])
        .index("idx_name", ["name"], true)
        .not_updatable(["created_at"])
        .build()
        .table
}

/// `t_user_role(tenant_id, user_id, role_id)` keyed on `(tenant_id, user_id)`
pub fn user_role() -> IntrospectedTable {
    TableBuilder::new("t_user_role")
        .domain("UserRole")
        .column(Column::new("tenant_id", JdbcType::Bigint))
        .column(Column::new("user_id", JdbcType::Bigint))
        .column(Column::new("role_id", JdbcType::Integer))
        .primary_key(["tenant_id", "user_id"])
        .index("idx_role", ["role_id"], false)
        .build()
        .table
}

/// `t_audit_log` without a primary key
pub fn audit_log() -> IntrospectedTable {
    TableBuilder::new("t_audit_log")
        .domain("AuditLog")
        .column(Column::new("actor", JdbcType::Varchar))
        .column(Column::new("action", JdbcType::Varchar))
        .column(Column::new("at", JdbcType::Timestamp))
        .index("idx_actor", ["actor"], false)
        .build()
        .table
}

pub fn config() -> GeneratorConfig {
    GeneratorConfig {
        model_package: "com.acme.model".into(),
        mapper_package: "com.acme.mapper".into(),
        ..Default::default()
    }
}

pub fn generate(table: &IntrospectedTable) -> TableOutput {
    Pipeline::new(config()).generate(table).unwrap()
}

pub fn generate_with(table: &IntrospectedTable, stages: &[StageKind]) -> TableOutput {
    let mut config = config();
    config.stages = stages.to_vec();
    Pipeline::new(config).generate(table).unwrap()
}

/// Rendered statement with the given id
pub fn statement(output: &TableOutput, id: &str) -> String {
    let element = output
        .document
        .find(id)
        .unwrap_or_else(|| panic!("no statement '{id}'"));
    output.document.to_element(element).to_xml()
}

/// Every statement stage, without the rewrites
pub fn statement_stages() -> Vec<StageKind> {
    StageKind::ALL
        .into_iter()
        .filter(|s| !matches!(s, StageKind::LogicalDelete | StageKind::PrimitiveClient))
        .collect()
}
