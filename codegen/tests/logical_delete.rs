use mapgen_codegen::rewrite::{NOT_REMOVED_FRAGMENT, SET_DELETED_FRAGMENT};
use mapgen_codegen::{LogicalDelete, StageKind};

mod common;
use common::*;

#[test]
fn test_role_end_to_end() {
    let output = generate(&role());

    assert_eq!(
        statement(&output, NOT_REMOVED_FRAGMENT),
        "<sql id=\"isDeletedNotRemoved\">\n  is_deleted = 0\n</sql>\n"
    );
    assert_eq!(
        statement(&output, SET_DELETED_FRAGMENT),
        "<sql id=\"setIsDeleted\">\n  is_deleted = 1\n</sql>\n"
    );

    assert!(output.document.find("deleteByPrimaryKey").is_none());
    assert_eq!(
        statement(&output, "logicalDeleteByPrimaryKey"),
        "<update id=\"logicalDeleteByPrimaryKey\" parameterType=\"java.lang.Integer\">\n  update t_role\n  <set>\n    <include refid=\"setIsDeleted\" />\n  </set>\n  <where>\n    id = #{id,jdbcType=INTEGER}\n  </where>\n</update>\n"
    );

    let by_name = output.method("selectByName").unwrap();
    assert_eq!(by_name.returns, mapgen_codegen::ReturnShape::SingleEntity);
    assert!(output.method("insertOrUpdate").is_some());
    assert!(output.method("logicalDeleteByPrimaryKey").is_some());
    assert!(output.method("logicalDeleteByName").is_some());
    assert!(output.method("deleteByName").is_none());
}

#[test]
fn test_selects_with_where_are_filtered() {
    let output = generate(&role());

    for id in ["selectByPrimaryKey", "selectByName", "getBatchCursor"] {
        let xml = statement(&output, id);
        assert!(
            xml.contains("\n    AND\n    <include refid=\"isDeletedNotRemoved\" />\n  </where>"),
            "{id} not filtered: {xml}"
        );
    }
    assert!(!statement(&output, "selectAll").contains(NOT_REMOVED_FRAGMENT));
    assert!(!statement(&output, "getTotal").contains(NOT_REMOVED_FRAGMENT));
}

#[test]
fn test_batch_delete_becomes_update() {
    let output = generate(&role());
    let batch = statement(&output, "deleteBatch");
    assert!(batch.starts_with("<update id=\"deleteBatch\" parameterType=\"java.util.List\">\n  update t_role\n"));
    assert!(batch.contains("<include refid=\"setIsDeleted\" />"));
    assert!(batch.contains("id in"));
    assert!(output.method("deleteBatch").is_some());
}

#[test]
fn test_insert_gets_optional_flag_slot() {
    let output = generate(&role());

    let insert = statement(&output, "insert");
    assert!(insert.contains("<if test=\"isDeleted != null\">\n      , is_deleted\n    </if>"));
    assert!(insert.contains("<if test=\"isDeleted != null\">\n      , #{isDeleted,jdbcType=TINYINT}\n    </if>"));

    let upsert = statement(&output, "insertOrUpdate");
    assert!(upsert.contains("is_deleted"));
    assert!(!upsert.contains("<if"));
}

#[test]
fn test_second_pass_is_noop() {
    let once = generate(&role());

    let mut stages = StageKind::ALL.to_vec();
    stages.push(StageKind::LogicalDelete);
    let twice = generate_with(&role(), &stages);

    assert_eq!(once.document.to_xml(), twice.document.to_xml());
    assert_eq!(once.methods, twice.methods);
    assert!(LogicalDelete::is_applied(&twice.document));
}

#[test]
fn test_table_without_flag_untouched() {
    let output = generate(&user_role());
    assert!(!LogicalDelete::is_applied(&output.document));
    assert!(output.document.find("deleteByPrimaryKey").is_some());
    assert!(output.document.find(NOT_REMOVED_FRAGMENT).is_none());
}

#[test]
fn test_custom_flag_column() {
    let table = mapgen_core::TableBuilder::new("t_tag")
        .column(mapgen_core::Column::new("id", mapgen_types::JdbcType::Integer))
        .column(mapgen_core::Column::new("removed", mapgen_types::JdbcType::Bit))
        .primary_key(["id"])
        .build()
        .table;
    let mut config = config();
    config.logical_delete_column = "removed".into();
    let output = mapgen_codegen::Pipeline::new(config).generate(&table).unwrap();

    assert!(statement(&output, NOT_REMOVED_FRAGMENT).contains("removed = 0"));
    assert!(statement(&output, "logicalDeleteByPrimaryKey").contains("update t_tag"));
}
