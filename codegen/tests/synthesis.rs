use mapgen_codegen::ReturnShape;
use mapgen_core::schema::{Column, TableBuilder};
use mapgen_types::JdbcType;

mod common;
use common::*;

fn position(ids: &[String], id: &str) -> usize {
    ids.iter()
        .position(|i| i == id)
        .unwrap_or_else(|| panic!("missing '{id}' in {ids:?}"))
}

#[test]
fn test_unique_index_returns_single_entity() {
    let output = generate_with(&role(), &statement_stages());

    let method = output.method("selectByName").unwrap();
    assert_eq!(method.returns, ReturnShape::SingleEntity);
    assert_eq!(
        method.signature(&output.entity),
        "Role selectByName(@Param(\"name\") String name);"
    );
    assert_eq!(
        statement(&output, "selectByName"),
        "<select id=\"selectByName\" resultMap=\"BaseResultMap\" parameterType=\"java.lang.String\">\n  select\n  <include refid=\"Base_Column_List\" />\n  from t_role\n  <where>\n    name = #{name,jdbcType=VARCHAR}\n  </where>\n</select>\n"
    );
}

#[test]
fn test_non_unique_index_returns_list() {
    let output = generate_with(&user_role(), &statement_stages());

    let method = output.method("selectByRole").unwrap();
    assert_eq!(method.returns, ReturnShape::ListOfEntity);
    assert_eq!(
        method.signature(&output.entity),
        "List<UserRole> selectByRole(@Param(\"roleId\") Integer roleId);"
    );
    let xml = statement(&output, "selectByRole");
    assert!(xml.contains("resultMap=\"BaseResultMap\""));
    assert!(xml.contains("role_id = #{roleId,jdbcType=INTEGER}"));

    let delete = output.method("deleteByRole").unwrap();
    assert_eq!(delete.returns, ReturnShape::affected_rows());
}

#[test]
fn test_zero_primary_key_skips_key_targets() {
    let output = generate(&audit_log());

    for skipped in [
        "selectByPrimaryKey",
        "deleteByPrimaryKey",
        "updateByPrimaryKey",
        "getBatchCursor",
        "getLastIdOfBatch",
        "deleteBatch",
        "batchUpdate",
        "batchUpdateSelective",
        "insertOrUpdate",
    ] {
        assert!(output.method(skipped).is_none(), "{skipped} should be skipped");
        assert!(output.document.find(skipped).is_none(), "{skipped} should be skipped");
    }
    for kept in ["selectAll", "getBatchOffset", "getTotal", "selectByActor", "insert", "insertBatch"] {
        assert!(output.method(kept).is_some(), "{kept} should be generated");
    }
    assert_eq!(
        statement(&output, "getBatchOffset"),
        "<select id=\"getBatchOffset\" resultMap=\"BaseResultMap\" parameterType=\"map\">\n  SELECT * FROM t_audit_log LIMIT #{limit} OFFSET #{offset}\n</select>\n"
    );
}

#[test]
fn test_base_statements() {
    let output = generate_with(&role(), &statement_stages());

    let insert = statement(&output, "insert");
    assert!(insert.starts_with(
        "<insert id=\"insert\" parameterType=\"com.acme.model.Role\" useGeneratedKeys=\"true\" keyProperty=\"id\">"
    ));
    assert!(insert.contains("name, description, created_at, is_deleted"));
    assert!(!insert.contains("#{id,"));

    let update = statement(&output, "updateByPrimaryKey");
    assert!(update.contains("name = #{name,jdbcType=VARCHAR}"));
    assert!(!update.contains("created_at ="));
    assert!(!update.contains("id = #{id,jdbcType=INTEGER},"));

    let result_map = statement(&output, "BaseResultMap");
    assert!(result_map.contains("<id column=\"id\" property=\"id\" jdbcType=\"INTEGER\" />"));
    assert!(result_map.contains("<result column=\"created_at\" property=\"createdAt\" jdbcType=\"TIMESTAMP\" />"));
}

#[test]
fn test_keyset_pagination() {
    let output = generate_with(&role(), &statement_stages());
    assert_eq!(
        statement(&output, "getLastIdOfBatch"),
        "<select id=\"getLastIdOfBatch\" resultType=\"java.lang.Integer\" parameterType=\"map\">\n  SELECT id FROM t_role\n  <where>\n    id > #{lastId}\n  </where>\n  ORDER BY id ASC\n  LIMIT ${limit - 1}, 1\n</select>\n"
    );
    assert_eq!(
        output.method("getBatchCursor").unwrap().param_names(),
        vec!["lastId", "limit"]
    );

    let composite = generate_with(&user_role(), &statement_stages());
    assert!(composite.method("getLastIdOfBatch").is_none());
    let cursor = statement(&composite, "getBatchCursor");
    assert!(cursor.contains("(tenant_id, user_id) > (#{lastTenantId}, #{lastUserId})"));
    assert!(cursor.contains("ORDER BY tenant_id ASC, user_id ASC"));
}

#[test]
fn test_composite_key_delete_batch() {
    let output = generate_with(&user_role(), &statement_stages());
    assert_eq!(
        statement(&output, "deleteBatch"),
        "<delete id=\"deleteBatch\" parameterType=\"java.util.List\">\n  delete from t_user_role\n  <where>\n    (tenant_id,user_id) in\n    <foreach collection=\"records\" item=\"item\" open=\"(\" separator=\",\" close=\")\">\n      (#{item.tenantId},#{item.userId})\n    </foreach>\n  </where>\n</delete>\n"
    );
}

#[test]
fn test_batch_update() {
    let output = generate_with(&role(), &statement_stages());

    let update = statement(&output, "batchUpdate");
    assert!(update.contains("<trim prefix=\"name = case\" suffix=\"end,\">"));
    assert!(update.contains(
        "when id = #{item.id,jdbcType=INTEGER} then #{item.name,jdbcType=VARCHAR}"
    ));
    assert!(!update.contains("created_at = case"));
    assert!(!update.contains("id = case"));
    assert!(update.contains("id in"));

    let selective = statement(&output, "batchUpdateSelective");
    assert!(selective.contains("<if test=\"'description' == column\">"));
    assert_eq!(
        output.method("batchUpdateSelective").unwrap().param_names(),
        vec!["records", "columns"]
    );
}

#[test]
fn test_batch_inserts() {
    let output = generate_with(&role(), &statement_stages());

    let batch = statement(&output, "insertBatch");
    assert!(batch.contains("#{item.name,jdbcType=VARCHAR}, #{item.description,jdbcType=VARCHAR}"));
    assert!(batch.contains("<foreach collection=\"records\" item=\"item\" separator=\",\">"));

    let selective = statement(&output, "insertBatchSelective");
    assert!(selective.contains("<if test=\"'name' == column\">"));
    assert!(selective.contains("#{record.name,jdbcType=VARCHAR},"));
    assert!(!selective.contains("${"));
}

#[test]
fn test_insert_or_update() {
    let output = generate_with(&role(), &statement_stages());
    let upsert = statement(&output, "insertOrUpdate");
    assert!(upsert.contains("ON DUPLICATE KEY UPDATE"));
    assert!(upsert.contains("name = #{name,jdbcType=VARCHAR}"));
    assert!(!upsert.contains("created_at = "));
}

#[test]
fn test_fragments_precede_statements() {
    let output = generate(&role());
    let document = &output.document;
    let fragments: Vec<bool> = document
        .elements()
        .into_iter()
        .map(|e| document.get(e).name() == "sql")
        .collect();
    assert!(
        fragments.windows(2).all(|w| w[0] || !w[1]),
        "{:?}",
        document.element_ids()
    );
    assert_eq!(
        &document.element_ids()[..3],
        ["isDeletedNotRemoved", "setIsDeleted", "Base_Column_List"]
    );
}

#[test]
fn test_prefix_related_statements_stay_adjacent() {
    let columns = || {
        [
            Column::new("id", JdbcType::Bigint).identity(true),
            Column::new("user_id", JdbcType::Bigint),
            Column::new("status", JdbcType::Tinyint),
        ]
    };
    let forward = TableBuilder::new("t_order")
        .columns(columns())
        .primary_key(["id"])
        .index("idx_user", ["user_id"], false)
        .index("idx_user_status", ["user_id", "status"], false)
        .build()
        .table;
    let backward = TableBuilder::new("t_order")
        .columns(columns())
        .primary_key(["id"])
        .index("idx_user_status", ["user_id", "status"], false)
        .index("idx_user", ["user_id"], false)
        .build()
        .table;

    for table in [forward, backward] {
        let ids = generate(&table).document.element_ids();
        assert_eq!(
            position(&ids, "selectByUserStatus"),
            position(&ids, "selectByUser") + 1,
            "{ids:?}"
        );
        assert_eq!(
            position(&ids, "deleteByUserStatus"),
            position(&ids, "deleteByUser") + 1,
            "{ids:?}"
        );
    }
}

#[test]
fn test_primitive_client_narrows_params() {
    let output = generate(&role());
    assert_eq!(
        output
            .method("selectByPrimaryKey")
            .unwrap()
            .signature(&output.entity),
        "Role selectByPrimaryKey(@Param(\"id\") int id);"
    );
    assert_eq!(
        output.method("insertBatch").unwrap().signature(&output.entity),
        "int insertBatch(@Param(\"records\") List<Role> records);"
    );
}
